//! UI state machine (pure).
//!
//! All state transitions are testable without a terminal.

pub mod app_state;
pub mod menu;
pub mod path_prompt;

pub use app_state::AppState;
pub use menu::{menu_items, MenuItem, SourceMenuState};
pub use path_prompt::PromptState;
