//! Domain model types (pure).
//!
//! Error taxonomy and user intents shared by every layer.

pub mod error;
pub mod key_action;

// Re-export for convenience
pub use error::{AppError, InstanceError, SourceError, StoreError};
pub use key_action::KeyAction;
