//! Pagination of source text into bar-sized entries.
//!
//! - [`MessageSet`]: ordered display entries of one source
//! - [`fit`]: width measurement and fit-splitting
//! - [`Paginator`]: reading position, navigation and source switching

pub mod fit;
pub mod message_set;
pub mod paginator;

pub use fit::{fit_prefix, split_to_fit, CellWidth, TextMeasure};
pub use message_set::{is_blank, MessageSet};
pub use paginator::{restore_position, Paginator, NO_CONTENT};
