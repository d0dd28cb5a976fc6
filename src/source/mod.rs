//! Source text loading.
//!
//! Turns a text file into display entries. Failures never propagate: a file
//! that is missing or unreadable becomes a single placeholder entry that
//! explains the problem.

use crate::pager::MessageSet;
use std::path::Path;
use tracing::{debug, warn};

pub mod file;

pub use file::read_lines;

/// Where the entries of a loaded source came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Lines of the actual file.
    File,
    /// A synthetic entry describing why the file could not be shown.
    ///
    /// Reading positions are never persisted for placeholders.
    Placeholder,
}

/// Entries loaded from a source path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSource {
    /// Display entries, one per line.
    pub messages: MessageSet,
    /// Whether the entries are real content.
    pub kind: ContentKind,
}

/// Load `path` into display entries.
///
/// A missing or unreadable file yields a one-entry placeholder set.
pub fn load_source(path: &Path) -> LoadedSource {
    match read_lines(path) {
        Ok(lines) => {
            debug!(path = %path.display(), lines = lines.len(), "Loaded source");
            LoadedSource {
                messages: MessageSet::new(lines),
                kind: ContentKind::File,
            }
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Showing placeholder for source");
            LoadedSource {
                messages: MessageSet::new(vec![err.to_string()]),
                kind: ContentKind::Placeholder,
            }
        }
    }
}
