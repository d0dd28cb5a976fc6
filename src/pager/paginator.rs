//! Reading position over a source's display entries.

use super::fit::{split_to_fit, CellWidth, TextMeasure};
use super::message_set::{is_blank, MessageSet};
use crate::source::{load_source, ContentKind, LoadedSource};
use crate::store::{persist_or_log, PositionStore};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Text shown when a source has no non-blank entry.
pub const NO_CONTENT: &str = "No content to display";

/// Pages through one source at a time.
///
/// Owns the display entries of the active source and the index of the entry
/// on screen. The index always denotes a non-blank entry when one exists.
#[derive(Debug, Clone)]
pub struct Paginator<M = CellWidth> {
    source: PathBuf,
    messages: MessageSet,
    kind: ContentKind,
    position: usize,
    measure: M,
}

impl Paginator<CellWidth> {
    /// Open `source` measuring width in terminal cells.
    pub fn open(source: impl Into<PathBuf>, store: &dyn PositionStore) -> Self {
        Self::open_with(source, store, CellWidth)
    }
}

impl<M: TextMeasure> Paginator<M> {
    /// Open `source`, restoring its position from `store`.
    pub fn open_with(source: impl Into<PathBuf>, store: &dyn PositionStore, measure: M) -> Self {
        let source = source.into();
        let loaded = load_source(&source);
        let mut paginator = Self {
            source,
            messages: MessageSet::default(),
            kind: ContentKind::File,
            position: 0,
            measure,
        };
        paginator.install(loaded, store);
        paginator
    }

    /// Build a paginator over entries that did not come from disk.
    pub fn from_messages(
        source: impl Into<PathBuf>,
        messages: MessageSet,
        position: usize,
        measure: M,
    ) -> Self {
        let mut paginator = Self {
            source: source.into(),
            messages,
            kind: ContentKind::File,
            position,
            measure,
        };
        paginator.normalize();
        paginator
    }

    /// Path of the active source.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Display entries of the active source.
    pub fn messages(&self) -> &MessageSet {
        &self.messages
    }

    /// Index of the entry on screen.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the entries are a placeholder for a missing or unreadable file.
    pub fn is_placeholder(&self) -> bool {
        self.kind == ContentKind::Placeholder
    }

    /// Text to show: the current entry, or [`NO_CONTENT`].
    pub fn display(&self) -> &str {
        match self.messages.get(self.position) {
            Some(entry) if !is_blank(entry) => entry,
            _ => NO_CONTENT,
        }
    }

    /// Move to the next non-blank entry.
    ///
    /// If the current entry is wider than `max_width` it is split first: the
    /// part that fits stays at the current index and the rest becomes the
    /// next entry, which is where the position lands. Returns `false` when
    /// there is nothing to move to.
    pub fn advance(&mut self, max_width: usize) -> bool {
        if !self.messages.has_content() {
            return false;
        }

        if let Some(current) = self.messages.get(self.position) {
            if !is_blank(current) {
                if let Some((head, tail)) = split_to_fit(current, max_width, &self.measure) {
                    debug!(
                        index = self.position,
                        head_chars = head.chars().count(),
                        tail_chars = tail.chars().count(),
                        max_width,
                        "Split over-wide entry"
                    );
                    self.messages.split_entry(self.position, head, tail);
                }
            }
        }

        match self.messages.next_non_blank(self.position) {
            Some(next) => {
                self.position = next;
                true
            }
            None => false,
        }
    }

    /// Move to the previous non-blank entry. Never splits.
    ///
    /// Returns `false` when there is nothing to move to.
    pub fn retreat(&mut self) -> bool {
        match self.messages.prev_non_blank(self.position) {
            Some(prev) => {
                self.position = prev;
                true
            }
            None => false,
        }
    }

    /// Record the current position in `store`.
    ///
    /// Placeholders are never persisted. Write failures are logged.
    pub fn persist(&self, store: &mut dyn PositionStore) {
        if self.is_placeholder() {
            return;
        }
        persist_or_log(store, &self.source, self.position);
    }

    /// Make `source` the active source.
    ///
    /// Persists the outgoing position first, then loads the new entries and
    /// restores the new source's position from `store`.
    pub fn switch_source(&mut self, source: impl Into<PathBuf>, store: &mut dyn PositionStore) {
        self.persist(store);

        self.source = source.into();
        let loaded = load_source(&self.source);
        self.install(loaded, store);

        info!(
            source = %self.source.display(),
            position = self.position,
            entries = self.messages.len(),
            "Switched source"
        );
    }

    fn install(&mut self, loaded: LoadedSource, store: &dyn PositionStore) {
        self.messages = loaded.messages;
        self.kind = loaded.kind;
        self.position = match self.kind {
            ContentKind::File => restore_position(store.get(&self.source), self.messages.len()),
            ContentKind::Placeholder => 0,
        };
        self.normalize();
    }

    /// Move off a blank or out-of-range index onto the first non-blank entry.
    fn normalize(&mut self) {
        let valid = self
            .messages
            .get(self.position)
            .is_some_and(|entry| !is_blank(entry));
        if !valid {
            self.position = self.messages.first_non_blank().unwrap_or(0);
        }
    }
}

/// Index to resume at given a stored value.
///
/// Anything outside `[0, len)` resumes at 0, not at the nearest bound.
pub fn restore_position(stored: Option<usize>, len: usize) -> usize {
    match stored {
        Some(index) if index < len => index,
        _ => 0,
    }
}
