//! Ordered display entries of one source.

/// Whether an entry has nothing to show.
///
/// Empty and whitespace-only entries are skipped by navigation.
pub fn is_blank(entry: &str) -> bool {
    entry.trim().is_empty()
}

/// Ordered sequence of display entries, one per line or line fragment.
///
/// Entries are only ever added by splitting: one entry is replaced by its
/// fitted head and the remainder is inserted right after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSet {
    entries: Vec<String>,
}

impl MessageSet {
    /// Build a set from already split lines.
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// All entries in order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether any entry is non-blank.
    pub fn has_content(&self) -> bool {
        self.entries.iter().any(|entry| !is_blank(entry))
    }

    /// Index of the first non-blank entry.
    pub fn first_non_blank(&self) -> Option<usize> {
        self.entries.iter().position(|entry| !is_blank(entry))
    }

    /// Next non-blank index after `from`, wrapping around.
    ///
    /// Returns `None` when the set has no content. If `from` is the only
    /// non-blank entry it is returned again.
    pub fn next_non_blank(&self, from: usize) -> Option<usize> {
        let len = self.entries.len();
        if !self.has_content() {
            return None;
        }
        let mut index = from % len;
        loop {
            index = (index + 1) % len;
            if !is_blank(&self.entries[index]) {
                return Some(index);
            }
        }
    }

    /// Previous non-blank index before `from`, wrapping around.
    ///
    /// Returns `None` when the set has no content.
    pub fn prev_non_blank(&self, from: usize) -> Option<usize> {
        let len = self.entries.len();
        if !self.has_content() {
            return None;
        }
        let mut index = from % len;
        loop {
            index = (index + len - 1) % len;
            if !is_blank(&self.entries[index]) {
                return Some(index);
            }
        }
    }

    /// Replace entry `index` with `head` and insert `tail` right after it.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn split_entry(&mut self, index: usize, head: String, tail: String) {
        self.entries[index] = head;
        self.entries.insert(index + 1, tail);
    }
}

impl From<Vec<&str>> for MessageSet {
    fn from(entries: Vec<&str>) -> Self {
        Self::new(entries.into_iter().map(str::to_string).collect())
    }
}
