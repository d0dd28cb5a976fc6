//! Registry of known sources and their positions.
//!
//! Persisted as a pretty-printed JSON object mapping source path to index:
//!
//! ```json
//! {
//!   "/home/me/books/novel.txt": 120
//! }
//! ```

use super::PositionStore;
use crate::model::error::StoreError;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Known sources and their last reading positions.
///
/// Entries are added explicitly with [`register`](Self::register) and are
/// never removed automatically. Position updates for untracked paths are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRegistry {
    path: PathBuf,
    sources: BTreeMap<PathBuf, usize>,
}

impl SourceRegistry {
    /// Registry with no sources, persisted at `path`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sources: BTreeMap::new(),
        }
    }

    /// Load the registry document at `path`.
    ///
    /// A missing document yields an empty registry. An unreadable or
    /// malformed one is logged and also yields an empty registry; it is
    /// overwritten on the next save.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Self::empty(path),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Failed to read source registry");
                return Self::empty(path);
            }
        };

        match serde_json::from_str(&contents) {
            Ok(sources) => {
                let registry = Self { path, sources };
                info!(
                    path = %registry.path.display(),
                    sources = registry.len(),
                    "Loaded source registry"
                );
                registry
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Ignoring malformed source registry");
                Self::empty(path)
            }
        }
    }

    /// Location of the registry document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Registered source paths in order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.sources.keys().map(PathBuf::as_path)
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no source is registered.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Whether `source` is registered.
    pub fn contains(&self, source: &Path) -> bool {
        self.sources.contains_key(source)
    }

    /// Register `source` at index 0 and save.
    ///
    /// Returns `Ok(false)` without saving if it was already registered.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the registry could not be saved. The source
    /// stays registered in memory.
    pub fn register(&mut self, source: &Path) -> Result<bool, StoreError> {
        if self.contains(source) {
            return Ok(false);
        }
        self.sources.insert(source.to_path_buf(), 0);
        self.save()?;
        Ok(true)
    }

    /// Write the registry document, creating its directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on encoding or I/O failure.
    pub fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.sources).map_err(|source| {
            StoreError::Encode {
                path: self.path.clone(),
                source,
            }
        })?;

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|source| StoreError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl PositionStore for SourceRegistry {
    fn get(&self, source: &Path) -> Option<usize> {
        self.sources.get(source).copied()
    }

    /// Only registered sources are updated; the document is saved on change.
    fn set(&mut self, source: &Path, index: usize) -> Result<(), StoreError> {
        match self.sources.get_mut(source) {
            Some(current) if *current == index => Ok(()),
            Some(current) => {
                *current = index;
                self.save()
            }
            None => Ok(()),
        }
    }
}
