//! Per-source position files.
//!
//! The position of `<dir>/<stem>.<ext>` lives in `<dir>/lastIndex_<stem>.txt`
//! as a plain decimal number.

use super::PositionStore;
use crate::model::error::StoreError;
use std::fs;
use std::path::{Path, PathBuf};

/// Position file for `source`.
pub fn sidecar_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    let name = format!("lastIndex_{stem}.txt");

    match source.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Stores each source's position in its sidecar file.
#[derive(Debug, Clone, Copy, Default)]
pub struct SidecarStore;

impl PositionStore for SidecarStore {
    /// Missing, unreadable or non-numeric files read as no position.
    fn get(&self, source: &Path) -> Option<usize> {
        let contents = fs::read_to_string(sidecar_path(source)).ok()?;
        contents.trim().parse().ok()
    }

    fn set(&mut self, source: &Path, index: usize) -> Result<(), StoreError> {
        let path = sidecar_path(source);
        fs::write(&path, index.to_string()).map_err(|source| StoreError::Write { path, source })
    }
}
