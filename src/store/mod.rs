//! Reading position persistence.
//!
//! The reader and the sources menu share one [`PositionStore`] contract:
//! look up the last index shown for a source path, and record a new one.

use crate::model::error::StoreError;
use std::path::Path;
use tracing::warn;

pub mod registry;
pub mod sidecar;

pub use registry::SourceRegistry;
pub use sidecar::{sidecar_path, SidecarStore};

/// Get/set access to the last reading position of a source.
pub trait PositionStore {
    /// Last recorded index for `source`, if any.
    fn get(&self, source: &Path) -> Option<usize>;

    /// Record `index` as the reading position of `source`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the position could not be written.
    fn set(&mut self, source: &Path, index: usize) -> Result<(), StoreError>;
}

/// The reader's store: a sidecar file next to each source, mirrored into the
/// source registry for sources the registry tracks.
#[derive(Debug)]
pub struct Positions {
    sidecar: SidecarStore,
    registry: SourceRegistry,
}

impl Positions {
    /// Combine the sidecar store with a loaded registry.
    pub fn new(registry: SourceRegistry) -> Self {
        Self {
            sidecar: SidecarStore,
            registry,
        }
    }

    /// The source registry.
    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    /// Mutable access to the source registry.
    pub fn registry_mut(&mut self) -> &mut SourceRegistry {
        &mut self.registry
    }
}

impl PositionStore for Positions {
    /// Sidecar first; the registry covers sources whose sidecar is gone.
    fn get(&self, source: &Path) -> Option<usize> {
        self.sidecar
            .get(source)
            .or_else(|| self.registry.get(source))
    }

    /// Writes both stores even if the first write fails, reporting the first
    /// error.
    fn set(&mut self, source: &Path, index: usize) -> Result<(), StoreError> {
        let sidecar = self.sidecar.set(source, index);
        let registry = self.registry.set(source, index);
        sidecar.and(registry)
    }
}

/// Record a position, logging instead of failing.
///
/// A lost position must never interrupt reading; the previous on-disk value
/// simply stays stale.
pub fn persist_or_log(store: &mut dyn PositionStore, source: &Path, index: usize) {
    if let Err(err) = store.set(source, index) {
        warn!(source = %source.display(), index, error = %err, "Failed to save reading position");
    }
}
