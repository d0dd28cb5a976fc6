//! Process-wide exclusive lock.

use super::InstancePaths;
use crate::model::error::InstanceError;
use nix::errno::Errno;
use nix::fcntl::{Flock, FlockArg};
use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use tracing::{debug, info};

/// Outcome of trying to become the owning instance.
#[derive(Debug)]
pub enum Role {
    /// This process holds the lock and owns the UI.
    Owner(InstanceGuard),
    /// Another process holds the lock.
    Secondary,
}

/// Held for the owner's lifetime.
///
/// Dropping it releases the lock and removes the owner's socket file. The lock
/// file itself stays; deleting it while others may open it would let two
/// processes lock different inodes.
pub struct InstanceGuard {
    _lock: Flock<File>,
    socket: PathBuf,
}

impl std::fmt::Debug for InstanceGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceGuard")
            .field("socket", &self.socket)
            .finish_non_exhaustive()
    }
}

impl Drop for InstanceGuard {
    fn drop(&mut self) {
        if fs::remove_file(&self.socket).is_ok() {
            debug!(socket = %self.socket.display(), "Removed instance socket");
        }
    }
}

/// Try to take the instance lock without blocking.
///
/// # Errors
///
/// Returns `InstanceError` if the runtime directory or lock file cannot be
/// created, or `flock` fails for a reason other than contention.
pub fn acquire(paths: &InstancePaths) -> Result<Role, InstanceError> {
    if let Some(dir) = paths.lock.parent() {
        fs::create_dir_all(dir).map_err(|source| InstanceError::RuntimeDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(&paths.lock)
        .map_err(|source| InstanceError::LockFile {
            path: paths.lock.clone(),
            source,
        })?;

    match Flock::lock(file, FlockArg::LockExclusiveNonblock) {
        Ok(lock) => {
            info!(lock = %paths.lock.display(), "Acquired instance lock");
            Ok(Role::Owner(InstanceGuard {
                _lock: lock,
                socket: paths.socket.clone(),
            }))
        }
        Err((_, Errno::EWOULDBLOCK)) => {
            info!(lock = %paths.lock.display(), "Instance lock held by another process");
            Ok(Role::Secondary)
        }
        Err((_, errno)) => Err(InstanceError::Lock {
            path: paths.lock.clone(),
            source: errno,
        }),
    }
}
