//! Error types for linebar.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions up to [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`InstanceError`] - Single-instance lock and local socket failures
//!   - [`StoreError`] - Reading position persistence failures
//!   - `std::io::Error` - Terminal/TUI rendering failures
//! - [`SourceError`] - Text file loading failures (never propagated; rendered
//!   as a placeholder entry instead)
//!
//! # Error Recovery Strategy
//!
//! Nothing in here is fatal to a running reader. Instance errors are logged and
//! the process carries on (or, for a secondary launch, exits as planned). Store
//! errors are logged and the previous on-disk value is left stale. Source errors
//! become the text shown in the bar. Only terminal errors end the event loop.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Domain errors convert into `AppError` via `From`, so callers can use `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Single-instance coordination failed.
    #[error("Instance coordination failed: {0}")]
    Instance(#[from] InstanceError),

    /// Persisting a reading position failed.
    #[error("Failed to persist reading position: {0}")]
    Store(#[from] StoreError),

    /// Terminal or TUI rendering error.
    ///
    /// Without a working terminal the reader cannot function. The caller
    /// restores the terminal and exits.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors raised by the single-instance coordinator.
///
/// The lock, the local socket and the connect attempt of a secondary launch
/// each fail in their own way. All of them are best-effort: callers log the
/// error and continue.
#[derive(Debug, Error)]
pub enum InstanceError {
    /// The directory holding the lock file and socket could not be created.
    #[error("Failed to create runtime directory {path}: {source}")]
    RuntimeDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The lock file could not be opened.
    #[error("Failed to open lock file {path}: {source}")]
    LockFile {
        /// Lock file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// `flock` failed for a reason other than another process holding it.
    #[error("Failed to lock {path}: {source}")]
    Lock {
        /// Lock file path.
        path: PathBuf,
        /// Errno reported by `flock`.
        #[source]
        source: nix::errno::Errno,
    },

    /// The owner could not bind its listening socket.
    #[error("Failed to bind socket {path}: {source}")]
    Bind {
        /// Socket path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A secondary launch could not reach the owner before the deadline.
    #[error("Could not connect to {path} within {timeout_ms} ms: {source}")]
    Connect {
        /// Socket path.
        path: PathBuf,
        /// Connect deadline in milliseconds.
        timeout_ms: u128,
        /// Last connect error observed.
        #[source]
        source: std::io::Error,
    },

    /// Writing the request to the owner failed after connecting.
    #[error("Failed to send request to {path}: {source}")]
    Send {
        /// Socket path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while persisting reading positions.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Writing a position file or the registry document failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The registry could not be encoded as JSON.
    #[error("Failed to encode registry {path}: {source}")]
    Encode {
        /// Registry path.
        path: PathBuf,
        /// Underlying serializer error.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while loading a source text file.
///
/// These never reach the user as failures: the reader shows the error's
/// display text as a placeholder entry.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The text file does not exist.
    #[error("Text file not found, please create {}", path.display())]
    NotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The text file exists but could not be read.
    #[error("Could not read {}: {source}", path.display())]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
