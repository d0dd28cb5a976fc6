//! Single-instance coordination.
//!
//! The first process to lock `<runtime_dir>/<name>.lock` owns the reader bar
//! and listens on `<runtime_dir>/<name>.sock`. Any later launch finds the lock
//! taken, sends one `ShowWindow` line to the owner and exits without touching
//! the terminal.
//!
//! Everything here is best-effort. Callers log [`InstanceError`]s and carry on;
//! a secondary that cannot reach the owner still exits rather than becoming an
//! owner itself.
//!
//! [`InstanceError`]: crate::model::InstanceError

use std::path::{Path, PathBuf};
use std::str::FromStr;

pub mod client;
pub mod listener;
pub mod lock;

pub use client::send_request;
pub use listener::spawn_listener;
pub use lock::{acquire, InstanceGuard, Role};

/// Wire token asking the owner to show its bar.
pub const SHOW_WINDOW: &str = "ShowWindow";

/// Requests a secondary launch can forward to the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiRequest {
    /// Make the bar visible and repaint it.
    ShowWindow,
}

impl UiRequest {
    /// Token sent on the wire for this request.
    pub fn token(self) -> &'static str {
        match self {
            UiRequest::ShowWindow => SHOW_WINDOW,
        }
    }
}

impl FromStr for UiRequest {
    type Err = String;

    /// Parses exactly one known token; surrounding line terminators are
    /// ignored, any other text is rejected.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        match line.trim_end_matches(['\r', '\n']) {
            SHOW_WINDOW => Ok(UiRequest::ShowWindow),
            other => Err(format!("unknown request {other:?}")),
        }
    }
}

/// Well-known locations shared by every launch with the same instance name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstancePaths {
    /// Lock file whose `flock` decides ownership.
    pub lock: PathBuf,
    /// Socket the owner listens on.
    pub socket: PathBuf,
}

impl InstancePaths {
    /// Paths for instance `name` under `runtime_dir`.
    pub fn new(runtime_dir: &Path, name: &str) -> Self {
        Self {
            lock: runtime_dir.join(format!("{name}.lock")),
            socket: runtime_dir.join(format!("{name}.sock")),
        }
    }
}
