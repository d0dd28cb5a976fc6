//! Owner side: accept requests from later launches.

use super::UiRequest;
use crate::model::error::InstanceError;
use std::fs;
use std::io::{BufRead, BufReader};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::Path;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info, warn};

/// How long a connected client gets to send its line.
const READ_TIMEOUT: Duration = Duration::from_secs(2);

/// Pause after a failed accept so a persistent error does not spin.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Bind `socket` and serve requests on a background thread.
///
/// Any stale socket file left by a crashed owner is removed first. Each
/// connection carries one line; recognised requests are forwarded on
/// `requests`, anything else is logged and dropped. The thread ends once the
/// receiving side of `requests` is gone.
///
/// # Errors
///
/// Returns `InstanceError::Bind` if the socket cannot be bound.
pub fn spawn_listener(
    socket: &Path,
    requests: Sender<UiRequest>,
) -> Result<JoinHandle<()>, InstanceError> {
    let _ = fs::remove_file(socket);
    let listener = UnixListener::bind(socket).map_err(|source| InstanceError::Bind {
        path: socket.to_path_buf(),
        source,
    })?;
    info!(socket = %socket.display(), "Listening for instance requests");

    let handle = thread::spawn(move || {
        for stream in listener.incoming() {
            let stream = match stream {
                Ok(stream) => stream,
                Err(err) => {
                    warn!(error = %err, "Failed to accept instance connection");
                    thread::sleep(ACCEPT_RETRY_DELAY);
                    continue;
                }
            };

            let Some(request) = read_request(stream) else {
                continue;
            };

            debug!(?request, "Received instance request");
            if requests.send(request).is_err() {
                debug!("UI loop gone, stopping instance listener");
                break;
            }
        }
    });

    Ok(handle)
}

fn read_request(stream: UnixStream) -> Option<UiRequest> {
    if let Err(err) = stream.set_read_timeout(Some(READ_TIMEOUT)) {
        warn!(error = %err, "Failed to set read timeout on instance connection");
    }

    let mut line = String::new();
    if let Err(err) = BufReader::new(stream).read_line(&mut line) {
        warn!(error = %err, "Failed to read instance request");
        return None;
    }

    match line.parse() {
        Ok(request) => Some(request),
        Err(reason) => {
            warn!(%reason, "Ignoring instance request");
            None
        }
    }
}
