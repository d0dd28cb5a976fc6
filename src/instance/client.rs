//! Secondary side: hand a request to the running owner.

use super::UiRequest;
use crate::model::error::InstanceError;
use std::io::{self, Write};
use std::os::unix::net::UnixStream;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Pause between connect attempts while the owner may still be binding.
const RETRY_INTERVAL: Duration = Duration::from_millis(50);

/// Connect to the owner at `socket` and send `request` as one line.
///
/// Connection attempts are retried until `timeout` has elapsed, covering an
/// owner that has taken the lock but not yet bound its socket.
///
/// # Errors
///
/// Returns `InstanceError::Connect` if no connection succeeds before the
/// deadline, or `InstanceError::Send` if writing the line fails.
pub fn send_request(
    socket: &Path,
    request: UiRequest,
    timeout: Duration,
) -> Result<(), InstanceError> {
    let mut stream = connect_with_retry(socket, timeout)?;

    let send = |stream: &mut UnixStream| -> io::Result<()> {
        stream.write_all(request.token().as_bytes())?;
        stream.write_all(b"\n")?;
        stream.flush()
    };
    send(&mut stream).map_err(|source| InstanceError::Send {
        path: socket.to_path_buf(),
        source,
    })?;

    info!(socket = %socket.display(), ?request, "Forwarded request to running instance");
    Ok(())
}

fn connect_with_retry(socket: &Path, timeout: Duration) -> Result<UnixStream, InstanceError> {
    let deadline = Instant::now() + timeout;
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        match UnixStream::connect(socket) {
            Ok(stream) => {
                debug!(attempts, "Connected to running instance");
                return Ok(stream);
            }
            Err(source) if Instant::now() + RETRY_INTERVAL >= deadline => {
                return Err(InstanceError::Connect {
                    path: socket.to_path_buf(),
                    timeout_ms: timeout.as_millis(),
                    source,
                });
            }
            Err(_) => thread::sleep(RETRY_INTERVAL),
        }
    }
}
