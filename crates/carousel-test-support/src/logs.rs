//! Capture `tracing` output emitted while a closure runs.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::Level;

#[derive(Clone, Default)]
struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CaptureWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `body` under a thread-local subscriber and return its result together
/// with everything logged at `TRACE` and above, without colours or timestamps.
pub fn capture_logs<T>(body: impl FnOnce() -> T) -> (T, String) {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer({
            let writer = writer.clone();
            move || writer.clone()
        })
        .with_ansi(false)
        .without_time()
        .with_max_level(Level::TRACE)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, body);
    let bytes = writer
        .buffer
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    (result, String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_events_with_fields() {
        let ((), output) = capture_logs(|| tracing::warn!(items = 2, "short on items"));
        assert!(output.contains("WARN"));
        assert!(output.contains("short on items"));
        assert!(output.contains("items=2"));
    }
}
