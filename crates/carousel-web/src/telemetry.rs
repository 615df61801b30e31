//! Logging setup for the browser.
//!
//! Formatted `tracing` events are forwarded to the devtools console, errors
//! and warnings through `console.error`/`console.warn` so they keep their
//! console styling.

/// Default logging directive.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Logging configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingConfig<'a> {
    /// `EnvFilter` directive, e.g. `info` or `carousel_core=debug`.
    pub level: &'a str,
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            level: Self::infer_level(),
        }
    }
}

impl LoggingConfig<'_> {
    /// Choose a sensible default for the current build.
    #[must_use]
    pub const fn infer_level() -> &'static str {
        if cfg!(debug_assertions) {
            "debug"
        } else {
            DEFAULT_LOG_LEVEL
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use console::init_logging;

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use anyhow::{Result, anyhow};
    use tracing::{Level, Metadata};
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt::MakeWriter;

    use super::LoggingConfig;

    /// Configure and install the global tracing subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if the directive is invalid or a subscriber has
    /// already been installed.
    pub fn init_logging(config: &LoggingConfig<'_>) -> Result<()> {
        let env_filter = EnvFilter::try_new(config.level)
            .map_err(|err| anyhow!("invalid log directive '{}': {err}", config.level))?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(ConsoleMakeWriter)
            .with_ansi(false)
            .without_time()
            .with_target(true)
            .try_init()
            .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
    }

    struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter::new(Level::INFO)
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter::new(*meta.level())
        }
    }

    /// Buffers one formatted event and emits it on drop.
    struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl ConsoleWriter {
        const fn new(level: Level) -> Self {
            Self {
                level,
                buffer: Vec::new(),
            }
        }
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buffer.is_empty() {
                return;
            }
            let line = String::from_utf8_lossy(&self.buffer);
            let line = line.trim_end().to_string();
            match self.level {
                Level::ERROR => gloo::console::error!(line),
                Level::WARN => gloo::console::warn!(line),
                Level::DEBUG | Level::TRACE => gloo::console::debug!(line),
                _ => gloo::console::log!(line),
            }
        }
    }
}
