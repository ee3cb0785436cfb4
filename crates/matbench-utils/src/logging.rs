//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Two halves live here: [`init_logging`] installs the global subscriber, and
//! the [`Logger`] capability gives components a handle they can log through
//! without knowing whether anything is listening. [`initialize_logger`] returns
//! a handle backed by `tracing`; [`initialize_null_logger`] returns one that
//! drops every message.
//!
//! # Usage
//!
//! ```ignore
//! use matbench_utils::logging::{LogConfig, Logger, initialize_logger};
//!
//! let log = initialize_logger("matbench", &LogConfig::from_verbosity(1))?;
//! log.info("starting benchmark");
//! ```

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::{MatbenchError, Result};

/// Name used by [`initialize_logger`] callers that have no better one.
pub const DEFAULT_LOGGER_NAME: &str = "matbench";

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level emitted.
    pub level_filter: LevelFilter,
    /// Whether `RUST_LOG` may override `level_filter`.
    pub use_env_filter: bool,
    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    /// Output format.
    pub format: LogFormat,
    /// Optional log file path. When set, logs are appended to the file.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::INFO,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from a verbosity count.
    ///
    /// - 0: info level
    /// - 1: debug level
    /// - 2+: trace level
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level_filter = match verbosity {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        Self {
            level_filter,
            ..Default::default()
        }
    }

    /// Set the level filter directly.
    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    /// Allow or forbid `RUST_LOG` to override the configured level.
    #[must_use]
    pub fn with_env_filter(mut self, enable: bool) -> Self {
        self.use_env_filter = enable;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.with_timestamps = enable;
        self
    }

    #[must_use]
    pub fn with_target(mut self, enable: bool) -> Self {
        self.with_target = enable;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the log file path (writes to stderr when None).
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// Calling this again after a subscriber is installed keeps the existing one.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    if let Some(path) = &config.log_file {
        let file = open_log_file(path)?;
        init_logging_with_writer(config, SharedFileWriter::new(file));
    } else {
        init_logging_with_writer(config, io::stderr);
    }
    Ok(())
}

/// Initialize logging with a custom writer (useful for testing).
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = build_env_filter(config);

    let installed = match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_target(config.with_target);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);

            if config.with_timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .try_init()
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.without_time())
                    .try_init()
            }
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);

            if config.with_timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .try_init()
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.without_time())
                    .try_init()
            }
        }
    };

    if let Err(error) = installed {
        tracing::debug!(%error, "global subscriber already installed; keeping it");
    }
}

/// Open `path` for appending, creating it if missing.
fn open_log_file(path: &Path) -> Result<std::fs::File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| MatbenchError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Build an `EnvFilter` from the configured level, respecting `RUST_LOG` when allowed.
fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    build_env_filter_from(config, env_directives.as_deref())
}

/// Env directives win over the configured level when `use_env_filter` is set
/// and they parse.
fn build_env_filter_from(config: &LogConfig, env_directives: Option<&str>) -> EnvFilter {
    if config.use_env_filter
        && let Some(filter) =
            env_directives.and_then(|directives| EnvFilter::try_new(directives).ok())
    {
        return filter;
    }
    let level = config.level_filter.to_string().to_lowercase();
    EnvFilter::new(format!(
        "{level},matbench_utils={level},matbench_cli={level}",
        level = level
    ))
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl SharedFileWriter {
    fn new(file: std::fs::File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<std::fs::File>>,
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

/// Logging capability shared by the real and the null logger.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn debug(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Logger that forwards to `tracing`, tagging each event with its name.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    name: String,
}

impl TracingLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(logger = %self.name, "{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!(logger = %self.name, "{message}");
    }

    fn warning(&self, message: &str) {
        tracing::warn!(logger = %self.name, "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(logger = %self.name, "{message}");
    }
}

/// Logger that discards every message at every level.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn info(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Install the global subscriber (if needed) and return a named logger.
///
/// # Errors
///
/// Returns an error if the configured log file cannot be opened.
pub fn initialize_logger(name: &str, config: &LogConfig) -> Result<TracingLogger> {
    init_logging(config)?;
    Ok(TracingLogger::new(name))
}

/// Return a logger that discards all messages.
pub fn initialize_null_logger() -> NullLogger {
    NullLogger
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Buffer {
        type Writer = Buffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(run: impl FnOnce()) -> String {
        let buffer = Buffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .with_max_level(LevelFilter::TRACE)
            .finish();
        tracing::subscriber::with_default(subscriber, run);
        buffer.contents()
    }

    #[test]
    fn test_from_verbosity_levels() {
        assert_eq!(LogConfig::from_verbosity(0).level_filter, LevelFilter::INFO);
        assert_eq!(LogConfig::from_verbosity(1).level_filter, LevelFilter::DEBUG);
        assert_eq!(LogConfig::from_verbosity(5).level_filter, LevelFilter::TRACE);
    }

    #[test]
    fn test_tracing_logger_emits_all_levels() {
        let log = TracingLogger::new("bench");
        let output = capture(|| {
            log.info("Test logging.");
            log.debug("Test debug.");
            log.warning("Test warning.");
            log.error("Test error.");
        });
        assert!(output.contains("Test logging."));
        assert!(output.contains("Test debug."));
        assert!(output.contains("Test warning."));
        assert!(output.contains("Test error."));
        assert!(output.contains("logger=bench"));
    }

    #[test]
    fn test_null_logger_discards_everything() {
        let null = initialize_null_logger();
        let output = capture(|| {
            null.info("Test null log 1.");
            null.debug("Test null log 2.");
            null.warning("Test null log 3.");
            null.error("Test null log 4.");
        });
        assert!(output.is_empty());
    }

    #[test]
    fn test_initialize_logger_twice_is_harmless() {
        let config = LogConfig::default().with_ansi(false).with_env_filter(false);
        let first = initialize_logger(DEFAULT_LOGGER_NAME, &config).unwrap();
        let second = initialize_logger("other", &config).unwrap();
        first.info("Test logging.");
        second.warning("Test warning.");
        assert_eq!(first.name(), "matbench");
    }

    #[test]
    fn test_env_filter_uses_configured_level() {
        let config = LogConfig::default()
            .with_level_filter(LevelFilter::WARN)
            .with_env_filter(false);
        let filter = build_env_filter_from(&config, Some("matbench_utils=trace"))
            .to_string()
            .to_lowercase();
        assert!(filter.contains("matbench_utils=warn"));
    }

    #[test]
    fn test_env_directives_override_configured_level() {
        let config = LogConfig::default()
            .with_level_filter(LevelFilter::WARN)
            .with_env_filter(true);
        let filter = build_env_filter_from(&config, Some("matbench_utils=trace"))
            .to_string()
            .to_lowercase();
        assert!(filter.contains("matbench_utils=trace"));
        assert!(!filter.contains("matbench_utils=warn"));
    }

    #[test]
    fn test_missing_env_directives_fall_back_to_level() {
        let config = LogConfig::default()
            .with_level_filter(LevelFilter::DEBUG)
            .with_env_filter(true);
        let filter = build_env_filter_from(&config, None).to_string().to_lowercase();
        assert!(filter.contains("matbench_utils=debug"));
    }

    #[test]
    fn test_log_file_is_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matbench.log");
        std::fs::write(&path, "existing line\n").unwrap();

        for message in ["first run\n", "second run\n"] {
            let writer = SharedFileWriter::new(open_log_file(&path).unwrap());
            let mut guard = writer.make_writer();
            guard.write_all(message.as_bytes()).unwrap();
            guard.flush().unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "existing line\nfirst run\nsecond run\n");
    }

    #[test]
    fn test_unopenable_log_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_log_file(dir.path()).unwrap_err();
        assert!(matches!(err, MatbenchError::LogFile { .. }));
    }
}
