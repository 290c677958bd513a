//! Logging infrastructure.
//!
//! Diagnostics (dataset load failures, skipped features, search passes)
//! go to an operator-visible channel rather than the UI: a log file plus
//! stderr, filtered via the `RUST_LOG` environment variable. The TUI owns
//! stdout, so console output goes to stderr.

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping it flushes and closes the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the logging system.
///
/// Creates the log directory if needed, truncates the previous session's
/// log file, and installs a global subscriber writing to both the file
/// and stderr.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the log
/// file cannot be truncated.
pub fn init_logging(log_dir: &str, log_file: &str) -> Result<LoggingGuard, io::Error> {
    fs::create_dir_all(log_dir)?;

    // Truncate the previous session's log; handles both existing and
    // missing files.
    let log_path = Path::new(log_dir).join(log_file);
    fs::write(&log_path, "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(true);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Default log directory path.
pub fn default_log_dir() -> &'static str {
    "logs"
}

/// Default log file name.
pub fn default_log_file() -> &'static str {
    "choromap.log"
}
