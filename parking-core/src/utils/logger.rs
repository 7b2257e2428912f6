//! Logging Infrastructure
//!
//! Structured logging setup for development (console) and production
//! (daily rolling files, optionally JSON).

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None, None);
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level` when set.
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let missing_dir = log_dir.filter(|dir| !Path::new(dir).exists());
    let file_appender = log_dir
        .filter(|_| missing_dir.is_none())
        .map(|dir| tracing_appender::rolling::daily(dir, "parking-core"));

    let result = match (file_appender, json.unwrap_or(false)) {
        (Some(appender), true) => builder.json().with_writer(appender).try_init(),
        (Some(appender), false) => builder.with_ansi(false).with_writer(appender).try_init(),
        (None, true) => builder.json().try_init(),
        (None, false) => builder.try_init(),
    };

    if let Err(e) = result {
        tracing::debug!("Logger already initialized: {}", e);
    }
    if let Some(dir) = missing_dir {
        tracing::warn!(log_dir = dir, "Log directory does not exist, logging to stdout");
    }
}
