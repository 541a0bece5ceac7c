//! Logging Infrastructure
//!
//! Console logging by default; daily rolling files when a log directory exists.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level` when set. Returns `false`
/// when a global subscriber was already installed (tests, embedders); that
/// subscriber stays in place.
pub fn init_logger_with_file(log_level: &str, log_dir: Option<&Path>) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let result = match log_dir {
        Some(dir) if dir.is_dir() => {
            let file_appender = tracing_appender::rolling::daily(dir, "seating-server");
            subscriber.with_ansi(false).with_writer(file_appender).try_init()
        }
        _ => subscriber.try_init(),
    };

    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "Global subscriber already installed, keeping it");
            false
        }
    }
}
