// Logging setup shared by the binaries
// Everything goes to a daily log file; stderr only when asked, since the TUI owns the terminal

use crate::config::LoggingConfig;
use anyhow::Result;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Keep the returned guard alive until exit,
/// dropping it flushes and stops the background writer.
pub fn init_logging(config: &LoggingConfig, to_stderr: bool) -> Result<WorkerGuard> {
    fs::create_dir_all(&config.directory)?;

    // Daily rotating file appender
    let file_appender = tracing_appender::rolling::daily(&config.directory, "tunelist.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false);

    let stderr_layer = to_stderr.then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(guard)
}
