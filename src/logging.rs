//! Logging configuration and initialization for Postbox.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::Result;

/// Parse log level string to tracing Level.
fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Path of the log file for a run started at `started`.
pub fn log_file_path(dir: impl AsRef<Path>, started: DateTime<Local>) -> PathBuf {
    dir.as_ref()
        .join(format!("postbox_{}.log", started.format("%Y%m%d_%H%M%S")))
}

/// Initialize the logging system with the given configuration.
///
/// Logs go to stdout and to a fresh timestamped file under `config.dir`.
/// Returns the path of the log file.
pub fn init(config: &LoggingConfig) -> Result<PathBuf> {
    let level = parse_level(&config.level);
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let dir = Path::new(&config.dir);
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = log_file_path(dir, Local::now());
    let log_file = Arc::new(File::create(&path)?);

    let writer = std::io::stdout.and(log_file);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .init();

    Ok(path)
}

/// Initialize console-only logging (for development/testing).
pub fn init_console_only(level: &str) {
    let level = parse_level(level);
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(true)
                .with_target(true),
        )
        .with(filter)
        .init();
}
