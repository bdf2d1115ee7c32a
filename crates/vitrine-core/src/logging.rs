//! Tracing setup.
//!
//! The TUI owns stdout/stderr, so logs go to ${VITRINE_HOME}/vitrine.log
//! through a non-blocking file appender. Filter resolution order:
//! VITRINE_LOG env var, then `log_filter` from config, then "info".

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "VITRINE_LOG";

/// Initializes the global tracing subscriber.
///
/// Returns the appender guard; dropping it flushes and stops the writer
/// thread, so the caller must keep it alive for the process lifetime.
pub fn init(config_filter: Option<&str>) -> Result<WorkerGuard> {
    let home = paths::vitrine_home();
    fs::create_dir_all(&home)
        .with_context(|| format!("Failed to create log directory {}", home.display()))?;

    let appender = tracing_appender::rolling::never(&home, "vitrine.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(config_filter.unwrap_or("info")))
        .context("Failed to parse log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .init();

    tracing::debug!(log_path = %paths::log_path().display(), "logging initialized");

    Ok(guard)
}
