//! Tracing bootstrap.
//!
//! The interactive session owns stdout, so events go to a log file. Without
//! a file, headless runs log to stderr and interactive runs do not log.

use anyhow::{Context, Result};
use lifeterm_core::config::LoggingConfig;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` takes precedence over
/// `config.level`.
pub fn init_logging(config: &LoggingConfig, headless: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("Invalid log level {:?}", config.level))?,
    };

    let installed = match &config.file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        None if headless => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        None => return Ok(()),
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}
