//! Log file setup.
//!
//! The terminal belongs to the editor while it runs, so log output goes to a
//! file. The filter comes from `PXL_LOG` when set, otherwise from
//! `logging.level` in the config.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Environment variable that overrides the configured log level.
pub const LOG_ENV: &str = "PXL_LOG";

/// Pick the filter directive: a non-empty env value wins over the config.
pub fn filter_directive(env: Option<String>, configured: &str) -> String {
    match env {
        Some(value) if !value.trim().is_empty() => value,
        _ => configured.to_string(),
    }
}

/// Install the global subscriber, appending to the configured log file.
pub fn init(config: &Config) -> Result<()> {
    let directive = filter_directive(std::env::var(LOG_ENV).ok(), &config.logging.level);
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid log filter: {}", directive))?;
    let path = config.log_path()?;
    init_with_file(filter, &path)
}

fn init_with_file(filter: EnvFilter, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {:?}", parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;
    Ok(())
}
