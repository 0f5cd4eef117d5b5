//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The terminal is owned by the renderer while the game runs, so log output
//! only goes to a file, and only when `MATCH_LOG_PATH` is set.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::GameConfig;

/// Install the global subscriber described by `config`.
///
/// Returns `false` (and installs nothing) when no log path is configured.
pub fn init(config: &GameConfig) -> Result<bool> {
    match &config.log_path {
        Some(path) => {
            init_file(path, &config.log_level)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn init_file(path: &Path, level: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_new(level)
        .with_context(|| format!("invalid log filter {level:?}"))?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(())
}
