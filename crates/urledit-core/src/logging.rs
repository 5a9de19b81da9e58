//! Tracing setup for the urledit binaries.
//!
//! Events go to `$XDG_STATE_HOME/urledit/urledit.log`. When that file can't
//! be opened the caller installs the stderr subscriber instead.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,urledit=debug,urledit_core=debug";

/// Location of the log file. Creates the state directory.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urledit")?;
    let log_dir = xdg_dirs.get_state_home().join("urledit");
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log dir {}", log_dir.display()))?;
    Ok(log_dir.join("urledit.log"))
}

/// Installs a subscriber appending to [`log_file_path`]. Returns the path.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "logging to file");
    Ok(path)
}

/// Installs a stderr subscriber. Returns false if one was already set.
pub fn init_logging_stderr() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
