//! File logging.
//!
//! The terminal belongs to the TUI, so tracing output goes to
//! `<data_dir>/dotwiz.log` only. The filter defaults to `info` and can be
//! changed with `DOTWIZ_LOG` (same syntax as `RUST_LOG`).

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "DOTWIZ_LOG";

/// Default log file location.
pub fn default_log_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "dotwiz").map(|d| d.data_dir().join("dotwiz.log"))
}

/// Install a file-only subscriber. The returned guard must be kept alive for
/// buffered lines to be flushed.
pub fn init_file_logging(log_path: &Path) -> Result<WorkerGuard> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
