//! File-backed `tracing` setup.
//!
//! The TUI owns the terminal, so log lines go to daily files under
//! `~/.local/share/outseek/` instead of stderr. Only the newest
//! [`KEEP_LOG_FILES`] files are kept.

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::tui::AppError;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "OUTSEEK_LOG";

/// Number of daily log files retained.
pub const KEEP_LOG_FILES: usize = 7;

/// Returns the log directory under the given data directory.
pub fn log_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("outseek")
}

/// Builds the filter: `OUTSEEK_LOG` if set and valid, else `default_level`, else `info`.
pub fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Creates the rotating appender writing `outseek.<date>.log` files into `dir`.
pub fn appender(dir: &Path) -> Result<RollingFileAppender, AppError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("outseek")
        .filename_suffix("log")
        .max_log_files(KEEP_LOG_FILES)
        .build(dir)
        .map_err(|e| AppError::Subscriber(Box::new(e)))
}

/// Installs the global subscriber and returns the log directory.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(default_level: &str) -> Result<PathBuf, AppError> {
    let data_dir = dirs::data_dir().ok_or(AppError::NoDataDir)?;
    let dir = log_dir(&data_dir);

    tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_writer(appender(&dir)?)
        .with_ansi(false)
        .try_init()
        .map_err(AppError::Subscriber)?;
    Ok(dir)
}
