//! User configuration loaded from `~/.config/outseek/config.json`.
//!
//! Every key is optional. A missing file yields [`Config::default`]; a file
//! that exists but cannot be read or parsed is an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors that can occur while loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is not valid JSON for [`Config`].
    #[error("invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A numeric key is outside the range the app accepts.
    #[error("invalid config {path}: {key} = {value} exceeds {max}")]
    OutOfRange {
        path: PathBuf,
        key: &'static str,
        value: u64,
        max: u64,
    },

    /// The platform does not provide a config directory.
    #[error("could not determine XDG config directory")]
    NoConfigDir,
}

/// Upper bound for the confirmation durations (one day).
pub const MAX_FEEDBACK_SECS: u64 = 24 * 60 * 60;
/// Upper bound for the poll timeout (one minute).
pub const MAX_TICK_RATE_MS: u64 = 60_000;

/// Runtime settings for the form widgets and event loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How long the contact confirmation stays visible.
    pub contact_feedback_secs: u64,
    /// How long the login/signup confirmation stays visible.
    pub account_feedback_secs: u64,
    /// Event-loop poll timeout; also the timer resolution.
    pub tick_rate_ms: u64,
    /// Log filter used when `OUTSEEK_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contact_feedback_secs: 5,
            account_feedback_secs: 10,
            tick_rate_ms: 250,
            log_level: "info".into(),
        }
    }
}

impl Config {
    /// Loads the configuration from the XDG config directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&default_path()?)
    }

    /// Loads the configuration from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.check_ranges(path)?;
        Ok(config)
    }

    fn check_ranges(&self, path: &Path) -> Result<(), ConfigError> {
        let limits = [
            ("contact_feedback_secs", self.contact_feedback_secs, MAX_FEEDBACK_SECS),
            ("account_feedback_secs", self.account_feedback_secs, MAX_FEEDBACK_SECS),
            ("tick_rate_ms", self.tick_rate_ms, MAX_TICK_RATE_MS),
        ];
        match limits.into_iter().find(|&(_, value, max)| value > max) {
            Some((key, value, max)) => Err(ConfigError::OutOfRange {
                path: path.to_path_buf(),
                key,
                value,
                max,
            }),
            None => Ok(()),
        }
    }

    /// How long the contact thank-you panel stays up.
    pub fn contact_feedback(&self) -> Duration {
        Duration::from_secs(self.contact_feedback_secs)
    }

    /// How long the login and signup confirmations stay up.
    pub fn account_feedback(&self) -> Duration {
        Duration::from_secs(self.account_feedback_secs)
    }

    /// Event-loop poll timeout.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Returns `~/.config/outseek/config.json` (or the platform equivalent).
pub fn default_path() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join("outseek").join("config.json"))
}
