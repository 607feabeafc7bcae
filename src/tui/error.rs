use crate::config::ConfigError;

/// Errors that can occur while starting or running the TUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, log file, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// No XDG data directory to hold the log file.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// The global tracing subscriber could not be installed.
    #[error("could not initialise logging: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}
