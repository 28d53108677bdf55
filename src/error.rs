//! Error types for the application shell

use crate::model::{TabId, UserRole};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the config file failed.
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for [`crate::config::Config`].
    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    /// No home directory to place `.medichat/` in.
    #[error("Could not determine the home directory")]
    NoHomeDir,
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file: {0}")]
    LogFile(#[from] std::io::Error),

    /// A global logger was installed earlier in this process.
    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Tab '{tab}' is not available to the {role} role")]
    TabNotAvailable { tab: TabId, role: UserRole },

    #[error("No patient with id '{0}' in the queue")]
    UnknownPatient(String),
}
