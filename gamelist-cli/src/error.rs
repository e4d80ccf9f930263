use thiserror::Error;

use gamelist_frontend::FrontendError;
use gamelist_lib::{DialectParseError, LibError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Library operation failed
    #[error("{0}")]
    Lib(#[from] LibError),

    /// Reading or writing a gamelist outside the conversion pipeline
    #[error("{0}")]
    Frontend(#[from] FrontendError),

    /// Unknown front-end name in the settings file
    #[error("{0}")]
    Dialect(#[from] DialectParseError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Logger could not be installed
    #[error("Logging setup failed: {0}")]
    Logger(String),

    /// Some systems failed under --strict
    #[error("{0} system(s) failed to convert")]
    SystemsFailed(usize),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn logger(msg: impl Into<String>) -> Self {
        Self::Logger(msg.into())
    }
}
