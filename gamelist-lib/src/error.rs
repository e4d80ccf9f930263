use std::path::PathBuf;

use gamelist_frontend::FrontendError;
use thiserror::Error;

/// Errors raised by the library operations (scan, convert, generate, ...).
#[derive(Debug, Error)]
pub enum LibError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Frontend(#[from] FrontendError),

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// Expected a directory but found nothing or a file
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Settings error: {0}")]
    Settings(String),
}

impl LibError {
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory(path.into())
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }

    /// Short label for the kind of failure, used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io(_) => "I/O",
            Self::Frontend(FrontendError::Io(_)) => "I/O",
            Self::Frontend(FrontendError::Xml(_) | FrontendError::XmlAttribute(_)) => "XML",
            Self::Frontend(FrontendError::Malformed(_)) => "XML",
            Self::Frontend(FrontendError::MissingElement(_)) => "Gamelist",
            Self::Frontend(FrontendError::NoSystemSegment(_)) => "Path",
            Self::Frontend(FrontendError::InvalidSetting { .. }) => "Settings",
            Self::Walk(_) => "I/O",
            Self::NotADirectory(_) => "Path",
            Self::Settings(_) => "Settings",
        }
    }
}
