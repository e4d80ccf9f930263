use std::path::PathBuf;

/// Errors that can occur while reading or writing front-end metadata.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Malformed XML: {0}")]
    Malformed(String),

    #[error("No <{0}> element found")]
    MissingElement(String),

    #[error("Path has no system directory before gamelist.xml: {}", .0.display())]
    NoSystemSegment(PathBuf),

    #[error("Invalid {kind} setting {name}: '{value}'")]
    InvalidSetting {
        kind: String,
        name: String,
        value: String,
    },
}

impl FrontendError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    pub fn missing_element(name: impl Into<String>) -> Self {
        Self::MissingElement(name.into())
    }

    pub fn invalid_setting(
        kind: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidSetting {
            kind: kind.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}
