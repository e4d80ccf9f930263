//! Application settings (`~/.config/gamelist-tools/settings.toml`).
//!
//! Every value is optional; command-line flags take priority, then the file,
//! then the built-in defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::LibError;

pub const DEFAULT_SOURCE_DIALECT: &str = "esde";
pub const DEFAULT_TARGET_DIALECT: &str = "emulationstation";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_MEDIA_PREFIX: &str = "images";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub convert: ConvertSettings,
}

/// The `[convert]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dialect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_dialect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_images: Option<bool>,
}

impl AppSettings {
    /// Settings with every built-in default spelled out, as written by
    /// `config init`.
    pub fn with_defaults() -> Self {
        Self {
            convert: ConvertSettings {
                source_dialect: Some(DEFAULT_SOURCE_DIALECT.to_string()),
                target_dialect: Some(DEFAULT_TARGET_DIALECT.to_string()),
                output_dir: Some(PathBuf::from(DEFAULT_OUTPUT_DIR)),
                media_prefix: Some(DEFAULT_MEDIA_PREFIX.to_string()),
                fill_images: Some(true),
            },
        }
    }

    pub fn from_toml(text: &str) -> Result<Self, LibError> {
        toml::from_str(text).map_err(|e| LibError::settings(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String, LibError> {
        toml::to_string_pretty(self).map_err(|e| LibError::settings(e.to_string()))
    }

    /// Read settings from `path`. A missing file gives empty settings.
    pub fn load_from(path: &Path) -> Result<Self, LibError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Read the shared settings file.
    pub fn load() -> Result<Self, LibError> {
        Self::load_from(&settings_path())
    }

    /// Write settings to `path`, replacing the file atomically.
    pub fn save_to(&self, path: &Path) -> Result<(), LibError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = self.to_toml()?;
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &serialized)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}

/// Canonical path to the settings file: `~/.config/gamelist-tools/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("gamelist-tools").join("settings.toml")
}

/// Write a settings file with the built-in defaults unless one exists.
///
/// Returns `true` when a file was created.
pub fn init_settings(path: &Path) -> Result<bool, LibError> {
    if path.exists() {
        return Ok(false);
    }
    AppSettings::with_defaults().save_to(path)?;
    Ok(true)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
