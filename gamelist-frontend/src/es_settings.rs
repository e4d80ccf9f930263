//! Reader for ES-DE's `es_settings.xml`.
//!
//! The file is a flat sequence of `<bool>`, `<int>` and `<string>` elements,
//! each carrying `name` and `value` attributes, with no single root element.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::FrontendError;
use crate::loader::split_prolog;
use crate::xml::parse_fragment;

/// A typed settings value.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl SettingValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EsSettings {
    values: BTreeMap<String, SettingValue>,
}

impl EsSettings {
    pub fn load(path: &Path) -> Result<Self, FrontendError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, FrontendError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let (_, body) = split_prolog(text);
        let root = parse_fragment(body)?;

        let mut values = BTreeMap::new();
        for element in &root.children {
            let Some(name) = element.attribute("name") else {
                log::debug!("Ignoring <{}> setting without a name", element.name);
                continue;
            };
            let raw = element.attribute("value").unwrap_or_default();
            let value = parse_value(&element.name, name, raw)?;
            values.insert(name.to_string(), value);
        }
        Ok(Self { values })
    }

    pub fn get(&self, name: &str) -> Option<&SettingValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The configured `MediaDirectory`, with a leading `~` expanded.
    ///
    /// Returns `None` when the setting is missing or empty.
    pub fn media_directory(&self) -> Option<PathBuf> {
        let dir = self.get("MediaDirectory")?.as_str()?.trim();
        if dir.is_empty() {
            return None;
        }
        Some(expand_home(dir))
    }
}

/// Convert a raw attribute value according to the element kind.
pub fn parse_value(kind: &str, name: &str, raw: &str) -> Result<SettingValue, FrontendError> {
    match kind {
        "bool" => Ok(SettingValue::Bool(raw.eq_ignore_ascii_case("true"))),
        "int" => raw
            .trim()
            .parse()
            .map(SettingValue::Int)
            .map_err(|_| FrontendError::invalid_setting(kind, name, raw)),
        _ => Ok(SettingValue::Text(raw.to_string())),
    }
}

fn expand_home(dir: &str) -> PathBuf {
    let rest = match dir.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
        _ => return PathBuf::from(dir),
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(dir),
    }
}

#[cfg(test)]
#[path = "tests/es_settings_tests.rs"]
mod tests;
