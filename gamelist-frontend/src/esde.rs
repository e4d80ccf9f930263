use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use gamelist_core::Field;

use crate::es_settings::EsSettings;
use crate::{FieldMapping, Frontend, FrontendError};

/// ES-DE stores metadata only; media is looked up by file name at runtime.
pub static ESDE_MAPPING: FieldMapping = FieldMapping::new(&[
    (Field::Path, "path"),
    (Field::Name, "name"),
    (Field::SortName, "sortname"),
    (Field::CollectionSortName, "collectionsortname"),
    (Field::Description, "desc"),
    (Field::Rating, "rating"),
    (Field::ReleaseDate, "releasedate"),
    (Field::Developer, "developer"),
    (Field::Publisher, "publisher"),
    (Field::Genres, "genre"),
    (Field::Players, "players"),
    (Field::Favorite, "favorite"),
    (Field::Completed, "completed"),
    (Field::KidGame, "kidgame"),
    (Field::Hidden, "hidden"),
    (Field::Broken, "broken"),
    (Field::NoGameCount, "nogamecount"),
    (Field::NoMultiScrape, "nomultiscrape"),
    (Field::HideMetadata, "hidemetadata"),
    (Field::PlayCount, "playcount"),
    (Field::Controller, "controller"),
    (Field::AltEmulator, "altemulator"),
    (Field::LastPlayed, "lastplayed"),
    (Field::FolderLink, "folderlink"),
]);

const SETTINGS_FILE: &str = "settings/es_settings.xml";
const DEFAULT_MEDIA_DIR: &str = "downloaded_media";

/// ES-DE (EmulationStation Desktop Edition) frontend.
pub struct EsDeFrontend;

impl EsDeFrontend {
    pub fn new() -> Self {
        Self
    }

    /// Location of `es_settings.xml` inside an ES-DE home directory.
    pub fn settings_path(source: &Path) -> PathBuf {
        source.join(SETTINGS_FILE)
    }
}

impl Default for EsDeFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for EsDeFrontend {
    fn name(&self) -> &'static str {
        "ES-DE"
    }

    fn mapping(&self) -> &'static FieldMapping {
        &ESDE_MAPPING
    }

    fn supports_alt_emulator(&self) -> bool {
        true
    }

    fn gamelist_dir(&self, source: &Path) -> PathBuf {
        source.join("gamelists")
    }

    fn media_dir(&self, source: &Path) -> Result<PathBuf, FrontendError> {
        let settings = EsSettings::load(&Self::settings_path(source))?;
        Ok(settings
            .media_directory()
            .unwrap_or_else(|| source.join(DEFAULT_MEDIA_DIR)))
    }
}

/// Convert common release date spellings to ES-DE's `YYYYMMDDTHHMMSS`.
///
/// Accepts `YYYY-MM-DD`, `YYYYMMDD`, `YYYY-MM-DDTHH:MM:SS` and values that are
/// already in ES-DE form. Anything else is returned unchanged.
pub fn normalize_release_date(date: &str) -> String {
    let date = date.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(date, "%Y%m%dT%H%M%S") {
        return dt.format("%Y%m%dT%H%M%S").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%Y%m%dT%H%M%S").to_string();
    }
    for pattern in ["%Y-%m-%d", "%Y%m%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(date, pattern) {
            return d.format("%Y%m%dT000000").to_string();
        }
    }
    date.to_string()
}

#[cfg(test)]
#[path = "tests/esde_tests.rs"]
mod tests;
