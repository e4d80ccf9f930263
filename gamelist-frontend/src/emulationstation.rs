use std::path::{Path, PathBuf};

use gamelist_core::Field;

use crate::{FieldMapping, Frontend, FrontendError};

pub static EMULATIONSTATION_MAPPING: FieldMapping = FieldMapping::new(&[
    (Field::Path, "path"),
    (Field::Name, "name"),
    (Field::SortName, "sortname"),
    (Field::CollectionSortName, "collectionsortname"),
    (Field::Description, "desc"),
    (Field::Image, "image"),
    (Field::Video, "video"),
    (Field::Marquee, "marquee"),
    (Field::Thumbnail, "thumbnail"),
    (Field::Fanart, "fanart"),
    (Field::TitleShot, "titleshot"),
    (Field::Manual, "manual"),
    (Field::Magazine, "magazine"),
    (Field::GameMap, "map"),
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

/// Classic EmulationStation frontend.
pub struct EmulationStationFrontend;

impl EmulationStationFrontend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmulationStationFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for EmulationStationFrontend {
    fn name(&self) -> &'static str {
        "EmulationStation"
    }

    fn mapping(&self) -> &'static FieldMapping {
        &EMULATIONSTATION_MAPPING
    }

    fn gamelist_dir(&self, source: &Path) -> PathBuf {
        source.join("gamelists")
    }

    fn media_dir(&self, source: &Path) -> Result<PathBuf, FrontendError> {
        Ok(source.join("downloaded_media"))
    }
}
