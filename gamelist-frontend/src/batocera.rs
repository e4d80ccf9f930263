use std::path::{Path, PathBuf};

use gamelist_core::Field;

use crate::{FieldMapping, Frontend, FrontendError};

pub static BATOCERA_MAPPING: FieldMapping = FieldMapping::new(&[
    (Field::Path, "path"),
    (Field::Name, "name"),
    (Field::SortName, "sortname"),
    (Field::Description, "desc"),
    (Field::AltEmulator, "emulator"),
    (Field::Core, "core"),
    (Field::Image, "image"),
    (Field::Video, "video"),
    (Field::Marquee, "marquee"),
    (Field::Thumbnail, "thumbnail"),
    (Field::Fanart, "fanart"),
    (Field::TitleShot, "titleshot"),
    (Field::Manual, "manual"),
    (Field::Magazine, "magazine"),
    (Field::GameMap, "map"),
    (Field::Bezel, "bezel"),
    (Field::Cartridge, "cartridge"),
    (Field::BoxFront, "boxart"),
    (Field::BoxBack, "boxback"),
    (Field::MixImage, "mix"),
    (Field::Rating, "rating"),
    (Field::ReleaseDate, "releasedate"),
    (Field::Developer, "developer"),
    (Field::Publisher, "publisher"),
    (Field::Genres, "genre"),
    (Field::Family, "family"),
    (Field::ArcadeSystemName, "arcadesystemname"),
    (Field::Players, "players"),
    (Field::Favorite, "favorite"),
    (Field::Hidden, "hidden"),
    (Field::KidGame, "kidgame"),
    (Field::PlayCount, "playcount"),
    (Field::LastPlayed, "lastplayed"),
    (Field::Crc32, "crc32"),
    (Field::Md5, "md5"),
    (Field::Language, "language"),
    (Field::Region, "region"),
    (Field::CheevosHash, "cheevosHash"),
    (Field::CheevosId, "cheevosId"),
    (Field::ScraperId, "id"),
]);

/// Batocera frontend. Gamelists sit directly under the roms share and
/// scraped media under its `Imgs` folder.
pub struct BatoceraFrontend;

impl BatoceraFrontend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BatoceraFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for BatoceraFrontend {
    fn name(&self) -> &'static str {
        "Batocera"
    }

    fn mapping(&self) -> &'static FieldMapping {
        &BATOCERA_MAPPING
    }

    fn gamelist_dir(&self, source: &Path) -> PathBuf {
        source.to_path_buf()
    }

    fn media_dir(&self, source: &Path) -> Result<PathBuf, FrontendError> {
        Ok(source.join("Imgs"))
    }
}
