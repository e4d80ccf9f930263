/// Canonical field identifiers for every value a gamelist entry can carry.
///
/// This enum is the front-end-agnostic vocabulary: each dialect maps its own
/// XML tag names onto these variants, so converting between front-ends is a
/// matter of reading with one mapping and writing with another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    // Identity / sort
    Path,
    Name,
    SortName,
    CollectionSortName,

    // Descriptive metadata
    Description,
    Rating,
    ReleaseDate,
    Developer,
    Publisher,
    Players,
    Genres,
    Family,
    Region,
    Language,

    // Play state
    PlayCount,
    LastPlayed,
    GameTime,
    Core,
    Emulator,
    AltEmulator,
    ArcadeSystemName,
    Controller,
    Favorite,
    Completed,
    Hidden,
    Broken,
    KidGame,
    NoGameCount,
    HideMetadata,
    NoMultiScrape,

    // Identifiers
    Md5,
    Crc32,
    CheevosId,
    CheevosHash,
    ScraperId,

    // Media
    MixImage,
    Image,
    Thumbnail,
    Marquee,
    BoxFront,
    BoxBack,
    Box3d,
    Cartridge,
    TitleShot,
    Manual,
    Video,
    GameMap,
    Bezel,
    Fanart,
    Magazine,
    FolderLink,
}

/// All field variants in canonical order.
const ALL_FIELDS: &[Field] = &[
    Field::Path,
    Field::Name,
    Field::SortName,
    Field::CollectionSortName,
    Field::Description,
    Field::Rating,
    Field::ReleaseDate,
    Field::Developer,
    Field::Publisher,
    Field::Players,
    Field::Genres,
    Field::Family,
    Field::Region,
    Field::Language,
    Field::PlayCount,
    Field::LastPlayed,
    Field::GameTime,
    Field::Core,
    Field::Emulator,
    Field::AltEmulator,
    Field::ArcadeSystemName,
    Field::Controller,
    Field::Favorite,
    Field::Completed,
    Field::Hidden,
    Field::Broken,
    Field::KidGame,
    Field::NoGameCount,
    Field::HideMetadata,
    Field::NoMultiScrape,
    Field::Md5,
    Field::Crc32,
    Field::CheevosId,
    Field::CheevosHash,
    Field::ScraperId,
    Field::MixImage,
    Field::Image,
    Field::Thumbnail,
    Field::Marquee,
    Field::BoxFront,
    Field::BoxBack,
    Field::Box3d,
    Field::Cartridge,
    Field::TitleShot,
    Field::Manual,
    Field::Video,
    Field::GameMap,
    Field::Bezel,
    Field::Fanart,
    Field::Magazine,
    Field::FolderLink,
];

impl Field {
    /// Canonical lowercase name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Name => "name",
            Self::SortName => "sortname",
            Self::CollectionSortName => "collectionsortname",
            Self::Description => "description",
            Self::Rating => "rating",
            Self::ReleaseDate => "releasedate",
            Self::Developer => "developer",
            Self::Publisher => "publisher",
            Self::Players => "players",
            Self::Genres => "genres",
            Self::Family => "family",
            Self::Region => "region",
            Self::Language => "language",
            Self::PlayCount => "playcount",
            Self::LastPlayed => "lastplayed",
            Self::GameTime => "gametime",
            Self::Core => "core",
            Self::Emulator => "emulator",
            Self::AltEmulator => "altemulator",
            Self::ArcadeSystemName => "arcadesystemname",
            Self::Controller => "controller",
            Self::Favorite => "favorite",
            Self::Completed => "completed",
            Self::Hidden => "hidden",
            Self::Broken => "broken",
            Self::KidGame => "kidgame",
            Self::NoGameCount => "nogamecount",
            Self::HideMetadata => "hidemetadata",
            Self::NoMultiScrape => "nomultiscrape",
            Self::Md5 => "md5",
            Self::Crc32 => "crc32",
            Self::CheevosId => "cheevosid",
            Self::CheevosHash => "cheevoshash",
            Self::ScraperId => "scraperid",
            Self::MixImage => "miximage",
            Self::Image => "image",
            Self::Thumbnail => "thumbnail",
            Self::Marquee => "marquee",
            Self::BoxFront => "boxfront",
            Self::BoxBack => "boxback",
            Self::Box3d => "box3d",
            Self::Cartridge => "cartridge",
            Self::TitleShot => "titleshot",
            Self::Manual => "manual",
            Self::Video => "video",
            Self::GameMap => "gamemap",
            Self::Bezel => "bezel",
            Self::Fanart => "fanart",
            Self::Magazine => "magazine",
            Self::FolderLink => "folderlink",
        }
    }

    /// Whether the field holds a path to a media file.
    pub fn is_media(&self) -> bool {
        matches!(
            self,
            Self::MixImage
                | Self::Image
                | Self::Thumbnail
                | Self::Marquee
                | Self::BoxFront
                | Self::BoxBack
                | Self::Box3d
                | Self::Cartridge
                | Self::TitleShot
                | Self::Manual
                | Self::Video
                | Self::GameMap
                | Self::Bezel
                | Self::Fanart
                | Self::Magazine
                | Self::FolderLink
        )
    }

    /// Whether the field is one of the on/off flags.
    pub fn is_flag(&self) -> bool {
        matches!(
            self,
            Self::Favorite
                | Self::Completed
                | Self::Hidden
                | Self::Broken
                | Self::KidGame
                | Self::NoGameCount
                | Self::HideMetadata
                | Self::NoMultiScrape
        )
    }

    /// All fields in canonical order.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }

    /// Media fields in canonical order.
    pub fn media() -> impl Iterator<Item = Field> {
        ALL_FIELDS.iter().copied().filter(Field::is_media)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a canonical field.
#[derive(Debug, Clone)]
pub struct FieldParseError(pub String);

impl std::fmt::Display for FieldParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown field: '{}'", self.0)
    }
}

impl std::error::Error for FieldParseError {}

impl std::str::FromStr for Field {
    type Err = FieldParseError;

    /// Parse a canonical field name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ALL_FIELDS
            .iter()
            .copied()
            .find(|field| field.name() == lower)
            .ok_or_else(|| FieldParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/field_tests.rs"]
mod tests;
