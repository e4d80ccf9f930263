use gamelist_core::Field;

/// Kinds of scraped media, identified by the subdirectory they are stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// In-game screenshot
    Screenshot,
    /// Title screen capture
    TitleScreen,
    /// Front box art (2D)
    Cover,
    /// Back of the box
    BackCover,
    /// 3D rendered box art
    Cover3D,
    /// Logo / marquee / wheel image
    Marquee,
    /// Gameplay or promotional video
    Video,
    /// Fan-created artwork
    Fanart,
    /// Physical media image (cartridge/disc)
    PhysicalMedia,
    /// Composite miximage (screenshot + box + marquee + physical media)
    Miximage,
    /// Scanned manual
    Manual,
}

const ALL_MEDIA_TYPES: &[MediaType] = &[
    MediaType::Screenshot,
    MediaType::TitleScreen,
    MediaType::Cover,
    MediaType::BackCover,
    MediaType::Cover3D,
    MediaType::Marquee,
    MediaType::Video,
    MediaType::Fanart,
    MediaType::PhysicalMedia,
    MediaType::Miximage,
    MediaType::Manual,
];

impl MediaType {
    /// Name of the scraped-media subdirectory holding this kind of file.
    pub fn subdir_name(&self) -> &'static str {
        match self {
            MediaType::Screenshot => "screenshots",
            MediaType::TitleScreen => "titlescreens",
            MediaType::Cover => "covers",
            MediaType::BackCover => "backcovers",
            MediaType::Cover3D => "3dboxes",
            MediaType::Marquee => "marquees",
            MediaType::Video => "videos",
            MediaType::Fanart => "fanart",
            MediaType::PhysicalMedia => "physicalmedia",
            MediaType::Miximage => "miximages",
            MediaType::Manual => "manuals",
        }
    }

    /// Canonical field a file of this kind is assigned to.
    pub fn field(&self) -> Field {
        match self {
            MediaType::Screenshot => Field::Thumbnail,
            MediaType::TitleScreen => Field::TitleShot,
            MediaType::Cover => Field::BoxFront,
            MediaType::BackCover => Field::BoxBack,
            MediaType::Cover3D => Field::Box3d,
            MediaType::Marquee => Field::Marquee,
            MediaType::Video => Field::Video,
            MediaType::Fanart => Field::Fanart,
            MediaType::PhysicalMedia => Field::Cartridge,
            MediaType::Miximage => Field::MixImage,
            MediaType::Manual => Field::Manual,
        }
    }

    /// Look up a media type by subdirectory name (exact match).
    pub fn from_subdir(name: &str) -> Option<MediaType> {
        ALL_MEDIA_TYPES
            .iter()
            .copied()
            .find(|t| t.subdir_name() == name)
    }

    pub fn all() -> &'static [MediaType] {
        ALL_MEDIA_TYPES
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.subdir_name())
    }
}
