use std::cmp::Ordering;
use std::path::Path;

use crate::{CoreError, Field};

/// Release date assigned when a gamelist entry has none (ES `YYYYMMDDTHHMMSS`).
pub const DEFAULT_RELEASE_DATE: &str = "19700101T000000";

/// Placeholder used for developer, publisher and players.
pub const UNKNOWN: &str = "unknown";

/// Last-played value meaning "never".
pub const NEVER_PLAYED: &str = "0";

/// A single gamelist entry in the canonical, front-end-agnostic schema.
///
/// Every field any supported front-end knows about has a slot here. Only
/// `path` and `name` are required; everything else starts at its default.
#[derive(Debug, Clone)]
pub struct Game {
    pub path: String,
    pub name: String,
    pub sortname: Option<String>,
    pub collection_sortname: Option<String>,

    pub description: Option<String>,
    /// Rating from 0.0 to 1.0
    pub rating: f32,
    /// Release date as text, normally `YYYYMMDDTHHMMSS`
    pub release_date: String,
    pub developer: String,
    pub publisher: String,
    /// Number of players (e.g., "1", "1-4")
    pub players: String,
    pub genres: Vec<String>,
    pub family: Option<String>,
    pub region: Option<String>,
    pub language: Option<String>,

    pub play_count: u32,
    pub last_played: String,
    /// Total play time in seconds
    pub game_time: Option<u64>,
    pub core: Option<String>,
    pub emulator: Option<String>,
    pub alt_emulator: Option<String>,
    pub arcade_system_name: Option<String>,
    pub controller: Option<String>,
    pub favorite: bool,
    pub completed: bool,
    pub hidden: bool,
    pub broken: bool,
    pub kid_game: bool,
    pub no_game_count: bool,
    pub hide_metadata: bool,
    pub no_multi_scrape: bool,

    pub md5: Option<String>,
    pub crc32: Option<String>,
    pub cheevos_id: Option<String>,
    pub cheevos_hash: Option<String>,
    pub scraper_id: Option<String>,

    pub miximage: Option<String>,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
    pub marquee: Option<String>,
    pub boxfront: Option<String>,
    pub boxback: Option<String>,
    pub box3d: Option<String>,
    pub cartridge: Option<String>,
    pub titleshot: Option<String>,
    pub manual: Option<String>,
    pub video: Option<String>,
    pub gamemap: Option<String>,
    pub bezel: Option<String>,
    pub fanart: Option<String>,
    pub magazine: Option<String>,
    pub folderlink: Option<String>,
}

impl Game {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            sortname: None,
            collection_sortname: None,
            description: None,
            rating: 0.0,
            release_date: DEFAULT_RELEASE_DATE.to_string(),
            developer: UNKNOWN.to_string(),
            publisher: UNKNOWN.to_string(),
            players: UNKNOWN.to_string(),
            genres: Vec::new(),
            family: None,
            region: None,
            language: None,
            play_count: 0,
            last_played: NEVER_PLAYED.to_string(),
            game_time: None,
            core: None,
            emulator: None,
            alt_emulator: None,
            arcade_system_name: None,
            controller: None,
            favorite: false,
            completed: false,
            hidden: false,
            broken: false,
            kid_game: false,
            no_game_count: false,
            hide_metadata: false,
            no_multi_scrape: false,
            md5: None,
            crc32: None,
            cheevos_id: None,
            cheevos_hash: None,
            scraper_id: None,
            miximage: None,
            image: None,
            thumbnail: None,
            marquee: None,
            boxfront: None,
            boxback: None,
            box3d: None,
            cartridge: None,
            titleshot: None,
            manual: None,
            video: None,
            gamemap: None,
            bezel: None,
            fanart: None,
            magazine: None,
            folderlink: None,
        }
    }

    /// Key used for ordering: the sort name when set, otherwise the name.
    pub fn sort_key(&self) -> &str {
        match self.sortname.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => &self.name,
        }
    }

    /// File stem of `path`, used to find scraped media for this game.
    pub fn base_name(&self) -> Option<&str> {
        Path::new(&self.path).file_stem().and_then(|s| s.to_str())
    }

    /// Text form of a field, or `None` when it holds its default value.
    ///
    /// `path` and `name` are always returned.
    pub fn text(&self, field: Field) -> Option<String> {
        match field {
            Field::Path => Some(self.path.clone()),
            Field::Name => Some(self.name.clone()),
            Field::Rating => (self.rating != 0.0).then(|| self.rating.to_string()),
            Field::ReleaseDate => non_default(&self.release_date, DEFAULT_RELEASE_DATE),
            Field::Developer => non_default(&self.developer, UNKNOWN),
            Field::Publisher => non_default(&self.publisher, UNKNOWN),
            Field::Players => non_default(&self.players, UNKNOWN),
            Field::Genres => (!self.genres.is_empty()).then(|| self.genres.join(", ")),
            Field::PlayCount => (self.play_count != 0).then(|| self.play_count.to_string()),
            Field::LastPlayed => non_default(&self.last_played, NEVER_PLAYED),
            Field::GameTime => self.game_time.map(|t| t.to_string()),
            flag if flag.is_flag() => self.flag(flag).then(|| "true".to_string()),
            other => self
                .optional_slot(other)
                .and_then(|v| v.as_deref())
                .filter(|v| !v.is_empty())
                .map(str::to_string),
        }
    }

    /// Assign a field from its text form.
    ///
    /// Numbers must parse; flags are true only for a case-insensitive
    /// `"true"`; genres are split on commas.
    pub fn set_text(&mut self, field: Field, text: &str) -> Result<(), CoreError> {
        match field {
            Field::Path => self.path = text.to_string(),
            Field::Name => self.name = text.to_string(),
            Field::Rating => {
                self.rating = text
                    .parse()
                    .map_err(|_| CoreError::invalid_value(field, text))?;
            }
            Field::ReleaseDate => self.release_date = text.to_string(),
            Field::Developer => self.developer = text.to_string(),
            Field::Publisher => self.publisher = text.to_string(),
            Field::Players => self.players = text.to_string(),
            Field::Genres => self.genres = split_genres(text),
            Field::PlayCount => {
                self.play_count = text
                    .parse()
                    .map_err(|_| CoreError::invalid_value(field, text))?;
            }
            Field::LastPlayed => self.last_played = text.to_string(),
            Field::GameTime => {
                self.game_time = Some(
                    text.parse()
                        .map_err(|_| CoreError::invalid_value(field, text))?,
                );
            }
            flag if flag.is_flag() => {
                if let Some(slot) = self.flag_mut(flag) {
                    *slot = text.eq_ignore_ascii_case("true");
                }
            }
            other => {
                if let Some(slot) = self.optional_slot_mut(other) {
                    *slot = Some(text.to_string());
                }
            }
        }
        Ok(())
    }

    /// Current path stored in a media field.
    pub fn media(&self, field: Field) -> Option<&str> {
        if !field.is_media() {
            return None;
        }
        self.optional_slot(field)
            .and_then(|v| v.as_deref())
            .filter(|v| !v.is_empty())
    }

    /// Store a path in a media field. Non-media fields are left untouched.
    pub fn set_media(&mut self, field: Field, path: impl Into<String>) {
        if !field.is_media() {
            return;
        }
        if let Some(slot) = self.optional_slot_mut(field) {
            *slot = Some(path.into());
        }
    }

    /// Fill empty display images from the scraped media that is present.
    ///
    /// An empty `image` takes the miximage, or the screenshot thumbnail when
    /// there is no miximage. An empty `thumbnail` takes the front cover.
    pub fn fill_missing_images(&mut self) {
        if is_blank(&self.image) {
            self.image = self
                .miximage
                .clone()
                .filter(|v| !v.is_empty())
                .or_else(|| self.thumbnail.clone());
        }
        if is_blank(&self.thumbnail) {
            self.thumbnail = self.boxfront.clone();
        }
    }

    /// Rewrite media paths as `./<prefix>/<media subdirectory>/<file name>`.
    ///
    /// Paths already relative to the gamelist (`./...`) and folder links are
    /// kept as they are.
    pub fn rebase_media_paths(&mut self, prefix: &str) {
        let prefix = prefix.trim_matches('/');
        for field in Field::media().filter(|f| *f != Field::FolderLink) {
            let Some(slot) = self.optional_slot_mut(field) else {
                continue;
            };
            let Some(current) = slot.as_deref() else {
                continue;
            };
            if current.is_empty() || current.starts_with("./") {
                continue;
            }
            *slot = Some(rebase_path(current, prefix));
        }
    }

    fn flag(&self, field: Field) -> bool {
        match field {
            Field::Favorite => self.favorite,
            Field::Completed => self.completed,
            Field::Hidden => self.hidden,
            Field::Broken => self.broken,
            Field::KidGame => self.kid_game,
            Field::NoGameCount => self.no_game_count,
            Field::HideMetadata => self.hide_metadata,
            Field::NoMultiScrape => self.no_multi_scrape,
            _ => false,
        }
    }

    fn flag_mut(&mut self, field: Field) -> Option<&mut bool> {
        match field {
            Field::Favorite => Some(&mut self.favorite),
            Field::Completed => Some(&mut self.completed),
            Field::Hidden => Some(&mut self.hidden),
            Field::Broken => Some(&mut self.broken),
            Field::KidGame => Some(&mut self.kid_game),
            Field::NoGameCount => Some(&mut self.no_game_count),
            Field::HideMetadata => Some(&mut self.hide_metadata),
            Field::NoMultiScrape => Some(&mut self.no_multi_scrape),
            _ => None,
        }
    }

    fn optional_slot(&self, field: Field) -> Option<&Option<String>> {
        match field {
            Field::SortName => Some(&self.sortname),
            Field::CollectionSortName => Some(&self.collection_sortname),
            Field::Description => Some(&self.description),
            Field::Family => Some(&self.family),
            Field::Region => Some(&self.region),
            Field::Language => Some(&self.language),
            Field::Core => Some(&self.core),
            Field::Emulator => Some(&self.emulator),
            Field::AltEmulator => Some(&self.alt_emulator),
            Field::ArcadeSystemName => Some(&self.arcade_system_name),
            Field::Controller => Some(&self.controller),
            Field::Md5 => Some(&self.md5),
            Field::Crc32 => Some(&self.crc32),
            Field::CheevosId => Some(&self.cheevos_id),
            Field::CheevosHash => Some(&self.cheevos_hash),
            Field::ScraperId => Some(&self.scraper_id),
            Field::MixImage => Some(&self.miximage),
            Field::Image => Some(&self.image),
            Field::Thumbnail => Some(&self.thumbnail),
            Field::Marquee => Some(&self.marquee),
            Field::BoxFront => Some(&self.boxfront),
            Field::BoxBack => Some(&self.boxback),
            Field::Box3d => Some(&self.box3d),
            Field::Cartridge => Some(&self.cartridge),
            Field::TitleShot => Some(&self.titleshot),
            Field::Manual => Some(&self.manual),
            Field::Video => Some(&self.video),
            Field::GameMap => Some(&self.gamemap),
            Field::Bezel => Some(&self.bezel),
            Field::Fanart => Some(&self.fanart),
            Field::Magazine => Some(&self.magazine),
            Field::FolderLink => Some(&self.folderlink),
            _ => None,
        }
    }

    fn optional_slot_mut(&mut self, field: Field) -> Option<&mut Option<String>> {
        match field {
            Field::SortName => Some(&mut self.sortname),
            Field::CollectionSortName => Some(&mut self.collection_sortname),
            Field::Description => Some(&mut self.description),
            Field::Family => Some(&mut self.family),
            Field::Region => Some(&mut self.region),
            Field::Language => Some(&mut self.language),
            Field::Core => Some(&mut self.core),
            Field::Emulator => Some(&mut self.emulator),
            Field::AltEmulator => Some(&mut self.alt_emulator),
            Field::ArcadeSystemName => Some(&mut self.arcade_system_name),
            Field::Controller => Some(&mut self.controller),
            Field::Md5 => Some(&mut self.md5),
            Field::Crc32 => Some(&mut self.crc32),
            Field::CheevosId => Some(&mut self.cheevos_id),
            Field::CheevosHash => Some(&mut self.cheevos_hash),
            Field::ScraperId => Some(&mut self.scraper_id),
            Field::MixImage => Some(&mut self.miximage),
            Field::Image => Some(&mut self.image),
            Field::Thumbnail => Some(&mut self.thumbnail),
            Field::Marquee => Some(&mut self.marquee),
            Field::BoxFront => Some(&mut self.boxfront),
            Field::BoxBack => Some(&mut self.boxback),
            Field::Box3d => Some(&mut self.box3d),
            Field::Cartridge => Some(&mut self.cartridge),
            Field::TitleShot => Some(&mut self.titleshot),
            Field::Manual => Some(&mut self.manual),
            Field::Video => Some(&mut self.video),
            Field::GameMap => Some(&mut self.gamemap),
            Field::Bezel => Some(&mut self.bezel),
            Field::Fanart => Some(&mut self.fanart),
            Field::Magazine => Some(&mut self.magazine),
            Field::FolderLink => Some(&mut self.folderlink),
            _ => None,
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.release_date)
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
            && self.release_date == other.release_date
            && self.path == other.path
    }
}

impl Eq for Game {}

impl PartialOrd for Game {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Game {
    /// Sort key first, then release date, then path; all plain text order.
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(other.sort_key())
            .then_with(|| self.release_date.cmp(&other.release_date))
            .then_with(|| self.path.cmp(&other.path))
    }
}

/// Split a comma-separated genre list into trimmed, non-empty entries.
pub fn split_genres(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_default(value: &str, default: &str) -> Option<String> {
    if value.is_empty() || value == default {
        None
    } else {
        Some(value.to_string())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

fn rebase_path(current: &str, prefix: &str) -> String {
    let path = Path::new(current);
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| current.to_string());
    let dir = path
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned());

    let mut out = String::from(".");
    for part in [Some(prefix.to_string()), dir, Some(file)].into_iter().flatten() {
        if part.is_empty() {
            continue;
        }
        out.push('/');
        out.push_str(&part);
    }
    out
}

#[cfg(test)]
#[path = "tests/game_tests.rs"]
mod tests;
