pub mod batocera;
pub mod emulationstation;
pub mod error;
pub mod es_settings;
pub mod esde;
pub mod loader;
pub mod mapping;
pub mod media_types;
pub mod reader;
pub mod writer;
pub mod xml;

pub use batocera::BatoceraFrontend;
pub use emulationstation::EmulationStationFrontend;
pub use error::FrontendError;
pub use es_settings::{EsSettings, SettingValue};
pub use esde::EsDeFrontend;
pub use loader::{GAMELIST_FILE, RawGamelist};
pub use mapping::FieldMapping;
pub use media_types::MediaType;

use std::path::{Path, PathBuf};

use gamelist_core::Gamelist;

/// Trait for a front-end's gamelist dialect and on-disk layout.
pub trait Frontend: Sync {
    fn name(&self) -> &'static str;

    /// Canonical field to XML tag table for this dialect.
    fn mapping(&self) -> &'static FieldMapping;

    /// Name of the element wrapping all `<game>` entries.
    fn list_element(&self) -> &'static str {
        "gameList"
    }

    /// Whether the dialect stores a system-wide `<alternativeEmulator>`.
    fn supports_alt_emulator(&self) -> bool {
        false
    }

    /// Directory holding the per-system gamelist folders under `source`.
    fn gamelist_dir(&self, source: &Path) -> PathBuf;

    /// Root of the scraped media tree (one folder per system) under `source`.
    fn media_dir(&self, source: &Path) -> Result<PathBuf, FrontendError>;

    /// Load and map one `gamelist.xml` file.
    fn read_gamelist(&self, path: &Path) -> Result<Gamelist, FrontendError> {
        let raw = loader::load_raw_gamelist(path, self.list_element())?;
        Ok(reader::build_gamelist(raw, self.mapping()))
    }

    /// Write `gamelist.xml` for this dialect into `dir`.
    fn write_gamelist(&self, gamelist: &Gamelist, dir: &Path) -> Result<PathBuf, FrontendError> {
        writer::write_gamelist_file(gamelist, self, dir)
    }
}

/// The supported front-end dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    EsDe,
    Batocera,
    EmulationStation,
}

const ALL_DIALECTS: &[Dialect] = &[Dialect::EsDe, Dialect::Batocera, Dialect::EmulationStation];

static ESDE: EsDeFrontend = EsDeFrontend;
static BATOCERA: BatoceraFrontend = BatoceraFrontend;
static EMULATIONSTATION: EmulationStationFrontend = EmulationStationFrontend;

impl Dialect {
    /// Short name used on the command line and in settings.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::EsDe => "esde",
            Self::Batocera => "batocera",
            Self::EmulationStation => "emulationstation",
        }
    }

    /// All accepted names for this dialect (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::EsDe => &["esde", "es-de", "emulationstation-de"],
            Self::Batocera => &["batocera"],
            Self::EmulationStation => &["emulationstation", "es"],
        }
    }

    pub fn frontend(&self) -> &'static dyn Frontend {
        match self {
            Self::EsDe => &ESDE,
            Self::Batocera => &BATOCERA,
            Self::EmulationStation => &EMULATIONSTATION,
        }
    }

    pub fn all() -> &'static [Dialect] {
        ALL_DIALECTS
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.frontend().name())
    }
}

/// Error returned when a string cannot be parsed into a `Dialect`.
#[derive(Debug, Clone)]
pub struct DialectParseError(pub String);

impl std::fmt::Display for DialectParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown front-end: '{}' (expected esde, batocera or emulationstation)",
            self.0
        )
    }
}

impl std::error::Error for DialectParseError {}

impl std::str::FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ALL_DIALECTS
            .iter()
            .copied()
            .find(|d| d.aliases().contains(&lower.as_str()))
            .ok_or_else(|| DialectParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/dialect_tests.rs"]
mod tests;
