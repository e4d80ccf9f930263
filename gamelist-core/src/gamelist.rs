use std::cmp::Ordering;
use std::path::PathBuf;

use crate::Game;

/// XML prolog used when a gamelist file has none.
pub const DEFAULT_PROLOG: &str = "<?xml version=\"1.0\"?>";

/// All games of one system, as read from a single `gamelist.xml`.
#[derive(Debug, Clone)]
pub struct Gamelist {
    /// File the gamelist was read from
    pub path: PathBuf,
    /// Best guess at the system, taken from the enclosing directory name
    pub system: String,
    /// XML prolog found at the top of the source file
    pub prolog: String,
    /// System-wide alternative emulator (ES-DE `<alternativeEmulator>`)
    pub alt_emulator: Option<String>,
    /// Games in parse order
    pub games: Vec<Game>,
}

impl Gamelist {
    pub fn new(path: impl Into<PathBuf>, system: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            system: system.into(),
            prolog: DEFAULT_PROLOG.to_string(),
            alt_emulator: None,
            games: Vec::new(),
        }
    }

    pub fn with_prolog(mut self, prolog: impl Into<String>) -> Self {
        self.prolog = prolog.into();
        self
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Sort games in place.
    pub fn sort(&mut self) {
        self.games.sort();
    }

    /// Sorted copy of the games, leaving this gamelist untouched.
    pub fn sorted(&self) -> Vec<Game> {
        let mut games = self.games.clone();
        games.sort();
        games
    }
}

impl std::fmt::Display for Gamelist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - ({} games)", self.system, self.games.len())
    }
}

impl PartialEq for Gamelist {
    fn eq(&self, other: &Self) -> bool {
        self.system == other.system
    }
}

impl Eq for Gamelist {}

impl PartialOrd for Gamelist {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Gamelist {
    fn cmp(&self, other: &Self) -> Ordering {
        self.system.cmp(&other.system)
    }
}
