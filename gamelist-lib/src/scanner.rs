//! Discovery of per-system `gamelist.xml` files under a front-end root.

use std::path::{Path, PathBuf};

use gamelist_frontend::GAMELIST_FILE;
use walkdir::WalkDir;

/// One discovered gamelist and the system it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GamelistLocation {
    /// Name of the directory holding the file (e.g. "snes")
    pub system: String,
    pub path: PathBuf,
}

/// Find every `gamelist.xml` below `root`.
///
/// Traversal is sorted by file name so results are stable between runs.
/// A missing root yields an empty list; unreadable entries are logged and
/// skipped.
pub fn find_gamelists(root: &Path) -> Vec<GamelistLocation> {
    if !root.exists() {
        log::debug!("Gamelist root {} does not exist", root.display());
        return Vec::new();
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        // `Path::is_file` follows symlinks, the walkdir file type does not
        if entry.file_name() != GAMELIST_FILE || !entry.path().is_file() {
            continue;
        }
        let Some(system) = entry
            .path()
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
        else {
            continue;
        };
        log::debug!("Found {} gamelist at {}", system, entry.path().display());
        found.push(GamelistLocation {
            system,
            path: entry.into_path(),
        });
    }
    found
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
