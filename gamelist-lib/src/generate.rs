//! Building a fresh gamelist from the files of a ROM directory.

use std::path::Path;

use gamelist_core::{Game, Gamelist};
use gamelist_frontend::GAMELIST_FILE;

use crate::LibError;

/// One game per regular file in `dir` (not recursive).
///
/// `extension` limits the files considered, compared case-insensitively and
/// with or without a leading dot. The game name is the file stem and the path
/// is `./<file name>`. The system is the directory's own name.
pub fn generate_from_directory(dir: &Path, extension: Option<&str>) -> Result<Gamelist, LibError> {
    if !dir.is_dir() {
        return Err(LibError::not_a_directory(dir));
    }

    let system = dir
        .canonicalize()?
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let wanted = extension.map(|e| e.trim_start_matches('.').to_lowercase());

    let mut gamelist = Gamelist::new(dir.join(GAMELIST_FILE), system);
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name == GAMELIST_FILE {
            continue;
        }
        if let Some(ref wanted) = wanted {
            let matches = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(wanted));
            if !matches {
                continue;
            }
        }
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.clone());
        gamelist.games.push(Game::new(format!("./{file_name}"), name));
    }
    gamelist.sort();

    log::debug!(
        "Generated {} games for {} from {}",
        gamelist.len(),
        gamelist.system,
        dir.display()
    );
    Ok(gamelist)
}

#[cfg(test)]
#[path = "tests/generate_tests.rs"]
mod tests;
