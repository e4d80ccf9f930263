//! Association of scraped media files with games.
//!
//! Scrapers store media as `<media root>/<system>/<subdirectory>/<base name>.<ext>`
//! where the subdirectory names the kind of media (see [`MediaType`]).

use std::path::{Path, PathBuf};

use gamelist_core::Game;
use gamelist_frontend::MediaType;
use walkdir::WalkDir;

/// Sorted list of every file below one system's media root.
///
/// Built once per system so each game lookup is a scan of file names rather
/// than a new directory walk.
#[derive(Debug, Clone, Default)]
pub struct MediaIndex {
    files: Vec<PathBuf>,
}

impl MediaIndex {
    /// Index all files below `root`, symlinked ones included. A missing root
    /// gives an empty index.
    pub fn build(root: &Path) -> Self {
        let files = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(e) => Some(e),
                Err(e) => {
                    if root.exists() {
                        log::warn!("Skipping unreadable media entry: {}", e);
                    }
                    None
                }
            })
            .filter(|e| e.path().is_file())
            .map(|e| e.into_path())
            .collect();
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Files whose name starts with `base_name`, falling back to files whose
    /// name merely contains it when there is no prefix match.
    pub fn find(&self, base_name: &str) -> Vec<&Path> {
        if base_name.is_empty() {
            return Vec::new();
        }
        let prefixed: Vec<&Path> = self
            .files
            .iter()
            .filter(|f| file_name(f).is_some_and(|n| n.starts_with(base_name)))
            .map(PathBuf::as_path)
            .collect();
        if !prefixed.is_empty() {
            return prefixed;
        }
        self.files
            .iter()
            .filter(|f| file_name(f).is_some_and(|n| n.contains(base_name)))
            .map(PathBuf::as_path)
            .collect()
    }

    /// Assign every matching file to the game's media field for its
    /// subdirectory. Later matches overwrite earlier ones, and files whose
    /// stem equals the base name come last so a longer sibling such as
    /// `Tetris2.png` never replaces `Tetris.png`.
    ///
    /// Returns the number of assignments made.
    pub fn associate(&self, game: &mut Game) -> usize {
        let Some(base_name) = game.base_name().map(str::to_string) else {
            return 0;
        };

        let (exact, partial): (Vec<&Path>, Vec<&Path>) = self
            .find(&base_name)
            .into_iter()
            .partition(|f| f.file_stem().and_then(|s| s.to_str()) == Some(base_name.as_str()));

        let mut assigned = 0;
        for file in partial.into_iter().chain(exact) {
            let Some(media_type) = file
                .parent()
                .and_then(|dir| dir.file_name())
                .and_then(|dir| dir.to_str())
                .and_then(MediaType::from_subdir)
            else {
                continue;
            };
            log::debug!("{}: {} -> {}", game.name, media_type, file.display());
            game.set_media(media_type.field(), file.to_string_lossy());
            assigned += 1;
        }
        assigned
    }
}

/// Find media for one base file name below `root`.
pub fn find_media_files(base_name: &str, root: &Path) -> Vec<PathBuf> {
    MediaIndex::build(root)
        .find(base_name)
        .into_iter()
        .map(Path::to_path_buf)
        .collect()
}

/// Associate the media below `root` with a single game.
pub fn associate_media(game: &mut Game, root: &Path) -> usize {
    MediaIndex::build(root).associate(game)
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

#[cfg(test)]
#[path = "tests/media_tests.rs"]
mod tests;
