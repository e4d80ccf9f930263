//! Lightweight copies of front-end trees for testing.
//!
//! XML files (gamelists, settings) are copied; everything else becomes an
//! empty placeholder so media and ROM names survive without their size.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::LibError;

/// Counts of what [`build_skeleton`] created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkeletonSummary {
    pub directories: usize,
    pub copied: usize,
    pub placeholders: usize,
}

/// Mirror `source` into `destination`.
pub fn build_skeleton(source: &Path, destination: &Path) -> Result<SkeletonSummary, LibError> {
    if !source.is_dir() {
        return Err(LibError::not_a_directory(source));
    }

    let mut summary = SkeletonSummary::default();
    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|_| LibError::not_a_directory(entry.path()))?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
            summary.directories += 1;
        } else if entry.path().is_file() {
            if is_xml(entry.path()) {
                fs::copy(entry.path(), &target)?;
                summary.copied += 1;
            } else {
                fs::File::create(&target)?;
                summary.placeholders += 1;
            }
        }
    }

    log::debug!(
        "Skeleton of {} at {}: {} dirs, {} copied, {} placeholders",
        source.display(),
        destination.display(),
        summary.directories,
        summary.copied,
        summary.placeholders
    );
    Ok(summary)
}

fn is_xml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xml"))
}

#[cfg(test)]
#[path = "tests/skeleton_tests.rs"]
mod tests;
