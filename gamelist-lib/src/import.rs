//! Loading every gamelist of a front-end tree into canonical records.

use std::path::Path;

use gamelist_core::Gamelist;
use gamelist_frontend::Frontend;

use crate::LibError;
use crate::scanner::{GamelistLocation, find_gamelists};

/// Result of importing one discovered gamelist.
#[derive(Debug)]
pub struct ImportedSystem {
    pub location: GamelistLocation,
    pub result: Result<Gamelist, LibError>,
}

/// Load and map a single gamelist with the given dialect.
pub fn import_system(
    location: &GamelistLocation,
    frontend: &dyn Frontend,
) -> Result<Gamelist, LibError> {
    let gamelist = frontend.read_gamelist(&location.path)?;
    log::debug!(
        "Imported {} from {} ({} games)",
        location.system,
        location.path.display(),
        gamelist.len()
    );
    Ok(gamelist)
}

/// Import every gamelist found under `root`.
///
/// Each system is loaded independently; a failure is kept in its
/// [`ImportedSystem`] and does not stop the others.
pub fn import_all(root: &Path, frontend: &dyn Frontend) -> Vec<ImportedSystem> {
    find_gamelists(root)
        .into_iter()
        .map(|location| {
            let result = import_system(&location, frontend);
            ImportedSystem { location, result }
        })
        .collect()
}
