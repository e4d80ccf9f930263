//! Raw gamelist loading: prolog extraction, fragment parsing and system
//! detection, before any dialect mapping happens.

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use gamelist_core::DEFAULT_PROLOG;

use crate::FrontendError;
use crate::xml::{XmlElement, parse_fragment};

/// File name every front-end uses for its per-system gamelist.
pub const GAMELIST_FILE: &str = "gamelist.xml";

static PROLOG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^<\?xml\s+version="(\d+\.\d+|\d*\.\d+)"\s*(?:encoding="[^"]*")?\s*\?>"#)
        .expect("static pattern")
});

/// A gamelist file after parsing but before mapping into canonical records.
#[derive(Debug, Clone)]
pub struct RawGamelist {
    pub path: PathBuf,
    /// Directory name just above `gamelist.xml`
    pub system: String,
    /// Prolog found at the top of the file, or the default one
    pub prolog: String,
    /// Label of the ES-DE `<alternativeEmulator>` block, if any
    pub alt_emulator: Option<String>,
    /// The dialect's list element (e.g. `<gameList>`)
    pub list: XmlElement,
}

/// Split an optional `<?xml ...?>` prolog from the start of the text.
pub fn split_prolog(text: &str) -> (Option<&str>, &str) {
    match PROLOG.find(text) {
        Some(m) => (Some(m.as_str()), &text[m.end()..]),
        None => (None, text),
    }
}

/// Read and parse a gamelist file, extracting the first `list_element`.
pub fn load_raw_gamelist(path: &Path, list_element: &str) -> Result<RawGamelist, FrontendError> {
    let text = std::fs::read_to_string(path)?;
    parse_raw_gamelist(path, &text, list_element)
}

/// Parse gamelist text that was read from `path`.
pub fn parse_raw_gamelist(
    path: &Path,
    text: &str,
    list_element: &str,
) -> Result<RawGamelist, FrontendError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let (prolog, body) = split_prolog(text);
    let system = system_from_path(path)?;

    let root = parse_fragment(body)?;
    let alt_emulator = root
        .child("alternativeEmulator")
        .and_then(|alt| alt.child("label"))
        .map(|label| label.text().to_string())
        .filter(|label| !label.is_empty());
    let list = root
        .find(list_element)
        .cloned()
        .ok_or_else(|| FrontendError::missing_element(list_element))?;

    Ok(RawGamelist {
        path: path.to_path_buf(),
        system,
        prolog: prolog.unwrap_or(DEFAULT_PROLOG).to_string(),
        alt_emulator,
        list,
    })
}

/// Best guess at the system: the directory component holding `gamelist.xml`.
pub fn system_from_path(path: &Path) -> Result<String, FrontendError> {
    let parts: Vec<&std::ffi::OsStr> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect();

    parts
        .iter()
        .position(|part| *part == GAMELIST_FILE)
        .filter(|&index| index > 0)
        .map(|index| parts[index - 1].to_string_lossy().into_owned())
        .ok_or_else(|| FrontendError::NoSystemSegment(path.to_path_buf()))
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
