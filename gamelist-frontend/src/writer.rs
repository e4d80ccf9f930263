use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use gamelist_core::Gamelist;

use crate::loader::GAMELIST_FILE;
use crate::{Frontend, FrontendError};

/// Render a gamelist as an XML document in the given front-end's dialect.
///
/// Writes the gamelist's prolog, the alternative-emulator block for
/// front-ends that have one, then the list element with one `<game>` per
/// record. Inside a game, fields are written in mapping order and only when
/// they hold a non-default value.
pub fn write_gamelist_xml<F: Frontend + ?Sized>(gamelist: &Gamelist, frontend: &F) -> String {
    let mut xml = String::new();
    let prolog = gamelist.prolog.trim();
    xml.push_str(if prolog.is_empty() {
        gamelist_core::DEFAULT_PROLOG
    } else {
        prolog
    });
    xml.push('\n');

    if frontend.supports_alt_emulator() {
        if let Some(ref label) = gamelist.alt_emulator {
            xml.push_str("<alternativeEmulator>\n");
            write_tag(&mut xml, 1, "label", label);
            xml.push_str("</alternativeEmulator>\n");
        }
    }

    let root = frontend.list_element();
    let mapping = frontend.mapping();
    open_tag(&mut xml, 0, root);
    for game in &gamelist.games {
        open_tag(&mut xml, 1, "game");
        for (field, tag) in mapping.iter() {
            if let Some(value) = game.text(field) {
                write_tag(&mut xml, 2, tag, &value);
            }
        }
        close_tag(&mut xml, 1, "game");
    }
    close_tag(&mut xml, 0, root);

    xml
}

/// Write `gamelist.xml` into `dir`, creating the directory when needed.
pub fn write_gamelist_file<F: Frontend + ?Sized>(
    gamelist: &Gamelist,
    frontend: &F,
    dir: &Path,
) -> Result<PathBuf, FrontendError> {
    fs::create_dir_all(dir)?;

    let xml = write_gamelist_xml(gamelist, frontend);
    let gamelist_path = dir.join(GAMELIST_FILE);
    let mut file = fs::File::create(&gamelist_path)?;
    file.write_all(xml.as_bytes())?;

    Ok(gamelist_path)
}

fn indent(xml: &mut String, depth: usize) {
    for _ in 0..depth {
        xml.push('\t');
    }
}

fn open_tag(xml: &mut String, depth: usize, tag: &str) {
    indent(xml, depth);
    xml.push('<');
    xml.push_str(tag);
    xml.push_str(">\n");
}

fn close_tag(xml: &mut String, depth: usize, tag: &str) {
    indent(xml, depth);
    xml.push_str("</");
    xml.push_str(tag);
    xml.push_str(">\n");
}

fn write_tag(xml: &mut String, depth: usize, tag: &str, value: &str) {
    indent(xml, depth);
    xml.push('<');
    xml.push_str(tag);
    xml.push('>');
    xml.push_str(&escape_xml(value));
    xml.push_str("</");
    xml.push_str(tag);
    xml.push_str(">\n");
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
#[path = "tests/writer_tests.rs"]
mod tests;
