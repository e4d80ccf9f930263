use gamelist_core::{Game, Gamelist};

use crate::loader::RawGamelist;
use crate::mapping::FieldMapping;
use crate::xml::XmlElement;

/// Build canonical records from a raw gamelist using a dialect's mapping.
///
/// Each `<game>` child becomes one [`Game`]. For every mapped tag the first
/// matching child's text is assigned; empty or missing tags leave the field
/// at its default, and tags the mapping doesn't know are ignored.
pub fn build_gamelist(raw: RawGamelist, mapping: &FieldMapping) -> Gamelist {
    let mut gamelist = Gamelist::new(raw.path, raw.system).with_prolog(raw.prolog);
    gamelist.alt_emulator = raw.alt_emulator;
    gamelist.games = raw
        .list
        .children_named("game")
        .map(|node| build_game(node, mapping))
        .collect();
    gamelist
}

/// Map a single `<game>` element into a canonical record.
pub fn build_game(node: &XmlElement, mapping: &FieldMapping) -> Game {
    let mut game = Game::new(String::new(), String::new());
    for (field, tag) in mapping.iter() {
        let Some(text) = node.child(tag).map(XmlElement::text) else {
            continue;
        };
        if text.is_empty() {
            continue;
        }
        if let Err(e) = game.set_text(field, text) {
            log::warn!("Skipping <{}> of \"{}\": {}", tag, game.path, e);
        }
    }
    game
}

#[cfg(test)]
#[path = "tests/reader_tests.rs"]
mod tests;
