use std::path::Path;

use super::*;
use crate::Dialect;
use crate::loader::parse_raw_gamelist;
use crate::reader::build_gamelist;
use gamelist_core::{Field, Game};

fn sample_game(path: &str, name: &str) -> Game {
    let mut game = Game::new(path, name);
    game.description = Some("Jump & run".to_string());
    game.rating = 0.8;
    game.release_date = "19910623T000000".to_string();
    game.developer = "Sonic Team".to_string();
    game.publisher = "Sega".to_string();
    game.players = "1".to_string();
    game.genres = vec!["Platform".to_string(), "Action".to_string()];
    game.favorite = true;
    game.play_count = 4;
    game.alt_emulator = Some("genesis_plus_gx".to_string());
    game.set_media(Field::Image, "./images/Sonic-image.png");
    game.set_media(Field::Thumbnail, "./images/Sonic-thumb.png");
    game.set_media(Field::BoxFront, "./images/Sonic-boxart.png");
    game.set_media(Field::MixImage, "./images/Sonic-mix.png");
    game.set_media(Field::Video, "./videos/Sonic.mp4");
    game
}

fn sample_gamelist() -> Gamelist {
    let mut gamelist = Gamelist::new("/in/gamelists/megadrive/gamelist.xml", "megadrive")
        .with_prolog("<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
    gamelist.alt_emulator = Some("Genesis Plus GX".to_string());
    gamelist.games = vec![
        sample_game("./Sonic the Hedgehog (USA, Europe).md", "Sonic the Hedgehog"),
        Game::new("./Columns (World).md", "Columns"),
    ];
    gamelist
}

fn reparse(xml: &str, dialect: Dialect) -> Gamelist {
    let frontend = dialect.frontend();
    let raw = parse_raw_gamelist(
        Path::new("/out/megadrive/gamelist.xml"),
        xml,
        frontend.list_element(),
    )
    .unwrap();
    build_gamelist(raw, frontend.mapping())
}

#[test]
fn test_round_trip_every_dialect() {
    let original = sample_gamelist();
    for dialect in Dialect::all() {
        let frontend = dialect.frontend();
        let xml = write_gamelist_xml(&original, frontend);
        let parsed = reparse(&xml, *dialect);

        assert_eq!(parsed.len(), original.len(), "{dialect}");
        for (before, after) in original.games.iter().zip(&parsed.games) {
            for (field, _) in frontend.mapping().iter() {
                assert_eq!(
                    before.text(field),
                    after.text(field),
                    "{dialect}: field {field} of {}",
                    before.path
                );
            }
        }
    }
}

#[test]
fn test_prolog_is_written_first() {
    let xml = write_gamelist_xml(&sample_gamelist(), Dialect::EmulationStation.frontend());
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<gameList>\n"));
    assert!(xml.ends_with("</gameList>\n"));
}

#[test]
fn test_empty_prolog_uses_default() {
    let gamelist = Gamelist::new("gamelist.xml", "nes").with_prolog("");
    let xml = write_gamelist_xml(&gamelist, Dialect::Batocera.frontend());
    assert_eq!(xml, "<?xml version=\"1.0\"?>\n<gameList>\n</gameList>\n");
}

#[test]
fn test_alternative_emulator_only_for_esde() {
    let gamelist = sample_gamelist();

    let esde = write_gamelist_xml(&gamelist, Dialect::EsDe.frontend());
    assert!(esde.contains("<alternativeEmulator>\n\t<label>Genesis Plus GX</label>\n</alternativeEmulator>\n"));
    assert_eq!(
        reparse(&esde, Dialect::EsDe).alt_emulator.as_deref(),
        Some("Genesis Plus GX")
    );

    let batocera = write_gamelist_xml(&gamelist, Dialect::Batocera.frontend());
    assert!(!batocera.contains("alternativeEmulator"));
}

#[test]
fn test_default_fields_are_omitted() {
    let mut gamelist = Gamelist::new("gamelist.xml", "megadrive");
    gamelist.games = vec![Game::new("./Columns (World).md", "Columns")];
    let xml = write_gamelist_xml(&gamelist, Dialect::EmulationStation.frontend());
    assert_eq!(
        xml,
        "<?xml version=\"1.0\"?>\n<gameList>\n\t<game>\n\t\t<path>./Columns (World).md</path>\n\t\t<name>Columns</name>\n\t</game>\n</gameList>\n"
    );
}

#[test]
fn test_fields_follow_mapping_order() {
    let xml = write_gamelist_xml(&sample_gamelist(), Dialect::Batocera.frontend());
    let position = |tag: &str| xml.find(tag).unwrap();
    assert!(position("<path>") < position("<name>"));
    assert!(position("<name>") < position("<desc>"));
    assert!(position("<emulator>") < position("<image>"));
    assert!(position("<boxart>") < position("<mix>"));
    assert!(position("<mix>") < position("<rating>"));
    assert!(xml.contains("\t\t<genre>Platform, Action</genre>\n"));
}

#[test]
fn test_dialect_specific_tags() {
    let gamelist = sample_gamelist();

    let batocera = write_gamelist_xml(&gamelist, Dialect::Batocera.frontend());
    assert!(batocera.contains("<boxart>./images/Sonic-boxart.png</boxart>"));
    assert!(batocera.contains("<emulator>genesis_plus_gx</emulator>"));

    let es = write_gamelist_xml(&gamelist, Dialect::EmulationStation.frontend());
    assert!(es.contains("<altemulator>genesis_plus_gx</altemulator>"));
    assert!(!es.contains("<boxart>"));

    let esde = write_gamelist_xml(&gamelist, Dialect::EsDe.frontend());
    assert!(!esde.contains("<image>"));
    assert!(!esde.contains("<video>"));
}

#[test]
fn test_escape_xml() {
    assert_eq!(escape_xml("Tom & Jerry"), "Tom &amp; Jerry");
    assert_eq!(escape_xml("a < b"), "a &lt; b");
    assert_eq!(escape_xml("\"Q\" 'n' A"), "&quot;Q&quot; &apos;n&apos; A");

    let xml = write_gamelist_xml(&sample_gamelist(), Dialect::EsDe.frontend());
    assert!(xml.contains("<desc>Jump &amp; run</desc>"));
}

#[test]
fn test_write_gamelist_file_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out").join("megadrive");

    let written = Dialect::EmulationStation
        .frontend()
        .write_gamelist(&sample_gamelist(), &target)
        .unwrap();

    assert_eq!(written, target.join("gamelist.xml"));
    let text = std::fs::read_to_string(&written).unwrap();
    assert!(text.contains("<name>Columns</name>"));
}
