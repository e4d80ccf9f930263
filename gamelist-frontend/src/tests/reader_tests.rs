use std::path::{Path, PathBuf};

use super::*;
use crate::loader::parse_raw_gamelist;
use crate::{Dialect, esde::ESDE_MAPPING};
use gamelist_core::{DEFAULT_RELEASE_DATE, Field};

fn raw(body: &str) -> RawGamelist {
    parse_raw_gamelist(
        Path::new("/es/gamelists/snes/gamelist.xml"),
        body,
        "gameList",
    )
    .unwrap()
}

#[test]
fn test_maps_known_tags() {
    let gamelist = build_gamelist(
        raw(r#"<?xml version="1.0"?>
<gameList>
	<game>
		<path>./Chrono Trigger (USA).sfc</path>
		<name>Chrono Trigger</name>
		<desc>A time travel RPG &amp; more.</desc>
		<rating>0.9</rating>
		<releasedate>19950311T000000</releasedate>
		<developer>Square</developer>
		<genre>Role Playing Game, Adventure</genre>
		<players>1</players>
		<favorite>true</favorite>
		<playcount>12</playcount>
	</game>
</gameList>
"#),
        &ESDE_MAPPING,
    );

    assert_eq!(gamelist.system, "snes");
    assert_eq!(gamelist.path, PathBuf::from("/es/gamelists/snes/gamelist.xml"));
    assert_eq!(gamelist.len(), 1);
    let game = &gamelist.games[0];
    assert_eq!(game.path, "./Chrono Trigger (USA).sfc");
    assert_eq!(game.name, "Chrono Trigger");
    assert_eq!(game.description.as_deref(), Some("A time travel RPG & more."));
    assert!((game.rating - 0.9).abs() < f32::EPSILON);
    assert_eq!(game.release_date, "19950311T000000");
    assert_eq!(game.developer, "Square");
    assert_eq!(game.publisher, "unknown");
    assert_eq!(game.genres, vec!["Role Playing Game", "Adventure"]);
    assert!(game.favorite);
    assert_eq!(game.play_count, 12);
}

#[test]
fn test_missing_and_empty_tags_keep_defaults() {
    let gamelist = build_gamelist(
        raw("<gameList><game><path>./a.sfc</path><name>A</name><genre></genre><developer/></game></gameList>"),
        &ESDE_MAPPING,
    );
    let game = &gamelist.games[0];
    assert!(game.genres.is_empty());
    assert_eq!(game.developer, "unknown");
    assert_eq!(game.release_date, DEFAULT_RELEASE_DATE);
    assert_eq!(game.rating, 0.0);
}

#[test]
fn test_unknown_tags_are_ignored() {
    let gamelist = build_gamelist(
        raw("<gameList><game><path>./a.sfc</path><name>A</name><image>./a.png</image><boxart>./b.png</boxart></game></gameList>"),
        &ESDE_MAPPING,
    );
    let game = &gamelist.games[0];
    assert_eq!(game.image, None);
    assert_eq!(game.boxfront, None);
}

#[test]
fn test_malformed_number_is_skipped() {
    let gamelist = build_gamelist(
        raw("<gameList><game><path>./a.sfc</path><name>A</name><rating>great</rating><playcount>3</playcount></game></gameList>"),
        &ESDE_MAPPING,
    );
    let game = &gamelist.games[0];
    assert_eq!(game.rating, 0.0);
    assert_eq!(game.play_count, 3);
}

#[test]
fn test_first_tag_wins() {
    let node = crate::xml::parse_document(
        "<game><path>./a.sfc</path><name>First</name><name>Second</name></game>",
    )
    .unwrap();
    let game = build_game(&node, &ESDE_MAPPING);
    assert_eq!(game.name, "First");
}

#[test]
fn test_batocera_tags() {
    let gamelist = build_gamelist(
        raw(r#"<gameList>
	<game id="1234">
		<path>./Sonic.md</path>
		<name>Sonic the Hedgehog</name>
		<boxart>./images/Sonic-boxart.png</boxart>
		<mix>./images/Sonic-mix.png</mix>
		<map>./images/Sonic-map.png</map>
		<emulator>libretro</emulator>
		<cheevosHash>abcdef</cheevosHash>
	</game>
</gameList>"#),
        Dialect::Batocera.frontend().mapping(),
    );
    let game = &gamelist.games[0];
    assert_eq!(game.media(Field::BoxFront), Some("./images/Sonic-boxart.png"));
    assert_eq!(game.media(Field::MixImage), Some("./images/Sonic-mix.png"));
    assert_eq!(game.media(Field::GameMap), Some("./images/Sonic-map.png"));
    assert_eq!(game.alt_emulator.as_deref(), Some("libretro"));
    assert_eq!(game.cheevos_hash.as_deref(), Some("abcdef"));
}

#[test]
fn test_alternative_emulator_is_carried() {
    let gamelist = build_gamelist(
        raw(r#"<?xml version="1.0"?>
<alternativeEmulator>
	<label>bsnes</label>
</alternativeEmulator>
<gameList/>"#),
        &ESDE_MAPPING,
    );
    assert_eq!(gamelist.alt_emulator.as_deref(), Some("bsnes"));
    assert!(gamelist.is_empty());
}
