use super::*;

#[test]
fn dialect_from_str_accepts_aliases() {
    assert_eq!("esde".parse::<Dialect>().unwrap(), Dialect::EsDe);
    assert_eq!("ES-DE".parse::<Dialect>().unwrap(), Dialect::EsDe);
    assert_eq!("Batocera".parse::<Dialect>().unwrap(), Dialect::Batocera);
    assert_eq!(
        "emulationstation".parse::<Dialect>().unwrap(),
        Dialect::EmulationStation
    );
    assert_eq!("es".parse::<Dialect>().unwrap(), Dialect::EmulationStation);
}

#[test]
fn dialect_from_str_rejects_unknown() {
    let err = "retroarch".parse::<Dialect>().unwrap_err();
    assert!(err.to_string().contains("retroarch"));
}

#[test]
fn short_names_round_trip() {
    for dialect in Dialect::all() {
        assert_eq!(
            dialect.short_name().parse::<Dialect>().unwrap(),
            *dialect
        );
    }
}

#[test]
fn frontends_match_dialects() {
    assert_eq!(Dialect::EsDe.frontend().name(), "ES-DE");
    assert_eq!(Dialect::Batocera.frontend().name(), "Batocera");
    assert_eq!(
        Dialect::EmulationStation.frontend().name(),
        "EmulationStation"
    );
    assert_eq!(Dialect::Batocera.to_string(), "Batocera");
}

#[test]
fn only_esde_supports_alternative_emulator() {
    assert!(Dialect::EsDe.frontend().supports_alt_emulator());
    assert!(!Dialect::Batocera.frontend().supports_alt_emulator());
    assert!(!Dialect::EmulationStation.frontend().supports_alt_emulator());
}

#[test]
fn every_mapping_starts_with_path_and_name() {
    for dialect in Dialect::all() {
        let mut entries = dialect.frontend().mapping().iter();
        assert_eq!(entries.next(), Some((gamelist_core::Field::Path, "path")));
        assert_eq!(entries.next(), Some((gamelist_core::Field::Name, "name")));
    }
}

#[test]
fn esde_mapping_has_no_media_except_folder_links() {
    let media: Vec<_> = Dialect::EsDe
        .frontend()
        .mapping()
        .iter()
        .filter(|(field, _)| field.is_media())
        .map(|(_, tag)| tag)
        .collect();
    assert_eq!(media, vec!["folderlink"]);
}

#[test]
fn batocera_renames_tags() {
    use gamelist_core::Field;
    let mapping = Dialect::Batocera.frontend().mapping();
    assert_eq!(mapping.tag(Field::BoxFront), Some("boxart"));
    assert_eq!(mapping.tag(Field::MixImage), Some("mix"));
    assert_eq!(mapping.tag(Field::GameMap), Some("map"));
    assert_eq!(mapping.tag(Field::AltEmulator), Some("emulator"));
    assert_eq!(mapping.tag(Field::ScraperId), Some("id"));
    assert_eq!(mapping.field("cheevosHash"), Some(Field::CheevosHash));
    assert_eq!(mapping.tag(Field::CollectionSortName), None);
}

#[test]
fn layouts() {
    let source = Path::new("/data");
    assert_eq!(
        Dialect::EsDe.frontend().gamelist_dir(source),
        Path::new("/data/gamelists")
    );
    assert_eq!(
        Dialect::Batocera.frontend().gamelist_dir(source),
        Path::new("/data")
    );
    assert_eq!(
        Dialect::Batocera.frontend().media_dir(source).unwrap(),
        Path::new("/data/Imgs")
    );
    assert_eq!(
        Dialect::EmulationStation.frontend().media_dir(source).unwrap(),
        Path::new("/data/downloaded_media")
    );
}
