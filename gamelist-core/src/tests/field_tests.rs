use super::*;

#[test]
fn canonical_names_round_trip() {
    for &field in Field::all() {
        let parsed: Field = field.name().parse().unwrap();
        assert_eq!(parsed, field, "round-trip failed for {:?}", field);
    }
}

#[test]
fn parsing_is_case_insensitive() {
    let parsed: Field = "CollectionSortName".parse().unwrap();
    assert_eq!(parsed, Field::CollectionSortName);
    let parsed: Field = "BOX3D".parse().unwrap();
    assert_eq!(parsed, Field::Box3d);
}

#[test]
fn unknown_string_returns_err() {
    let result: Result<Field, _> = "wheel".parse();
    assert!(result.is_err());
}

#[test]
fn media_fields_are_classified() {
    let media: Vec<Field> = Field::media().collect();
    assert_eq!(media.len(), 16);
    assert!(media.contains(&Field::Video));
    assert!(media.contains(&Field::FolderLink));
    assert!(!Field::Name.is_media());
    assert!(!Field::Favorite.is_media());
}

#[test]
fn flags_are_classified() {
    let flags = Field::all().iter().filter(|f| f.is_flag()).count();
    assert_eq!(flags, 8);
    assert!(Field::NoMultiScrape.is_flag());
    assert!(!Field::PlayCount.is_flag());
}
