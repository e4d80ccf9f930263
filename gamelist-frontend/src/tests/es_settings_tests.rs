use super::*;

const SETTINGS: &str = r#"<?xml version="1.0"?>
<bool name="BackgroundJoystickInput" value="false" />
<bool name="ScrapeMarquees" value="TRUE" />
<int name="ScreensaverTimer" value="300000" />
<string name="MediaDirectory" value="~/Emulation/tools/downloaded_media" />
<string name="ThemeSet" value="slate-es-de" />
"#;

#[test]
fn values_are_typed_by_element() {
    let settings = EsSettings::parse(SETTINGS).unwrap();
    assert_eq!(settings.len(), 5);
    assert_eq!(
        settings.get("BackgroundJoystickInput"),
        Some(&SettingValue::Bool(false))
    );
    assert_eq!(
        settings.get("ScrapeMarquees"),
        Some(&SettingValue::Bool(true))
    );
    assert_eq!(
        settings.get("ScreensaverTimer"),
        Some(&SettingValue::Int(300000))
    );
    assert_eq!(
        settings.get("ThemeSet"),
        Some(&SettingValue::Text("slate-es-de".to_string()))
    );
    assert_eq!(settings.get("Missing"), None);
}

#[test]
fn media_directory_expands_home() {
    let settings = EsSettings::parse(SETTINGS).unwrap();
    let dir = settings.media_directory().unwrap();
    if let Some(home) = dirs::home_dir() {
        assert_eq!(dir, home.join("Emulation/tools/downloaded_media"));
    }
    assert!(dir.ends_with("Emulation/tools/downloaded_media"));
}

#[test]
fn media_directory_absent_or_empty() {
    let settings = EsSettings::parse(r#"<bool name="x" value="true"/>"#).unwrap();
    assert_eq!(settings.media_directory(), None);

    let settings = EsSettings::parse(r#"<string name="MediaDirectory" value="  "/>"#).unwrap();
    assert_eq!(settings.media_directory(), None);
}

#[test]
fn malformed_int_is_an_error() {
    let err = EsSettings::parse(r#"<int name="ScreensaverTimer" value="soon"/>"#).unwrap_err();
    assert!(matches!(
        err,
        FrontendError::InvalidSetting { ref name, ref value, .. }
            if name == "ScreensaverTimer" && value == "soon"
    ));
}

#[test]
fn parse_value_kinds() {
    assert_eq!(
        parse_value("bool", "a", "True").unwrap(),
        SettingValue::Bool(true)
    );
    assert_eq!(
        parse_value("bool", "a", "yes").unwrap(),
        SettingValue::Bool(false)
    );
    assert_eq!(parse_value("int", "a", "-4").unwrap(), SettingValue::Int(-4));
    assert_eq!(
        parse_value("float", "a", "1.5").unwrap(),
        SettingValue::Text("1.5".to_string())
    );
}

#[test]
fn empty_file_has_no_settings() {
    let settings = EsSettings::parse("<?xml version=\"1.0\"?>\n").unwrap();
    assert!(settings.is_empty());
}
