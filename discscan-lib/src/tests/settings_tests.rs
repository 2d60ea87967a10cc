use super::*;

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert!(settings.scan.first_track);
    assert!(settings.scan.ascii_fallback);
}

#[test]
fn test_settings_path_ends_with_discscan() {
    let path = settings_path();
    assert!(path.ends_with("discscan/settings.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = load_settings(Some(&dir.path().join("settings.toml"))).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[scan]\nfirst_track = false\n").unwrap();

    let settings = load_settings(Some(&path)).unwrap();
    assert!(!settings.scan.first_track);
    assert!(settings.scan.ascii_fallback);
}

#[test]
fn test_malformed_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[scan]\nfirst_track = \"sometimes\"\n").unwrap();

    let err = load_settings(Some(&path)).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
}

#[test]
fn test_settings_string_round_trips() {
    let mut settings = Settings::default();
    settings.scan.ascii_fallback = false;
    let text = settings_string(&settings).unwrap();
    assert!(text.contains("ascii_fallback = false"));
    let parsed: Settings = toml::from_str(&text).unwrap();
    assert_eq!(parsed, settings);
}
