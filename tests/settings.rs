use quick_panel::hotkey::Hotkey;
use quick_panel::settings::Settings;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings::load(path.to_str().unwrap());
    assert_eq!(settings.panel_pos, (0, 50));
    assert_eq!(settings.panel_size, (280, 500));
    assert!(settings.hide_on_focus_loss);
    assert!(!settings.debug_logging);
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let path = path.to_str().unwrap();

    let mut settings = Settings::default();
    settings.hotkey = Some("Alt+F2".to_string());
    settings.panel_pos = (100, 200);
    settings.hide_on_focus_loss = false;
    settings.save(path).unwrap();

    let loaded = Settings::load(path);
    assert_eq!(loaded.hotkey.as_deref(), Some("Alt+F2"));
    assert_eq!(loaded.panel_pos, (100, 200));
    assert!(!loaded.hide_on_focus_loss);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested/deeper/settings.json");
    Settings::default().save(path.to_str().unwrap()).unwrap();
    assert!(path.exists());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"hotkey": "Ctrl+K"}"#).unwrap();
    let settings = Settings::load(path.to_str().unwrap());
    assert_eq!(settings.hotkey.as_deref(), Some("Ctrl+K"));
    assert_eq!(settings.panel_size, (280, 500));
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    let settings = Settings::load(path.to_str().unwrap());
    assert_eq!(settings.panel_pos, (0, 50));
    assert_eq!(settings.panel_size, (280, 500));
    assert!(settings.hide_on_focus_loss);
    assert!(settings.hotkey.is_none());
}

#[test]
fn configured_hotkey_parses() {
    let settings = Settings {
        hotkey: Some("Alt+F2".to_string()),
        ..Default::default()
    };
    let hk = settings.hotkey();
    assert_eq!(hk.key, "F2");
    assert!(hk.alt && !hk.ctrl);
}

#[test]
fn invalid_hotkey_string_falls_back_to_default() {
    let settings = Settings {
        hotkey: Some("Ctrl+Foo".to_string()),
        ..Default::default()
    };
    assert_eq!(settings.hotkey(), Hotkey::default());
}
