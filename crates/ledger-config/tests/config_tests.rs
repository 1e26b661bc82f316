use ledger_config::{ColorAssignment, Config, ConfigError, ConfigManager, Theme};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert_eq!(cfg.currency_symbol, "₹");
    assert_eq!(cfg.palette.len(), 4);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("home")).expect("manager");

    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, Config::default());
    assert!(!manager.config_path().exists());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.currency_symbol = "$".to_string();
    cfg.theme = Theme::Dark;
    cfg.track_dates = false;
    cfg.color_assignment = ColorAssignment::ByCategory;
    cfg.category_colors.insert("Food".into(), "#000000".into());

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn corrupt_file_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").expect("write");

    let err = ConfigManager::new(path).load().expect_err("corrupt config");

    assert!(matches!(err, ConfigError::Serde(_)), "unexpected error: {err:?}");
}

#[test]
fn partial_file_fills_missing_fields_with_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"theme":"dark","currency_symbol":"$"}"#).expect("write");

    let loaded = ConfigManager::new(path).load().expect("load partial config");

    assert_eq!(loaded.theme, Theme::Dark);
    assert_eq!(loaded.currency_symbol, "$");
    assert!(loaded.track_dates);
    assert_eq!(loaded.palette, Config::default_palette());
}
