//! Tests for config functionality.

use crate::config::Config;
use crate::error::MsgtplError;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.store_file, "templates.json");
    assert_eq!(config.placeholder_prefix, "Enter");
    assert_eq!(config.preview_length, 80);
    assert!(!config.require_all_fields);
}

#[test]
fn test_parse_empty_yaml_uses_defaults() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
placeholder_prefix: "Nhập"
require_all_fields: true
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.placeholder_prefix, "Nhập");
    assert!(config.require_all_fields);

    // Unspecified values should use defaults
    assert_eq!(config.store_file, "templates.json");
    assert_eq!(config.preview_length, 80);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
preview_length: 40
sync_endpoint: https://example.invalid
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.preview_length, 40);
}

#[test]
fn test_zero_preview_length_is_rejected() {
    let err = Config::from_yaml("preview_length: 0").unwrap_err();
    assert!(matches!(err, MsgtplError::ConfigError(_)));
    assert!(err.to_string().contains("preview_length"));
}

#[test]
fn test_blank_store_file_is_rejected() {
    let err = Config::from_yaml("store_file: '  '").unwrap_err();
    assert!(err.to_string().contains("store_file"));
}

#[test]
fn test_malformed_yaml_is_config_error() {
    let err = Config::from_yaml("preview_length: [1, 2").unwrap_err();
    assert!(matches!(err, MsgtplError::ConfigError(_)));
}

#[test]
fn test_load_or_default_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_or_default(temp_dir.path().join("config.yaml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_or_default_reads_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "preview_length: 12\n").unwrap();

    let config = Config::load_or_default(&path).unwrap();
    assert_eq!(config.preview_length, 12);
}

#[test]
fn test_load_missing_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(temp_dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, MsgtplError::ConfigError(_)));
}

#[test]
#[cfg(unix)]
fn test_store_path_relative_and_absolute() {
    let data_dir = Path::new("/home/user/.local/share/msgtpl");

    let config = Config::default();
    assert_eq!(config.store_path(data_dir), data_dir.join("templates.json"));

    let config = Config {
        store_file: "/tmp/elsewhere.json".to_string(),
        ..Config::default()
    };
    assert_eq!(config.store_path(data_dir), Path::new("/tmp/elsewhere.json"));
}
