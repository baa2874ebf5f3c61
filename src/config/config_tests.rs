//! Tests for config loading

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;

#[test]
fn test_missing_file_yields_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from_path(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[api]\nbase_url = \"http://127.0.0.1:5000\"").unwrap();

    let config = load_config_from_path(file.path()).unwrap();
    assert_eq!(
        config.api.base_url.as_deref(),
        Some("http://127.0.0.1:5000")
    );
    assert!(config.api.token.is_none());
}

#[test]
fn test_malformed_config_is_reported() {
    let err = parse_config("[api\nbase_url = ").unwrap_err();
    assert!(matches!(err, DeskError::InvalidConfig(_)));
}

#[test]
fn test_config_path_ends_with_app_dir() {
    if let Some(path) = config_path() {
        assert!(path.ends_with("courier-desk/config.toml"));
    }
}
