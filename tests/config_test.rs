//! Tests for TOML game configuration.

use std::io::Write;
use std::path::{Path, PathBuf};
use strictly_minimax::{FirstPlayer, GameConfig};

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(*config.first_player(), FirstPlayer::Random);
    assert_eq!(config.log_file(), &PathBuf::from("strictly_minimax.log"));
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first_player = \"computer\"").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.first_player(), FirstPlayer::Computer);
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.log_file(), &PathBuf::from("strictly_minimax.log"));
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_invalid_first_player_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first_player = \"nobody\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_load_without_path_and_override() {
    let config = GameConfig::load(None::<&Path>)
        .unwrap()
        .with_first_player(FirstPlayer::Human);
    assert_eq!(*config.first_player(), FirstPlayer::Human);
}
