//! Tests for loading engine configuration from disk.

use std::io::Write;
use tictactoe_minimax::{EngineConfig, Player, Strategy};

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "computer_mark = \"X\"").unwrap();
    writeln!(file, "strategy = \"alpha-beta\"").unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.computer_mark(), Player::X);
    assert_eq!(*config.strategy(), Strategy::AlphaBeta);
    assert_eq!(config.human_mark(), Player::O);
}

#[test]
fn test_partial_file_takes_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "strategy = \"alpha-beta\"").unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.computer_mark(), Player::O);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.file.ends_with("config.rs"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "computer_mark = [").unwrap();

    let err = EngineConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
