//! Tests for loading game configuration from TOML files.

use ghost_xo::{ConfigErrorKind, GameConfig, GameMode, reset};
use std::io::Write;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.toml");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(
        f,
        r#"
size = 5
mode = "ghost"
"#
    )
    .unwrap();

    let config = GameConfig::from_file(&path).unwrap();
    assert_eq!(*config.size(), 5);
    assert_eq!(*config.mode(), GameMode::Ghost);

    let state = reset(config).unwrap();
    assert_eq!(state.board().len(), 25);
}

#[test]
fn test_missing_keys_take_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.toml");
    std::fs::write(&path, "mode = \"ghost\"\n").unwrap();

    let config = GameConfig::from_file(&path).unwrap();
    assert_eq!(*config.size(), 3);
    assert!(config.is_ghost());
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err.kind, ConfigErrorKind::Read(_)));
}

#[test]
fn test_unknown_mode_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.toml");
    std::fs::write(&path, "size = 3\nmode = \"haunted\"\n").unwrap();

    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(matches!(err.kind, ConfigErrorKind::Parse(_)));
}

#[test]
fn test_large_board_loads() {
    let config = GameConfig::from_toml_str("size = 21\nmode = \"ghost\"").unwrap();
    assert_eq!(*config.size(), 21);
    assert_eq!(reset(config).unwrap().board().len(), 441);
}

#[test]
fn test_zero_size_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.toml");
    std::fs::write(&path, "size = 0\n").unwrap();

    let err = GameConfig::from_file(&path).unwrap_err();
    assert_eq!(err.kind, ConfigErrorKind::SizeTooSmall(0));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_mode_names() {
    let names: Vec<String> = GameMode::iter().map(|m| m.to_string()).collect();
    assert_eq!(names, vec!["standard", "ghost"]);
    assert_eq!(GameMode::from_str("ghost").unwrap(), GameMode::Ghost);
    assert!(GameMode::from_str("haunted").is_err());
}

#[test]
fn test_config_serializes_to_toml() {
    let config = GameConfig::ghost(4).unwrap();
    let text = toml::to_string(&config).unwrap();
    assert_eq!(GameConfig::from_toml_str(&text).unwrap(), config);
}
