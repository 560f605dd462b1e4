//! Tests for loading configuration files.

use std::io::Write;
use strictly_tictactoe::{AppConfig, Positioning, Theme};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "theme = \"party\"\ntick_rate_ms = 50\n\n[celebration]\npieces = 80\ngravity = 0.05\ncolors = [\"#ff0000\", \"green\"]\npositioning = \"absolute\""
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.theme(), Theme::Party);
    assert_eq!(config.tick_rate().as_millis(), 50);
    assert_eq!(*config.celebration().pieces(), 80);
    assert_eq!(*config.celebration().positioning(), Positioning::Absolute);
    assert_eq!(config.celebration().palette().unwrap().len(), 2);
}

#[test]
fn test_invalid_toml_reports_location() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "theme = ").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.file.ends_with("config.rs"));
}

#[test]
fn test_unknown_theme_rejected() {
    assert!(AppConfig::from_toml("theme = \"neon\"\n").is_err());
}

#[test]
fn test_to_toml_round_trips() {
    let config = AppConfig::default().with_theme(Theme::Party);
    let text = config.to_toml().unwrap();
    assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
}
