//! Configuration loading tests
//!
//! Tests that configuration is created with defaults on first run and
//! that changed settings survive a save and reload

use pets::state::config::Config;
use std::path::Path;
use std::time::Duration;

#[test]
fn test_config_created_with_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("pets.cfg");

    let config = Config::load_from(path.clone()).expect("Failed to load config");
    assert!(path.exists(), "Default config should be written to disk");

    assert_eq!(config.audio_dir(), None);
    assert_eq!(config.extensions(), vec!["wav", "mp3"]);
    assert_eq!(config.volume(), 100);
    assert_eq!(config.pause_delimiters(), ",!?:;.");

    let timing = config.timing();
    assert_eq!(timing.pause, Duration::from_millis(500));
    assert_eq!(timing.word_gap, Duration::ZERO);

    // No override: the built-in dictionary is used
    assert_eq!(config.dictionary_path(), None);
}

#[test]
fn test_config_save_and_reload() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("pets.cfg");

    let mut config = Config::load_from(path.clone()).unwrap();
    config.set_audio_dir(Path::new("/home/me/voice"));
    config.set("audio", "extensions", " .MP3, wav ,");
    config.set("audio", "volume", "250");
    config.set("audio", "pause", "0.25");
    config.set("dictionary", "path", "/opt/cmudict-0.7b");
    config.save().unwrap();

    let config = Config::load_from(path).unwrap();
    assert_eq!(config.audio_dir().as_deref(), Some(Path::new("/home/me/voice")));
    assert_eq!(config.extensions(), vec!["mp3", "wav"]);
    assert_eq!(config.volume(), 100, "Volume is clamped to 100");
    assert_eq!(config.timing().pause, Duration::from_millis(250));
    assert_eq!(config.dictionary_path().as_deref(), Some(Path::new("/opt/cmudict-0.7b")));
}

#[test]
fn test_bad_numbers_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pets.cfg");
    std::fs::write(&path, "[audio]\nvolume = loud\npause = -3\n").unwrap();

    let config = Config::load_from(path).unwrap();
    assert_eq!(config.volume(), 100);
    assert_eq!(config.timing().pause, Duration::ZERO);
    assert_eq!(config.extensions(), vec!["wav", "mp3"]);
}
