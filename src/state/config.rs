//! Configuration management

use crate::playback::Timing;
use crate::text::DEFAULT_PAUSE_DELIMITERS;
use crate::{PetsError, Result};
use ini::Ini;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
///
/// Persistent settings for the audio directory, playback timing,
/// tokenization and the pronouncing dictionary.
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Config file path (~/.pets.cfg)
    path: PathBuf,
}

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from a specific file, creating it if missing
    pub fn load_from(path: PathBuf) -> Result<Self> {
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(&path)
                .map_err(|e| PetsError::IniParse(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_config();
            default
                .write_to_file(&path)
                .map_err(|e| PetsError::IniParse(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self { ini, path })
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        debug!("Saving config to {:?}", self.path);
        self.ini
            .write_to_file(&self.path)
            .map_err(|e| PetsError::Config(format!("Failed to save config: {}", e)))
    }

    /// Get config file path (~/.pets.cfg)
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".pets.cfg")
    }

    /// Expose the config file path for display
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Create default configuration
    fn default_config() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some("audio"))
            .set("directory", "")
            .set("extensions", "wav,mp3")
            .set("volume", "100")
            .set("pause", "0.5")
            .set("word_gap", "0.0");

        ini.with_section(Some("text"))
            .set("pause_delimiters", DEFAULT_PAUSE_DELIMITERS);

        ini.with_section(Some("dictionary")).set("path", "");

        ini
    }

    /// Get a string value from config
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Get an integer value from config
    pub fn get_int(&self, section: &str, key: &str, default: i32) -> i32 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Get a float value from config
    pub fn get_float(&self, section: &str, key: &str, default: f32) -> f32 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Set a value in config
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    /// Last audio directory the user chose, if any
    pub fn audio_dir(&self) -> Option<PathBuf> {
        let dir = self.get_string("audio", "directory", "");
        let dir = dir.trim();
        if dir.is_empty() {
            None
        } else {
            Some(PathBuf::from(dir))
        }
    }

    /// Remember the audio directory (call `save` to persist)
    pub fn set_audio_dir(&mut self, dir: &Path) {
        self.set("audio", "directory", &dir.to_string_lossy());
    }

    /// Clip file extensions in order of preference
    pub fn extensions(&self) -> Vec<String> {
        self.get_string("audio", "extensions", "wav,mp3")
            .split(',')
            .map(|e| e.trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect()
    }

    /// Playback volume (0-100)
    pub fn volume(&self) -> u8 {
        self.get_int("audio", "volume", 100).clamp(0, 100) as u8
    }

    /// Silence lengths for punctuation pauses and word gaps
    pub fn timing(&self) -> Timing {
        Timing {
            pause: seconds(self.get_float("audio", "pause", 0.5)),
            word_gap: seconds(self.get_float("audio", "word_gap", 0.0)),
        }
    }

    /// Punctuation that inserts a pause after a word
    pub fn pause_delimiters(&self) -> String {
        self.get_string("text", "pause_delimiters", DEFAULT_PAUSE_DELIMITERS)
    }

    /// Pronouncing dictionary file to use instead of the built-in one
    pub fn dictionary_path(&self) -> Option<PathBuf> {
        let configured = self.get_string("dictionary", "path", "");
        let configured = configured.trim();
        if configured.is_empty() {
            None
        } else {
            Some(PathBuf::from(configured))
        }
    }
}

/// Negative and non-finite values become zero
fn seconds(value: f32) -> Duration {
    if value.is_finite() && value > 0.0 {
        Duration::from_secs_f32(value)
    } else {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds() {
        assert_eq!(seconds(0.5), Duration::from_millis(500));
        assert_eq!(seconds(-1.0), Duration::ZERO);
        assert_eq!(seconds(f32::NAN), Duration::ZERO);
    }
}
