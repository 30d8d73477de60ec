//! Error types for PETS

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for PETS
#[derive(Error, Debug)]
pub enum PetsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("INI parse error: {0}")]
    IniParse(String),

    #[error("Unknown ARPAbet symbol: {0:?}")]
    UnknownPhoneme(String),

    #[error("Audio directory not found: {}", .0.display())]
    AudioDir(PathBuf),

    #[error("Playback error: {0}")]
    Playback(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Please enter both text and audio directory.")]
    MissingInput,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for PETS operations
pub type Result<T> = std::result::Result<T, PetsError>;

impl From<String> for PetsError {
    fn from(s: String) -> Self {
        PetsError::Other(s)
    }
}

impl From<&str> for PetsError {
    fn from(s: &str) -> Self {
        PetsError::Other(s.to_string())
    }
}
