//! Application state
//!
//! A [`Session`] holds the loaded configuration and dictionary and runs
//! the text -> transcript -> schedule pipeline for both the window and
//! the command line.

pub mod config;

use crate::convert::{Converter, Transcript};
use crate::dictionary::Dictionary;
use crate::playback::Schedule;
use crate::text::Tokenizer;
use crate::voice::VoiceBank;
use crate::{PetsError, Result};
use config::Config;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// A converted input, ready to play
#[derive(Debug, Clone)]
pub struct Prepared {
    pub transcript: Transcript,
    pub schedule: Schedule,
}

/// Where the session's dictionary came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// The copy compiled into the binary
    BuiltIn,
    /// The file named by `[dictionary] path`
    File(PathBuf),
    /// `[dictionary] path` names a missing file, so the built-in copy is used
    Missing(PathBuf),
    /// Passed to [`Session::with_dictionary`]
    Provided,
}

/// Loaded configuration and dictionary
pub struct Session {
    /// Configuration loaded from ~/.pets.cfg
    pub config: Config,

    converter: Converter,
    source: DictionarySource,
}

impl Session {
    /// Build a session with the configured dictionary
    ///
    /// Without a `[dictionary] path` the built-in dictionary is used. A
    /// configured file that does not exist is not an error: the built-in
    /// dictionary stands in and the status says so.
    pub fn new(config: Config) -> Result<Self> {
        let (dictionary, source) = match config.dictionary_path() {
            Some(path) if path.is_file() => {
                (Dictionary::load(&path)?, DictionarySource::File(path))
            }
            Some(path) => {
                warn!("Dictionary {:?} not found, using the built-in dictionary", path);
                (Dictionary::builtin()?, DictionarySource::Missing(path))
            }
            None => (Dictionary::builtin()?, DictionarySource::BuiltIn),
        };

        let mut session = Self::with_dictionary(config, dictionary);
        session.source = source;
        Ok(session)
    }

    /// Build a session around an already loaded dictionary
    pub fn with_dictionary(config: Config, dictionary: Dictionary) -> Self {
        let tokenizer = Tokenizer::new(&config.pause_delimiters());
        info!("Session ready with {} dictionary words", dictionary.len());
        Self {
            config,
            converter: Converter::new(dictionary, tokenizer),
            source: DictionarySource::Provided,
        }
    }

    pub fn dictionary_source(&self) -> &DictionarySource {
        &self.source
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// One-line description of the dictionary for status displays
    pub fn dictionary_status(&self) -> String {
        let words = self.converter.dictionary().len();
        match &self.source {
            _ if words == 0 => "No dictionary words; using fallback phonemes only".to_string(),
            DictionarySource::BuiltIn => format!("Dictionary: {} words (built-in)", words),
            DictionarySource::Missing(path) => format!(
                "Dictionary not found at {}; using built-in dictionary ({} words)",
                path.display(),
                words
            ),
            DictionarySource::File(_) | DictionarySource::Provided => {
                format!("Dictionary: {} words", words)
            }
        }
    }

    /// Convert text without touching any audio
    pub fn convert(&self, text: &str) -> Transcript {
        self.converter.convert(text)
    }

    /// Open the voice in `audio_dir` with the configured extensions
    pub fn open_voice(&self, audio_dir: &Path) -> Result<VoiceBank> {
        VoiceBank::open(audio_dir, &self.config.extensions())
    }

    /// Validate the user's input and build everything needed to play it
    pub fn prepare(&self, text: &str, audio_dir: &str) -> Result<Prepared> {
        let text = text.trim();
        let audio_dir = audio_dir.trim();
        if text.is_empty() || audio_dir.is_empty() {
            return Err(PetsError::MissingInput);
        }

        let bank = self.open_voice(Path::new(audio_dir))?;
        let transcript = self.convert(text);
        let schedule = Schedule::build(&transcript, &bank, self.config.timing());

        Ok(Prepared {
            transcript,
            schedule,
        })
    }
}
