//! Recorded phoneme clips
//!
//! A voice is a directory holding one recording per phoneme, named after
//! the ARPAbet symbol: `AA.wav`, `AE.wav`, ... `ZH.wav`.

use crate::phoneme::Phoneme;
use crate::{PetsError, Result};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

/// Clip files found in an audio directory
#[derive(Debug, Clone)]
pub struct VoiceBank {
    dir: PathBuf,
    clips: HashMap<Phoneme, PathBuf>,
}

impl VoiceBank {
    /// Scan an audio directory for phoneme clips
    ///
    /// `extensions` is in order of preference: with `["wav", "mp3"]`, a
    /// directory holding both `AH.wav` and `AH.mp3` plays `AH.wav`.
    pub fn open(dir: &Path, extensions: &[String]) -> Result<Self> {
        if !dir.is_dir() {
            return Err(PetsError::AudioDir(dir.to_path_buf()));
        }
        debug!("Scanning {:?} for {:?} clips", dir, extensions);

        // phoneme -> (extension rank, path)
        let mut found: HashMap<Phoneme, (usize, PathBuf)> = HashMap::new();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let (Some(stem), Some(ext)) = (
                path.file_stem().and_then(|s| s.to_str()),
                path.extension().and_then(|s| s.to_str()),
            ) else {
                continue;
            };
            let Some(rank) = extensions
                .iter()
                .position(|e| e.eq_ignore_ascii_case(ext))
            else {
                continue;
            };
            // Stress-marked names like AH0.wav are not phoneme clips
            let Ok(phoneme) = stem.parse::<Phoneme>() else {
                debug!("Ignoring {:?}: not a phoneme name", path);
                continue;
            };

            match found.get(&phoneme) {
                Some((best, _)) if *best <= rank => {}
                _ => {
                    found.insert(phoneme, (rank, path));
                }
            }
        }

        let bank = Self {
            dir: dir.to_path_buf(),
            clips: found.into_iter().map(|(p, (_, path))| (p, path)).collect(),
        };

        let missing = bank.missing();
        info!("Found {} phoneme clips in {:?}", bank.len(), dir);
        if !missing.is_empty() {
            warn!(
                "No clips for {} phonemes: {}",
                missing.len(),
                crate::phoneme::join(&missing)
            );
        }
        Ok(bank)
    }

    /// Path of the clip for a phoneme
    pub fn clip(&self, phoneme: Phoneme) -> Option<&Path> {
        self.clips.get(&phoneme).map(|p| p.as_path())
    }

    /// Phonemes with no recording, in symbol order
    pub fn missing(&self) -> Vec<Phoneme> {
        Phoneme::iter()
            .filter(|p| !self.clips.contains_key(p))
            .collect()
    }

    /// The scanned directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of phonemes with a clip
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
