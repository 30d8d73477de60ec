//! Turning a transcript into a list of clips and silences

use crate::convert::{Segment, Transcript};
use crate::phoneme::Phoneme;
use crate::voice::VoiceBank;
use log::{debug, warn};
use std::path::PathBuf;
use std::time::Duration;

/// Pause length at punctuation
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(500);

/// Silence lengths used while scheduling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Silence for each punctuation pause
    pub pause: Duration,

    /// Silence between two consecutive words, zero to run them together
    pub word_gap: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            pause: DEFAULT_PAUSE,
            word_gap: Duration::ZERO,
        }
    }
}

/// One playback step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cue {
    Clip { phoneme: Phoneme, path: PathBuf },
    Silence(Duration),
}

/// Ordered playback steps for a transcript
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub cues: Vec<Cue>,

    /// Phonemes skipped because the voice has no clip for them, in order
    pub missing: Vec<Phoneme>,
}

impl Schedule {
    /// Resolve every phoneme of the transcript to a clip of the voice
    pub fn build(transcript: &Transcript, bank: &VoiceBank, timing: Timing) -> Self {
        let mut schedule = Self::default();
        let mut previous_was_word = false;

        for segment in &transcript.segments {
            match segment {
                Segment::Pause => {
                    schedule.cues.push(Cue::Silence(timing.pause));
                    previous_was_word = false;
                }
                Segment::Word(pronunciation) => {
                    if previous_was_word && !timing.word_gap.is_zero() {
                        schedule.cues.push(Cue::Silence(timing.word_gap));
                    }
                    for &phoneme in &pronunciation.phonemes {
                        match bank.clip(phoneme) {
                            Some(path) => schedule.cues.push(Cue::Clip {
                                phoneme,
                                path: path.to_path_buf(),
                            }),
                            None => {
                                warn!(
                                    "Audio file not found: {} in {:?}",
                                    phoneme,
                                    bank.dir()
                                );
                                schedule.missing.push(phoneme);
                            }
                        }
                    }
                    previous_was_word = true;
                }
            }
        }

        debug!(
            "Scheduled {} cues ({} phonemes missing)",
            schedule.cues.len(),
            schedule.missing.len()
        );
        schedule
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Total silence in the schedule
    pub fn silence(&self) -> Duration {
        self.cues
            .iter()
            .filter_map(|c| match c {
                Cue::Silence(d) => Some(*d),
                Cue::Clip { .. } => None,
            })
            .sum()
    }
}
