//! Text to phoneme conversion

use crate::dictionary::Dictionary;
use crate::fallback::fallback_phonemes;
use crate::phoneme::{self, Phoneme};
use crate::text::{Token, Tokenizer};
use log::{debug, info};
use serde::Serialize;

/// Header above the list of words the dictionary did not know
pub const UNRECOGNIZED_HEADER: &str = "Unrecognized Words and Generated Phonemes:";

/// How a pronunciation was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Dictionary,
    Fallback,
}

/// Phonemes for one word of the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pronunciation {
    pub word: String,
    pub phonemes: Vec<Phoneme>,
    pub source: Source,

    /// Characters the fallback could not voice
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unmapped: Vec<char>,
}

impl Pronunciation {
    /// Space separated ARPAbet, e.g. `HH AH L OW`
    pub fn arpabet(&self) -> String {
        phoneme::join(&self.phonemes)
    }
}

/// One step of a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    Word(Pronunciation),
    Pause,
}

/// Phoneme transcription of a whole input text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// Words that had to be generated by the fallback, in input order
    pub fn unrecognized(&self) -> impl Iterator<Item = &Pronunciation> {
        self.words().filter(|p| p.source == Source::Fallback)
    }

    /// All word pronunciations, skipping pauses
    pub fn words(&self) -> impl Iterator<Item = &Pronunciation> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Word(p) => Some(p),
            Segment::Pause => None,
        })
    }

    /// Total number of phonemes across all words
    pub fn phoneme_count(&self) -> usize {
        self.words().map(|p| p.phonemes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Text shown in the output panel
    ///
    /// One line per segment, then the unrecognized words with the
    /// phonemes generated for them.
    pub fn render(&self) -> String {
        let mut out = self
            .segments
            .iter()
            .map(|s| match s {
                Segment::Word(p) => p.arpabet(),
                Segment::Pause => "(pause)".to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n");

        let mut unrecognized = self.unrecognized().peekable();
        if unrecognized.peek().is_some() {
            out.push_str("\n\n");
            out.push_str(UNRECOGNIZED_HEADER);
            out.push('\n');
            for p in unrecognized {
                out.push_str(&format!("{}: {}\n", p.word, p.arpabet()));
            }
        }
        out
    }
}

/// Converts text to a [`Transcript`] using a dictionary with fallback
pub struct Converter {
    dictionary: Dictionary,
    tokenizer: Tokenizer,
}

impl Converter {
    pub fn new(dictionary: Dictionary, tokenizer: Tokenizer) -> Self {
        Self {
            dictionary,
            tokenizer,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Pronounce a single word
    pub fn pronounce(&self, word: &str) -> Pronunciation {
        match self.dictionary.lookup(word) {
            Some(phonemes) => Pronunciation {
                word: word.to_string(),
                phonemes: phonemes.to_vec(),
                source: Source::Dictionary,
                unmapped: Vec::new(),
            },
            None => {
                debug!("{:?} not in dictionary, using fallback", word);
                let fallback = fallback_phonemes(word);
                Pronunciation {
                    word: word.to_string(),
                    phonemes: fallback.phonemes,
                    source: Source::Fallback,
                    unmapped: fallback.unmapped,
                }
            }
        }
    }

    /// Convert text in reading order
    pub fn convert(&self, text: &str) -> Transcript {
        let segments = self
            .tokenizer
            .tokenize(text)
            .into_iter()
            .map(|token| match token {
                Token::Word(word) => Segment::Word(self.pronounce(&word)),
                Token::Pause => Segment::Pause,
            })
            .collect();

        let transcript = Transcript { segments };
        info!(
            "Converted {} segments, {} phonemes, {} unrecognized",
            transcript.segments.len(),
            transcript.phoneme_count(),
            transcript.unrecognized().count()
        );
        transcript
    }
}
