//! CMU Pronouncing Dictionary
//!
//! Reads both layouts the dictionary has shipped in:
//!
//! ```text
//! ;;; classic cmudict-0.7b
//! HELLO  HH AH0 L OW1
//! HELLO(1)  HH EH0 L OW1
//!
//! hello HH AH0 L OW1
//! hello(2) HH EH0 L OW1 # cmudict.dict
//! ```
//!
//! The 0.7b release is Latin-1 in a few places (`CAFÉ`), so lines that
//! are not valid UTF-8 are decoded as Latin-1.

use crate::phoneme::Phoneme;
use crate::Result;
use log::{debug, info, warn};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Dictionary compiled into the binary, used when no file is configured
static BUILTIN: &[u8] = include_bytes!("../assets/cmudict.dict");

/// Word to pronunciation lookup table
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    /// Lowercased word -> pronunciation variants, in file order
    entries: HashMap<String, Vec<Vec<Phoneme>>>,

    /// Lines that could not be parsed during loading
    skipped: usize,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in common-word dictionary
    pub fn builtin() -> Result<Self> {
        let dictionary = Self::parse(BUILTIN)?;
        info!("Loaded {} built-in dictionary words", dictionary.len());
        Ok(dictionary)
    }

    /// Load a dictionary file from disk
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading dictionary from {:?}", path);
        let file = File::open(path)?;
        let dictionary = Self::parse(BufReader::new(file))?;
        info!(
            "Loaded {} words from {:?} ({} lines skipped)",
            dictionary.len(),
            path,
            dictionary.skipped
        );
        Ok(dictionary)
    }

    /// Parse dictionary text from any buffered reader
    pub fn parse<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut dictionary = Self::new();
        let mut raw = Vec::new();
        let mut line_no = 0usize;

        loop {
            raw.clear();
            if reader.read_until(b'\n', &mut raw)? == 0 {
                break;
            }
            line_no += 1;
            let line = decode_line(&raw);

            match parse_line(&line) {
                Ok(Some((word, phonemes))) => dictionary.insert(word, phonemes),
                Ok(None) => {}
                Err(reason) => {
                    warn!("Skipping dictionary line {}: {}", line_no, reason);
                    dictionary.skipped += 1;
                }
            }
        }

        Ok(dictionary)
    }

    /// Add a pronunciation variant for a word
    pub fn insert(&mut self, word: &str, phonemes: Vec<Phoneme>) {
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push(phonemes);
    }

    /// First pronunciation of a word, if the dictionary knows it
    pub fn lookup(&self, word: &str) -> Option<&[Phoneme]> {
        self.entries
            .get(&word.to_lowercase())
            .and_then(|variants| variants.first())
            .map(|p| p.as_slice())
    }

    /// All known pronunciations of a word
    pub fn variants(&self, word: &str) -> &[Vec<Phoneme>] {
        self.entries
            .get(&word.to_lowercase())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of malformed lines ignored while parsing
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// UTF-8, or Latin-1 when the bytes are not UTF-8
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(raw) {
        Ok(line) => Cow::Borrowed(line),
        Err(_) => Cow::Owned(raw.iter().map(|&b| b as char).collect()),
    }
}

/// Parse one line into (headword, phonemes)
///
/// Returns `Ok(None)` for blank and comment lines.
fn parse_line(line: &str) -> std::result::Result<Option<(&str, Vec<Phoneme>)>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(";;;") {
        return Ok(None);
    }

    // cmudict.dict puts comments after the pronunciation
    let line = match line.find(" #") {
        Some(idx) => line[..idx].trim_end(),
        None => line,
    };

    let mut fields = line.split_whitespace();
    let Some(head) = fields.next() else {
        return Ok(None);
    };
    let word = strip_variant_marker(head);

    let phonemes = fields
        .map(|symbol| Phoneme::from_arpabet(symbol).map_err(|e| e.to_string()))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if phonemes.is_empty() {
        return Err(format!("no pronunciation for {:?}", head));
    }

    Ok(Some((word, phonemes)))
}

/// `hello(2)` -> `hello`
fn strip_variant_marker(head: &str) -> &str {
    if let Some(open) = head.rfind('(') {
        let inner = &head[open + 1..];
        if open > 0
            && inner.ends_with(')')
            && inner[..inner.len() - 1].chars().all(|c| c.is_ascii_digit())
        {
            return &head[..open];
        }
    }
    head
}
