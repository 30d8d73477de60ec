//! Fallback phoneme generation
//!
//! Words missing from the dictionary are spelled out letter by letter
//! with a fixed letter-to-phoneme table.

use crate::phoneme::Phoneme;
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::phoneme::Phoneme::*;

/// Two-letter spellings with a single sound, checked before single letters
static DIGRAPHS: Lazy<HashMap<&'static str, &'static [Phoneme]>> = Lazy::new(|| {
    let mut m: HashMap<&'static str, &'static [Phoneme]> = HashMap::new();
    m.insert("th", &[TH]);
    m.insert("sh", &[SH]);
    m.insert("ch", &[CH]);
    m.insert("ph", &[F]);
    m.insert("ck", &[K]);
    m.insert("ng", &[NG]);
    m.insert("wh", &[W]);
    m.insert("qu", &[K, W]);
    m
});

/// Letter and digit sounds
///
/// Digits are read as their English names.
static CHARACTERS: Lazy<HashMap<char, &'static [Phoneme]>> = Lazy::new(|| {
    let mut m: HashMap<char, &'static [Phoneme]> = HashMap::new();
    m.insert('a', &[AE]);
    m.insert('b', &[B]);
    m.insert('c', &[CH]);
    m.insert('d', &[D]);
    m.insert('e', &[EH]);
    m.insert('f', &[F]);
    m.insert('g', &[G]);
    m.insert('h', &[HH]);
    m.insert('i', &[IH]);
    m.insert('j', &[JH]);
    m.insert('k', &[K]);
    m.insert('l', &[L]);
    m.insert('m', &[M]);
    m.insert('n', &[N]);
    m.insert('o', &[OW]);
    m.insert('p', &[P]);
    m.insert('q', &[K]);
    m.insert('r', &[R]);
    m.insert('s', &[S]);
    m.insert('t', &[T]);
    m.insert('u', &[UH]);
    m.insert('v', &[V]);
    m.insert('w', &[W]);
    m.insert('x', &[K, S]);
    m.insert('y', &[Y]);
    m.insert('z', &[Z]);
    m.insert('0', &[Z, IH, R, OW]);
    m.insert('1', &[W, AH, N]);
    m.insert('2', &[T, UW]);
    m.insert('3', &[TH, R, IY]);
    m.insert('4', &[F, AO, R]);
    m.insert('5', &[F, AY, V]);
    m.insert('6', &[S, IH, K, S]);
    m.insert('7', &[S, EH, V, AH, N]);
    m.insert('8', &[EY, T]);
    m.insert('9', &[N, AY, N]);
    m
});

/// Result of spelling out an unknown word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fallback {
    pub phonemes: Vec<Phoneme>,

    /// Characters with no sound in the table, in order of appearance
    pub unmapped: Vec<char>,
}

/// Generate an approximate pronunciation for a word
pub fn fallback_phonemes(word: &str) -> Fallback {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let mut result = Fallback::default();
    let mut i = 0;

    while i < chars.len() {
        if i + 1 < chars.len() {
            let pair: String = chars[i..i + 2].iter().collect();
            if let Some(sounds) = DIGRAPHS.get(pair.as_str()) {
                result.phonemes.extend_from_slice(sounds);
                i += 2;
                continue;
            }
        }

        let ch = chars[i];
        match CHARACTERS.get(&ch) {
            Some(sounds) => result.phonemes.extend_from_slice(sounds),
            None if ch == '\'' => {}
            None => result.unmapped.push(ch),
        }
        i += 1;
    }

    debug!(
        "Fallback for {:?}: {} phonemes, {} unmapped",
        word,
        result.phonemes.len(),
        result.unmapped.len()
    );
    result
}
