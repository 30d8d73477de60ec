//! ARPAbet phoneme symbols
//!
//! The 39 phonemes of the CMU Pronouncing Dictionary. Dictionary entries
//! carry lexical stress as a trailing digit on vowels (`AH0`, `EY1`); stress
//! is not voiced by the clip player, so it is dropped on parse.

use crate::{PetsError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// One ARPAbet phoneme
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Phoneme {
    AA,
    AE,
    AH,
    AO,
    AW,
    AY,
    B,
    CH,
    D,
    DH,
    EH,
    ER,
    EY,
    F,
    G,
    HH,
    IH,
    IY,
    JH,
    K,
    L,
    M,
    N,
    NG,
    OW,
    OY,
    P,
    R,
    S,
    SH,
    T,
    TH,
    UH,
    UW,
    V,
    W,
    Y,
    Z,
    ZH,
}

impl Phoneme {
    /// Parse a dictionary symbol, ignoring any trailing stress digits
    ///
    /// `"ah0"`, `"AH1"` and `"AH"` all parse to [`Phoneme::AH`].
    pub fn from_arpabet(symbol: &str) -> Result<Self> {
        let bare = symbol.trim_end_matches(|c: char| c.is_ascii_digit());
        Phoneme::from_str(bare).map_err(|_| PetsError::UnknownPhoneme(symbol.to_string()))
    }

    /// The canonical upper-case symbol
    pub fn symbol(self) -> &'static str {
        self.into()
    }

    pub fn is_vowel(self) -> bool {
        use Phoneme::*;
        matches!(
            self,
            AA | AE | AH | AO | AW | AY | EH | ER | EY | IH | IY | OW | OY | UH | UW
        )
    }
}

/// Join phonemes the way dictionaries print them: `HH AH L OW`
pub fn join(phonemes: &[Phoneme]) -> String {
    phonemes
        .iter()
        .map(|p| p.symbol())
        .collect::<Vec<_>>()
        .join(" ")
}
