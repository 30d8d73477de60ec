//! PETS - Personalized Text-to-Speech
//!
//! Speaks typed text with your own voice: every word is transcribed to
//! ARPAbet phonemes through the CMU Pronouncing Dictionary (or a letter
//! based fallback for unknown words) and voiced by playing one recorded
//! clip per phoneme, with pauses at punctuation.

pub mod app;
pub mod clipboard;
pub mod convert;
pub mod dictionary;
pub mod error;
pub mod fallback;
pub mod phoneme;
pub mod playback;
pub mod state;
pub mod text;
pub mod voice;

pub use error::{PetsError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
