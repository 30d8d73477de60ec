//! Input text tokenization
//!
//! Splits typed text into words and pause markers. Sentence punctuation
//! at the end of a word (`hello,` `done.` `really?!`) becomes a pause
//! after the word.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Punctuation that ends a word with a pause
pub const DEFAULT_PAUSE_DELIMITERS: &str = ",!?:;.";

/// Word separators: whitespace and double quotes
static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[ \t\r\n"]+"#).expect("separator pattern is valid"));

/// One unit of tokenized input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Token {
    /// A lowercased word
    Word(String),
    /// A pause requested by punctuation
    Pause,
}

/// Splits input text into [`Token`]s
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pause_delimiters: Vec<char>,
}

impl Tokenizer {
    /// Create a tokenizer pausing on the given punctuation characters
    pub fn new(pause_delimiters: &str) -> Self {
        Self {
            pause_delimiters: pause_delimiters.chars().collect(),
        }
    }

    fn is_pause_delimiter(&self, ch: char) -> bool {
        self.pause_delimiters.contains(&ch)
    }

    /// Tokenize text in reading order
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        for piece in SEPARATORS.split(text).filter(|p| !p.is_empty()) {
            // Brackets and quotes outside the punctuation: `(really!)` `'hello.'`
            let piece = piece.trim_matches(|c: char| {
                !c.is_alphanumeric() && !self.is_pause_delimiter(c)
            });
            let body = piece.trim_end_matches(|c: char| self.is_pause_delimiter(c));
            let pause = body.len() != piece.len();

            let word = body.trim_matches(|c: char| !c.is_alphanumeric());
            if !word.is_empty() {
                tokens.push(Token::Word(word.to_lowercase()));
            }
            if pause {
                tokens.push(Token::Pause);
            }
        }

        debug!("Tokenized {} chars into {} tokens", text.len(), tokens.len());
        tokens
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_PAUSE_DELIMITERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Token {
        Token::Word(s.to_string())
    }

    #[test]
    fn test_words_and_pauses() {
        let tokens = Tokenizer::default().tokenize("Hello, World!");
        assert_eq!(tokens, vec![word("hello"), Token::Pause, word("world"), Token::Pause]);
    }

    #[test]
    fn test_separators() {
        let tokens = Tokenizer::default().tokenize("  one\ttwo\n\"three\"  ");
        assert_eq!(tokens, vec![word("one"), word("two"), word("three")]);
    }

    #[test]
    fn test_delimiter_runs() {
        // A run of punctuation is one pause
        let tokens = Tokenizer::default().tokenize("what?! ok...");
        assert_eq!(tokens, vec![word("what"), Token::Pause, word("ok"), Token::Pause]);
    }

    #[test]
    fn test_lone_punctuation() {
        let tokens = Tokenizer::default().tokenize("wait . go");
        assert_eq!(tokens, vec![word("wait"), Token::Pause, word("go")]);
    }

    #[test]
    fn test_trims_brackets_keeps_inner_apostrophes() {
        let tokens = Tokenizer::default().tokenize("(don't) -- students'");
        assert_eq!(tokens, vec![word("don't"), word("students")]);
    }

    #[test]
    fn test_pause_inside_brackets_and_quotes() {
        let tokenizer = Tokenizer::default();
        assert_eq!(tokenizer.tokenize("(really!)"), vec![word("really"), Token::Pause]);
        assert_eq!(tokenizer.tokenize("'hello.'"), vec![word("hello"), Token::Pause]);
        assert_eq!(tokenizer.tokenize("\"done.\""), vec![word("done"), Token::Pause]);
        assert_eq!(
            tokenizer.tokenize("(like this.) end"),
            vec![word("like"), word("this"), Token::Pause, word("end")]
        );
    }

    #[test]
    fn test_quoted_speech() {
        let tokens = Tokenizer::default().tokenize("She said 'hello.' (really!)");
        assert_eq!(
            tokens,
            vec![
                word("she"),
                word("said"),
                word("hello"),
                Token::Pause,
                word("really"),
                Token::Pause
            ]
        );
    }

    #[test]
    fn test_inner_punctuation_stays() {
        let tokens = Tokenizer::default().tokenize("a,b");
        assert_eq!(tokens, vec![word("a,b")]);
    }

    #[test]
    fn test_custom_delimiters() {
        let tokens = Tokenizer::new("-").tokenize("stop- go.");
        assert_eq!(tokens, vec![word("stop"), Token::Pause, word("go")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(Tokenizer::default().tokenize("").is_empty());
        assert!(Tokenizer::default().tokenize(" \n\t ").is_empty());
    }
}
