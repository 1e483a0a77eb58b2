//! Shared tokenizer for tuple indexing and probing.

use std::io::Read;

use crate::types::MatchResult;

/// Punctuation that separates words in addition to whitespace.
const PUNCTUATION: &[char] = &[',', '!', '?', '.'];

/// Deterministic word splitter.
///
/// Words keep their original case; the thesaurus lower-cases them at lookup.
/// Only whitespace and [`PUNCTUATION`] separate words, so apostrophes, hyphens
/// and other symbols stay inside tokens.
pub struct Tokenizer {
    punctuation: &'static [char],
}

impl Tokenizer {
    /// Create a tokenizer with the default delimiter set.
    pub fn new() -> Self {
        Self {
            punctuation: PUNCTUATION,
        }
    }

    fn is_delimiter(&self, c: char) -> bool {
        c.is_whitespace() || self.punctuation.contains(&c)
    }

    /// Split text into words. Runs of delimiters collapse.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| self.is_delimiter(c))
            .filter(|token| !token.is_empty())
            .map(|s| s.to_string())
            .collect()
    }

    /// Read a whole stream and tokenize it. Read failures (including invalid
    /// UTF-8) are returned unchanged.
    pub fn tokenize_reader<R: Read>(&self, mut reader: R) -> MatchResult<Vec<String>> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(self.tokenize(&text))
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
