//! Seven-letter word representation
//!
//! A Word stores a validated 7-letter word, normalized to uppercase to match
//! the corpus storage format.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every word handled by this crate
pub const WORD_LEN: usize = 7;

/// A 7-letter word, uppercase ASCII
///
/// Stores the word as bytes for cheap positional access during scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAlphabetic,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAlphabetic => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is case-insensitive; the stored form is uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 7
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use sevenle::core::Word;
    ///
    /// let word = Word::new("example").unwrap();
    /// assert_eq!(word.text(), "EXAMPLE");
    ///
    /// assert!(Word::new("short").is_err());
    /// assert!(Word::new("examp1e").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        // Count chars rather than bytes so multi-byte input reports a
        // sensible length instead of tripping the array conversion below
        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(WordError::InvalidLength(len));
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic);
        }

        let text = text.to_ascii_uppercase();
        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice (uppercase)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-6)
    ///
    /// # Panics
    /// Panics if position >= 7
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("example").unwrap();
        assert_eq!(word.text(), "EXAMPLE");
        assert_eq!(word.chars(), b"EXAMPLE");
    }

    #[test]
    fn word_creation_case_normalized() {
        let word = Word::new("example").unwrap();
        assert_eq!(word.text(), "EXAMPLE");

        let word2 = Word::new("ExAmPlE").unwrap();
        assert_eq!(word2.text(), "EXAMPLE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("toolonger"),
            Err(WordError::InvalidLength(9))
        ));
        assert!(matches!(
            Word::new("short"),
            Err(WordError::InvalidLength(5))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("examp1e").is_err()); // Number
        assert!(Word::new("examp e").is_err()); // Space
        assert!(Word::new("examp!e").is_err()); // Punctuation
        assert!(Word::new("exampl\u{e9}").is_err()); // Non-ASCII letter
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("stretch").unwrap();
        assert_eq!(word.char_at(0), b'S');
        assert_eq!(word.char_at(3), b'E');
        assert_eq!(word.char_at(6), b'H');
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("express").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b'E'), Some(&2));
        assert_eq!(counts.get(&b'S'), Some(&2));
        assert_eq!(counts.get(&b'X'), Some(&1));
        assert_eq!(counts.get(&b'P'), Some(&1));
        assert_eq!(counts.get(&b'R'), Some(&1));
    }

    #[test]
    fn word_char_counts_all_unique() {
        let word = Word::new("anxiety").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 7);
        assert!(counts.values().all(|&count| count == 1));
    }

    #[test]
    fn word_display() {
        let word = Word::new("example").unwrap();
        assert_eq!(format!("{word}"), "EXAMPLE");
    }

    #[test]
    fn word_equality_case_insensitive() {
        let word1 = Word::new("example").unwrap();
        let word2 = Word::new("EXAMPLE").unwrap();
        let word3 = Word::new("anxiety").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
