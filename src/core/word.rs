//! Wordle word representation
//!
//! A Word stores a lowercase ASCII word of any positive length. The grid width
//! decides which lengths are playable; `Word::with_len` enforces that.

use rustc_hash::FxHashMap;
use std::fmt;

/// A lowercase ASCII word used as a guess or a target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidLength { expected: usize, actual: usize },
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty, non-ASCII, or contains
    /// anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("React").unwrap();
    /// assert_eq!(word.text(), "react");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_lowercase();

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Create a Word that must have exactly `len` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error
    /// from [`Word::new`].
    pub fn with_len(text: impl Into<String>, len: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() != len {
            return Err(WordError::InvalidLength {
                expected: len,
                actual: word.len(),
            });
        }
        Ok(word)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Uppercased form for display
    #[must_use]
    pub fn to_display(&self) -> String {
        self.text.to_ascii_uppercase()
    }

    /// Get the count of each letter in the word
    ///
    /// Used as the consumable pool during feedback evaluation.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.chars() {
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
        let word = Word::new("react").unwrap();
        assert_eq!(word.text(), "react");
        assert_eq!(word.chars(), b"react");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("REACT").unwrap();
        assert_eq!(word.text(), "react");

        let word2 = Word::new("ReAcT").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("réact"), Err(WordError::NonAscii));
        assert_eq!(Word::new("rea t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("reac7"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn non_ascii_that_lowercases_to_ascii_is_rejected() {
        // KELVIN SIGN lowercases to a plain 'k'
        assert_eq!(Word::new("\u{212A}ite"), Err(WordError::NonAscii));
        assert_eq!(Word::with_len("\u{212A}ite", 4), Err(WordError::NonAscii));
    }

    #[test]
    fn word_with_len_checks_length() {
        assert!(Word::with_len("react", 5).is_ok());
        assert_eq!(
            Word::with_len("reacts", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 6
            })
        );
        assert!(Word::with_len("kite", 4).is_ok());
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("allow").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b'a'), Some(&1));
        assert_eq!(counts.get(&b'l'), Some(&2));
        assert_eq!(counts.get(&b'o'), Some(&1));
        assert_eq!(counts.get(&b'w'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_display() {
        let word = Word::new("react").unwrap();
        assert_eq!(format!("{word}"), "react");
        assert_eq!(word.to_display(), "REACT");
    }
}
