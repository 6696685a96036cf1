//! Five-letter word representation
//!
//! A Word is validated once on construction: exactly five ASCII letters, stored lowercase.

use super::letter::{Letter, WORD_LEN};
use std::fmt;
use thiserror::Error;

/// A validated 5-letter lowercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Build a word from five letters
    ///
    /// Infallible: every `Letter` is already a valid lowercase character.
    #[must_use]
    pub fn from_letters(letters: [Letter; WORD_LEN]) -> Self {
        let chars = letters.map(Letter::byte);
        let text = letters.iter().map(|l| l.as_char()).collect();
        Self { text, chars }
    }

    /// Get the word as a string slice
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

    /// Get the letter at a 0-based index
    ///
    /// # Panics
    /// Panics if index >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, index: usize) -> u8 {
        self.chars[index]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.chars.contains(&letter.byte())
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

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crâne"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_from_letters() {
        let word = Word::from_letters([
            letter('z'),
            letter('e'),
            letter('b'),
            letter('r'),
            letter('a'),
        ]);
        assert_eq!(word, Word::new("zebra").unwrap());
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'c');
        assert_eq!(word.char_at(2), b'a');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(letter('c')));
        assert!(word.has_letter(letter('e')));
        assert!(!word.has_letter(letter('z')));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
