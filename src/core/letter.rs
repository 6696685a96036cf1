//! Letters and word positions
//!
//! Both are small `u8` newtypes so constraint tables stay cheap to copy.

use std::fmt;

/// Number of letters in every word handled by this crate
pub const WORD_LEN: usize = 5;

/// A single lowercase ASCII letter (a-z)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, lowercasing it first
    ///
    /// Returns `None` for anything outside a-z / A-Z.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'q');
    /// assert!(Letter::new('3').is_none());
    /// ```
    #[must_use]
    pub const fn new(ch: char) -> Option<Self> {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Some(Self(lower as u8))
        } else {
            None
        }
    }

    /// Create a letter from a raw byte
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        let lower = byte.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Some(Self(lower))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One of the five slots in a word, numbered 1-5 as users type them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(u8);

impl Position {
    /// Create a position from its 1-based number
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::Position;
    ///
    /// assert_eq!(Position::new(1).unwrap().index(), 0);
    /// assert!(Position::new(0).is_none());
    /// assert!(Position::new(6).is_none());
    /// ```
    #[must_use]
    pub const fn new(number: usize) -> Option<Self> {
        if number >= 1 && number <= WORD_LEN {
            Some(Self(number as u8))
        } else {
            None
        }
    }

    /// Create a position from a 0-based index
    ///
    /// # Panics
    /// Panics in debug mode if `index >= WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        debug_assert!(index < WORD_LEN, "Position index must be < WORD_LEN");
        Self(index as u8 + 1)
    }

    /// 1-based position number
    #[inline]
    #[must_use]
    pub const fn number(self) -> usize {
        self.0 as usize
    }

    /// 0-based index into a word
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// All positions, first to last
    pub fn all() -> impl Iterator<Item = Self> {
        (0..WORD_LEN).map(Self::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_lowercases() {
        assert_eq!(Letter::new('A'), Letter::new('a'));
        assert_eq!(Letter::from_byte(b'Z').unwrap().byte(), b'z');
    }

    #[test]
    fn letter_rejects_non_letters() {
        assert!(Letter::new('_').is_none());
        assert!(Letter::new(' ').is_none());
        assert!(Letter::new('é').is_none());
        assert!(Letter::from_byte(b'1').is_none());
    }

    #[test]
    fn letter_display() {
        assert_eq!(format!("{}", Letter::new('k').unwrap()), "k");
    }

    #[test]
    fn position_bounds() {
        assert!(Position::new(0).is_none());
        assert!(Position::new(1).is_some());
        assert!(Position::new(5).is_some());
        assert!(Position::new(6).is_none());
    }

    #[test]
    fn position_index_round_trip() {
        for index in 0..WORD_LEN {
            let position = Position::from_index(index);
            assert_eq!(position.index(), index);
            assert_eq!(position.number(), index + 1);
        }
    }

    #[test]
    fn position_all_in_order() {
        let numbers: Vec<usize> = Position::all().map(Position::number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }
}
