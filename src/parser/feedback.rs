//! Feedback text -> constraint sets
//!
//! Three input formats:
//! - green: `__a__`, placeholder for unknown positions, may be shorter than 5
//! - yellow: `a1 b3`, letter then 1-based position, whitespace separated
//! - gray: `xqz`, a flat list of letters

use super::error::{Field, ParseError};
use crate::core::{
    Constraints, GrayConstraint, GreenConstraint, Letter, Position, WORD_LEN, YellowConstraint,
};
use log::debug;

/// Placeholder used for unknown green positions unless configured otherwise
pub const DEFAULT_PLACEHOLDER: char = '_';

/// Turns raw feedback text into [`Constraints`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintParser {
    placeholder: char,
}

impl Default for ConstraintParser {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }
}

impl ConstraintParser {
    #[must_use]
    pub const fn new(placeholder: char) -> Self {
        Self {
            placeholder: placeholder.to_ascii_lowercase(),
        }
    }

    #[must_use]
    pub const fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Parse all three inputs
    ///
    /// # Errors
    /// Returns the first `ParseError` found, checking green, then yellow, then gray.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Letter, Position};
    /// use wordle_filter::parser::ConstraintParser;
    ///
    /// let parser = ConstraintParser::default();
    /// let constraints = parser.parse("__a__", "r1 t4", "xqz").unwrap();
    ///
    /// let third = Position::new(3).unwrap();
    /// assert_eq!(constraints.greens.get(third), Letter::new('a'));
    /// assert_eq!(constraints.yellows.letters().len(), 2);
    /// assert_eq!(constraints.grays.letters().len(), 3);
    ///
    /// assert!(parser.parse("", "a1 b", "").is_err());
    /// ```
    pub fn parse(&self, green: &str, yellow: &str, gray: &str) -> Result<Constraints, ParseError> {
        let greens = self.parse_greens(green)?;
        debug!("Greens: {greens}");
        let yellows = Self::parse_yellows(yellow)?;
        debug!("Yellows: {yellows}");
        let grays = Self::parse_grays(gray)?;
        debug!("Grays: {grays}");

        Ok(Constraints::new(greens, yellows, grays))
    }

    /// Parse the green pattern
    ///
    /// # Errors
    /// `GreenTooLong` for more than five characters, `InvalidLetter` for anything
    /// that is neither the placeholder nor a letter.
    pub fn parse_greens(&self, text: &str) -> Result<GreenConstraint, ParseError> {
        let text = text.trim().to_lowercase();
        let len = text.chars().count();
        if len > WORD_LEN {
            return Err(ParseError::GreenTooLong {
                text,
                len,
                placeholder: self.placeholder,
            });
        }

        let mut greens = GreenConstraint::new();
        for (i, ch) in text.chars().enumerate() {
            if ch == self.placeholder {
                continue;
            }
            let letter = Letter::new(ch).ok_or(ParseError::InvalidLetter {
                field: Field::Green,
                ch,
            })?;
            greens.set(Position::from_index(i), letter);
        }

        Ok(greens)
    }

    /// Parse whitespace-separated `<letter><position>` tokens
    ///
    /// # Errors
    /// Any token that is not a single letter followed by a position 1-5.
    pub fn parse_yellows(text: &str) -> Result<YellowConstraint, ParseError> {
        let text = text.trim().to_lowercase();
        let mut yellows = YellowConstraint::new();

        for token in text.split_whitespace() {
            let (letter, position) = parse_yellow_token(token)?;
            yellows.insert(position, letter);
        }

        Ok(yellows)
    }

    /// Parse a flat list of letters; whitespace between letters is ignored
    ///
    /// # Errors
    /// `InvalidLetter` for any other non-letter character.
    pub fn parse_grays(text: &str) -> Result<GrayConstraint, ParseError> {
        let mut grays = GrayConstraint::new();

        for ch in text.trim().to_lowercase().chars() {
            if ch.is_whitespace() {
                continue;
            }
            let letter = Letter::new(ch).ok_or(ParseError::InvalidLetter {
                field: Field::Gray,
                ch,
            })?;
            grays.insert(letter);
        }

        Ok(grays)
    }
}

fn parse_yellow_token(token: &str) -> Result<(Letter, Position), ParseError> {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return Err(ParseError::MissingLetter {
            token: token.to_string(),
        });
    };

    if first.is_ascii_digit() {
        return Err(ParseError::MissingLetter {
            token: token.to_string(),
        });
    }

    let letter = Letter::new(first).ok_or(ParseError::InvalidLetter {
        field: Field::Yellow,
        ch: first,
    })?;

    let digits = chars.as_str();
    if digits.is_empty() {
        return Err(ParseError::MissingPosition {
            token: token.to_string(),
        });
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidPosition {
            token: token.to_string(),
        });
    }

    let position = digits
        .parse::<usize>()
        .ok()
        .and_then(Position::new)
        .ok_or_else(|| ParseError::PositionOutOfRange {
            token: token.to_string(),
            position: digits.to_string(),
        })?;

    Ok((letter, position))
}

/// Parse with the default placeholder
///
/// # Errors
/// See [`ConstraintParser::parse`].
pub fn parse(green: &str, yellow: &str, gray: &str) -> Result<Constraints, ParseError> {
    ConstraintParser::default().parse(green, yellow, gray)
}

/// Validate a placeholder given on the command line
///
/// A placeholder must be one character that can never be a letter of the
/// word and survives trimming of the green text.
///
/// # Errors
/// Returns a message naming the problem when `value` is not exactly one
/// character, or is whitespace or a letter.
///
/// # Examples
/// ```
/// use wordle_filter::parser::parse_placeholder;
///
/// assert_eq!(parse_placeholder("."), Ok('.'));
/// assert!(parse_placeholder("a").is_err());
/// ```
pub fn parse_placeholder(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Err(format!("placeholder must be a single character, got '{value}'"));
    };
    if ch.is_whitespace() {
        return Err("placeholder cannot be whitespace".to_string());
    }
    if ch.is_alphabetic() {
        return Err(format!("placeholder '{ch}' is a letter; use a symbol such as '_' or '.'"));
    }
    Ok(ch)
}
