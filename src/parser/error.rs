//! Parse errors for raw feedback text

use std::fmt;
use thiserror::Error;

/// Which of the three feedback inputs an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Green,
    Yellow,
    Gray,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Green => write!(f, "green"),
            Self::Yellow => write!(f, "yellow"),
            Self::Gray => write!(f, "gray"),
        }
    }
}

/// Malformed feedback input
///
/// Every message tells the user what to type instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(
        "green pattern '{text}' has {len} characters; use at most 5, with '{placeholder}' for unknown positions (e.g. '__a__')"
    )]
    GreenTooLong {
        text: String,
        len: usize,
        placeholder: char,
    },

    #[error("{field} input contains '{ch}', which is not a letter a-z")]
    InvalidLetter { field: Field, ch: char },

    #[error("yellow entry '{token}' does not start with a letter; write a letter then a position, e.g. 'a1'")]
    MissingLetter { token: String },

    #[error("yellow entry '{token}' is missing its position; write a letter then a position, e.g. 'a1'")]
    MissingPosition { token: String },

    #[error("yellow entry '{token}' has a non-numeric position; write a letter then digits, e.g. 'a1'")]
    InvalidPosition { token: String },

    #[error("yellow entry '{token}' refers to position {position}; positions run from 1 to 5")]
    PositionOutOfRange { token: String, position: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_actionable() {
        let err = ParseError::MissingPosition {
            token: "b".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "yellow entry 'b' is missing its position; write a letter then a position, e.g. 'a1'"
        );

        let err = ParseError::InvalidLetter {
            field: Field::Gray,
            ch: '7',
        };
        assert_eq!(err.to_string(), "gray input contains '7', which is not a letter a-z");
    }
}
