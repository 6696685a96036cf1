//! Constraint parsing
//!
//! Converts the three raw feedback strings into structured constraint sets.

mod error;
mod feedback;

pub use error::{Field, ParseError};
pub use feedback::{ConstraintParser, DEFAULT_PLACEHOLDER, parse, parse_placeholder};
