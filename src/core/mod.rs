//! Core domain types for word filtering
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and cheap to construct per request.

mod constraints;
mod letter;
mod word;

pub use constraints::{Conflict, Constraints, GrayConstraint, GreenConstraint, YellowConstraint};
pub use letter::{Letter, Position, WORD_LEN};
pub use word::{Word, WordError};
