//! Candidate generation
//!
//! Maps three constraint sets and a dictionary to the list of words that
//! satisfy them. Pure and synchronous: no I/O, no shared state.

mod candidates;
mod enumerate;
mod pool;

pub use candidates::{CandidateGenerator, CandidateList, Generation, GenerationStats, generate};
pub use enumerate::{Enumeration, Pruned, exhaustive};
pub use pool::{LetterPool, PositionSets};
