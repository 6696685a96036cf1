//! Wordle Filter
//!
//! Lists every dictionary word consistent with Wordle-style feedback: letters
//! fixed in place, letters present but misplaced, and letters still available.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_filter::dictionary::Dictionary;
//! use wordle_filter::generator::CandidateGenerator;
//! use wordle_filter::parser::ConstraintParser;
//!
//! let dictionary = Dictionary::from_text("crane\nslate\nstale\nsteal\n");
//! let constraints = ConstraintParser::default()
//!     .parse("s____", "e2", "talk")
//!     .unwrap();
//!
//! let candidates = CandidateGenerator::new(&dictionary).generate(&constraints);
//! assert_eq!(candidates.texts(), vec!["steal", "stale", "slate"]);
//! ```

// Core domain types
pub mod core;

// Feedback text to constraints
pub mod parser;

// Candidate enumeration
pub mod generator;

// Word list, cache and sources
pub mod dictionary;

// Where feedback comes from
pub mod input;

// Run configuration and logger setup
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
