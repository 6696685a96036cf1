//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_conflicts, print_filter_result, print_parse_error};
