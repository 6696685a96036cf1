//! Command implementations

pub mod filter;
pub mod simple;

pub use filter::{FilterResult, run_filter};
pub use simple::run_simple;
