//! CLI command implementations.

pub mod eval;
pub mod list;
pub mod parse;
pub mod pattern;
