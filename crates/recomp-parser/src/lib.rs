//! Parser for the recomp configuration language.
//!
//! This crate provides a recursive descent parser that turns a textual
//! algorithm configuration such as `lzss(coder = binary, threshold = 3)`
//! into an abstract syntax tree.
//!
//! Parsing fails fast: the first violation aborts with a [`ParseError`]
//! carrying the cursor position and the remaining unconsumed input.

mod error;
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use parser::{DEFAULT_MAX_DEPTH, Parser};

use recomp_syntax::Value;

/// Parse a configuration string into an AST.
pub fn parse(source: &str) -> Result<Value, ParseError> {
    Parser::new(source).parse_root()
}
