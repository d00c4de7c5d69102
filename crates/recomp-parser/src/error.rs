//! Parser errors.

use recomp_common::Span;
use recomp_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use std::fmt;
use thiserror::Error;

/// The cause of a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// An identifier was required at this position.
    ExpectedIdentifier,
    /// Inside an argument list, neither `)` nor `,` followed an argument.
    ExpectedDelimiter,
    /// A string literal was opened but never closed.
    UnterminatedString,
    /// Input remained after the top-level value.
    ExpectedEof,
    /// The invocation nesting exceeded the configured maximum depth.
    TooDeep,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ParseErrorKind::ExpectedIdentifier => "Expected an identifier",
            ParseErrorKind::ExpectedDelimiter => "Expected ) or ,",
            ParseErrorKind::UnterminatedString => "Expected \"",
            ParseErrorKind::ExpectedEof => "Expected end of input",
            ParseErrorKind::TooDeep => "Exceeded maximum nesting depth",
        };
        write!(f, "{}", text)
    }
}

/// A syntax error, carrying the cursor position and the remaining
/// unconsumed input as diagnostic context.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{cause}, found {found}")]
pub struct ParseError {
    pub cause: ParseErrorKind,
    pub span: Span,
    /// The input text from the error position onward.
    pub found: String,
}

impl ParseError {
    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = match self.cause {
            ParseErrorKind::ExpectedIdentifier => ErrorCode::ExpectedIdentifier,
            ParseErrorKind::ExpectedDelimiter => ErrorCode::ExpectedDelimiter,
            ParseErrorKind::UnterminatedString => ErrorCode::UnterminatedString,
            ParseErrorKind::ExpectedEof => ErrorCode::TrailingInput,
            ParseErrorKind::TooDeep => ErrorCode::NestingTooDeep,
        };
        let diagnostic = Diagnostic::error(DiagnosticKind::Parser, self.span, self.to_string())
            .with_code(code)
            .with_label(Label::new(self.span, code.description()));
        match self.cause {
            ParseErrorKind::UnterminatedString => {
                diagnostic.with_help("close the string literal with `\"`")
            }
            ParseErrorKind::ExpectedEof => diagnostic
                .with_help("a configuration is a single value; quote it if it contains spaces"),
            _ => diagnostic,
        }
    }
}
