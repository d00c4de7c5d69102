//! The declaration model.

use recomp_common::Span;
use recomp_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode};
use recomp_parser::ParseError;
use recomp_syntax::Value;
use std::fmt;
use thiserror::Error;

/// Declaration errors.
#[derive(Debug, Error)]
pub enum DeclError {
    #[error(transparent)]
    Syntax(#[from] ParseError),

    #[error("malformed declaration: {0}")]
    MalformedDeclaration(String),

    #[error("algorithm `{name}` is already declared under type `{ty}`")]
    DuplicateName { ty: String, name: String },
}

impl DeclError {
    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            DeclError::Syntax(err) => err.to_diagnostic(),
            DeclError::MalformedDeclaration(_) => {
                Diagnostic::error(DiagnosticKind::Decl, Span::DUMMY, self.to_string())
                    .with_code(ErrorCode::MalformedDeclaration)
            }
            DeclError::DuplicateName { .. } => {
                Diagnostic::error(DiagnosticKind::Decl, Span::DUMMY, self.to_string())
                    .with_code(ErrorCode::DuplicateAlgorithm)
            }
        }
    }
}

/// The registered signature of one implementation variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Algorithm {
    name: String,
    params: Vec<Param>,
    doc: String,
}

/// One declared parameter: name, static/dynamic flag, declared type, and
/// an optional default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    name: String,
    is_static: bool,
    ty: String,
    default: Option<Value>,
}

impl Param {
    pub fn new(name: impl Into<String>, is_static: bool, ty: impl Into<String>) -> Self {
        Param {
            name: name.into(),
            is_static,
            ty: ty.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

impl Algorithm {
    pub fn new(name: impl Into<String>, params: Vec<Param>, doc: impl Into<String>) -> Self {
        Algorithm {
            name: name.into(),
            params,
            doc: doc.into(),
        }
    }

    /// Build a declaration from a parsed AST value.
    ///
    /// The value must be an invocation whose arguments each take one of two
    /// shapes: `name: [static] type = default`, or `name: [static] type`
    /// (no keyword; the value is then an argument-less invocation naming
    /// the parameter). This lets a human-authored declaration list double
    /// as its own parseable syntax.
    pub fn from_ast(value: Value, doc: impl Into<String>) -> Result<Self, DeclError> {
        let Value::Invocation { name, args } = value else {
            return Err(DeclError::MalformedDeclaration(
                "declaration must be an invocation".to_string(),
            ));
        };

        let mut params = Vec::with_capacity(args.len());
        for arg in args {
            match (arg.keyword, arg.ty, arg.value) {
                (Some(keyword), Some(hint), default) => {
                    params.push(Param {
                        name: keyword,
                        is_static: hint.is_static,
                        ty: hint.name,
                        default: Some(default),
                    });
                }
                (None, Some(hint), Value::Invocation { name, args }) if args.is_empty() => {
                    params.push(Param {
                        name,
                        is_static: hint.is_static,
                        ty: hint.name,
                        default: None,
                    });
                }
                _ => {
                    return Err(DeclError::MalformedDeclaration(
                        "argument must be of the form `name: type = default` or `name: type`"
                            .to_string(),
                    ));
                }
            }
        }

        Ok(Algorithm {
            name,
            params,
            doc: doc.into(),
        })
    }

    /// Parse a declaration from its textual form, e.g.
    /// `lzss(coder: static coder = binary, threshold: int = 3)`.
    pub fn parse(text: &str, doc: impl Into<String>) -> Result<Self, DeclError> {
        let value = recomp_parser::parse(text)?;
        Algorithm::from_ast(value, doc)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        if self.is_static {
            write!(f, "static ")?;
        }
        write!(f, "{}", self.ty)?;
        if let Some(default) = &self.default {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.params.is_empty() {
            write!(f, "(")?;
            for (i, param) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", param)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
