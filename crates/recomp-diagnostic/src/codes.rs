//! Error codes for recomp diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Parser errors (E0001 - E0099)
    ExpectedIdentifier,
    ExpectedDelimiter,
    UnterminatedString,
    TrailingInput,
    NestingTooDeep,

    // Declaration errors (E0100 - E0199)
    MalformedDeclaration,
    DuplicateAlgorithm,

    // Evaluation errors (E0200 - E0299)
    UnknownType,
    UnknownAlgorithm,
    ExpectedLiteral,
    ExpectedInvocation,
    ArgumentBinding,
    MissingValue,
    SkeletonMismatch,
    EvalTooDeep,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Parser
            ErrorCode::ExpectedIdentifier => "E0001",
            ErrorCode::ExpectedDelimiter => "E0002",
            ErrorCode::UnterminatedString => "E0003",
            ErrorCode::TrailingInput => "E0004",
            ErrorCode::NestingTooDeep => "E0005",

            // Declaration
            ErrorCode::MalformedDeclaration => "E0100",
            ErrorCode::DuplicateAlgorithm => "E0101",

            // Evaluation
            ErrorCode::UnknownType => "E0200",
            ErrorCode::UnknownAlgorithm => "E0201",
            ErrorCode::ExpectedLiteral => "E0202",
            ErrorCode::ExpectedInvocation => "E0203",
            ErrorCode::ArgumentBinding => "E0204",
            ErrorCode::MissingValue => "E0205",
            ErrorCode::SkeletonMismatch => "E0206",
            ErrorCode::EvalTooDeep => "E0207",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            // Parser
            ErrorCode::ExpectedIdentifier => "expected an identifier",
            ErrorCode::ExpectedDelimiter => "expected `)` or `,`",
            ErrorCode::UnterminatedString => "string literal is not terminated",
            ErrorCode::TrailingInput => "unexpected input after the configuration value",
            ErrorCode::NestingTooDeep => "configuration is nested too deeply",

            // Declaration
            ErrorCode::MalformedDeclaration => "declaration has an invalid shape",
            ErrorCode::DuplicateAlgorithm => "algorithm declared twice under one type",

            // Evaluation
            ErrorCode::UnknownType => "no algorithms registered under this type",
            ErrorCode::UnknownAlgorithm => "algorithm not declared under this type",
            ErrorCode::ExpectedLiteral => "expected a literal value",
            ErrorCode::ExpectedInvocation => "expected an algorithm invocation",
            ErrorCode::ArgumentBinding => "argument cannot be bound to a declared parameter",
            ErrorCode::MissingValue => "parameter has no value and no default",
            ErrorCode::SkeletonMismatch => "fixed static structure does not match",
            ErrorCode::EvalTooDeep => "evaluation recursed too deeply",
        }
    }
}
