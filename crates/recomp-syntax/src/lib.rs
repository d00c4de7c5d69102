//! AST and syntax definitions for the recomp configuration language.
//!
//! This crate defines the abstract syntax tree produced by the parser
//! and consumed by the declaration model and the evaluator.

mod ast;

pub use ast::*;
