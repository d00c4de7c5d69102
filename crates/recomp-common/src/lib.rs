//! Common utilities and data structures for recomp.
//!
//! This crate provides the foundational types shared across the
//! algorithm-configuration toolchain:
//! - `Span`: position tracking inside a configuration string

mod span;

pub use span::{BytePos, Span};
