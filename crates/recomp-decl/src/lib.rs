//! Algorithm declarations and the declaration registry.
//!
//! A [`Algorithm`] declaration describes one implementation variant's
//! signature: its name, its parameters (each with a declared type, a
//! static/dynamic flag and an optional default), and its documentation.
//! Declarations are registered per family type (e.g. `"compressor"`,
//! `"coder"`) in a [`Registry`] that is built once at startup and read-only
//! afterwards.

mod decl;
mod registry;

pub use decl::{Algorithm, DeclError, Param};
pub use registry::Registry;
