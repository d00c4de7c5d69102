//! Dual-mode evaluator for recomp configuration strings.
//!
//! This crate matches a parsed invocation against registered declarations
//! and produces a dispatch [`pattern`] (which implementation variant to
//! instantiate) together with an [`OptionValue`] tree (every runtime
//! parameter value, keyed by name).

mod eval;
pub mod pattern;
pub mod value;

pub use eval::{
    DEFAULT_MAX_DEPTH, EvalError, Evaluated, Mode, cl_eval, eval, eval_bounded, pattern_eval,
};
pub use value::{AlgorithmValue, OptionValue};
