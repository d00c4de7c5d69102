//! The dual-mode evaluator.
//!
//! Evaluation reconciles a parsed invocation against the declarations
//! registered for a requested type and produces two things: a [`pattern`]
//! identifying the implementation variant to instantiate, and an
//! [`OptionValue`] tree carrying every runtime parameter value.
//!
//! The two-phase protocol: [`pattern_eval`] runs in pattern mode with no
//! skeleton and computes the dispatch key without touching dynamic values.
//! After the factory has selected a variant, [`cl_eval`] re-runs the same
//! text in full mode with that pattern as the fixed static skeleton,
//! filling in runtime values while reproducing the same static structure.
//!
//! [`pattern`]: crate::pattern

use crate::pattern;
use crate::value::{AlgorithmValue, OptionValue};
use recomp_common::Span;
use recomp_decl::Registry;
use recomp_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode};
use recomp_syntax::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Default maximum evaluation recursion depth.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Type names whose values are leaves of the option tree rather than
/// algorithm invocations. Leaves stay textual; the option tree types them
/// at lookup time.
const PRIMITIVE_TYPES: &[&str] = &["string", "int", "uint", "float", "bool"];

/// Evaluation errors. Every violated precondition aborts the whole
/// evaluation call; there is no partial result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("no algorithms registered under type `{ty}`")]
    UnknownType { ty: String },

    #[error("algorithm `{name}` is not declared under type `{ty}`")]
    UnknownAlgorithm { ty: String, name: String },

    #[error("type `{ty}` takes a literal, but `{value}` is an invocation")]
    ExpectedLiteral { ty: String, value: String },

    #[error("type `{ty}` takes an algorithm invocation, but `{value}` is a literal")]
    ExpectedInvocation { ty: String, value: String },

    #[error("invocation of `{algorithm}` carries a type annotation")]
    UnexpectedTypeAnnotation { algorithm: String },

    #[error("positional argument after a keyword argument in `{algorithm}`")]
    PositionalAfterKeyword { algorithm: String },

    #[error("too many positional arguments for `{algorithm}`")]
    TooManyPositional { algorithm: String },

    #[error("`{algorithm}` has no parameter named `{name}`")]
    UnknownParameter { algorithm: String, name: String },

    #[error("parameter `{param}` of `{algorithm}` has no value and no default")]
    MissingValue { algorithm: String, param: String },

    #[error("fixed static skeleton names `{found}`, but the invocation is `{expected}`")]
    SkeletonName { expected: String, found: String },

    #[error("fixed static skeleton supplies `{found}` where parameter `{expected}` was declared")]
    SkeletonKeyword { expected: String, found: String },

    #[error("fixed static skeleton has no entry left for static parameter `{param}`")]
    SkeletonExhausted { param: String },

    #[error("fixed static skeleton has {count} unused entries after `{algorithm}`")]
    SkeletonLeftover { algorithm: String, count: usize },

    #[error("evaluation exceeded the maximum recursion depth of {max_depth}")]
    TooDeep { max_depth: usize },
}

impl EvalError {
    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = match self {
            EvalError::UnknownType { .. } => ErrorCode::UnknownType,
            EvalError::UnknownAlgorithm { .. } => ErrorCode::UnknownAlgorithm,
            EvalError::ExpectedLiteral { .. } => ErrorCode::ExpectedLiteral,
            EvalError::ExpectedInvocation { .. } => ErrorCode::ExpectedInvocation,
            EvalError::UnexpectedTypeAnnotation { .. }
            | EvalError::PositionalAfterKeyword { .. }
            | EvalError::TooManyPositional { .. }
            | EvalError::UnknownParameter { .. } => ErrorCode::ArgumentBinding,
            EvalError::MissingValue { .. } => ErrorCode::MissingValue,
            EvalError::SkeletonName { .. }
            | EvalError::SkeletonKeyword { .. }
            | EvalError::SkeletonExhausted { .. }
            | EvalError::SkeletonLeftover { .. } => ErrorCode::SkeletonMismatch,
            EvalError::TooDeep { .. } => ErrorCode::EvalTooDeep,
        };
        let diagnostic =
            Diagnostic::error(DiagnosticKind::Eval, Span::DUMMY, self.to_string()).with_code(code);
        match self {
            EvalError::SkeletonName { .. }
            | EvalError::SkeletonKeyword { .. }
            | EvalError::SkeletonExhausted { .. }
            | EvalError::SkeletonLeftover { .. } => diagnostic.with_note(
                "the fixed static skeleton must come from a pattern evaluation of the same configuration",
            ),
            _ => diagnostic,
        }
    }
}

/// Whether to reduce only the static structure or resolve every parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Skip dynamic parameters; only the static structure matters.
    Pattern,
    /// Resolve every declared parameter into the option tree.
    Full,
}

/// The result of one evaluation: the reduced static pattern (`None` for
/// primitive values) and the option tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluated {
    pub pattern: Option<pattern::Algorithm>,
    pub options: OptionValue,
}

/// Evaluate a configuration value against the declarations registered for
/// `ty`, with the default recursion limit.
pub fn eval(
    value: Value,
    ty: &str,
    registry: &Registry,
    mode: Mode,
    skeleton: Option<Value>,
) -> Result<Evaluated, EvalError> {
    eval_bounded(value, ty, registry, mode, skeleton, DEFAULT_MAX_DEPTH)
}

/// [`eval`] with an explicit recursion limit.
pub fn eval_bounded(
    value: Value,
    ty: &str,
    registry: &Registry,
    mode: Mode,
    skeleton: Option<Value>,
    max_depth: usize,
) -> Result<Evaluated, EvalError> {
    eval_inner(value, ty, registry, mode, skeleton, 0, max_depth)
}

/// Phase 1: compute the dispatch key identifying the implementation
/// variant, ignoring dynamic parameters entirely. A primitive value
/// reduces to the empty pattern.
pub fn pattern_eval(
    value: Value,
    ty: &str,
    registry: &Registry,
) -> Result<pattern::Algorithm, EvalError> {
    eval(value, ty, registry, Mode::Pattern, None).map(|e| e.pattern.unwrap_or_default())
}

/// Phase 2: fully evaluate a configuration, optionally pinned to the
/// static skeleton computed in phase 1 (see
/// [`pattern::Algorithm::to_ast`]).
pub fn cl_eval(
    value: Value,
    ty: &str,
    registry: &Registry,
    skeleton: Option<Value>,
) -> Result<Evaluated, EvalError> {
    eval(value, ty, registry, Mode::Full, skeleton)
}

fn eval_inner(
    value: Value,
    ty: &str,
    registry: &Registry,
    mode: Mode,
    skeleton: Option<Value>,
    depth: usize,
    max_depth: usize,
) -> Result<Evaluated, EvalError> {
    if depth >= max_depth {
        return Err(EvalError::TooDeep { max_depth });
    }

    // Step 1: primitive short-circuit.
    if PRIMITIVE_TYPES.contains(&ty) {
        let Value::Literal(text) = value else {
            return Err(EvalError::ExpectedLiteral {
                ty: ty.to_string(),
                value: value.to_string(),
            });
        };
        return Ok(Evaluated {
            pattern: None,
            options: OptionValue::Leaf(text),
        });
    }

    let Value::Invocation { name, args } = value else {
        return Err(EvalError::ExpectedInvocation {
            ty: ty.to_string(),
            value: value.to_string(),
        });
    };

    // Step 2: skeleton reversal. The skeleton's arguments are consumed
    // back-to-front, once per static parameter, in declaration order.
    let mut fixed_static = match skeleton {
        Some(Value::Invocation {
            name: skeleton_name,
            mut args,
        }) => {
            if skeleton_name != name {
                return Err(EvalError::SkeletonName {
                    expected: name,
                    found: skeleton_name,
                });
            }
            args.reverse();
            Some(args)
        }
        Some(literal @ Value::Literal(_)) => {
            return Err(EvalError::SkeletonName {
                expected: name,
                found: literal.to_string(),
            });
        }
        None => None,
    };

    // Step 3: signature lookup.
    let declarations = registry.lookup(ty).ok_or_else(|| EvalError::UnknownType {
        ty: ty.to_string(),
    })?;
    let signature = declarations
        .iter()
        .find(|decl| decl.name() == name)
        .ok_or_else(|| EvalError::UnknownAlgorithm {
            ty: ty.to_string(),
            name: name.clone(),
        })?;

    // Step 4: resolve each supplied argument to a declared parameter name.
    // Positional arguments take the next declared parameter in source
    // order; once a keyword argument is seen, no positional may follow.
    let mut bound: Vec<(String, Option<Value>)> = Vec::with_capacity(args.len());
    let mut positional_ok = true;
    let mut positional_index = 0;
    for arg in args {
        if arg.ty.is_some() {
            return Err(EvalError::UnexpectedTypeAnnotation {
                algorithm: name.clone(),
            });
        }
        let resolved = match arg.keyword {
            None => {
                if !positional_ok {
                    return Err(EvalError::PositionalAfterKeyword {
                        algorithm: name.clone(),
                    });
                }
                let param = signature.params().get(positional_index).ok_or_else(|| {
                    EvalError::TooManyPositional {
                        algorithm: name.clone(),
                    }
                })?;
                positional_index += 1;
                param.name().to_string()
            }
            Some(keyword) => {
                positional_ok = false;
                keyword
            }
        };
        if !signature.params().iter().any(|p| p.name() == resolved) {
            return Err(EvalError::UnknownParameter {
                algorithm: name.clone(),
                name: resolved,
            });
        }
        bound.push((resolved, Some(arg.value)));
    }

    // Step 5: walk the declaration's parameter list and resolve a value
    // for every parameter.
    let mut static_args = Vec::new();
    let mut dynamic_args = BTreeMap::new();

    for param in signature.params() {
        if mode == Mode::Pattern && !param.is_static() {
            continue;
        }

        // Explicit argument; if the invocation bound the parameter more
        // than once, the last binding wins.
        let mut candidate: Option<Value> = None;
        for (bound_name, slot) in bound.iter_mut() {
            if bound_name == param.name() && slot.is_some() {
                candidate = slot.take();
            }
        }
        let explicit = candidate.is_some();

        if candidate.is_none() {
            candidate = param.default().cloned();
        }

        // Skeleton entries pin the static structure: the entry's keyword
        // must match the declared parameter, its value becomes the
        // recursive skeleton, and it replaces a defaulted (but never an
        // explicit) candidate.
        let mut sub_skeleton = None;
        if let Some(fixed) = fixed_static.as_mut() {
            if param.is_static() {
                let entry = fixed.pop().ok_or_else(|| EvalError::SkeletonExhausted {
                    param: param.name().to_string(),
                })?;
                match entry.keyword.as_deref() {
                    Some(keyword) if keyword == param.name() => {}
                    other => {
                        return Err(EvalError::SkeletonKeyword {
                            expected: param.name().to_string(),
                            found: other.unwrap_or("<positional>").to_string(),
                        });
                    }
                }
                if !explicit {
                    candidate = Some(entry.value.clone());
                }
                sub_skeleton = Some(entry.value);
            }
        }

        let Some(candidate) = candidate else {
            return Err(EvalError::MissingValue {
                algorithm: name.clone(),
                param: param.name().to_string(),
            });
        };

        let sub = eval_inner(
            candidate,
            param.ty(),
            registry,
            mode,
            sub_skeleton,
            depth + 1,
            max_depth,
        )?;

        if param.is_static() {
            if let Some(sub_pattern) = sub.pattern {
                static_args.push(pattern::Arg::new(param.name(), sub_pattern));
            }
        }
        dynamic_args.insert(param.name().to_string(), sub.options);
    }

    // Step 6: every skeleton entry must have been consumed.
    if let Some(fixed) = fixed_static {
        if !fixed.is_empty() {
            return Err(EvalError::SkeletonLeftover {
                algorithm: name,
                count: fixed.len(),
            });
        }
    }

    Ok(Evaluated {
        pattern: Some(pattern::Algorithm::new(name.clone(), static_args)),
        options: OptionValue::Algorithm(AlgorithmValue::new(name, dynamic_args)),
    })
}
