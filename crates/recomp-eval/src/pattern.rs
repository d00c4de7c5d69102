//! Patterns: the static-selection dispatch keys.
//! 模式：静态选择用的分发键。
//!
//! A pattern retains only the static-parameter structure of a resolved
//! invocation. Two configurations that differ only in dynamic parameter
//! values reduce to equal patterns, so a pattern can serve as the lookup
//! key for a compiled implementation variant.
//! 模式只保留已解析调用的静态参数结构。仅动态参数值不同的两个配置
//! 归约为相等的模式，因此模式可以作为查找已编译实现变体的键。

use recomp_syntax::{Arg as AstArg, Value};
use std::fmt;

/// The static-parameter structure of one resolved invocation.
///
/// Totally ordered (lexicographic by name, then by argument list) and
/// hashable, so it can be used directly as a dictionary key.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Algorithm {
    name: String,
    args: Vec<Arg>,
}

/// One static argument of a pattern: the parameter name and the
/// sub-pattern its value reduced to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arg {
    name: String,
    algorithm: Algorithm,
}

impl Algorithm {
    pub fn new(name: impl Into<String>, args: Vec<Arg>) -> Self {
        Algorithm {
            name: name.into(),
            args,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Convert back into an AST value, with every argument keyworded, so a
    /// phase-1 pattern can be re-supplied as the fixed static skeleton of a
    /// phase-2 evaluation.
    pub fn to_ast(&self) -> Value {
        Value::Invocation {
            name: self.name.clone(),
            args: self
                .args
                .iter()
                .map(|arg| AstArg::keyword(arg.name.clone(), arg.algorithm.to_ast()))
                .collect(),
        }
    }
}

impl Arg {
    pub fn new(name: impl Into<String>, algorithm: Algorithm) -> Self {
        Arg {
            name: name.into(),
            algorithm,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.args.is_empty() {
            write!(f, "(")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.algorithm)
    }
}
