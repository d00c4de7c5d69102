//! The option tree: runtime parameter values.

use std::collections::BTreeMap;
use std::fmt;

/// One node of the option tree produced by a full evaluation: a leaf
/// string, or an algorithm with a name-keyed map over every declared
/// parameter (static and dynamic).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Leaf(String),
    Algorithm(AlgorithmValue),
}

/// A resolved algorithm node of the option tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmValue {
    name: String,
    args: BTreeMap<String, OptionValue>,
}

impl AlgorithmValue {
    pub fn new(name: impl Into<String>, args: BTreeMap<String, OptionValue>) -> Self {
        AlgorithmValue {
            name: name.into(),
            args,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &BTreeMap<String, OptionValue> {
        &self.args
    }
}

impl OptionValue {
    /// The textual form of this node: the leaf content, or the algorithm
    /// name.
    pub fn as_str(&self) -> &str {
        match self {
            OptionValue::Leaf(s) => s,
            OptionValue::Algorithm(alg) => &alg.name,
        }
    }

    /// Try to read this node as a signed integer.
    pub fn as_int(&self) -> Option<i64> {
        self.as_str().parse().ok()
    }

    /// Try to read this node as an unsigned integer.
    pub fn as_uint(&self) -> Option<u64> {
        self.as_str().parse().ok()
    }

    /// Try to read this node as a float.
    pub fn as_float(&self) -> Option<f64> {
        self.as_str().parse().ok()
    }

    /// Try to read this node as a bool (`true` or `false`).
    pub fn as_bool(&self) -> Option<bool> {
        self.as_str().parse().ok()
    }

    /// The value of a direct sub-parameter, if this is an algorithm node.
    pub fn arg(&self, name: &str) -> Option<&OptionValue> {
        match self {
            OptionValue::Leaf(_) => None,
            OptionValue::Algorithm(alg) => alg.args.get(name),
        }
    }

    /// Walk a dot-separated parameter path, e.g. `"coder.bit_width"`.
    pub fn lookup(&self, path: &str) -> Option<&OptionValue> {
        let mut current = self;
        for segment in path.split('.') {
            current = current.arg(segment)?;
        }
        Some(current)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Leaf(s) => write!(f, "\"{}\"", s),
            OptionValue::Algorithm(alg) => {
                write!(f, "{}", alg.name)?;
                if !alg.args.is_empty() {
                    write!(f, "(")?;
                    for (i, (name, value)) in alg.args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{} = {}", name, value)?;
                    }
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}
