//! AST for algorithm-configuration strings.
//! 算法配置字符串的 AST。
//!
//! The grammar, as used on the command line and in declarations:
//! 语法，用于命令行和声明：
//!
//! ```text
//! Value ::= IDENT ['(' [Arg (',' Arg)*] ')']
//!         | '"' <any-char-except-'"'>* '"'
//!         | NUMBER
//! Arg   ::= [IDENT [':' ['static'] IDENT] '='] Value
//! ```
//!
//! Quoted strings and bare numbers both parse to [`Value::Literal`].

use std::fmt;

/// A parsed configuration value: a string literal or a named invocation
/// with an ordered argument list.
/// 解析后的配置值：字符串字面量，或带有有序参数列表的命名调用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// `"text"` / 字符串字面量
    Literal(String),
    /// `name(arg, ...)` / 命名调用
    Invocation { name: String, args: Vec<Arg> },
}

impl Value {
    /// An invocation with no arguments.
    /// 无参数的调用。
    pub fn bare(name: impl Into<String>) -> Self {
        Value::Invocation {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn is_invocation(&self) -> bool {
        matches!(self, Value::Invocation { .. })
    }

    /// The invocation name, if this is an invocation.
    /// 若为调用，返回其名称。
    pub fn invocation_name(&self) -> Option<&str> {
        match self {
            Value::Invocation { name, .. } => Some(name),
            Value::Literal(_) => None,
        }
    }

    /// The literal content, if this is a literal.
    /// 若为字面量，返回其内容。
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Value::Literal(s) => Some(s),
            Value::Invocation { .. } => None,
        }
    }
}

/// One argument of an invocation: an optional keyword, an optional type
/// annotation, and a value.
/// 调用的一个参数：可选的关键字、可选的类型标注和一个值。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    pub keyword: Option<String>,
    pub ty: Option<TypeHint>,
    pub value: Value,
}

impl Arg {
    /// A positional argument. / 位置参数。
    pub fn positional(value: Value) -> Self {
        Arg {
            keyword: None,
            ty: None,
            value,
        }
    }

    /// A keyword argument. / 关键字参数。
    pub fn keyword(keyword: impl Into<String>, value: Value) -> Self {
        Arg {
            keyword: Some(keyword.into()),
            ty: None,
            value,
        }
    }
}

/// A type annotation on a declaration argument: `: [static] name`.
/// 声明参数上的类型标注：`: [static] name`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeHint {
    pub is_static: bool,
    pub name: String,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(s) => write!(f, "\"{}\"", s),
            Value::Invocation { name, args } => {
                write!(f, "{}", name)?;
                if !args.is_empty() {
                    write!(f, "(")?;
                    for (i, arg) in args.iter().enumerate() {
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
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.keyword {
            Some(keyword) => write!(f, "{}", keyword)?,
            None => write!(f, "{}", self.value)?,
        }
        if let Some(ty) = &self.ty {
            write!(f, ": {}", ty)?;
        }
        if self.keyword.is_some() {
            write!(f, " = {}", self.value)?;
        }
        Ok(())
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_static {
            write!(f, "static ")?;
        }
        write!(f, "{}", self.name)
    }
}
