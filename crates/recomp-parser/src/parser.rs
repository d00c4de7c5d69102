//! The recomp configuration parser.
//! recomp 配置解析器。
//!
//! A recursive-descent parser over a cursor into the input text, with no
//! backtracking: each production commits once it recognizes its leading
//! token. Whitespace is insignificant between any two tokens.
//! 基于输入文本游标的递归下降解析器，没有回溯：每个产生式一旦识别出其
//! 起始 token 就提交。任意两个 token 之间的空白字符不参与语法。

use crate::error::{ParseError, ParseErrorKind};
use recomp_common::Span;
use recomp_syntax::{Arg, TypeHint, Value};

/// Default maximum invocation nesting depth.
/// 默认的最大调用嵌套深度。
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// The recomp configuration parser.
/// recomp 配置解析器。
pub struct Parser<'src> {
    text: &'src str,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'src> Parser<'src> {
    /// Create a new parser for the given configuration string.
    /// 为给定的配置字符串创建新的解析器。
    pub fn new(text: &'src str) -> Self {
        Self {
            text,
            pos: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the maximum nesting depth.
    /// 覆盖最大嵌套深度。
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse the whole input as a single value. Trailing input that is not
    /// whitespace is an error.
    /// 将整个输入解析为单个值。末尾的非空白输入是错误。
    pub fn parse_root(&mut self) -> Result<Value, ParseError> {
        let value = self.parse_value("")?;
        self.skip_whitespace();
        if self.has_next() {
            return Err(self.error(ParseErrorKind::ExpectedEof));
        }
        Ok(value)
    }

    /// Parse a value: a quoted string literal, or an identifier with an
    /// optional parenthesized argument list.
    /// 解析一个值：带引号的字符串字面量，或带可选括号参数列表的标识符。
    fn parse_value(&mut self, already_parsed_ident: &'src str) -> Result<Value, ParseError> {
        if self.depth >= self.max_depth {
            return Err(self.error(ParseErrorKind::TooDeep));
        }
        self.depth += 1;

        self.skip_whitespace();

        if already_parsed_ident.is_empty() && self.at_char('"') {
            let literal = self.parse_string()?;
            self.depth -= 1;
            return Ok(Value::Literal(literal));
        }

        if already_parsed_ident.is_empty()
            && self.peek_char().is_some_and(|c| c.is_ascii_digit())
        {
            let literal = self.parse_number();
            self.depth -= 1;
            return Ok(Value::Literal(literal));
        }

        let name = if already_parsed_ident.is_empty() {
            self.expect_ident()?
        } else {
            already_parsed_ident
        };

        let mut args = Vec::new();
        let mut first = true;
        if self.eat_char('(') {
            loop {
                if self.eat_char(')') {
                    break;
                } else if first || self.eat_char(',') {
                    first = false;
                    args.push(self.parse_arg()?);
                } else {
                    return Err(self.error(ParseErrorKind::ExpectedDelimiter));
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Invocation {
            name: name.to_string(),
            args,
        })
    }

    /// Parse an argument. An identifier is read tentatively: a following
    /// `:` introduces a type annotation, a following `=` turns it into a
    /// keyword, and otherwise it is the head of the value itself.
    /// 解析一个参数。先试探性地读取标识符：后随 `:` 则是类型标注，
    /// 后随 `=` 则是关键字，否则它就是值本身的开头。
    fn parse_arg(&mut self) -> Result<Arg, ParseError> {
        let mut ident = self.parse_ident();

        let mut ty = None;
        if !ident.is_empty() && self.eat_char(':') {
            let first = self.expect_ident()?;
            let hint = if first == "static" {
                TypeHint {
                    is_static: true,
                    name: self.expect_ident()?.to_string(),
                }
            } else {
                TypeHint {
                    is_static: false,
                    name: first.to_string(),
                }
            };
            ty = Some(hint);
        }

        let mut keyword = None;
        if !ident.is_empty() && self.eat_char('=') {
            keyword = Some(ident.to_string());
            ident = "";
        }

        let value = self.parse_value(ident)?;

        Ok(Arg { keyword, ty, value })
    }

    /// Parse an identifier, which may be empty.
    /// 解析一个标识符，可能为空。
    fn parse_ident(&mut self) -> &'src str {
        self.skip_whitespace();
        let start = self.pos;
        if let Some(c) = self.peek_char() {
            if c == '_' || c.is_ascii_alphabetic() {
                self.advance();
            } else {
                return "";
            }
        }
        while let Some(c) = self.peek_char() {
            if c == '_' || c.is_ascii_alphanumeric() {
                self.advance();
            } else {
                break;
            }
        }
        &self.text[start..self.pos]
    }

    /// Parse an identifier, erroring if it is empty.
    /// 解析一个标识符，为空则报错。
    fn expect_ident(&mut self) -> Result<&'src str, ParseError> {
        let ident = self.parse_ident();
        if ident.is_empty() {
            return Err(self.error(ParseErrorKind::ExpectedIdentifier));
        }
        Ok(ident)
    }

    /// Parse an unquoted numeric literal such as `3` or `0.75`. It is kept
    /// as text; the option store types it at lookup time.
    /// 解析不带引号的数字字面量，如 `3` 或 `0.75`。保留为文本，
    /// 由选项存储在查询时确定类型。
    fn parse_number(&mut self) -> String {
        let start = self.pos;
        let mut seen_dot = false;
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() || (c == '.' && !seen_dot) {
                seen_dot |= c == '.';
                self.advance();
            } else {
                break;
            }
        }
        self.text[start..self.pos].to_string()
    }

    /// Parse a string literal. There are no escape sequences: the literal
    /// is the raw text between the quotes.
    /// 解析字符串字面量。没有转义序列：字面量就是引号之间的原始文本。
    fn parse_string(&mut self) -> Result<String, ParseError> {
        if !self.eat_char('"') {
            return Err(self.error(ParseErrorKind::UnterminatedString));
        }
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c == '"' {
                let literal = self.text[start..self.pos].to_string();
                self.advance();
                return Ok(literal);
            }
            self.advance();
        }
        Err(self.error(ParseErrorKind::UnterminatedString))
    }

    /// Skip whitespace, then consume `c` if it is next.
    /// 跳过空白后，若下一个字符是 `c` 则消耗它。
    fn eat_char(&mut self, c: char) -> bool {
        let r = self.at_char(c);
        if r {
            self.pos += c.len_utf8();
        }
        r
    }

    /// Skip whitespace, then check whether `c` is next.
    /// 跳过空白后，检查下一个字符是否为 `c`。
    fn at_char(&mut self, c: char) -> bool {
        self.skip_whitespace();
        self.peek_char() == Some(c)
    }

    fn peek_char(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c == ' ' || c == '\n' || c == '\r' || c == '\t' {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn has_next(&self) -> bool {
        self.pos < self.text.len()
    }

    /// Build a syntax error at the current cursor position, carrying the
    /// remaining unconsumed input.
    /// 在当前游标位置构建语法错误，携带剩余未消耗的输入。
    fn error(&self, cause: ParseErrorKind) -> ParseError {
        ParseError {
            cause,
            span: Span::from_usize(self.pos, self.text.len()),
            found: self.text[self.pos..].to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tentative_ident_becomes_value() {
        let value = Parser::new("lzss(binary)").parse_root().unwrap();
        let Value::Invocation { name, args } = value else {
            panic!("expected invocation");
        };
        assert_eq!(name, "lzss");
        assert_eq!(args.len(), 1);
        assert!(args[0].keyword.is_none());
        assert_eq!(args[0].value.invocation_name(), Some("binary"));
    }

    #[test]
    fn test_tentative_ident_becomes_keyword() {
        let value = Parser::new("lzss(coder = binary)").parse_root().unwrap();
        let Value::Invocation { args, .. } = value else {
            panic!("expected invocation");
        };
        assert_eq!(args[0].keyword.as_deref(), Some("coder"));
    }

    #[test]
    fn test_static_type_annotation() {
        let value = Parser::new("lzss(coder: static coder = binary)")
            .parse_root()
            .unwrap();
        let Value::Invocation { args, .. } = value else {
            panic!("expected invocation");
        };
        let ty = args[0].ty.as_ref().unwrap();
        assert!(ty.is_static);
        assert_eq!(ty.name, "coder");
    }

    #[test]
    fn test_depth_guard() {
        let mut text = String::new();
        for _ in 0..300 {
            text.push_str("f(");
        }
        text.push('x');
        for _ in 0..300 {
            text.push(')');
        }
        let err = Parser::new(&text).parse_root().unwrap_err();
        assert_eq!(err.cause, ParseErrorKind::TooDeep);
    }

    #[test]
    fn test_error_carries_remaining_input() {
        let err = Parser::new("f(a=1 b)").parse_root().unwrap_err();
        assert_eq!(err.cause, ParseErrorKind::ExpectedDelimiter);
        assert_eq!(err.to_string(), "Expected ) or ,, found b)");
    }
}
