//! Parse error type.

use crate::lexer::Token;
use std::fmt;

/// Parse error with 1-based source location and message.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Kind of parse error
    pub kind: ParseErrorKind,
    /// 1-based line of the offending token
    pub line: u32,
    /// 1-based column of the offending token
    pub column: u32,
    /// Human-readable error message
    pub message: String,
}

/// Category of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A specific token was expected but something else was found.
    UnexpectedToken,

    /// Input ended while a construct was still open (unclosed brace,
    /// statement missing its `;`, truncated file).
    UnexpectedEof,

    /// A character sequence the lexer cannot tokenize.
    InvalidToken,

    /// Vector or dimension-set literal with the wrong element count.
    MalformedLiteral,

    /// Key repeated within one nesting level.
    ///
    /// Duplicates are a hard error rather than last-write-wins: files in
    /// the wild do not rely on overwriting, and silently keeping one of
    /// the two values would hide generator bugs.
    DuplicateKey,
}

impl ParseError {
    fn new(kind: ParseErrorKind, (line, column): (u32, u32), message: String) -> Self {
        Self {
            kind,
            line,
            column,
            message,
        }
    }

    /// Create an "expected X, found Y" error.
    pub fn expected(expected: &str, found: Option<&Token>, at: (u32, u32)) -> Self {
        match found {
            Some(token) => Self::new(
                ParseErrorKind::UnexpectedToken,
                at,
                format!("expected {}, found '{}'", expected, token),
            ),
            None => Self::new(
                ParseErrorKind::UnexpectedEof,
                at,
                format!("expected {}, found end of input", expected),
            ),
        }
    }

    /// Create an "unexpected token" error with surrounding context.
    pub fn unexpected(found: &Token, context: &str, at: (u32, u32)) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken,
            at,
            format!("unexpected '{}' {}", found, context),
        )
    }

    /// Create an end-of-input error with surrounding context.
    pub fn eof(context: &str, at: (u32, u32)) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof,
            at,
            format!("unexpected end of input {}", context),
        )
    }

    /// Create an unlexable-input error.
    pub fn invalid_token(slice: &str, at: (u32, u32)) -> Self {
        Self::new(
            ParseErrorKind::InvalidToken,
            at,
            format!("unrecognized token '{}'", slice),
        )
    }

    /// Create a wrong-arity literal error.
    pub fn malformed(message: impl Into<String>, at: (u32, u32)) -> Self {
        Self::new(ParseErrorKind::MalformedLiteral, at, message.into())
    }

    /// Create a duplicate-key error.
    pub fn duplicate_key(key: &str, at: (u32, u32)) -> Self {
        Self::new(
            ParseErrorKind::DuplicateKey,
            at,
            format!("duplicate key '{}'", key),
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}:{}: {}", self.line, self.column, self.message)
    }
}

impl std::error::Error for ParseError {}
