//! Token stream wrapper for the hand-written parser.

use crate::foundation::LineIndex;
use crate::lexer::Token;
use std::ops::Range;

/// Token stream with lookahead and position tracking.
///
/// Each token is paired with its byte range in the source; a shared
/// [`LineIndex`] converts those offsets into the 1-based line/column
/// pairs that error messages carry.
pub struct TokenStream<'src> {
    tokens: &'src [(Token, Range<usize>)],
    pos: usize,
    lines: &'src LineIndex,
}

impl<'src> TokenStream<'src> {
    /// Create a new token stream.
    pub fn new(tokens: &'src [(Token, Range<usize>)], lines: &'src LineIndex) -> Self {
        Self {
            tokens,
            pos: 0,
            lines,
        }
    }

    /// Peek at the current token without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(tok, _)| tok)
    }

    /// Peek at the nth token ahead without consuming.
    pub fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.pos + n).map(|(tok, _)| tok)
    }

    /// Advance to the next token and return the current one.
    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos).map(|(tok, _)| tok);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Check if the current token matches the expected token.
    ///
    /// Compares discriminants only, so payload tokens match any payload.
    pub fn check(&self, expected: &Token) -> bool {
        matches!(self.peek(), Some(t) if std::mem::discriminant(t) == std::mem::discriminant(expected))
    }

    /// Consume the current token if it matches, otherwise error.
    pub fn expect(&mut self, expected: Token, what: &str) -> Result<(), super::ParseError> {
        if self.check(&expected) {
            self.advance();
            Ok(())
        } else {
            Err(super::ParseError::expected(
                what,
                self.peek(),
                self.here(),
            ))
        }
    }

    /// Check if we've reached the end of the token stream.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Line/column of the current token, or of end-of-input when the
    /// stream is exhausted.
    pub fn here(&self) -> (u32, u32) {
        let offset = match self.tokens.get(self.pos) {
            Some((_, range)) => range.start as u32,
            None => self
                .tokens
                .last()
                .map(|(_, range)| range.end as u32)
                .unwrap_or(0),
        };
        self.lines.line_col(offset)
    }
}
