//! Lexical analysis for OpenFOAM dictionary text.
//!
//! Tokenization uses logos. Whitespace and both C++-style comment forms
//! (`//` and `/* */`) are stripped during lexing and never reach the
//! parser, which is also why comments do not survive a round trip.
//!
//! # Design
//!
//! - `Token` — delimiters plus `Number`, `Str` and `Word` payload tokens
//! - OpenFOAM "words" start with a letter or underscore and may contain
//!   dots, colons and angle brackets (`List<scalar>`, `div(phi,U)` style
//!   keys are out of scope; plain field and patch names are not)
//! - Signed numbers lex as single tokens so `(0 -39.13 0)` yields three
//!   `Number`s

use logos::Logos;

/// One lexical element of the dictionary format.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")] // Skip whitespace
#[logos(skip r"//[^\n]*")] // Skip line comments
#[logos(skip r"/\*([^*]|\*[^/])*\*/")] // Skip block comments
pub enum Token {
    /// Delimiter `{`
    #[token("{")]
    LBrace,
    /// Delimiter `}`
    #[token("}")]
    RBrace,
    /// Delimiter `(`
    #[token("(")]
    LParen,
    /// Delimiter `)`
    #[token(")")]
    RParen,
    /// Delimiter `[`
    #[token("[")]
    LBracket,
    /// Delimiter `]`
    #[token("]")]
    RBracket,
    /// Statement terminator `;`
    #[token(";")]
    Semi,

    /// Numeric literal, integer or decimal, with optional exponent.
    ///
    /// Stored as `f64`; the writer renders integral values without a
    /// decimal point, so `[0 2 -2 0 0 0 0]` survives a round trip.
    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().parse::<f64>().ok(), priority = 3)]
    #[regex(r"[+-]?[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[+-]?\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[+-]?[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    /// Double-quoted string, e.g. `"0"` in a `location` entry.
    ///
    /// The format has no escape sequences; quotes delimit verbatim text.
    #[regex(r#""[^"\n]*""#, |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    Str(String),

    /// Bare word, e.g. `fixedValue`, `uniform`, `volVectorField`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_.:<>]*", |lex| lex.slice().to_string())]
    Word(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Semi => write!(f, ";"),
            Token::Number(n) => write!(f, "{}", n),
            Token::Str(s) => write!(f, "\"{}\"", s),
            Token::Word(w) => write!(f, "{}", w),
        }
    }
}

#[cfg(test)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;

    /// Test helper: lex source and panic on any error.
    fn lex(source: &str) -> Vec<Token> {
        Token::lexer(source)
            .collect::<Result<Vec<_>, _>>()
            .expect("lexing failed - invalid token encountered")
    }

    /// Test helper: create a word token.
    fn word(s: &str) -> Token {
        Token::Word(s.to_string())
    }

    #[test]
    fn test_delimiters() {
        let tokens = lex("{ } ( ) [ ] ;");
        assert_eq!(
            tokens,
            vec![
                Token::LBrace,
                Token::RBrace,
                Token::LParen,
                Token::RParen,
                Token::LBracket,
                Token::RBracket,
                Token::Semi,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        let tokens = lex("0 -39.13 2.0 1e5 5.67e-8 .5");
        assert_eq!(
            tokens,
            vec![
                Token::Number(0.0),
                Token::Number(-39.13),
                Token::Number(2.0),
                Token::Number(1e5),
                Token::Number(5.67e-8),
                Token::Number(0.5),
            ]
        );
    }

    #[test]
    fn test_words() {
        let tokens = lex("fixedValue zeroGradient frontWall n_points");
        assert_eq!(
            tokens,
            vec![
                word("fixedValue"),
                word("zeroGradient"),
                word("frontWall"),
                word("n_points"),
            ]
        );
    }

    #[test]
    fn test_strings() {
        let tokens = lex(r#"location "0";"#);
        assert_eq!(
            tokens,
            vec![word("location"), Token::Str("0".to_string()), Token::Semi]
        );
    }

    #[test]
    fn test_line_comments_skipped() {
        let tokens = lex("type zeroGradient; // was fixedValue\n");
        assert_eq!(tokens, vec![word("type"), word("zeroGradient"), Token::Semi]);
    }

    #[test]
    fn test_block_comments_skipped() {
        let tokens = lex("/* header banner\n   second line */ dimensions");
        assert_eq!(tokens, vec![word("dimensions")]);
    }

    #[test]
    fn test_vector_literal_tokens() {
        let tokens = lex("(0 -39.13 0)");
        assert_eq!(
            tokens,
            vec![
                Token::LParen,
                Token::Number(0.0),
                Token::Number(-39.13),
                Token::Number(0.0),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_lexer_error_detection() {
        let mut lexer = Token::lexer("type @bad;");
        assert!(matches!(lexer.next(), Some(Ok(Token::Word(_)))));
        assert!(matches!(lexer.next(), Some(Err(_))));
    }
}
