//! Hand-written recursive descent parser for dictionary text.
//!
//! ## Architecture
//!
//! - `stream`: TokenStream wrapper with lookahead
//! - `error`: ParseError with line/column locations
//! - this module: statement and value grammar
//!
//! The grammar is small: a file is a sequence of `key value;` statements
//! and `key { ... }` blocks; values are numbers, words, quoted strings,
//! `( ... )` groups and `[ ... ]` dimension sets, with a `uniform` prefix
//! allowed before a field value. Paren groups disambiguate on content: a
//! non-empty group of numbers only must be a 3-component vector, anything
//! else is a list (whose entries may be `name { ... }` dictionaries, as
//! in `sets`/`surfaces` blocks).

mod error;
mod stream;

pub use error::{ParseError, ParseErrorKind};
use stream::TokenStream;

use crate::dict::Dictionary;
use crate::error::FoamError;
use crate::field::FieldFile;
use crate::foundation::{DimensionSet, LineIndex};
use crate::lexer::Token;
use crate::value::{ListEntry, Value};
use logos::Logos;
use std::ops::Range;

/// Parse dictionary text into an ordered [`Dictionary`].
pub fn parse_dictionary(source: &str) -> Result<Dictionary, ParseError> {
    let lines = LineIndex::new(source);
    let tokens = lex(source, &lines)?;
    let mut stream = TokenStream::new(&tokens, &lines);
    parse_entries(&mut stream, false)
}

/// Parse a complete case file, splitting off the `FoamFile` header.
pub fn parse_field_file(source: &str) -> Result<FieldFile, FoamError> {
    let dict = parse_dictionary(source)?;
    Ok(FieldFile::from_dictionary(dict)?)
}

/// Run the lexer, failing on the first unrecognizable character.
fn lex(source: &str, lines: &LineIndex) -> Result<Vec<(Token, Range<usize>)>, ParseError> {
    let mut tokens = Vec::new();
    for (result, range) in Token::lexer(source).spanned() {
        match result {
            Ok(token) => tokens.push((token, range)),
            Err(()) => {
                let at = lines.line_col(range.start as u32);
                return Err(ParseError::invalid_token(&source[range], at));
            }
        }
    }
    Ok(tokens)
}

/// Parse statements until EOF (top level) or a closing `}` (block).
fn parse_entries(stream: &mut TokenStream, in_block: bool) -> Result<Dictionary, ParseError> {
    let mut dict = Dictionary::new();
    loop {
        if stream.at_end() {
            if in_block {
                return Err(ParseError::eof("while looking for '}'", stream.here()));
            }
            return Ok(dict);
        }
        if in_block && stream.check(&Token::RBrace) {
            stream.advance();
            return Ok(dict);
        }

        let key_at = stream.here();
        let key = match stream.advance() {
            Some(Token::Word(w)) => w.clone(),
            // Quoted keys appear in patch-name patterns like "(in|out)let"
            Some(Token::Str(s)) => s.clone(),
            Some(other) => {
                return Err(ParseError::unexpected(
                    other,
                    "where a keyword was expected",
                    key_at,
                ))
            }
            None => unreachable!("at_end checked above"),
        };

        let value = if stream.check(&Token::LBrace) {
            stream.advance();
            let sub = parse_entries(stream, true)?;
            // A trailing ';' after a block is legal but not required
            if stream.check(&Token::Semi) {
                stream.advance();
            }
            Value::Dict(sub)
        } else {
            let value = parse_statement_value(stream)?;
            stream.expect(Token::Semi, "';'")?;
            value
        };

        if !dict.insert_unique(key.as_str(), value) {
            return Err(ParseError::duplicate_key(&key, key_at));
        }
    }
}

/// Parse a statement's value, honoring the `uniform` prefix.
fn parse_statement_value(stream: &mut TokenStream) -> Result<Value, ParseError> {
    let value = parse_value(stream)?;
    if let Value::Word(w) = &value {
        if w == "uniform" && !stream.check(&Token::Semi) {
            let inner = parse_value(stream)?;
            return Ok(Value::uniform(inner));
        }
    }
    Ok(value)
}

/// Parse a single value.
fn parse_value(stream: &mut TokenStream) -> Result<Value, ParseError> {
    let at = stream.here();
    match stream.peek().cloned() {
        Some(Token::Number(n)) => {
            stream.advance();
            Ok(Value::Number(n))
        }
        Some(Token::Word(w)) => {
            stream.advance();
            Ok(Value::Word(w))
        }
        Some(Token::Str(s)) => {
            stream.advance();
            Ok(Value::Str(s))
        }
        Some(Token::LParen) => {
            stream.advance();
            parse_paren_group(stream, at)
        }
        Some(Token::LBracket) => {
            stream.advance();
            parse_dimension_set(stream, at)
        }
        Some(token) => Err(ParseError::unexpected(
            &token,
            "where a value was expected",
            at,
        )),
        None => Err(ParseError::eof("where a value was expected", at)),
    }
}

/// Parse `( ... )` after the opening paren has been consumed.
///
/// `open_at` is the location of the `(`, which is where arity and
/// unclosed-group errors point.
fn parse_paren_group(stream: &mut TokenStream, open_at: (u32, u32)) -> Result<Value, ParseError> {
    let mut entries: Vec<ListEntry> = Vec::new();
    loop {
        if stream.at_end() {
            return Err(ParseError::eof("while looking for ')'", open_at));
        }
        if stream.check(&Token::RParen) {
            stream.advance();
            break;
        }

        let named = matches!(
            (stream.peek(), stream.peek_nth(1)),
            (Some(Token::Word(_)), Some(Token::LBrace))
        );
        if named {
            let name = match stream.advance() {
                Some(Token::Word(w)) => w.clone(),
                _ => unreachable!("peek established a word"),
            };
            stream.advance(); // '{'
            let body = parse_entries(stream, true)?;
            entries.push(ListEntry::Named(name, body));
        } else {
            entries.push(ListEntry::Value(parse_value(stream)?));
        }
    }

    // A group of numbers is a vector literal and must have exactly 3
    // components; anything mixed stays a list.
    let numbers: Option<Vec<f64>> = entries
        .iter()
        .map(|e| match e {
            ListEntry::Value(Value::Number(n)) => Some(*n),
            _ => None,
        })
        .collect();
    if let Some(numbers) = numbers {
        if !numbers.is_empty() {
            if numbers.len() == 3 {
                return Ok(Value::Vector([numbers[0], numbers[1], numbers[2]]));
            }
            return Err(ParseError::malformed(
                format!(
                    "vector literal has {} components, expected 3",
                    numbers.len()
                ),
                open_at,
            ));
        }
    }
    Ok(Value::List(entries))
}

/// Parse `[ ... ]` after the opening bracket has been consumed.
fn parse_dimension_set(
    stream: &mut TokenStream,
    open_at: (u32, u32),
) -> Result<Value, ParseError> {
    let mut exponents = Vec::new();
    loop {
        if stream.at_end() {
            return Err(ParseError::eof("while looking for ']'", open_at));
        }
        if stream.check(&Token::RBracket) {
            stream.advance();
            break;
        }
        let at = stream.here();
        match stream.peek().cloned() {
            Some(Token::Number(n)) => {
                stream.advance();
                exponents.push(n);
            }
            Some(token) => {
                return Err(ParseError::unexpected(&token, "inside a dimension set", at))
            }
            None => unreachable!("at_end checked above"),
        }
    }

    if exponents.len() != 7 {
        return Err(ParseError::malformed(
            format!(
                "dimension set has {} components, expected 7",
                exponents.len()
            ),
            open_at,
        ));
    }
    let mut array = [0.0; 7];
    array.copy_from_slice(&exponents);
    Ok(Value::Dimensions(DimensionSet::new(array)))
}
