//! Dictionary value model.
//!
//! The dictionary format is duck typed; in Rust that becomes one tagged
//! variant type covering every construct the format can carry:
//! numbers, bare words, quoted strings, 3-component vectors, 7-component
//! dimension sets, `uniform`-prefixed field values, lists, and nested
//! dictionaries.

use crate::dict::Dictionary;
use crate::foundation::DimensionSet;
use serde::{Deserialize, Serialize};

/// A single dictionary value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Numeric scalar, e.g. `2.0` or `100`
    Number(f64),
    /// Bare token, e.g. `ascii`, `cellPoint`, `false`
    Word(String),
    /// Double-quoted string, e.g. `"0"`
    Str(String),
    /// Exactly three numbers in parentheses, e.g. `(0 -39.13 0)`
    Vector([f64; 3]),
    /// Exactly seven unit exponents in brackets, e.g. `[0 2 -2 0 0 0 0]`
    Dimensions(DimensionSet),
    /// Spatially constant field value, e.g. `uniform (0 0 0)`
    Uniform(Box<Value>),
    /// Parenthesized list of values and/or named sub-dictionaries
    List(Vec<ListEntry>),
    /// Nested `{ ... }` block
    Dict(Dictionary),
}

/// One element of a parenthesized list.
///
/// Lists mix plain values with the nameless list-of-dictionaries syntax
/// used by `sets` and `surfaces` blocks:
///
/// ```text
/// surfaces
/// (
///     frontWall
///     {
///         type        patch;
///     }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListEntry {
    /// Plain value, e.g. the `front` in `patches (front);`
    Value(Value),
    /// `name { ... }` entry
    Named(String, Dictionary),
}

impl Value {
    /// Bare word value.
    pub fn word(s: impl Into<String>) -> Self {
        Value::Word(s.into())
    }

    /// Quoted string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// `uniform`-prefixed value.
    pub fn uniform(inner: Value) -> Self {
        Value::Uniform(Box::new(inner))
    }

    /// List of plain word entries, e.g. `(U p)`.
    pub fn word_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(
            words
                .into_iter()
                .map(|w| ListEntry::Value(Value::Word(w.into())))
                .collect(),
        )
    }

    /// Short name of the variant, used in schema error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Word(_) => "word",
            Value::Str(_) => "string",
            Value::Vector(_) => "vector",
            Value::Dimensions(_) => "dimension set",
            Value::Uniform(_) => "uniform value",
            Value::List(_) => "list",
            Value::Dict(_) => "dictionary",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            Value::Word(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<[f64; 3]> {
        match self {
            Value::Vector(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_dimensions(&self) -> Option<DimensionSet> {
        match self {
            Value::Dimensions(d) => Some(*d),
            _ => None,
        }
    }

    /// Inner value of a `uniform` entry.
    pub fn as_uniform(&self) -> Option<&Value> {
        match self {
            Value::Uniform(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ListEntry]> {
        match self {
            Value::List(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<[f64; 3]> for Value {
    fn from(v: [f64; 3]) -> Self {
        Value::Vector(v)
    }
}

impl From<DimensionSet> for Value {
    fn from(d: DimensionSet) -> Self {
        Value::Dimensions(d)
    }
}

impl From<Dictionary> for Value {
    fn from(d: Dictionary) -> Self {
        Value::Dict(d)
    }
}
