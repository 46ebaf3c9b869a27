//! Crate-level error types.
//!
//! Three failure classes cover everything this crate can reject:
//!
//! - `ParseError` (in [`crate::parser`]) — malformed syntax, with line and
//!   column
//! - `SchemaError` — a well-formed dictionary missing required structure
//!   (header keys, key lookups, value types)
//! - `ValidationError` — a boundary patch that the condition catalog
//!   rejects
//!
//! [`FoamError`] is the umbrella type returned by file-level operations,
//! carrying the file path for context. All errors are terminal for the
//! file being processed; parsing is deterministic so there is no retry.

use crate::parser::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for file-level operations.
pub type FoamResult<T> = Result<T, FoamError>;

/// Umbrella error for parsing, validating and writing case files.
#[derive(Debug, Error)]
pub enum FoamError {
    /// Malformed dictionary text
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Structurally valid dictionary with missing or mistyped entries
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Boundary condition rejected by the catalog
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Underlying I/O failure
    #[error("{path}: {source}")]
    Io {
        /// File being read or written
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any of the above, annotated with the file it came from
    #[error("{path}: {source}")]
    File {
        /// File being processed
        path: PathBuf,
        #[source]
        source: Box<FoamError>,
    },
}

impl FoamError {
    /// Attach a file path to an error that arose while processing it.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        FoamError::File {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

/// Missing or mistyped dictionary structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Key lookup failed
    #[error("key '{0}' not found")]
    MissingKey(String),

    /// Required `FoamFile` header entry absent
    #[error("FoamFile header is missing required entry '{0}'")]
    MissingHeader(String),

    /// `FoamFile` header entry present but unusable
    #[error("invalid FoamFile entry: {key} = '{value}'")]
    InvalidHeader {
        /// Header key
        key: String,
        /// Offending value, rendered
        value: String,
    },

    /// Entry present with the wrong value type
    #[error("'{key}': expected {expected}, found {found}")]
    WrongType {
        /// Dictionary key
        key: String,
        /// Expected variant name
        expected: &'static str,
        /// Actual variant name
        found: &'static str,
    },
}

/// Boundary condition rejected by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Patch has no `type` entry
    #[error("patch '{patch}' has no 'type' entry")]
    MissingType {
        /// Patch name
        patch: String,
    },

    /// Condition type not present in the registry
    #[error("patch '{patch}': unknown boundary condition type '{condition}'")]
    UnknownConditionType {
        /// Patch name
        patch: String,
        /// Unrecognized `type` token
        condition: String,
    },

    /// Required condition parameter absent
    #[error("patch '{patch}': condition '{condition}' requires parameter '{parameter}'")]
    MissingParameter {
        /// Patch name
        patch: String,
        /// Condition type
        condition: String,
        /// Missing parameter key
        parameter: String,
    },

    /// `boundaryField` entry that is not a sub-dictionary
    #[error("patch '{patch}': expected a dictionary, found {found}")]
    NotADictionary {
        /// Patch name
        patch: String,
        /// Actual variant name
        found: &'static str,
    },
}
