//! Parsing, validation and generation of OpenFOAM ASCII case
//! dictionaries.
//!
//! The solver consumes a case as a tree of dictionary files: field files
//! (`volVectorField`/`volScalarField`) carrying `dimensions`,
//! `internalField` and `boundaryField`, and system dictionaries such as
//! `sampleDict`. This crate models those files, reads and writes the
//! ASCII dictionary format, and checks boundary conditions against an
//! extensible catalog. Solver execution, numerics and meshing are out of
//! scope — the solver is an external consumer of the files this crate
//! produces.
//!
//! # Pipeline
//!
//! - [`lexer`] — logos tokenization, comments stripped
//! - [`parser`] — recursive descent into the [`value`]/[`dict`] model
//! - [`field`] — `FoamFile` header handling
//! - [`boundary`] — boundary condition catalog and validation
//! - [`case`] — builders for velocity/pressure fields and `sampleDict`
//! - [`write`] — canonical serialization, temp-then-rename file output
//!
//! # Example
//!
//! ```
//! use foamkit::{case, parser, write};
//! use foamkit::value::Value;
//!
//! let u = case::velocity_field("U", [0.0, 0.0, 0.0])
//!     .with_patch("inlet", case::fixed_value(Value::Vector([0.0, -39.13, 0.0])))
//!     .with_patch("outlet", case::zero_gradient());
//!
//! let text = write::serialize(&u);
//! let reparsed = parser::parse_field_file(&text).unwrap();
//! assert_eq!(reparsed, u);
//! ```

pub mod boundary;
pub mod case;
pub mod dict;
pub mod error;
pub mod field;
pub mod foundation;
pub mod lexer;
pub mod parser;
pub mod value;
pub mod write;

pub use boundary::{BoundaryPatch, ConditionRegistry, ConditionSpec};
pub use dict::Dictionary;
pub use error::{FoamError, FoamResult, SchemaError, ValidationError};
pub use field::{FieldFile, FoamFile, Format};
pub use foundation::DimensionSet;
pub use parser::{ParseError, parse_dictionary, parse_field_file};
pub use value::{ListEntry, Value};
pub use write::{serialize, write_file};

use std::fs;
use std::path::Path;

/// Read and parse a case file, attaching the path to any error.
pub fn parse_file(path: impl AsRef<Path>) -> FoamResult<FieldFile> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading case file");
    let text = fs::read_to_string(path).map_err(|source| FoamError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_field_file(&text).map_err(|e| e.in_file(path))
}

/// Read and parse a file as a bare dictionary (no header required).
pub fn parse_dictionary_file(path: impl AsRef<Path>) -> FoamResult<Dictionary> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| FoamError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dictionary(&text)
        .map_err(FoamError::from)
        .map_err(|e| e.in_file(path))
}
