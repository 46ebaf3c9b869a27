//! Field files: a dictionary body plus the `FoamFile` header block.
//!
//! Every case file opens with a header identifying the format version,
//! encoding, class and object name:
//!
//! ```text
//! FoamFile
//! {
//!     version     2.0;
//!     format      ascii;
//!     class       volVectorField;
//!     location    "0";
//!     object      U;
//! }
//! ```
//!
//! [`FieldFile`] keeps the header typed and the body as an ordered
//! [`Dictionary`], so `dimensions`, `internalField` and `boundaryField`
//! keep their file order.

use crate::dict::Dictionary;
use crate::error::SchemaError;
use crate::foundation::DimensionSet;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// File encoding declared in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    Ascii,
    Binary,
}

impl Format {
    /// The header token for this encoding.
    pub fn as_word(self) -> &'static str {
        match self {
            Format::Ascii => "ascii",
            Format::Binary => "binary",
        }
    }

    fn from_word(word: &str) -> Option<Self> {
        match word {
            "ascii" => Some(Format::Ascii),
            "binary" => Some(Format::Binary),
            _ => None,
        }
    }
}

/// Typed `FoamFile` header block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoamFile {
    /// Format version, written verbatim (conventionally `2.0`)
    pub version: String,
    /// ASCII or binary payload; this crate only writes ASCII
    pub format: Format,
    /// Class name, e.g. `volVectorField`, `volScalarField`, `dictionary`
    pub class: String,
    /// Optional case-relative directory, e.g. `"0"` or `"system"`
    pub location: Option<String>,
    /// Object name, matching the file name, e.g. `U`
    pub object: String,
}

impl FoamFile {
    /// Header with the conventional version and ASCII encoding.
    pub fn new(class: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            version: "2.0".to_string(),
            format: Format::Ascii,
            class: class.into(),
            location: None,
            object: object.into(),
        }
    }

    /// Extract a typed header from a parsed `FoamFile` sub-dictionary.
    pub fn from_dictionary(dict: &Dictionary) -> Result<Self, SchemaError> {
        let version = match dict.get("version") {
            Some(Value::Number(n)) => render_version(*n),
            Some(Value::Word(w)) => w.clone(),
            Some(other) => {
                return Err(SchemaError::InvalidHeader {
                    key: "version".to_string(),
                    value: other.type_name().to_string(),
                })
            }
            None => return Err(SchemaError::MissingHeader("version".to_string())),
        };

        let format_word = dict
            .get("format")
            .ok_or_else(|| SchemaError::MissingHeader("format".to_string()))?;
        let format = format_word
            .as_word()
            .and_then(Format::from_word)
            .ok_or_else(|| SchemaError::InvalidHeader {
                key: "format".to_string(),
                value: format!("{:?}", format_word),
            })?;

        let class = header_word(dict, "class")?;
        let object = header_word(dict, "object")?;
        let location = match dict.get("location") {
            Some(Value::Str(s)) => Some(s.clone()),
            Some(Value::Word(w)) => Some(w.clone()),
            Some(other) => {
                return Err(SchemaError::InvalidHeader {
                    key: "location".to_string(),
                    value: other.type_name().to_string(),
                })
            }
            None => None,
        };

        Ok(Self {
            version,
            format,
            class,
            location,
            object,
        })
    }

    /// Render the header back into dictionary form.
    pub fn to_dictionary(&self) -> Dictionary {
        let mut d = Dictionary::new();
        d.set("version", Value::word(&self.version));
        d.set("format", Value::word(self.format.as_word()));
        d.set("class", Value::word(&self.class));
        if let Some(location) = &self.location {
            d.set("location", Value::string(location));
        }
        d.set("object", Value::word(&self.object));
        d
    }
}

fn header_word(dict: &Dictionary, key: &str) -> Result<String, SchemaError> {
    match dict.get(key) {
        Some(Value::Word(w)) => Ok(w.clone()),
        Some(other) => Err(SchemaError::InvalidHeader {
            key: key.to_string(),
            value: other.type_name().to_string(),
        }),
        None => Err(SchemaError::MissingHeader(key.to_string())),
    }
}

/// Version numbers print with one decimal (`2.0`), matching convention.
fn render_version(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{:.1}", n)
    } else {
        format!("{}", n)
    }
}

/// A complete case file: header plus body dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFile {
    pub header: FoamFile,
    pub body: Dictionary,
}

impl FieldFile {
    /// Empty file of the given class and object name.
    pub fn new(class: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            header: FoamFile::new(class, object),
            body: Dictionary::new(),
        }
    }

    /// Empty `volScalarField` file.
    pub fn vol_scalar_field(object: impl Into<String>) -> Self {
        Self::new("volScalarField", object)
    }

    /// Empty `volVectorField` file.
    pub fn vol_vector_field(object: impl Into<String>) -> Self {
        Self::new("volVectorField", object)
    }

    /// Empty class `dictionary` file (e.g. `sampleDict`, `controlDict`).
    pub fn dictionary(object: impl Into<String>) -> Self {
        Self::new("dictionary", object)
    }

    /// Split a parsed top-level dictionary into header and body.
    ///
    /// The `FoamFile` entry is removed from the body; everything else is
    /// kept in file order.
    pub fn from_dictionary(mut dict: Dictionary) -> Result<Self, SchemaError> {
        let header_value = dict
            .remove("FoamFile")
            .ok_or_else(|| SchemaError::MissingHeader("FoamFile".to_string()))?;
        let header_dict = header_value
            .as_dict()
            .ok_or_else(|| SchemaError::WrongType {
                key: "FoamFile".to_string(),
                expected: "dictionary",
                found: header_value.type_name(),
            })?;
        let header = FoamFile::from_dictionary(header_dict)?;
        Ok(Self { header, body: dict })
    }

    /// Rebuild the flat dictionary form, header first.
    pub fn to_dictionary(&self) -> Dictionary {
        let mut d = Dictionary::new();
        d.set("FoamFile", self.header.to_dictionary());
        for (key, value) in self.body.iter() {
            d.set(key, value.clone());
        }
        d
    }

    /// The `dimensions` entry.
    pub fn dimensions(&self) -> Result<DimensionSet, SchemaError> {
        self.body.dimensions("dimensions")
    }

    /// The raw `internalField` entry (usually a `uniform` value).
    pub fn internal_field(&self) -> Result<&Value, SchemaError> {
        self.body.require("internalField")
    }

    /// The `boundaryField` sub-dictionary.
    pub fn boundary_field(&self) -> Result<&Dictionary, SchemaError> {
        self.body.dict("boundaryField")
    }

    /// Add or replace a boundary patch, creating `boundaryField` on first
    /// use.
    pub fn set_patch(&mut self, name: impl Into<String>, condition: Dictionary) {
        let boundary = match self.body.get("boundaryField") {
            Some(Value::Dict(d)) => {
                let mut d = d.clone();
                d.set(name.into(), condition);
                d
            }
            _ => Dictionary::new().with(name.into(), condition),
        };
        self.body.set("boundaryField", boundary);
    }

    /// Builder-style [`set_patch`](Self::set_patch).
    pub fn with_patch(mut self, name: impl Into<String>, condition: Dictionary) -> Self {
        self.set_patch(name, condition);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_dict() -> Dictionary {
        Dictionary::new()
            .with("version", Value::Number(2.0))
            .with("format", Value::word("ascii"))
            .with("class", Value::word("volVectorField"))
            .with("location", Value::string("0"))
            .with("object", Value::word("U"))
    }

    #[test]
    fn test_header_round_trip() {
        let header = FoamFile::from_dictionary(&header_dict()).unwrap();
        assert_eq!(header.version, "2.0");
        assert_eq!(header.format, Format::Ascii);
        assert_eq!(header.class, "volVectorField");
        assert_eq!(header.location.as_deref(), Some("0"));
        assert_eq!(header.object, "U");

        let rendered = header.to_dictionary();
        let reparsed = FoamFile::from_dictionary(&rendered).unwrap();
        assert_eq!(reparsed, header);
    }

    #[test]
    fn test_missing_header_key() {
        let mut dict = header_dict();
        dict.remove("class");
        assert_eq!(
            FoamFile::from_dictionary(&dict).unwrap_err(),
            SchemaError::MissingHeader("class".to_string())
        );
    }

    #[test]
    fn test_invalid_format_word() {
        let mut dict = header_dict();
        dict.set("format", Value::word("utf8"));
        assert!(matches!(
            FoamFile::from_dictionary(&dict).unwrap_err(),
            SchemaError::InvalidHeader { .. }
        ));
    }

    #[test]
    fn test_from_dictionary_requires_foamfile_block() {
        let dict = Dictionary::new().with("dimensions", DimensionSet::velocity());
        assert_eq!(
            FieldFile::from_dictionary(dict).unwrap_err(),
            SchemaError::MissingHeader("FoamFile".to_string())
        );
    }

    #[test]
    fn test_set_patch_creates_boundary_field() {
        let mut file = FieldFile::vol_vector_field("U");
        file.set_patch(
            "inlet",
            Dictionary::new().with("type", Value::word("fixedValue")),
        );
        let boundary = file.boundary_field().unwrap();
        assert_eq!(boundary.dict("inlet").unwrap().word("type").unwrap(), "fixedValue");
    }
}
