//! Boundary condition catalog.
//!
//! Each patch under `boundaryField` names a condition `type` plus the
//! parameters that condition needs. The catalog knows, per condition
//! kind, which parameters are required and which are optional, and is
//! deliberately open: the solver defines dozens of kinds beyond the stock
//! set, so new kinds can be registered without touching existing ones.
//!
//! Registration is explicit — a [`ConditionRegistry`] value is built and
//! passed around; there is no process-wide catalog.

use crate::dict::Dictionary;
use crate::error::{FoamError, ValidationError};
use crate::field::FieldFile;
use crate::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Named view into one `boundaryField` entry.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryPatch<'a> {
    /// Patch name, e.g. `inlet`
    pub name: &'a str,
    /// The patch's condition dictionary
    pub entries: &'a Dictionary,
}

impl<'a> BoundaryPatch<'a> {
    /// The condition `type` token, if present and a word.
    pub fn condition_type(&self) -> Option<&'a str> {
        self.entries.get("type").and_then(Value::as_word)
    }
}

/// Descriptor for one recognized condition kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSpec {
    /// Condition `type` token, e.g. `fixedValue`
    pub name: String,
    /// Parameters that must be present
    pub required: Vec<String>,
    /// Parameters that may be present
    pub optional: Vec<String>,
}

impl ConditionSpec {
    /// Build a descriptor.
    pub fn new(name: &str, required: &[&str], optional: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            required: required.iter().map(|s| s.to_string()).collect(),
            optional: optional.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Catalog of recognized boundary condition kinds.
#[derive(Debug, Clone, Default)]
pub struct ConditionRegistry {
    specs: IndexMap<String, ConditionSpec>,
}

impl ConditionRegistry {
    /// Empty registry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry preloaded with the stock condition kinds.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for spec in [
            ConditionSpec::new("fixedValue", &["value"], &[]),
            ConditionSpec::new("zeroGradient", &[], &[]),
            ConditionSpec::new("slip", &[], &[]),
            ConditionSpec::new("wedge", &[], &[]),
            ConditionSpec::new("partialSlip", &["valueFraction"], &["value"]),
            ConditionSpec::new("empty", &[], &[]),
            ConditionSpec::new("symmetryPlane", &[], &[]),
            ConditionSpec::new("noSlip", &[], &[]),
            ConditionSpec::new("inletOutlet", &["inletValue"], &["value"]),
            ConditionSpec::new("calculated", &[], &["value"]),
        ] {
            registry.register(spec);
        }
        registry
    }

    /// Register a condition kind, replacing any previous spec of the same
    /// name.
    pub fn register(&mut self, spec: ConditionSpec) {
        self.specs.insert(spec.name.clone(), spec);
    }

    /// Look up a condition kind by its `type` token.
    pub fn get(&self, name: &str) -> Option<&ConditionSpec> {
        self.specs.get(name)
    }

    /// Check whether a condition kind is registered.
    pub fn is_known(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    /// All registered condition names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(|k| k.as_str())
    }

    /// Validate one patch against the catalog.
    pub fn validate(&self, patch: &BoundaryPatch) -> Result<(), ValidationError> {
        let condition = patch
            .condition_type()
            .ok_or_else(|| ValidationError::MissingType {
                patch: patch.name.to_string(),
            })?;
        let spec = self
            .get(condition)
            .ok_or_else(|| ValidationError::UnknownConditionType {
                patch: patch.name.to_string(),
                condition: condition.to_string(),
            })?;
        for parameter in &spec.required {
            if !patch.entries.contains_key(parameter) {
                return Err(ValidationError::MissingParameter {
                    patch: patch.name.to_string(),
                    condition: condition.to_string(),
                    parameter: parameter.clone(),
                });
            }
        }
        Ok(())
    }

    /// Validate every patch of a field file's `boundaryField`.
    pub fn validate_field(&self, field: &FieldFile) -> Result<(), FoamError> {
        let boundary = field.boundary_field()?;
        for (name, value) in boundary.iter() {
            let entries = value
                .as_dict()
                .ok_or_else(|| ValidationError::NotADictionary {
                    patch: name.to_string(),
                    found: value.type_name(),
                })?;
            self.validate(&BoundaryPatch { name, entries })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patch(entries: &Dictionary) -> BoundaryPatch<'_> {
        BoundaryPatch {
            name: "inlet",
            entries,
        }
    }

    #[test]
    fn test_fixed_value_requires_value() {
        let registry = ConditionRegistry::builtin();

        let complete = Dictionary::new()
            .with("type", Value::word("fixedValue"))
            .with("value", Value::uniform(Value::Vector([0.0, -39.13, 0.0])));
        assert!(registry.validate(&patch(&complete)).is_ok());

        let missing = Dictionary::new().with("type", Value::word("fixedValue"));
        assert_eq!(
            registry.validate(&patch(&missing)).unwrap_err(),
            ValidationError::MissingParameter {
                patch: "inlet".to_string(),
                condition: "fixedValue".to_string(),
                parameter: "value".to_string(),
            }
        );
    }

    #[test]
    fn test_parameterless_conditions() {
        let registry = ConditionRegistry::builtin();
        for kind in ["zeroGradient", "slip", "wedge"] {
            let entries = Dictionary::new().with("type", Value::word(kind));
            assert!(registry.validate(&patch(&entries)).is_ok(), "{}", kind);
        }
    }

    #[test]
    fn test_partial_slip() {
        let registry = ConditionRegistry::builtin();

        let complete = Dictionary::new()
            .with("type", Value::word("partialSlip"))
            .with("valueFraction", Value::uniform(Value::Number(0.5)));
        assert!(registry.validate(&patch(&complete)).is_ok());

        let missing = Dictionary::new().with("type", Value::word("partialSlip"));
        assert!(matches!(
            registry.validate(&patch(&missing)).unwrap_err(),
            ValidationError::MissingParameter { parameter, .. } if parameter == "valueFraction"
        ));
    }

    #[test]
    fn test_unknown_condition_type() {
        let registry = ConditionRegistry::builtin();
        let entries = Dictionary::new().with("type", Value::word("magicWall"));
        assert_eq!(
            registry.validate(&patch(&entries)).unwrap_err(),
            ValidationError::UnknownConditionType {
                patch: "inlet".to_string(),
                condition: "magicWall".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_type_entry() {
        let registry = ConditionRegistry::builtin();
        let entries = Dictionary::new().with("value", Value::Number(0.0));
        assert!(matches!(
            registry.validate(&patch(&entries)).unwrap_err(),
            ValidationError::MissingType { .. }
        ));
    }

    #[test]
    fn test_register_extension() {
        let mut registry = ConditionRegistry::builtin();
        registry.register(ConditionSpec::new(
            "turbulentIntensityKineticEnergyInlet",
            &["intensity", "value"],
            &[],
        ));

        assert!(registry.is_known("turbulentIntensityKineticEnergyInlet"));
        // Builtins are untouched
        assert!(registry.is_known("fixedValue"));

        let entries = Dictionary::new()
            .with("type", Value::word("turbulentIntensityKineticEnergyInlet"))
            .with("intensity", Value::Number(0.05))
            .with("value", Value::uniform(Value::Number(0.1)));
        assert!(registry.validate(&patch(&entries)).is_ok());
    }
}
