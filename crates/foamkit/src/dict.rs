//! Ordered key-value dictionary.
//!
//! Keys are unique and insertion order is preserved, which is what makes
//! serialize-after-parse emit entries in their original order. The map is
//! an `IndexMap`; overwriting via [`Dictionary::set`] keeps the key's
//! first-insertion position.

use crate::error::SchemaError;
use crate::foundation::DimensionSet;
use crate::value::{ListEntry, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from keyword to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dictionary {
    entries: IndexMap<String, Value>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or overwrite, preserving first-insertion order.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert only if the key is absent. Returns false on a duplicate.
    ///
    /// The parser uses this to reject duplicate keys within one nesting
    /// level.
    pub fn insert_unique(&mut self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, value.into());
        true
    }

    /// Remove an entry, preserving the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Like [`get`](Self::get) but failing with [`SchemaError::MissingKey`].
    pub fn require(&self, key: &str) -> Result<&Value, SchemaError> {
        self.entries
            .get(key)
            .ok_or_else(|| SchemaError::MissingKey(key.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    fn typed<'a, T>(
        &'a self,
        key: &str,
        expected: &'static str,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<T, SchemaError> {
        let value = self.require(key)?;
        extract(value).ok_or_else(|| SchemaError::WrongType {
            key: key.to_string(),
            expected,
            found: value.type_name(),
        })
    }

    pub fn number(&self, key: &str) -> Result<f64, SchemaError> {
        self.typed(key, "number", Value::as_number)
    }

    pub fn word(&self, key: &str) -> Result<&str, SchemaError> {
        self.typed(key, "word", Value::as_word)
    }

    pub fn string(&self, key: &str) -> Result<&str, SchemaError> {
        self.typed(key, "string", Value::as_str)
    }

    pub fn vector(&self, key: &str) -> Result<[f64; 3], SchemaError> {
        self.typed(key, "vector", Value::as_vector)
    }

    pub fn dimensions(&self, key: &str) -> Result<DimensionSet, SchemaError> {
        self.typed(key, "dimension set", Value::as_dimensions)
    }

    pub fn list(&self, key: &str) -> Result<&[ListEntry], SchemaError> {
        self.typed(key, "list", Value::as_list)
    }

    pub fn dict(&self, key: &str) -> Result<&Dictionary, SchemaError> {
        self.typed(key, "dictionary", Value::as_dict)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
