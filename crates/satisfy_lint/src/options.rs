//! Rule options: which type each export must satisfy.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The key whose type applies to exports without an entry of their own.
pub const WILDCARD: &str = "*";

/// Errors raised while reading rule options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid rule options: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rule options must be an object of export names to type names, found {0}")]
    NotAnObject(&'static str),

    #[error("expected a type name string for export \"{key}\", found {found}")]
    NonStringValue { key: String, found: &'static str },

    #[error("expected at most one options object, found {0}")]
    TooManyOptions(usize),
}

/// Maps export names, or [`WILDCARD`], to the name of the type they must satisfy.
///
/// Read-only once the run starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExportTypeMap {
    entries: FxHashMap<String, String>,
}

impl ExportTypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON text. See [`ExportTypeMap::from_value`].
    pub fn from_json_str(text: &str) -> Result<Self, OptionsError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Read options from a JSON value.
    ///
    /// Accepts the mapping object itself, or the options array lint hosts pass
    /// (`[{ ... }]`, where `[]` means the defaults). Every value must be a string.
    pub fn from_value(value: &Value) -> Result<Self, OptionsError> {
        match value {
            Value::Object(object) => {
                let mut map = Self::new();
                for (key, value) in object {
                    let type_name = value.as_str().ok_or_else(|| OptionsError::NonStringValue {
                        key: key.clone(),
                        found: json_kind(value),
                    })?;
                    map.insert(key.clone(), type_name);
                }
                Ok(map)
            }
            Value::Array(items) => match items.as_slice() {
                [] => Ok(Self::new()),
                [options] => Self::from_value(options),
                _ => Err(OptionsError::TooManyOptions(items.len())),
            },
            other => Err(OptionsError::NotAnObject(json_kind(other))),
        }
    }

    pub fn insert(&mut self, export_name: impl Into<String>, type_name: impl Into<String>) {
        self.entries.insert(export_name.into(), type_name.into());
    }

    pub fn with(mut self, export_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.insert(export_name, type_name);
        self
    }

    pub fn with_wildcard(self, type_name: impl Into<String>) -> Self {
        self.with(WILDCARD, type_name)
    }

    /// The type name an export must satisfy, if any.
    ///
    /// An entry for the export's own name wins over the wildcard. Empty type
    /// names count as absent.
    pub fn expected_type_for(&self, export_name: &str) -> Option<&str> {
        self.entry(export_name).or_else(|| self.entry(WILDCARD))
    }

    pub fn wildcard(&self) -> Option<&str> {
        self.entry(WILDCARD)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|type_name| !type_name.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ExportTypeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
