//! FastAPI-style request validation errors (HTTP 422 bodies).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{AdditionalProperties, Field};

/// One element of a validation error location path.
///
/// Integers are tried before strings, so `0` is an index and `"0"` a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationItem {
    Index(i64),
    Key(String),
}

impl std::fmt::Display for LocationItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationItem::Index(i) => write!(f, "{i}"),
            LocationItem::Key(k) => f.write_str(k),
        }
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub loc: Vec<LocationItem>,
    pub msg: String,
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl ValidationError {
    pub fn new(loc: Vec<LocationItem>, msg: impl Into<String>, error_type: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            error_type: error_type.into(),
            additional_properties: AdditionalProperties::new(),
        }
    }

    /// Location joined with dots, e.g. `body.name`.
    pub fn path(&self) -> String {
        self.loc
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Body of a 422 response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpValidationError {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub detail: Field<Vec<ValidationError>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl HttpValidationError {
    /// Validation failures, empty when `detail` is absent or null.
    pub fn errors(&self) -> &[ValidationError] {
        self.detail.as_option().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up an unrecognized top-level key.
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.additional_properties.get(key)
    }
}

impl std::fmt::Display for HttpValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let errors = self.errors();
        if errors.is_empty() {
            return f.write_str("validation failed");
        }
        let parts: Vec<String> = errors
            .iter()
            .map(|e| format!("{}: {}", e.path(), e.msg))
            .collect();
        write!(f, "validation failed: {}", parts.join("; "))
    }
}
