//! Shapes shared by several resources.

use galileo_core_types::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An action the caller may or may not perform on a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub action: String,
    pub allowed: bool,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub message: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Compact user reference embedded in other resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: Uuid,
    pub email: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub first_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_name: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A page of a token-paginated listing.
pub trait Page {
    type Item;

    /// Items on this page.
    fn items(&self) -> &[Self::Item];

    /// Consume the page, returning its items.
    fn into_items(self) -> Vec<Self::Item>;

    /// Token for the next page, `None` on the last page.
    fn next_starting_token(&self) -> Option<i64>;
}
