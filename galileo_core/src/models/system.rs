//! Service health and current user.

use galileo_core_types::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthcheckResponse {
    pub api_version: String,
    pub message: String,
    pub version: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// The user the client is authenticated as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub first_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub role: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub organization_id: Field<Uuid>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}
