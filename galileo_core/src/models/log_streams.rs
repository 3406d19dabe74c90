//! Log stream models.

use chrono::{DateTime, Utc};
use galileo_core_types::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /projects/{project_id}/log_streams`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogStreamCreateRequest {
    pub name: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl LogStreamCreateRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogStreamResponse {
    pub id: Uuid,
    pub name: String,
    pub project_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_by: Field<Uuid>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_log_stream_round_trip() {
        let body = json!({
            "id": "3c9a1f0e-2b4d-4c6e-8f10-1a2b3c4d5e6f",
            "name": "production",
            "project_id": "0d2b8c4e-7c4c-4f69-9f0a-6f3bde0e1a11",
            "created_at": "2024-05-03T10:00:00Z",
            "updated_at": "2024-05-03T10:00:00Z",
            "created_by": null,
            "has_user_created_sessions": true
        });
        let stream: LogStreamResponse = serde_json::from_value(body.clone()).unwrap();
        assert!(stream.created_by.is_null());
        assert_eq!(
            stream.additional_properties["has_user_created_sessions"],
            json!(true)
        );
        assert_eq!(serde_json::to_value(&stream).unwrap(), body);
    }

    #[test]
    fn test_create_request() {
        let body = LogStreamCreateRequest::new("production");
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"name": "production"}));
    }
}
