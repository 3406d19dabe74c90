//! Experiment models.

use chrono::{DateTime, Utc};
use galileo_core_types::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Body of `POST /projects/{project_id}/experiments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentCreateRequest {
    pub name: String,
    /// Numeric task type; the backend assigns one when omitted.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub task_type: Field<i64>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl ExperimentCreateRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            task_type: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResponse {
    pub id: Uuid,
    pub name: String,
    pub project_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub task_type: Field<i64>,
    /// Metric name to aggregate value. Shapes vary by metric.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub aggregate_metrics: Field<serde_json::Map<String, Value>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_experiment_round_trip() {
        let body = json!({
            "id": "9b8a7c6d-5e4f-4a3b-9c2d-1e0f9a8b7c6d",
            "name": "baseline",
            "project_id": "0d2b8c4e-7c4c-4f69-9f0a-6f3bde0e1a11",
            "created_at": "2024-05-04T10:00:00Z",
            "updated_at": "2024-05-04T11:00:00Z",
            "task_type": 16,
            "aggregate_metrics": {"latency_ms": 812.5, "cost": {"total": 0.03}}
        });
        let exp: ExperimentResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(exp.task_type, Field::Value(16));
        assert_eq!(
            exp.aggregate_metrics.as_option().map(|m| m.len()),
            Some(2)
        );
        assert_eq!(serde_json::to_value(&exp).unwrap(), body);
    }

    #[test]
    fn test_create_request_omits_task_type() {
        assert_eq!(
            serde_json::to_value(ExperimentCreateRequest::new("baseline")).unwrap(),
            json!({"name": "baseline"})
        );
    }
}
