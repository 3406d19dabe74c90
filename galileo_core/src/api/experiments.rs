//! Experiment endpoints.

use reqwest::Method;
use serde_json::Value;
use uuid::Uuid;

use super::{json_body, Endpoint};
use crate::errors::CoreResult;
use crate::models::{ExperimentCreateRequest, ExperimentResponse};

/// `POST /projects/{project_id}/experiments`
#[derive(Debug, Clone)]
pub struct CreateExperiment {
    pub project_id: Uuid,
    pub body: ExperimentCreateRequest,
}

impl Endpoint for CreateExperiment {
    type Output = ExperimentResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("/projects/{}/experiments", self.project_id)
    }

    fn body(&self) -> CoreResult<Option<Value>> {
        json_body(&self.body)
    }
}

/// `GET /projects/{project_id}/experiments`
#[derive(Debug, Clone, Copy)]
pub struct ListExperiments {
    pub project_id: Uuid,
}

impl Endpoint for ListExperiments {
    type Output = Vec<ExperimentResponse>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/projects/{}/experiments", self.project_id)
    }
}
