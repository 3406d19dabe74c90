//! Log stream endpoints.

use reqwest::Method;
use serde_json::Value;
use uuid::Uuid;

use super::{json_body, Endpoint};
use crate::errors::CoreResult;
use crate::models::{LogStreamCreateRequest, LogStreamResponse};

/// `POST /projects/{project_id}/log_streams`
#[derive(Debug, Clone)]
pub struct CreateLogStream {
    pub project_id: Uuid,
    pub body: LogStreamCreateRequest,
}

impl Endpoint for CreateLogStream {
    type Output = LogStreamResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("/projects/{}/log_streams", self.project_id)
    }

    fn body(&self) -> CoreResult<Option<Value>> {
        json_body(&self.body)
    }
}

/// `GET /projects/{project_id}/log_streams`
#[derive(Debug, Clone, Copy)]
pub struct ListLogStreams {
    pub project_id: Uuid,
}

impl Endpoint for ListLogStreams {
    type Output = Vec<LogStreamResponse>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/projects/{}/log_streams", self.project_id)
    }
}
