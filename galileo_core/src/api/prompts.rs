//! Prompt template endpoints.
//!
//! Templates live either under a project or globally; global templates
//! can be queried and deleted, project templates only created and fetched.

use reqwest::Method;
use serde_json::Value;
use uuid::Uuid;

use super::{json_body, page_query, Endpoint};
use crate::errors::CoreResult;
use crate::models::{
    BasePromptTemplateResponse, CreatePromptTemplateWithVersionRequestBody,
    ListPromptTemplateParams, ListPromptTemplateResponse,
};

/// `POST /projects/{project_id}/templates`
#[derive(Debug, Clone)]
pub struct CreatePromptTemplate {
    pub project_id: Uuid,
    pub body: CreatePromptTemplateWithVersionRequestBody,
}

impl Endpoint for CreatePromptTemplate {
    type Output = BasePromptTemplateResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("/projects/{}/templates", self.project_id)
    }

    fn body(&self) -> CoreResult<Option<Value>> {
        json_body(&self.body)
    }
}

/// `POST /templates`
#[derive(Debug, Clone)]
pub struct CreateGlobalPromptTemplate {
    pub body: CreatePromptTemplateWithVersionRequestBody,
}

impl Endpoint for CreateGlobalPromptTemplate {
    type Output = BasePromptTemplateResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/templates".to_string()
    }

    fn body(&self) -> CoreResult<Option<Value>> {
        json_body(&self.body)
    }
}

/// `GET /projects/{project_id}/templates/{template_id}`
#[derive(Debug, Clone, Copy)]
pub struct GetPromptTemplate {
    pub project_id: Uuid,
    pub template_id: Uuid,
}

impl Endpoint for GetPromptTemplate {
    type Output = BasePromptTemplateResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/projects/{}/templates/{}", self.project_id, self.template_id)
    }
}

/// `GET /templates/{template_id}`
#[derive(Debug, Clone, Copy)]
pub struct GetGlobalPromptTemplate {
    pub template_id: Uuid,
}

impl Endpoint for GetGlobalPromptTemplate {
    type Output = BasePromptTemplateResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/templates/{}", self.template_id)
    }
}

/// `POST /templates/query`
#[derive(Debug, Clone, Default)]
pub struct QueryPromptTemplates {
    pub body: ListPromptTemplateParams,
    pub starting_token: Option<i64>,
    pub limit: Option<i64>,
}

impl Endpoint for QueryPromptTemplates {
    type Output = ListPromptTemplateResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/templates/query".to_string()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        page_query(self.starting_token, self.limit)
    }

    fn body(&self) -> CoreResult<Option<Value>> {
        json_body(&self.body)
    }
}

/// `DELETE /templates/{template_id}`
#[derive(Debug, Clone, Copy)]
pub struct DeleteGlobalPromptTemplate {
    pub template_id: Uuid,
}

impl Endpoint for DeleteGlobalPromptTemplate {
    type Output = Value;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("/templates/{}", self.template_id)
    }
}
