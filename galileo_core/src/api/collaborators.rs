//! Project user-collaborator endpoints.

use reqwest::Method;
use serde_json::Value;
use uuid::Uuid;

use super::{json_body, page_query, Endpoint};
use crate::errors::CoreResult;
use crate::models::{
    CollaboratorUpdate, ListUserCollaboratorsResponse, UserCollaborator, UserCollaboratorCreate,
};

fn users_path(project_id: Uuid) -> String {
    format!("/projects/{}/users", project_id)
}

/// `GET /projects/{project_id}/users`
#[derive(Debug, Clone, Copy)]
pub struct ListUserCollaborators {
    pub project_id: Uuid,
    pub starting_token: Option<i64>,
    pub limit: Option<i64>,
}

impl ListUserCollaborators {
    pub fn new(project_id: Uuid) -> Self {
        Self {
            project_id,
            starting_token: None,
            limit: None,
        }
    }
}

impl Endpoint for ListUserCollaborators {
    type Output = ListUserCollaboratorsResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        users_path(self.project_id)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        page_query(self.starting_token, self.limit)
    }
}

/// `POST /projects/{project_id}/users`
#[derive(Debug, Clone)]
pub struct CreateUserCollaborators {
    pub project_id: Uuid,
    pub body: Vec<UserCollaboratorCreate>,
}

impl Endpoint for CreateUserCollaborators {
    type Output = Vec<UserCollaborator>;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        users_path(self.project_id)
    }

    fn body(&self) -> CoreResult<Option<Value>> {
        json_body(&self.body)
    }
}

/// `PATCH /projects/{project_id}/users/{user_id}`
#[derive(Debug, Clone)]
pub struct UpdateUserCollaborator {
    pub project_id: Uuid,
    pub user_id: Uuid,
    pub body: CollaboratorUpdate,
}

impl Endpoint for UpdateUserCollaborator {
    type Output = UserCollaborator;

    fn method(&self) -> Method {
        Method::PATCH
    }

    fn path(&self) -> String {
        format!("{}/{}", users_path(self.project_id), self.user_id)
    }

    fn body(&self) -> CoreResult<Option<Value>> {
        json_body(&self.body)
    }
}

/// `DELETE /projects/{project_id}/users/{user_id}`
///
/// The backend returns no documented body, so the output is whatever JSON
/// comes back (`null` for an empty body).
#[derive(Debug, Clone, Copy)]
pub struct DeleteUserCollaborator {
    pub project_id: Uuid,
    pub user_id: Uuid,
}

impl Endpoint for DeleteUserCollaborator {
    type Output = Value;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("{}/{}", users_path(self.project_id), self.user_id)
    }
}
