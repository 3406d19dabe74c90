//! Project endpoints.

use reqwest::Method;
use uuid::Uuid;

use super::{json_body, page_query, Endpoint};
use crate::errors::CoreResult;
use crate::models::{
    FilterParams, GetProjectsPaginatedResponse, ProjectCreate, ProjectCreateResponse, ProjectDb,
    ProjectDeleteResponse, ProjectType, ProjectUpdate, ProjectUpdateResponse,
};
use serde_json::Value;

/// `POST /projects`
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub body: ProjectCreate,
}

impl Endpoint for CreateProject {
    type Output = ProjectCreateResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/projects".to_string()
    }

    fn body(&self) -> CoreResult<Option<Value>> {
        json_body(&self.body)
    }
}

/// `GET /projects/{project_id}`
#[derive(Debug, Clone, Copy)]
pub struct GetProject {
    pub project_id: Uuid,
}

impl Endpoint for GetProject {
    type Output = ProjectDb;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/projects/{}", self.project_id)
    }
}

/// `GET /projects`, optionally narrowed by exact name and type.
#[derive(Debug, Clone, Default)]
pub struct GetProjects {
    pub project_name: Option<String>,
    pub project_type: Option<ProjectType>,
}

impl Endpoint for GetProjects {
    type Output = Vec<ProjectDb>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/projects".to_string()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(name) = &self.project_name {
            query.push(("project_name", name.clone()));
        }
        if let Some(project_type) = &self.project_type {
            query.push(("type", project_type.to_string()));
        }
        query
    }
}

/// `POST /projects/paginated`
#[derive(Debug, Clone, Default)]
pub struct GetProjectsPaginated {
    pub body: FilterParams,
    pub starting_token: Option<i64>,
    pub limit: Option<i64>,
}

impl Endpoint for GetProjectsPaginated {
    type Output = GetProjectsPaginatedResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/projects/paginated".to_string()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        page_query(self.starting_token, self.limit)
    }

    fn body(&self) -> CoreResult<Option<Value>> {
        json_body(&self.body)
    }
}

/// `PUT /projects/{project_id}`
#[derive(Debug, Clone)]
pub struct UpdateProject {
    pub project_id: Uuid,
    pub body: ProjectUpdate,
}

impl Endpoint for UpdateProject {
    type Output = ProjectUpdateResponse;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> String {
        format!("/projects/{}", self.project_id)
    }

    fn body(&self) -> CoreResult<Option<Value>> {
        json_body(&self.body)
    }
}

/// `DELETE /projects/{project_id}`
#[derive(Debug, Clone, Copy)]
pub struct DeleteProject {
    pub project_id: Uuid,
}

impl Endpoint for DeleteProject {
    type Output = ProjectDeleteResponse;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("/projects/{}", self.project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::client;
    use crate::errors::CoreError;
    use crate::http::Parsed;
    use crate::models::{Page, ProjectFilter, ProjectSortColumn};
    use httpmock::prelude::*;
    use serde_json::json;

    const PROJECT_ID: &str = "0d2b8c4e-7c4c-4f69-9f0a-6f3bde0e1a11";

    fn project_json(name: &str) -> Value {
        json!({
            "id": PROJECT_ID,
            "name": name,
            "created_by": "a3f1c2d4-5b6e-4f70-8a9b-0c1d2e3f4a5b",
            "created_at": "2024-05-01T12:00:00Z",
            "updated_at": "2024-05-01T12:00:00Z",
            "type": "gen_ai"
        })
    }

    #[tokio::test]
    async fn test_create_project_posts_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/projects")
                .json_body(json!({"name": "chatbot-evals", "type": "gen_ai"}));
            then.status(200).json_body(json!({
                "id": PROJECT_ID,
                "name": "chatbot-evals",
                "type": "gen_ai",
                "created_at": "2024-05-01T12:00:00Z",
                "updated_at": "2024-05-01T12:00:00Z"
            }));
        });

        let endpoint = CreateProject {
            body: ProjectCreate::new("chatbot-evals").with_type(ProjectType::GenAi),
        };
        let created = client(server.base_url())
            .asyncio(&endpoint)
            .await
            .unwrap()
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(created.id.to_string(), PROJECT_ID);
        mock.assert();
    }

    #[tokio::test]
    async fn test_create_project_conflict() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/projects");
            then.status(409)
                .json_body(json!({"detail": "Project chatbot-evals already exists"}));
        });

        let err = client(server.base_url())
            .asyncio(&CreateProject {
                body: ProjectCreate::new("chatbot-evals"),
            })
            .await
            .unwrap_err();
        match err {
            CoreError::Conflict(info) => assert!(info.message.contains("already exists")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_get_project_validation_error() {
        let server = MockServer::start();
        let project_id: Uuid = PROJECT_ID.parse().unwrap();
        server.mock(|when, then| {
            when.method(GET).path(format!("/projects/{project_id}"));
            then.status(422).json_body(json!({
                "detail": [{"loc": ["path", "project_id"], "msg": "bad id", "type": "uuid_parsing"}]
            }));
        });

        let parsed = client(server.base_url())
            .asyncio(&GetProject { project_id })
            .await
            .unwrap();
        match parsed {
            Some(Parsed::ValidationError(e)) => {
                assert_eq!(e.errors()[0].path(), "path.project_id");
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_projects_query_params() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/projects")
                .query_param("project_name", "chatbot-evals")
                .query_param("type", "gen_ai");
            then.status(200).json_body(json!([project_json("chatbot-evals")]));
        });

        let endpoint = GetProjects {
            project_name: Some("chatbot-evals".into()),
            project_type: Some(ProjectType::GenAi),
        };
        let projects = client(server.base_url())
            .asyncio(&endpoint)
            .await
            .unwrap()
            .and_then(Parsed::ok)
            .unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name.as_deref(), Some("chatbot-evals"));
        mock.assert();
    }

    #[tokio::test]
    async fn test_get_projects_paginated() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/projects/paginated")
                .query_param("starting_token", "10")
                .query_param("limit", "5")
                .json_body(json!({
                    "filters": [{"name": "name", "operator": "eq", "value": "a"}],
                    "sort": {"name": "created_at", "ascending": false, "sort_type": "column"}
                }));
            then.status(200).json_body(json!({
                "projects": [project_json("a")],
                "limit": 5,
                "starting_token": 10,
                "paginated": false
            }));
        });

        let endpoint = GetProjectsPaginated {
            body: FilterParams::default()
                .with_filter(ProjectFilter::name_eq("a"))
                .sorted_by(ProjectSortColumn::CreatedAt, false),
            starting_token: Some(10),
            limit: Some(5),
        };
        let page = client(server.base_url())
            .asyncio(&endpoint)
            .await
            .unwrap()
            .and_then(Parsed::ok)
            .unwrap();
        assert_eq!(page.items().len(), 1);
        assert_eq!(page.next_starting_token(), None);
        mock.assert();
    }

    #[tokio::test]
    async fn test_update_and_delete_project() {
        let server = MockServer::start();
        let project_id: Uuid = PROJECT_ID.parse().unwrap();
        let update = server.mock(|when, then| {
            when.method(PUT)
                .path(format!("/projects/{project_id}"))
                .json_body(json!({"name": "renamed"}));
            then.status(200).json_body(json!({
                "id": PROJECT_ID,
                "name": "renamed",
                "created_at": "2024-05-01T12:00:00Z",
                "updated_at": "2024-05-06T12:00:00Z"
            }));
        });
        let delete = server.mock(|when, then| {
            when.method(DELETE).path(format!("/projects/{project_id}"));
            then.status(200)
                .json_body(json!({"message": "Successfully deleted project renamed"}));
        });

        let api = client(server.base_url());
        let updated = api
            .asyncio(&UpdateProject {
                project_id,
                body: ProjectUpdate {
                    name: "renamed".to_string().into(),
                    ..Default::default()
                },
            })
            .await
            .unwrap()
            .and_then(Parsed::ok)
            .unwrap();
        assert_eq!(updated.name.as_deref(), Some("renamed"));

        let deleted = api
            .asyncio(&DeleteProject { project_id })
            .await
            .unwrap()
            .and_then(Parsed::ok)
            .unwrap();
        assert!(deleted.message.starts_with("Successfully deleted"));
        update.assert();
        delete.assert();
    }

    #[tokio::test]
    async fn test_delete_missing_project() {
        let server = MockServer::start();
        let project_id = Uuid::new_v4();
        server.mock(|when, then| {
            when.method(DELETE).path(format!("/projects/{project_id}"));
            then.status(404).json_body(json!({"detail": "Project not found"}));
        });

        let err = client(server.base_url())
            .asyncio(&DeleteProject { project_id })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.http_status(), Some(404));
    }
}
