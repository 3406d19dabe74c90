//! Galileo API endpoints.
//!
//! Each endpoint is a small struct holding its path parameters, query
//! parameters and body. Any [`Endpoint`] can be called four ways:
//!
//! | call | client | returns |
//! |---|---|---|
//! | `sync` | [`crate::BlockingClient`] | `Option<Parsed<Output>>` |
//! | `sync_detailed` | [`crate::BlockingClient`] | `Response<Output>` |
//! | `asyncio` | [`crate::ApiClient`] | `Option<Parsed<Output>>` |
//! | `asyncio_detailed` | [`crate::ApiClient`] | `Response<Output>` |
//!
//! # Example
//!
//! ```ignore
//! use galileo_core::api::{CreateProject, GetProject};
//! use galileo_core::models::ProjectCreate;
//! use galileo_core::{ApiClient, Parsed};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::from_env()?;
//!
//!     let created = client
//!         .asyncio(&CreateProject { body: ProjectCreate::new("chatbot-evals") })
//!         .await?;
//!     if let Some(Parsed::Ok(project)) = created {
//!         let fetched = client.asyncio(&GetProject { project_id: project.id }).await?;
//!         println!("{fetched:?}");
//!     }
//!     Ok(())
//! }
//! ```

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::{CoreError, CoreResult};

pub mod collaborators;
pub mod experiments;
pub mod health;
pub mod log_records;
pub mod log_streams;
pub mod projects;
pub mod prompts;

pub use collaborators::{
    CreateUserCollaborators, DeleteUserCollaborator, ListUserCollaborators,
    UpdateUserCollaborator,
};
pub use experiments::{CreateExperiment, ListExperiments};
pub use health::{GetCurrentUser, Healthcheck};
pub use log_records::{QuerySpans, QueryTraces};
pub use log_streams::{CreateLogStream, ListLogStreams};
pub use projects::{
    CreateProject, DeleteProject, GetProject, GetProjects, GetProjectsPaginated, UpdateProject,
};
pub use prompts::{
    CreateGlobalPromptTemplate, CreatePromptTemplate, DeleteGlobalPromptTemplate,
    GetGlobalPromptTemplate, GetPromptTemplate, QueryPromptTemplates,
};

/// One API operation.
pub trait Endpoint {
    /// Model decoded from a 200 response.
    type Output: DeserializeOwned;

    fn method(&self) -> Method;

    /// Path relative to the API base URL, with path parameters filled in.
    fn path(&self) -> String;

    /// Query parameters. Unset optional parameters are left out.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// JSON request body.
    fn body(&self) -> CoreResult<Option<Value>> {
        Ok(None)
    }
}

/// Serialize a request model as a JSON body.
pub(crate) fn json_body<T: Serialize>(body: &T) -> CoreResult<Option<Value>> {
    serde_json::to_value(body)
        .map(Some)
        .map_err(|e| CoreError::Serialization(format!("failed to serialize request body: {}", e)))
}

/// `starting_token`/`limit` query parameters of paginated listings.
pub(crate) fn page_query(
    starting_token: Option<i64>,
    limit: Option<i64>,
) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(token) = starting_token {
        query.push(("starting_token", token.to_string()));
    }
    if let Some(limit) = limit {
        query.push(("limit", limit.to_string()));
    }
    query
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_skips_unset() {
        assert!(page_query(None, None).is_empty());
        assert_eq!(
            page_query(Some(0), Some(25)),
            vec![("starting_token", "0".to_string()), ("limit", "25".to_string())]
        );
        assert_eq!(page_query(None, Some(5)), vec![("limit", "5".to_string())]);
    }
}
