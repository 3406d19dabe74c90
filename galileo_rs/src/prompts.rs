//! Prompt template service.

use galileo_core::api::{
    CreateGlobalPromptTemplate, CreatePromptTemplate, DeleteGlobalPromptTemplate,
    GetGlobalPromptTemplate, GetPromptTemplate, QueryPromptTemplates,
};
use galileo_core::models::{
    BasePromptTemplateResponse, CreatePromptTemplateWithVersionRequestBody,
    ListPromptTemplateParams, ListPromptTemplateResponse,
};
use galileo_core::ApiClient;
use tracing::debug;
use uuid::Uuid;

use crate::{into_output, Result};

/// Prompt templates, either scoped to a project or global.
pub struct Prompts<'a> {
    client: &'a ApiClient,
}

impl<'a> Prompts<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create a template under `project_id`, or a global one when `None`.
    pub async fn create(
        &self,
        project_id: Option<Uuid>,
        body: CreatePromptTemplateWithVersionRequestBody,
    ) -> Result<BasePromptTemplateResponse> {
        let resp = match project_id {
            Some(project_id) => {
                self.client
                    .asyncio_detailed(&CreatePromptTemplate { project_id, body })
                    .await?
            }
            None => {
                self.client
                    .asyncio_detailed(&CreateGlobalPromptTemplate { body })
                    .await?
            }
        };
        into_output(resp)
    }

    /// Fetch a template from `project_id`, or a global one when `None`.
    pub async fn get(
        &self,
        project_id: Option<Uuid>,
        template_id: Uuid,
    ) -> Result<BasePromptTemplateResponse> {
        let resp = match project_id {
            Some(project_id) => {
                self.client
                    .asyncio_detailed(&GetPromptTemplate {
                        project_id,
                        template_id,
                    })
                    .await?
            }
            None => {
                self.client
                    .asyncio_detailed(&GetGlobalPromptTemplate { template_id })
                    .await?
            }
        };
        into_output(resp)
    }

    /// One page of global templates matching `params`.
    pub async fn query(
        &self,
        params: ListPromptTemplateParams,
        starting_token: Option<i64>,
        limit: Option<i64>,
    ) -> Result<ListPromptTemplateResponse> {
        let endpoint = QueryPromptTemplates {
            body: params,
            starting_token,
            limit,
        };
        into_output(self.client.asyncio_detailed(&endpoint).await?)
    }

    /// Delete a global template.
    pub async fn delete(&self, template_id: Uuid) -> Result<()> {
        into_output(
            self.client
                .asyncio_detailed(&DeleteGlobalPromptTemplate { template_id })
                .await?,
        )?;
        debug!(%template_id, "deleted prompt template");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::galileo;
    use crate::Error;
    use galileo_core::models::{Message, MessageRole, PromptTemplateFilter, TemplateInput};
    use httpmock::prelude::*;
    use serde_json::{json, Value};

    fn template_json(id: Uuid, name: &str) -> Value {
        let version_id = Uuid::new_v4();
        let version = json!({
            "id": version_id,
            "version": 0,
            "template": [{"role": "user", "content": "{{q}}"}],
            "raw": false,
            "settings": {},
            "model_changed": false,
            "settings_changed": false,
            "lines_added": 1,
            "lines_removed": 0,
            "lines_edited": 0,
            "content_changed": true,
            "created_at": "2024-06-01T09:00:00Z",
            "updated_at": "2024-06-01T09:00:00Z"
        });
        json!({
            "id": id,
            "name": name,
            "template": [{"role": "user", "content": "{{q}}"}],
            "selected_version": version,
            "selected_version_id": version_id,
            "all_versions": [version],
            "all_available_versions": [0],
            "total_versions": 1,
            "max_version": 0,
            "created_at": "2024-06-01T09:00:00Z",
            "updated_at": "2024-06-01T09:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_create_routes_by_scope() {
        let server = MockServer::start();
        let project_id = Uuid::new_v4();
        let scoped = server.mock(|when, then| {
            when.method(POST).path(format!("/projects/{project_id}/templates"));
            then.status(200).json_body(template_json(Uuid::new_v4(), "scoped"));
        });
        let global = server.mock(|when, then| {
            when.method(POST).path("/templates");
            then.status(200).json_body(template_json(Uuid::new_v4(), "global"));
        });

        let galileo = galileo(server.base_url());
        let prompts = galileo.prompts();
        let body = CreatePromptTemplateWithVersionRequestBody::new(
            "qa",
            vec![Message::new(MessageRole::User, "{{q}}")],
        );
        let a = prompts.create(Some(project_id), body.clone()).await.unwrap();
        let b = prompts.create(None, body).await.unwrap();
        assert_eq!(a.name, "scoped");
        assert_eq!(b.name, "global");
        assert!(matches!(b.template, TemplateInput::Messages(_)));
        scoped.assert();
        global.assert();
    }

    #[tokio::test]
    async fn test_get_query_delete() {
        let server = MockServer::start();
        let project_id = Uuid::new_v4();
        let template_id = Uuid::new_v4();
        server.mock(|when, then| {
            when.method(GET)
                .path(format!("/projects/{project_id}/templates/{template_id}"));
            then.status(200).json_body(template_json(template_id, "qa"));
        });
        server.mock(|when, then| {
            when.method(POST).path("/templates/query");
            then.status(200).json_body(json!({
                "templates": [template_json(template_id, "qa")],
                "limit": 100,
                "starting_token": 0,
                "paginated": false
            }));
        });
        let delete = server.mock(|when, then| {
            when.method(DELETE).path(format!("/templates/{template_id}"));
            then.status(200).json_body(json!({"message": "deleted"}));
        });

        let galileo = galileo(server.base_url());
        let prompts = galileo.prompts();
        let template = prompts.get(Some(project_id), template_id).await.unwrap();
        assert_eq!(template.id, template_id);

        let page = prompts
            .query(
                ListPromptTemplateParams::default()
                    .with_filter(PromptTemplateFilter::used_in_project(project_id)),
                None,
                None,
            )
            .await
            .unwrap();
        assert_eq!(page.templates.len(), 1);

        prompts.delete(template_id).await.unwrap();
        delete.assert();
    }

    #[tokio::test]
    async fn test_get_global_missing() {
        let server = MockServer::start();
        let template_id = Uuid::new_v4();
        server.mock(|when, then| {
            when.method(GET).path(format!("/templates/{template_id}"));
            then.status(404).json_body(json!({"detail": "Template not found"}));
        });

        let galileo = galileo(server.base_url());
        let err = galileo.prompts().get(None, template_id).await.unwrap_err();
        match err {
            Error::Core(core) => assert_eq!(core.http_status(), Some(404)),
            other => panic!("unexpected error: {other}"),
        }
    }
}
