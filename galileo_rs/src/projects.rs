//! Projects service.

use galileo_core::api::{
    CreateProject, CreateUserCollaborators, DeleteProject, DeleteUserCollaborator, GetProject,
    GetProjects, GetProjectsPaginated, ListUserCollaborators, UpdateProject,
    UpdateUserCollaborator,
};
use galileo_core::models::{
    CollaboratorRole, FilterParams, GetProjectsPaginatedResponse, Page, ProjectCreate,
    ProjectCreateResponse, ProjectDb, ProjectDeleteResponse, ProjectType, ProjectUpdate,
    ProjectUpdateResponse, UserCollaboratorCreate,
};
use galileo_core::{ApiClient, CoreError};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::collaborator::Collaborator;
use crate::{into_output, Error, Result};

/// Page size used when walking collaborator listings.
const COLLABORATOR_PAGE_SIZE: i64 = 100;

/// Projects and their user collaborators.
pub struct Projects<'a> {
    client: &'a ApiClient,
}

impl<'a> Projects<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create a project.
    pub async fn create(
        &self,
        name: &str,
        project_type: Option<ProjectType>,
    ) -> Result<ProjectCreateResponse> {
        let mut body = ProjectCreate::new(name);
        if let Some(project_type) = project_type {
            body = body.with_type(project_type);
        }
        let resp = self.client.asyncio_detailed(&CreateProject { body }).await?;
        into_output(resp)
    }

    /// Fetch a project by id.
    pub async fn get(&self, project_id: Uuid) -> Result<ProjectDb> {
        match self.client.asyncio_detailed(&GetProject { project_id }).await {
            Ok(resp) => into_output(resp),
            Err(CoreError::NotFound(_)) => Err(Error::ProjectNotFound(project_id.to_string())),
            Err(err) => Err(err.into()),
        }
    }

    /// Fetch a project by exact name.
    pub async fn get_by_name(&self, name: &str) -> Result<ProjectDb> {
        let endpoint = GetProjects {
            project_name: Some(name.to_string()),
            project_type: None,
        };
        let resp = self.client.asyncio_detailed(&endpoint).await?;
        let projects = into_output(resp)?;
        if projects.len() > 1 {
            warn!(name, count = projects.len(), "several projects share a name, using the first");
        }
        projects
            .into_iter()
            .next()
            .ok_or_else(|| Error::ProjectNotFound(name.to_string()))
    }

    /// List every project visible to the caller, optionally of one type.
    pub async fn list(&self, project_type: Option<ProjectType>) -> Result<Vec<ProjectDb>> {
        let endpoint = GetProjects {
            project_name: None,
            project_type,
        };
        let resp = self.client.asyncio_detailed(&endpoint).await?;
        into_output(resp)
    }

    /// One page of a filtered, sorted project listing.
    pub async fn list_paginated(
        &self,
        params: FilterParams,
        starting_token: Option<i64>,
        limit: Option<i64>,
    ) -> Result<GetProjectsPaginatedResponse> {
        let endpoint = GetProjectsPaginated {
            body: params,
            starting_token,
            limit,
        };
        let resp = self.client.asyncio_detailed(&endpoint).await?;
        into_output(resp)
    }

    pub async fn update(
        &self,
        project_id: Uuid,
        update: ProjectUpdate,
    ) -> Result<ProjectUpdateResponse> {
        let resp = self
            .client
            .asyncio_detailed(&UpdateProject {
                project_id,
                body: update,
            })
            .await?;
        into_output(resp)
    }

    pub async fn delete(&self, project_id: Uuid) -> Result<ProjectDeleteResponse> {
        let resp = self
            .client
            .asyncio_detailed(&DeleteProject { project_id })
            .await?;
        into_output(resp)
    }

    // -------------------------------------------------------------------------
    // Collaborators
    // -------------------------------------------------------------------------

    /// All user collaborators of a project, across every page.
    pub async fn list_user_collaborators(&self, project_id: Uuid) -> Result<Vec<Collaborator>> {
        let mut collaborators = Vec::new();
        let mut starting_token = 0;
        loop {
            let endpoint = ListUserCollaborators {
                project_id,
                starting_token: Some(starting_token),
                limit: Some(COLLABORATOR_PAGE_SIZE),
            };
            let page = into_output(self.client.asyncio_detailed(&endpoint).await?)?;
            let next = page.next_starting_token();
            debug!(%project_id, starting_token, count = page.items().len(), "collaborator page");
            collaborators.extend(
                page.into_items()
                    .into_iter()
                    .map(|record| Collaborator::from_api(project_id, record)),
            );
            match next {
                Some(token) if token > starting_token => starting_token = token,
                Some(token) => {
                    warn!(%project_id, token, "collaborator listing did not advance, stopping");
                    break;
                }
                None => break,
            }
        }
        Ok(collaborators)
    }

    /// Add users to a project.
    pub async fn add_user_collaborators(
        &self,
        project_id: Uuid,
        users: Vec<UserCollaboratorCreate>,
    ) -> Result<Vec<Collaborator>> {
        let endpoint = CreateUserCollaborators {
            project_id,
            body: users,
        };
        let created = into_output(self.client.asyncio_detailed(&endpoint).await?)?;
        Ok(created
            .into_iter()
            .map(|record| Collaborator::from_api(project_id, record))
            .collect())
    }

    /// Change a user's role on a project.
    pub async fn update_user_collaborator(
        &self,
        project_id: Uuid,
        user_id: Uuid,
        role: CollaboratorRole,
    ) -> Result<Collaborator> {
        let endpoint = UpdateUserCollaborator {
            project_id,
            user_id,
            body: role.into(),
        };
        let record = into_output(self.client.asyncio_detailed(&endpoint).await?)?;
        Ok(Collaborator::from_api(project_id, record))
    }

    /// Remove a user from a project.
    pub async fn remove_user_collaborator(&self, project_id: Uuid, user_id: Uuid) -> Result<()> {
        let endpoint = DeleteUserCollaborator {
            project_id,
            user_id,
        };
        into_output(self.client.asyncio_detailed(&endpoint).await?)?;
        debug!(%project_id, %user_id, "removed collaborator");
        Ok(())
    }
}
