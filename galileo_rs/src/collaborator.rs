//! Project collaborators.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use galileo_core::models::{CollaboratorRole, UserCollaborator};
use uuid::Uuid;

use crate::projects::Projects;
use crate::Result;

/// A user's membership on a project.
///
/// A `Collaborator` is a snapshot: its fields can be read but never
/// changed. [`Collaborator::update`] returns a new value and leaves the
/// original as it was.
///
/// ```compile_fail
/// fn promote(collaborator: &mut galileo::Collaborator) {
///     collaborator.role = galileo::CollaboratorRole::Owner;
/// }
/// ```
///
/// Two collaborators are equal when they refer to the same user on the same
/// project, whatever their role or profile details.
#[derive(Debug, Clone)]
pub struct Collaborator {
    id: Uuid,
    user_id: Uuid,
    project_id: Uuid,
    role: CollaboratorRole,
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
    created_at: DateTime<Utc>,
}

impl Collaborator {
    /// Build a collaborator from an API record belonging to `project_id`.
    pub fn from_api(project_id: Uuid, record: UserCollaborator) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            project_id,
            role: record.role,
            email: record.email,
            first_name: record.first_name.into_option(),
            last_name: record.last_name.into_option(),
            created_at: record.created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn project_id(&self) -> Uuid {
        self.project_id
    }

    pub fn role(&self) -> CollaboratorRole {
        self.role
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Change this collaborator's role and return the updated membership.
    pub async fn update(&self, projects: &Projects<'_>, role: CollaboratorRole) -> Result<Self> {
        projects
            .update_user_collaborator(self.project_id, self.user_id, role)
            .await
    }

    /// Remove this user from the project.
    pub async fn remove(&self, projects: &Projects<'_>) -> Result<()> {
        projects
            .remove_user_collaborator(self.project_id, self.user_id)
            .await
    }
}

impl PartialEq for Collaborator {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id && self.project_id == other.project_id
    }
}

impl Eq for Collaborator {}

impl Hash for Collaborator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user_id.hash(state);
        self.project_id.hash(state);
    }
}

impl std::fmt::Display for Collaborator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) on project {}", self.email, self.role, self.project_id)
    }
}
