//! Project collaborator models.

use chrono::{DateTime, Utc};
use galileo_core_types::{AdditionalProperties, Field};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{Page, Permission};

/// Role of a user on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaboratorRole {
    Owner,
    Editor,
    Annotator,
    Viewer,
}

impl CollaboratorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Editor => "editor",
            Self::Annotator => "annotator",
            Self::Viewer => "viewer",
        }
    }
}

impl std::fmt::Display for CollaboratorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of `POST /projects/{project_id}/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCollaboratorCreate {
    pub user_id: Uuid,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub role: Field<CollaboratorRole>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl UserCollaboratorCreate {
    pub fn new(user_id: Uuid, role: CollaboratorRole) -> Self {
        Self {
            user_id,
            role: Field::Value(role),
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// A user's membership on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCollaborator {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: CollaboratorRole,
    pub email: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub first_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub permissions: Field<Vec<Permission>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `PATCH /projects/{project_id}/users/{user_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaboratorUpdate {
    pub role: CollaboratorRole,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl From<CollaboratorRole> for CollaboratorUpdate {
    fn from(role: CollaboratorRole) -> Self {
        Self {
            role,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListUserCollaboratorsResponse {
    #[serde(default)]
    pub collaborators: Vec<UserCollaborator>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub limit: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub starting_token: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub paginated: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub next_starting_token: Field<i64>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Page for ListUserCollaboratorsResponse {
    type Item = UserCollaborator;

    fn items(&self) -> &[UserCollaborator] {
        &self.collaborators
    }

    fn into_items(self) -> Vec<UserCollaborator> {
        self.collaborators
    }

    fn next_starting_token(&self) -> Option<i64> {
        self.next_starting_token.as_option().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn collaborator_json() -> Value {
        json!({
            "id": "5a0d6f0e-8d1e-4f3a-b5a4-2f6c9b0e1d22",
            "user_id": "a3f1c2d4-5b6e-4f70-8a9b-0c1d2e3f4a5b",
            "role": "editor",
            "email": "ana@example.com",
            "created_at": "2024-05-01T12:00:00Z",
            "first_name": "Ana",
            "last_name": null
        })
    }

    #[test]
    fn test_user_collaborator_round_trip() {
        let collab: UserCollaborator = serde_json::from_value(collaborator_json()).unwrap();
        assert_eq!(collab.role, CollaboratorRole::Editor);
        assert_eq!(collab.first_name, Field::Value("Ana".to_string()));
        assert!(collab.last_name.is_null());
        assert!(collab.permissions.is_unset());
        assert_eq!(serde_json::to_value(&collab).unwrap(), collaborator_json());
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let mut body = collaborator_json();
        body["role"] = json!("superuser");
        assert!(serde_json::from_value::<UserCollaborator>(body).is_err());
    }

    #[test]
    fn test_create_body() {
        let user_id = Uuid::nil();
        let body = UserCollaboratorCreate::new(user_id, CollaboratorRole::Viewer);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"user_id": user_id, "role": "viewer"})
        );
    }

    #[test]
    fn test_update_body_keeps_extras() {
        let mut update = CollaboratorUpdate::from(CollaboratorRole::Annotator);
        update
            .additional_properties
            .insert("notify".into(), json!(true));
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"role": "annotator", "notify": true})
        );
    }

    #[test]
    fn test_list_response_last_page() {
        let page: ListUserCollaboratorsResponse = serde_json::from_value(json!({
            "collaborators": [collaborator_json()],
            "starting_token": 0,
            "limit": 100,
            "paginated": false,
            "next_starting_token": null
        }))
        .unwrap();
        assert_eq!(page.items().len(), 1);
        assert_eq!(page.next_starting_token(), None);
    }
}
