//! Project models.

use chrono::{DateTime, Utc};
use galileo_core_types::{decode_union, AdditionalProperties, Candidate, Field};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::common::{Page, Permission};
use super::filters::{ColumnSort, ComparisonOperator, EqualityOperator, OneOrMany, TextOperator};

/// Kind of project.
///
/// Values this SDK does not know yet decode as `Other` instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectType {
    GenAi,
    LlmMonitor,
    PromptEvaluation,
    TrainingInference,
    Other(String),
}

impl ProjectType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::GenAi => "gen_ai",
            Self::LlmMonitor => "llm_monitor",
            Self::PromptEvaluation => "prompt_evaluation",
            Self::TrainingInference => "training_inference",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ProjectType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "gen_ai" => Self::GenAi,
            "llm_monitor" => Self::LlmMonitor,
            "prompt_evaluation" => Self::PromptEvaluation,
            "training_inference" => Self::TrainingInference,
            _ => Self::Other(s),
        }
    }
}

impl From<ProjectType> for String {
    fn from(t: ProjectType) -> Self {
        match t {
            ProjectType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCreate {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Field::is_unset")]
    pub project_type: Field<ProjectType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub create_example_templates: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_by: Field<Uuid>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl ProjectCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project_type: Field::Unset,
            create_example_templates: Field::Unset,
            created_by: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        }
    }

    pub fn with_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = Field::Value(project_type);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCreateResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "type", default, skip_serializing_if = "Field::is_unset")]
    pub project_type: Field<ProjectType>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A project as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDb {
    pub id: Uuid,
    pub name: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "type", default, skip_serializing_if = "Field::is_unset")]
    pub project_type: Field<ProjectType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub labels: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub bookmark: Field<bool>,
    /// Run summaries, returned only by some listings.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub runs: Field<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub permissions: Field<Vec<Permission>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `PUT /projects/{project_id}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Field::is_unset")]
    pub project_type: Field<ProjectType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub labels: Field<Vec<String>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectUpdateResponse {
    pub id: Uuid,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "type", default, skip_serializing_if = "Field::is_unset")]
    pub project_type: Field<ProjectType>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDeleteResponse {
    pub message: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

// =============================================================================
// Filters
// =============================================================================

literal_tag!(ProjectNameTag = "name");
literal_tag!(ProjectTypeTag = "type");
literal_tag!(ProjectCreatorTag = "creator");
literal_tag!(ProjectCreatedAtTag = "created_at");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectNameFilter {
    #[serde(default)]
    pub name: ProjectNameTag,
    pub operator: TextOperator,
    pub value: OneOrMany<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub case_sensitive: Field<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTypeFilter {
    #[serde(default)]
    pub name: ProjectTypeTag,
    pub operator: EqualityOperator,
    pub value: OneOrMany<ProjectType>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCreatorFilter {
    #[serde(default)]
    pub name: ProjectCreatorTag,
    pub operator: EqualityOperator,
    pub value: OneOrMany<Uuid>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCreatedAtFilter {
    #[serde(default)]
    pub name: ProjectCreatedAtTag,
    pub operator: ComparisonOperator,
    pub value: DateTime<Utc>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// One filter of a project listing, discriminated by its `name` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProjectFilter {
    Name(ProjectNameFilter),
    Type(ProjectTypeFilter),
    Creator(ProjectCreatorFilter),
    CreatedAt(ProjectCreatedAtFilter),
}

/// Without a `name` key: created_at, creator, type, name.
const PROJECT_FILTERS: &[Candidate<ProjectFilter>] = &[
    Candidate {
        name: "ProjectCreatedAtFilter",
        tag: ProjectCreatedAtTag::VALUE,
        parse: |v| serde_json::from_value(v).map(ProjectFilter::CreatedAt),
    },
    Candidate {
        name: "ProjectCreatorFilter",
        tag: ProjectCreatorTag::VALUE,
        parse: |v| serde_json::from_value(v).map(ProjectFilter::Creator),
    },
    Candidate {
        name: "ProjectTypeFilter",
        tag: ProjectTypeTag::VALUE,
        parse: parse_type_filter,
    },
    Candidate {
        name: "ProjectNameFilter",
        tag: ProjectNameTag::VALUE,
        parse: |v| serde_json::from_value(v).map(ProjectFilter::Name),
    },
];

/// Without a `name` key, only known project types make a type filter, so a
/// plain text match still reaches the name filter.
fn parse_type_filter(value: Value) -> Result<ProjectFilter, serde_json::Error> {
    let tagged = value.get("name").and_then(Value::as_str).is_some();
    let filter: ProjectTypeFilter = serde_json::from_value(value)?;
    if !tagged {
        if let Some(ProjectType::Other(s)) = filter
            .value
            .as_slice()
            .iter()
            .find(|t| matches!(t, ProjectType::Other(_)))
        {
            return Err(serde_json::Error::custom(format!("unknown project type {s:?}")));
        }
    }
    Ok(ProjectFilter::Type(filter))
}

impl<'de> Deserialize<'de> for ProjectFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode_union("ProjectFilter", "name", value, PROJECT_FILTERS).map_err(D::Error::custom)
    }
}

impl ProjectFilter {
    /// Projects whose name equals `name`.
    pub fn name_eq(name: impl Into<String>) -> Self {
        ProjectFilter::Name(ProjectNameFilter {
            name: ProjectNameTag::Value,
            operator: TextOperator::Eq,
            value: OneOrMany::One(name.into()),
            case_sensitive: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        })
    }

    /// Projects of the given type.
    pub fn type_eq(project_type: ProjectType) -> Self {
        ProjectFilter::Type(ProjectTypeFilter {
            name: ProjectTypeTag::Value,
            operator: EqualityOperator::Eq,
            value: OneOrMany::One(project_type),
            additional_properties: AdditionalProperties::new(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectSortColumn {
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSort {
    pub name: ProjectSortColumn,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ascending: Field<bool>,
    #[serde(default)]
    pub sort_type: ColumnSort,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `POST /projects/paginated`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub filters: Field<Vec<ProjectFilter>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sort: Field<ProjectSort>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl FilterParams {
    pub fn with_filter(mut self, filter: ProjectFilter) -> Self {
        match &mut self.filters {
            Field::Value(filters) => filters.push(filter),
            _ => self.filters = Field::Value(vec![filter]),
        }
        self
    }

    pub fn sorted_by(mut self, column: ProjectSortColumn, ascending: bool) -> Self {
        self.sort = Field::Value(ProjectSort {
            name: column,
            ascending: Field::Value(ascending),
            sort_type: ColumnSort::Value,
            additional_properties: AdditionalProperties::new(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetProjectsPaginatedResponse {
    #[serde(default)]
    pub projects: Vec<ProjectDb>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub limit: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub starting_token: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub paginated: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub next_starting_token: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub total_count: Field<i64>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Page for GetProjectsPaginatedResponse {
    type Item = ProjectDb;

    fn items(&self) -> &[ProjectDb] {
        &self.projects
    }

    fn into_items(self) -> Vec<ProjectDb> {
        self.projects
    }

    fn next_starting_token(&self) -> Option<i64> {
        self.next_starting_token.as_option().copied()
    }
}
