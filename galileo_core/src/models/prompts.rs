//! Prompt template models.

use chrono::{DateTime, Utc};
use galileo_core_types::{decode_union, AdditionalProperties, Candidate, Field};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::common::{Page, Permission, UserRef};
use super::filters::{ColumnSort, ComparisonOperator, EqualityOperator, OneOrMany, TextOperator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    System,
    User,
    Assistant,
    Function,
    Tool,
    Agent,
}

/// One chat message of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Template body: plain text or a list of chat messages. Text is tried first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateInput {
    Text(String),
    Messages(Vec<Message>),
}

impl From<&str> for TemplateInput {
    fn from(text: &str) -> Self {
        TemplateInput::Text(text.to_string())
    }
}

impl From<String> for TemplateInput {
    fn from(text: String) -> Self {
        TemplateInput::Text(text)
    }
}

impl From<Vec<Message>> for TemplateInput {
    fn from(messages: Vec<Message>) -> Self {
        TemplateInput::Messages(messages)
    }
}

/// Model settings stored with a template version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptRunSettings {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub model_alias: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub temperature: Field<f64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub max_tokens: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub top_p: Field<f64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub frequency_penalty: Field<f64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub presence_penalty: Field<f64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub stop_sequences: Field<Vec<String>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePromptTemplateWithVersionRequestBody {
    pub name: String,
    pub template: TemplateInput,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub version: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub raw: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub settings: Field<PromptRunSettings>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub output_type: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl CreatePromptTemplateWithVersionRequestBody {
    pub fn new(name: impl Into<String>, template: impl Into<TemplateInput>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            version: Field::Unset,
            raw: Field::Unset,
            settings: Field::Unset,
            output_type: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        }
    }

    pub fn with_settings(mut self, settings: PromptRunSettings) -> Self {
        self.settings = Field::Value(settings);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasePromptTemplateVersionResponse {
    pub id: Uuid,
    pub version: i64,
    pub template: TemplateInput,
    pub raw: bool,
    pub settings: PromptRunSettings,
    pub model_changed: bool,
    pub settings_changed: bool,
    pub lines_added: i64,
    pub lines_removed: i64,
    pub lines_edited: i64,
    pub content_changed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub output_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_by_user: Field<UserRef>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasePromptTemplateResponse {
    pub id: Uuid,
    pub name: String,
    pub template: TemplateInput,
    pub selected_version: BasePromptTemplateVersionResponse,
    pub selected_version_id: Uuid,
    pub all_versions: Vec<BasePromptTemplateVersionResponse>,
    pub all_available_versions: Vec<i64>,
    pub total_versions: i64,
    pub max_version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub permissions: Field<Vec<Permission>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_by_user: Field<UserRef>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

// =============================================================================
// Query
// =============================================================================

literal_tag!(PromptTemplateNameTag = "name");
literal_tag!(PromptTemplateCreatorTag = "creator");
literal_tag!(PromptTemplateCreatedAtTag = "created_at");
literal_tag!(PromptTemplateUsedInProjectTag = "used_in_project");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplateNameFilter {
    #[serde(default)]
    pub name: PromptTemplateNameTag,
    pub operator: TextOperator,
    pub value: OneOrMany<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub case_sensitive: Field<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplateCreatorFilter {
    #[serde(default)]
    pub name: PromptTemplateCreatorTag,
    pub operator: EqualityOperator,
    pub value: OneOrMany<Uuid>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplateCreatedAtFilter {
    #[serde(default)]
    pub name: PromptTemplateCreatedAtTag,
    pub operator: ComparisonOperator,
    pub value: DateTime<Utc>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Templates used by the given project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplateUsedInProjectFilter {
    #[serde(default)]
    pub name: PromptTemplateUsedInProjectTag,
    pub value: Uuid,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// One filter of a template query, discriminated by its `name` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PromptTemplateFilter {
    Name(PromptTemplateNameFilter),
    Creator(PromptTemplateCreatorFilter),
    CreatedAt(PromptTemplateCreatedAtFilter),
    UsedInProject(PromptTemplateUsedInProjectFilter),
}

/// Without a `name` key: used_in_project, created_at, creator, name.
const PROMPT_TEMPLATE_FILTERS: &[Candidate<PromptTemplateFilter>] = &[
    Candidate {
        name: "PromptTemplateUsedInProjectFilter",
        tag: PromptTemplateUsedInProjectTag::VALUE,
        parse: |v| serde_json::from_value(v).map(PromptTemplateFilter::UsedInProject),
    },
    Candidate {
        name: "PromptTemplateCreatedAtFilter",
        tag: PromptTemplateCreatedAtTag::VALUE,
        parse: |v| serde_json::from_value(v).map(PromptTemplateFilter::CreatedAt),
    },
    Candidate {
        name: "PromptTemplateCreatorFilter",
        tag: PromptTemplateCreatorTag::VALUE,
        parse: |v| serde_json::from_value(v).map(PromptTemplateFilter::Creator),
    },
    Candidate {
        name: "PromptTemplateNameFilter",
        tag: PromptTemplateNameTag::VALUE,
        parse: |v| serde_json::from_value(v).map(PromptTemplateFilter::Name),
    },
];

impl<'de> Deserialize<'de> for PromptTemplateFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode_union("PromptTemplateFilter", "name", value, PROMPT_TEMPLATE_FILTERS)
            .map_err(D::Error::custom)
    }
}

impl PromptTemplateFilter {
    /// Templates whose name equals `name`.
    pub fn name_eq(name: impl Into<String>) -> Self {
        PromptTemplateFilter::Name(PromptTemplateNameFilter {
            name: PromptTemplateNameTag::Value,
            operator: TextOperator::Eq,
            value: OneOrMany::One(name.into()),
            case_sensitive: Field::Unset,
            additional_properties: AdditionalProperties::new(),
        })
    }

    pub fn used_in_project(project_id: Uuid) -> Self {
        PromptTemplateFilter::UsedInProject(PromptTemplateUsedInProjectFilter {
            name: PromptTemplateUsedInProjectTag::Value,
            value: project_id,
            additional_properties: AdditionalProperties::new(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptTemplateSortColumn {
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplateSort {
    pub name: PromptTemplateSortColumn,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ascending: Field<bool>,
    #[serde(default)]
    pub sort_type: ColumnSort,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `POST /templates/query`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPromptTemplateParams {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub filters: Field<Vec<PromptTemplateFilter>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sort: Field<PromptTemplateSort>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl ListPromptTemplateParams {
    pub fn with_filter(mut self, filter: PromptTemplateFilter) -> Self {
        match &mut self.filters {
            Field::Value(filters) => filters.push(filter),
            _ => self.filters = Field::Value(vec![filter]),
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPromptTemplateResponse {
    #[serde(default)]
    pub templates: Vec<BasePromptTemplateResponse>,
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

impl Page for ListPromptTemplateResponse {
    type Item = BasePromptTemplateResponse;

    fn items(&self) -> &[BasePromptTemplateResponse] {
        &self.templates
    }

    fn into_items(self) -> Vec<BasePromptTemplateResponse> {
        self.templates
    }

    fn next_starting_token(&self) -> Option<i64> {
        self.next_starting_token.as_option().copied()
    }
}
