//! Request and response models for the Galileo API.
//!
//! Every model keeps keys it does not declare in `additional_properties`
//! and re-emits them on serialization. Optional keys use
//! [`galileo_core_types::Field`] so an omitted key and an explicit `null`
//! stay distinct.

/// Declare a single-value string enum used as a literal discriminant
/// (`"type": "text"`, `"sort_type": "column"`, ...).
///
/// Deserializing any other string fails, which is what lets ordered union
/// decoding reject the wrong variant.
macro_rules! literal_tag {
    ($(#[$meta:meta])* $name:ident = $value:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            #[default]
            #[serde(rename = $value)]
            Value,
        }

        impl $name {
            pub const VALUE: &'static str = $value;

            pub fn as_str(&self) -> &'static str {
                $value
            }
        }
    };
}

pub mod collaborators;
pub mod common;
pub mod experiments;
pub mod filters;
pub mod log_records;
pub mod log_streams;
pub mod projects;
pub mod prompts;
pub mod system;

pub use collaborators::{
    CollaboratorRole, CollaboratorUpdate, ListUserCollaboratorsResponse, UserCollaborator,
    UserCollaboratorCreate,
};
pub use common::{Page, Permission, UserRef};
pub use experiments::{ExperimentCreateRequest, ExperimentResponse};
pub use filters::{
    ColumnSort, ComparisonOperator, EqualityOperator, NumberOperator, NumberValue, OneOrMany,
    TextOperator,
};
pub use log_records::{
    Document, ExtendedLlmSpanRecord, ExtendedRetrieverSpanRecord, ExtendedToolSpanRecord,
    ExtendedTraceRecord, ExtendedWorkflowSpanRecord, LogRecord, LogRecordsBooleanFilter,
    LogRecordsDateFilter, LogRecordsFilter, LogRecordsIdFilter, LogRecordsNumberFilter,
    LogRecordsQueryRequest, LogRecordsQueryResponse, LogRecordsSortClause, LogRecordsTextFilter,
    RecordBase,
};
pub use log_streams::{LogStreamCreateRequest, LogStreamResponse};
pub use projects::{
    FilterParams, GetProjectsPaginatedResponse, ProjectCreate, ProjectCreateResponse,
    ProjectCreatedAtFilter, ProjectCreatorFilter, ProjectDb, ProjectDeleteResponse, ProjectFilter,
    ProjectNameFilter, ProjectSort, ProjectSortColumn, ProjectType, ProjectTypeFilter,
    ProjectUpdate, ProjectUpdateResponse,
};
pub use prompts::{
    BasePromptTemplateResponse, BasePromptTemplateVersionResponse,
    CreatePromptTemplateWithVersionRequestBody, ListPromptTemplateParams,
    ListPromptTemplateResponse, Message, MessageRole, PromptRunSettings,
    PromptTemplateCreatedAtFilter, PromptTemplateCreatorFilter, PromptTemplateFilter,
    PromptTemplateNameFilter, PromptTemplateSort, PromptTemplateSortColumn, PromptTemplateUsedInProjectFilter,
    TemplateInput,
};
pub use system::{HealthcheckResponse, UserInfo};
