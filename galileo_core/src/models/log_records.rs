//! Trace and span search models.
//!
//! Search results are a union of record kinds discriminated by `type`. The
//! kinds differ mostly in the shape of `input` and `output`: LLM spans carry
//! chat messages, retriever spans return documents, the rest carry text.

use chrono::{DateTime, Utc};
use galileo_core_types::{decode_union, AdditionalProperties, Candidate, Field};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::common::Page;
use super::filters::{
    ColumnSort, ComparisonOperator, NumberOperator, NumberValue, OneOrMany, TextOperator,
};
use super::prompts::Message;

// =============================================================================
// Records
// =============================================================================

/// Fields shared by every record kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordBase {
    pub id: Uuid,
    pub trace_id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub parent_id: Field<Uuid>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub session_id: Field<Uuid>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub project_id: Field<Uuid>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub run_id: Field<Uuid>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub user_metadata: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tags: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status_code: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metrics: Field<Map<String, Value>>,
}

literal_tag!(TraceTag = "trace");
literal_tag!(LlmSpanTag = "llm");
literal_tag!(ToolSpanTag = "tool");
literal_tag!(RetrieverSpanTag = "retriever");
literal_tag!(WorkflowSpanTag = "workflow");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedTraceRecord {
    #[serde(rename = "type", default)]
    pub kind: TraceTag,
    #[serde(flatten)]
    pub base: RecordBase,
    pub input: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub output: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedLlmSpanRecord {
    #[serde(rename = "type", default)]
    pub kind: LlmSpanTag,
    #[serde(flatten)]
    pub base: RecordBase,
    pub input: Vec<Message>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub output: Field<Message>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub model: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub temperature: Field<f64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub num_input_tokens: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub num_output_tokens: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub total_tokens: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tools: Field<Vec<Value>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A document returned by a retriever span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<Map<String, Value>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedRetrieverSpanRecord {
    #[serde(rename = "type", default)]
    pub kind: RetrieverSpanTag,
    #[serde(flatten)]
    pub base: RecordBase,
    pub input: String,
    pub output: Vec<Document>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedToolSpanRecord {
    #[serde(rename = "type", default)]
    pub kind: ToolSpanTag,
    #[serde(flatten)]
    pub base: RecordBase,
    pub input: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub output: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tool_call_id: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedWorkflowSpanRecord {
    #[serde(rename = "type", default)]
    pub kind: WorkflowSpanTag,
    #[serde(flatten)]
    pub base: RecordBase,
    pub input: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub output: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A trace or span returned by a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LogRecord {
    Trace(ExtendedTraceRecord),
    Llm(ExtendedLlmSpanRecord),
    Tool(ExtendedToolSpanRecord),
    Retriever(ExtendedRetrieverSpanRecord),
    Workflow(ExtendedWorkflowSpanRecord),
}

/// Without a `type` key: llm, retriever, tool, workflow, trace.
const LOG_RECORDS: &[Candidate<LogRecord>] = &[
    Candidate {
        name: "ExtendedLlmSpanRecord",
        tag: LlmSpanTag::VALUE,
        parse: |v| serde_json::from_value(v).map(LogRecord::Llm),
    },
    Candidate {
        name: "ExtendedRetrieverSpanRecord",
        tag: RetrieverSpanTag::VALUE,
        parse: |v| serde_json::from_value(v).map(LogRecord::Retriever),
    },
    Candidate {
        name: "ExtendedToolSpanRecord",
        tag: ToolSpanTag::VALUE,
        parse: |v| serde_json::from_value(v).map(LogRecord::Tool),
    },
    Candidate {
        name: "ExtendedWorkflowSpanRecord",
        tag: WorkflowSpanTag::VALUE,
        parse: |v| serde_json::from_value(v).map(LogRecord::Workflow),
    },
    Candidate {
        name: "ExtendedTraceRecord",
        tag: TraceTag::VALUE,
        parse: |v| serde_json::from_value(v).map(LogRecord::Trace),
    },
];

impl<'de> Deserialize<'de> for LogRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode_union("LogRecord", "type", value, LOG_RECORDS).map_err(D::Error::custom)
    }
}

impl LogRecord {
    pub fn base(&self) -> &RecordBase {
        match self {
            LogRecord::Trace(r) => &r.base,
            LogRecord::Llm(r) => &r.base,
            LogRecord::Tool(r) => &r.base,
            LogRecord::Retriever(r) => &r.base,
            LogRecord::Workflow(r) => &r.base,
        }
    }

    pub fn id(&self) -> Uuid {
        self.base().id
    }

    pub fn trace_id(&self) -> Uuid {
        self.base().trace_id
    }

    /// The `type` discriminant.
    pub fn kind(&self) -> &'static str {
        match self {
            LogRecord::Trace(r) => r.kind.as_str(),
            LogRecord::Llm(r) => r.kind.as_str(),
            LogRecord::Tool(r) => r.kind.as_str(),
            LogRecord::Retriever(r) => r.kind.as_str(),
            LogRecord::Workflow(r) => r.kind.as_str(),
        }
    }

    pub fn is_trace(&self) -> bool {
        matches!(self, LogRecord::Trace(_))
    }
}

// =============================================================================
// Filters
// =============================================================================

literal_tag!(TextFilterTag = "text");
literal_tag!(NumberFilterTag = "number");
literal_tag!(DateFilterTag = "date");
literal_tag!(BooleanFilterTag = "boolean");
literal_tag!(IdFilterTag = "id");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecordsTextFilter {
    pub column_id: String,
    pub operator: TextOperator,
    pub value: OneOrMany<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub case_sensitive: Field<bool>,
    #[serde(rename = "type", default)]
    pub kind: TextFilterTag,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecordsNumberFilter {
    pub column_id: String,
    pub operator: NumberOperator,
    pub value: NumberValue,
    #[serde(rename = "type", default)]
    pub kind: NumberFilterTag,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecordsDateFilter {
    pub column_id: String,
    pub operator: ComparisonOperator,
    pub value: DateTime<Utc>,
    #[serde(rename = "type", default)]
    pub kind: DateFilterTag,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecordsBooleanFilter {
    pub column_id: String,
    pub value: bool,
    #[serde(rename = "type", default)]
    pub kind: BooleanFilterTag,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecordsIdFilter {
    pub column_id: String,
    pub operator: TextOperator,
    pub value: OneOrMany<Uuid>,
    #[serde(rename = "type", default)]
    pub kind: IdFilterTag,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// One search filter, discriminated by its `type` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LogRecordsFilter {
    Text(LogRecordsTextFilter),
    Number(LogRecordsNumberFilter),
    Date(LogRecordsDateFilter),
    Boolean(LogRecordsBooleanFilter),
    Id(LogRecordsIdFilter),
}

/// Without a `type` key: id, date, number, boolean, text.
const LOG_RECORDS_FILTERS: &[Candidate<LogRecordsFilter>] = &[
    Candidate {
        name: "LogRecordsIdFilter",
        tag: IdFilterTag::VALUE,
        parse: |v| serde_json::from_value(v).map(LogRecordsFilter::Id),
    },
    Candidate {
        name: "LogRecordsDateFilter",
        tag: DateFilterTag::VALUE,
        parse: |v| serde_json::from_value(v).map(LogRecordsFilter::Date),
    },
    Candidate {
        name: "LogRecordsNumberFilter",
        tag: NumberFilterTag::VALUE,
        parse: |v| serde_json::from_value(v).map(LogRecordsFilter::Number),
    },
    Candidate {
        name: "LogRecordsBooleanFilter",
        tag: BooleanFilterTag::VALUE,
        parse: |v| serde_json::from_value(v).map(LogRecordsFilter::Boolean),
    },
    Candidate {
        name: "LogRecordsTextFilter",
        tag: TextFilterTag::VALUE,
        parse: |v| serde_json::from_value(v).map(LogRecordsFilter::Text),
    },
];

impl<'de> Deserialize<'de> for LogRecordsFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode_union("LogRecordsFilter", "type", value, LOG_RECORDS_FILTERS)
            .map_err(D::Error::custom)
    }
}

impl LogRecordsFilter {
    pub fn text(column_id: impl Into<String>, operator: TextOperator, value: impl Into<String>) -> Self {
        LogRecordsFilter::Text(LogRecordsTextFilter {
            column_id: column_id.into(),
            operator,
            value: OneOrMany::One(value.into()),
            case_sensitive: Field::Unset,
            kind: TextFilterTag::Value,
            additional_properties: AdditionalProperties::new(),
        })
    }

    pub fn number(column_id: impl Into<String>, operator: NumberOperator, value: NumberValue) -> Self {
        LogRecordsFilter::Number(LogRecordsNumberFilter {
            column_id: column_id.into(),
            operator,
            value,
            kind: NumberFilterTag::Value,
            additional_properties: AdditionalProperties::new(),
        })
    }

    pub fn date(
        column_id: impl Into<String>,
        operator: ComparisonOperator,
        value: DateTime<Utc>,
    ) -> Self {
        LogRecordsFilter::Date(LogRecordsDateFilter {
            column_id: column_id.into(),
            operator,
            value,
            kind: DateFilterTag::Value,
            additional_properties: AdditionalProperties::new(),
        })
    }

    pub fn boolean(column_id: impl Into<String>, value: bool) -> Self {
        LogRecordsFilter::Boolean(LogRecordsBooleanFilter {
            column_id: column_id.into(),
            value,
            kind: BooleanFilterTag::Value,
            additional_properties: AdditionalProperties::new(),
        })
    }

    pub fn id(column_id: impl Into<String>, operator: TextOperator, value: impl Into<OneOrMany<Uuid>>) -> Self {
        LogRecordsFilter::Id(LogRecordsIdFilter {
            column_id: column_id.into(),
            operator,
            value: value.into(),
            kind: IdFilterTag::Value,
            additional_properties: AdditionalProperties::new(),
        })
    }
}

// =============================================================================
// Query
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecordsSortClause {
    pub column_id: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ascending: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sort_type: Field<ColumnSort>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl LogRecordsSortClause {
    pub fn new(column_id: impl Into<String>, ascending: bool) -> Self {
        Self {
            column_id: column_id.into(),
            ascending: Field::Value(ascending),
            sort_type: Field::Value(ColumnSort::Value),
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Body of the trace and span search endpoints.
///
/// Exactly one of `log_stream_id` and `experiment_id` selects the records;
/// the backend rejects the request with a 422 otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogRecordsQueryRequest {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub log_stream_id: Field<Uuid>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub experiment_id: Field<Uuid>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub filters: Field<Vec<LogRecordsFilter>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sort: Field<LogRecordsSortClause>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub limit: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub starting_token: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub truncate_fields: Field<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl LogRecordsQueryRequest {
    pub fn for_log_stream(log_stream_id: Uuid) -> Self {
        Self {
            log_stream_id: Field::Value(log_stream_id),
            ..Default::default()
        }
    }

    pub fn for_experiment(experiment_id: Uuid) -> Self {
        Self {
            experiment_id: Field::Value(experiment_id),
            ..Default::default()
        }
    }

    pub fn with_filter(mut self, filter: LogRecordsFilter) -> Self {
        match &mut self.filters {
            Field::Value(filters) => filters.push(filter),
            _ => self.filters = Field::Value(vec![filter]),
        }
        self
    }

    pub fn with_sort(mut self, sort: LogRecordsSortClause) -> Self {
        self.sort = Field::Value(sort);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Field::Value(limit);
        self
    }

    pub fn starting_at(mut self, starting_token: i64) -> Self {
        self.starting_token = Field::Value(starting_token);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecordsQueryResponse {
    #[serde(default)]
    pub records: Vec<LogRecord>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub limit: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub starting_token: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub paginated: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub next_starting_token: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_row_id: Field<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Page for LogRecordsQueryResponse {
    type Item = LogRecord;

    fn items(&self) -> &[LogRecord] {
        &self.records
    }

    fn into_items(self) -> Vec<LogRecord> {
        self.records
    }

    fn next_starting_token(&self) -> Option<i64> {
        self.next_starting_token.as_option().copied()
    }
}
