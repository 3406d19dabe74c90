//! Trace and span search endpoints.

use reqwest::Method;
use serde_json::Value;
use uuid::Uuid;

use super::{json_body, Endpoint};
use crate::errors::CoreResult;
use crate::models::{LogRecordsQueryRequest, LogRecordsQueryResponse};

/// `POST /projects/{project_id}/traces/search`
#[derive(Debug, Clone)]
pub struct QueryTraces {
    pub project_id: Uuid,
    pub body: LogRecordsQueryRequest,
}

impl Endpoint for QueryTraces {
    type Output = LogRecordsQueryResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("/projects/{}/traces/search", self.project_id)
    }

    fn body(&self) -> CoreResult<Option<Value>> {
        json_body(&self.body)
    }
}

/// `POST /projects/{project_id}/spans/search`
#[derive(Debug, Clone)]
pub struct QuerySpans {
    pub project_id: Uuid,
    pub body: LogRecordsQueryRequest,
}

impl Endpoint for QuerySpans {
    type Output = LogRecordsQueryResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("/projects/{}/spans/search", self.project_id)
    }

    fn body(&self) -> CoreResult<Option<Value>> {
        json_body(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::client;
    use crate::http::Parsed;
    use crate::models::log_records::tests::{llm_span_json, trace_json};
    use crate::models::{LogRecord, LogRecordsFilter, Page, TextOperator};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_query_traces() {
        let server = MockServer::start();
        let project_id = Uuid::new_v4();
        let log_stream_id = Uuid::new_v4();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path(format!("/projects/{project_id}/traces/search"))
                .json_body(json!({
                    "log_stream_id": log_stream_id,
                    "filters": [{
                        "column_id": "input",
                        "operator": "contains",
                        "value": "France",
                        "type": "text"
                    }],
                    "limit": 10
                }));
            then.status(200).json_body(json!({
                "records": [trace_json()],
                "limit": 10,
                "starting_token": 0,
                "paginated": false
            }));
        });

        let body = LogRecordsQueryRequest::for_log_stream(log_stream_id)
            .with_filter(LogRecordsFilter::text("input", TextOperator::Contains, "France"))
            .with_limit(10);
        let page = client(server.base_url())
            .asyncio(&QueryTraces { project_id, body })
            .await
            .unwrap()
            .and_then(Parsed::ok)
            .unwrap();
        assert_eq!(page.items().len(), 1);
        assert!(page.items()[0].is_trace());
        mock.assert();
    }

    #[tokio::test]
    async fn test_query_spans_validation_error() {
        let server = MockServer::start();
        let project_id = Uuid::new_v4();
        server.mock(|when, then| {
            when.method(POST).path(format!("/projects/{project_id}/spans/search"));
            then.status(422).json_body(json!({
                "detail": [{
                    "loc": ["body"],
                    "msg": "Exactly one of log_stream_id or experiment_id must be set",
                    "type": "value_error"
                }]
            }));
        });

        let parsed = client(server.base_url())
            .asyncio(&QuerySpans {
                project_id,
                body: LogRecordsQueryRequest::default(),
            })
            .await
            .unwrap()
            .unwrap();
        let err = parsed.into_result().unwrap_err();
        assert!(err.errors()[0].msg.starts_with("Exactly one"));
    }

    #[tokio::test]
    async fn test_query_spans_detailed_keeps_records() {
        let server = MockServer::start();
        let project_id = Uuid::new_v4();
        let experiment_id = Uuid::new_v4();
        server.mock(|when, then| {
            when.method(POST).path(format!("/projects/{project_id}/spans/search"));
            then.status(200).json_body(json!({
                "records": [llm_span_json()],
                "limit": 100,
                "starting_token": 0,
                "paginated": true,
                "next_starting_token": 1,
                "last_row_id": "r1"
            }));
        });

        let resp = client(server.base_url())
            .asyncio_detailed(&QuerySpans {
                project_id,
                body: LogRecordsQueryRequest::for_experiment(experiment_id),
            })
            .await
            .unwrap();
        assert_eq!(resp.status, 200);
        let page = resp.parsed.and_then(Parsed::ok).unwrap();
        assert!(matches!(page.records[0], LogRecord::Llm(_)));
        assert_eq!(page.next_starting_token(), Some(1));
    }
}
