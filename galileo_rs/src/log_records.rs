//! Trace and span search service.

use galileo_core::api::{QuerySpans, QueryTraces};
use galileo_core::models::{LogRecordsQueryRequest, LogRecordsQueryResponse};
use galileo_core::ApiClient;
use tracing::debug;
use uuid::Uuid;

use crate::{into_output, Result};

/// Search over logged traces and spans.
pub struct LogRecords<'a> {
    client: &'a ApiClient,
}

impl<'a> LogRecords<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// One page of traces matching `request`.
    pub async fn query_traces(
        &self,
        project_id: Uuid,
        request: LogRecordsQueryRequest,
    ) -> Result<LogRecordsQueryResponse> {
        let resp = self
            .client
            .asyncio_detailed(&QueryTraces {
                project_id,
                body: request,
            })
            .await?;
        let page = into_output(resp)?;
        debug!(%project_id, count = page.records.len(), "queried traces");
        Ok(page)
    }

    /// One page of spans matching `request`.
    pub async fn query_spans(
        &self,
        project_id: Uuid,
        request: LogRecordsQueryRequest,
    ) -> Result<LogRecordsQueryResponse> {
        let resp = self
            .client
            .asyncio_detailed(&QuerySpans {
                project_id,
                body: request,
            })
            .await?;
        let page = into_output(resp)?;
        debug!(%project_id, count = page.records.len(), "queried spans");
        Ok(page)
    }
}
