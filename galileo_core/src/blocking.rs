//! Synchronous calling convention.
//!
//! [`BlockingClient`] drives an [`ApiClient`] on its own current-thread tokio
//! runtime, so `sync`/`sync_detailed` have the same contracts as
//! `asyncio`/`asyncio_detailed`. Do not call it from inside an async
//! runtime; use [`ApiClient`] there.

use std::future::Future;

use tokio::runtime::{Builder, Runtime};

use crate::api::Endpoint;
use crate::config::ClientConfig;
use crate::errors::CoreResult;
use crate::http::{ApiClient, Parsed, Response};

pub struct BlockingClient {
    runtime: Runtime,
    inner: ApiClient,
}

impl BlockingClient {
    pub fn new(config: ClientConfig) -> CoreResult<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let inner = ApiClient::new(config)?;
        Ok(Self { runtime, inner })
    }

    pub fn from_env() -> CoreResult<Self> {
        Self::new(ClientConfig::load()?)
    }

    /// The async client this one drives.
    pub fn async_client(&self) -> &ApiClient {
        &self.inner
    }

    pub fn sync<E: Endpoint>(&self, endpoint: &E) -> CoreResult<Option<Parsed<E::Output>>> {
        self.runtime.block_on(self.inner.asyncio(endpoint))
    }

    pub fn sync_detailed<E: Endpoint>(&self, endpoint: &E) -> CoreResult<Response<E::Output>> {
        self.runtime.block_on(self.inner.asyncio_detailed(endpoint))
    }

    /// Run any future (e.g. a service method) to completion.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

impl std::fmt::Debug for BlockingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingClient")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{GetProject, Healthcheck};
    use crate::errors::CoreError;
    use httpmock::prelude::*;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn test_sync_healthcheck() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET).path("/healthcheck");
            then.status(200)
                .json_body(json!({"api_version": "1.0", "message": "ok", "version": "2.3.4"}));
        });

        let client = BlockingClient::new(ClientConfig::new(server.base_url())).unwrap();
        let parsed = client.sync(&Healthcheck).unwrap().unwrap();
        let health = parsed.ok().unwrap();
        assert_eq!(health.version, "2.3.4");
    }

    #[test]
    fn test_sync_detailed_keeps_raw_body() {
        let server = MockServer::start();
        let project_id = Uuid::new_v4();
        let _m = server.mock(|when, then| {
            when.method(GET).path(format!("/projects/{project_id}"));
            then.status(404).json_body(json!({"detail": "Project not found"}));
        });

        let client = BlockingClient::new(ClientConfig::new(server.base_url())).unwrap();
        let err = client.sync_detailed(&GetProject { project_id }).unwrap_err();
        match err {
            CoreError::NotFound(info) => assert_eq!(info.message, "Project not found"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
