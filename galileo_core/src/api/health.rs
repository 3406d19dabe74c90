//! Service health and the authenticated user.

use reqwest::Method;

use super::Endpoint;
use crate::models::{HealthcheckResponse, UserInfo};

/// `GET /healthcheck`
#[derive(Debug, Clone, Copy, Default)]
pub struct Healthcheck;

impl Endpoint for Healthcheck {
    type Output = HealthcheckResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/healthcheck".to_string()
    }
}

/// `GET /current_user`
#[derive(Debug, Clone, Copy, Default)]
pub struct GetCurrentUser;

impl Endpoint for GetCurrentUser {
    type Output = UserInfo;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/current_user".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{client, strict_client};
    use crate::auth::API_KEY_HEADER;
    use crate::errors::CoreError;
    use crate::http::Parsed;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_healthcheck_sends_credentials() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/healthcheck")
                .header(API_KEY_HEADER, "gal_test_key")
                .header("accept", "application/json");
            then.status(200)
                .json_body(json!({"api_version": "1.0.0", "message": "ok", "version": "2.3.4"}));
        });

        let resp = client(server.base_url())
            .asyncio_detailed(&Healthcheck)
            .await
            .unwrap();
        assert_eq!(resp.status, 200);
        assert!(!resp.content.is_empty());
        match resp.parsed {
            Some(Parsed::Ok(health)) => assert_eq!(health.message, "ok"),
            other => panic!("unexpected parse: {other:?}"),
        }
        mock.assert();
    }

    #[tokio::test]
    async fn test_current_user_unauthorized() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/current_user");
            then.status(401).json_body(json!({"detail": "Invalid API key"}));
        });

        let err = client(server.base_url())
            .asyncio(&GetCurrentUser)
            .await
            .unwrap_err();
        assert!(err.is_auth_error());
        match err {
            CoreError::Unauthorized(info) => {
                assert_eq!(info.status, 401);
                assert_eq!(info.message, "Invalid API key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_undocumented_status_depends_on_flag() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/healthcheck");
            then.status(418).body("teapot");
        });

        let lenient = client(server.base_url())
            .asyncio_detailed(&Healthcheck)
            .await
            .unwrap();
        assert_eq!(lenient.status, 418);
        assert!(lenient.parsed.is_none());
        assert_eq!(&lenient.content[..], b"teapot");

        let err = strict_client(server.base_url())
            .asyncio(&Healthcheck)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::UnexpectedStatus(_)));
    }
}
