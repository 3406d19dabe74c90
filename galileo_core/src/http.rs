//! HTTP transport for Galileo API calls.
//!
//! [`ApiClient`] sends exactly one request per call and classifies the
//! response by status code:
//!
//! | status | outcome |
//! |---|---|
//! | 200 | `Parsed::Ok(Output)` |
//! | 422 | `Parsed::ValidationError(HttpValidationError)` |
//! | 400, 401, 403, 404, 409, 429, 5xx | typed [`CoreError`] |
//! | anything else | `CoreError::UnexpectedStatus`, or `parsed: None` when `raise_on_unexpected_status` is off |

use bytes::Bytes;
use galileo_core_types::HttpValidationError;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::Endpoint;
use crate::auth;
use crate::config::ClientConfig;
use crate::errors::{CoreError, CoreResult};
use crate::shared_client::build_pooled_client;
use crate::urls;

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    /// Status 200, decoded as the endpoint's output model.
    Ok(T),
    /// Status 422.
    ValidationError(HttpValidationError),
}

impl<T> Parsed<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Parsed::Ok(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Parsed::Ok(v) => Some(v),
            Parsed::ValidationError(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, HttpValidationError> {
        match self {
            Parsed::Ok(v) => Ok(v),
            Parsed::ValidationError(e) => Err(e),
        }
    }
}

/// Full response of an endpoint call.
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Raw body bytes.
    pub content: Bytes,
    /// `None` only for an undocumented status with
    /// `raise_on_unexpected_status` off.
    pub parsed: Option<Parsed<T>>,
}

impl<T> Response<T> {
    pub fn into_parsed(self) -> Option<Parsed<T>> {
        self.parsed
    }
}

/// Async client for the Galileo API.
///
/// # Example
///
/// ```ignore
/// let client = ApiClient::new(ClientConfig::load()?)?;
/// let health = client.asyncio(&Healthcheck).await?;
/// ```
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    raise_on_unexpected_status: bool,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: ClientConfig) -> CoreResult<Self> {
        let headers = auth::default_headers(&config)?;
        let client = build_pooled_client(&config, headers)?;
        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            raise_on_unexpected_status: config.raise_on_unexpected_status,
        })
    }

    /// Create a client from the default config file and environment.
    pub fn from_env() -> CoreResult<Self> {
        Self::new(ClientConfig::load()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn raise_on_unexpected_status(&self) -> bool {
        self.raise_on_unexpected_status
    }

    /// Call `endpoint` and return only the parsed body.
    pub async fn asyncio<E: Endpoint>(&self, endpoint: &E) -> CoreResult<Option<Parsed<E::Output>>> {
        Ok(self.asyncio_detailed(endpoint).await?.parsed)
    }

    /// Call `endpoint` and return status, headers, raw body and parsed body.
    pub async fn asyncio_detailed<E: Endpoint>(
        &self,
        endpoint: &E,
    ) -> CoreResult<Response<E::Output>> {
        let method = endpoint.method();
        let url = urls::join(&self.base_url, &endpoint.path());

        let mut request = self.client.request(method.clone(), &url);
        let query = endpoint.query();
        if !query.is_empty() {
            request = request.query(&query);
        }
        if let Some(body) = endpoint.body()? {
            request = request.json(&body);
        }

        debug!(%method, %url, "sending request");
        let resp = request.send().await?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let content = resp.bytes().await?;
        debug!(%method, %url, status = status.as_u16(), bytes = content.len(), "received response");

        let parsed = parse_response(
            status,
            &url,
            &headers,
            &content,
            self.raise_on_unexpected_status,
        )?;
        Ok(Response {
            status,
            headers,
            content,
            parsed,
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("raise_on_unexpected_status", &self.raise_on_unexpected_status)
            .finish_non_exhaustive()
    }
}

/// Classify a response by status code and decode its body.
pub fn parse_response<T: DeserializeOwned>(
    status: StatusCode,
    url: &str,
    headers: &HeaderMap,
    content: &[u8],
    raise_on_unexpected_status: bool,
) -> CoreResult<Option<Parsed<T>>> {
    match status.as_u16() {
        200 => decode(url, content).map(|v| Some(Parsed::Ok(v))),
        422 => decode(url, content).map(|v| Some(Parsed::ValidationError(v))),
        code => {
            if let Some(err) = CoreError::from_status(code, url, content, retry_after(headers)) {
                return Err(err);
            }
            if raise_on_unexpected_status {
                return Err(CoreError::unexpected_status(code, url, content));
            }
            warn!(%url, status = code, "undocumented status, returning no parsed body");
            Ok(None)
        }
    }
}

/// Decode a JSON body. An empty body decodes as `null`.
fn decode<T: DeserializeOwned>(url: &str, content: &[u8]) -> CoreResult<T> {
    let result = if content.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_slice(content)
    };
    result.map_err(|e| {
        let text = String::from_utf8_lossy(content);
        let snippet: String = text.chars().take(100).collect();
        CoreError::decode(url, format!("{}: {}", e, snippet))
    })
}

/// `Retry-After` in seconds. HTTP-date values are ignored.
fn retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Health {
        message: String,
    }

    fn parse(status: u16, body: &str, raise: bool) -> CoreResult<Option<Parsed<Health>>> {
        parse_response(
            StatusCode::from_u16(status).unwrap(),
            "https://api.galileo.ai/healthcheck",
            &HeaderMap::new(),
            body.as_bytes(),
            raise,
        )
    }

    #[test]
    fn test_200_decodes_output() {
        let parsed = parse(200, r#"{"message": "ok"}"#, false).unwrap().unwrap();
        assert_eq!(parsed, Parsed::Ok(Health { message: "ok".into() }));
    }

    #[test]
    fn test_422_decodes_validation_error() {
        let body = r#"{"detail": [{"loc": ["body"], "msg": "bad", "type": "value_error"}]}"#;
        match parse(422, body, false).unwrap().unwrap() {
            Parsed::ValidationError(e) => assert_eq!(e.errors()[0].msg, "bad"),
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn test_200_with_wrong_shape_is_decode_error() {
        let err = parse(200, r#"{"msg": "ok"}"#, false).unwrap_err();
        assert!(matches!(err, CoreError::Decode { .. }));
    }

    #[test]
    fn test_documented_errors_raise_regardless_of_flag() {
        let err = parse(404, r#"{"detail": "missing"}"#, false).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
        let err = parse(500, "", false).unwrap_err();
        assert!(matches!(err, CoreError::Server(_)));
    }

    #[test]
    fn test_unexpected_status_flag() {
        assert!(parse(418, "teapot", false).unwrap().is_none());
        let err = parse(418, "teapot", true).unwrap_err();
        assert!(matches!(err, CoreError::UnexpectedStatus(_)));
        assert!(parse(201, "{}", false).unwrap().is_none());
    }

    #[test]
    fn test_empty_body_decodes_as_null() {
        let parsed: Option<Parsed<Value>> = parse_response(
            StatusCode::OK,
            "u",
            &HeaderMap::new(),
            b"",
            false,
        )
        .unwrap();
        assert_eq!(parsed, Some(Parsed::Ok(Value::Null)));
    }

    #[test]
    fn test_retry_after_header() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("17"));
        let err = parse_response::<Value>(StatusCode::TOO_MANY_REQUESTS, "u", &headers, b"", false)
            .unwrap_err();
        match err {
            CoreError::RateLimited(info) => assert_eq!(info.retry_after_seconds, Some(17)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parsed_helpers() {
        let ok: Parsed<i32> = Parsed::Ok(1);
        assert!(ok.is_ok());
        assert_eq!(ok.into_result().unwrap(), 1);
        let invalid: Parsed<i32> = Parsed::ValidationError(HttpValidationError::default());
        assert!(invalid.ok().is_none());
    }
}
