//! Core error types for the Galileo SDK.
//!
//! HTTP failures are classified by status code. A 422 is not an error here:
//! it decodes into [`galileo_core_types::HttpValidationError`] and is
//! returned as a parsed response.

use galileo_core_types::UnionError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// HTTP error details for API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpErrorInfo {
    /// HTTP status code (e.g., 404, 500)
    pub status: u16,
    /// Request URL
    pub url: String,
    /// Error message, the FastAPI `detail` string when the body has one
    pub message: String,
    /// Start of the response body (for debugging)
    pub body_snippet: Option<String>,
}

impl HttpErrorInfo {
    /// Build error details from a raw response body.
    pub fn from_body(status: u16, url: &str, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        let text = text.trim();
        let message = extract_detail(text).unwrap_or_else(|| {
            if text.is_empty() {
                "request failed".to_string()
            } else {
                text.chars().take(200).collect()
            }
        });
        Self {
            status,
            url: url.to_string(),
            message,
            body_snippet: if text.is_empty() {
                None
            } else {
                Some(text.chars().take(4096).collect())
            },
        }
    }
}

impl std::fmt::Display for HttpErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {} for {}: {}", self.status, self.url, self.message)
    }
}

/// Rate limit details (HTTP 429).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateLimitInfo {
    #[serde(flatten)]
    pub http: HttpErrorInfo,
    /// Seconds from the `Retry-After` header, if the server sent one
    pub retry_after_seconds: Option<u64>,
}

impl std::fmt::Display for RateLimitInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rate limited: {}", self.http)?;
        if let Some(secs) = self.retry_after_seconds {
            write!(f, " (retry after {}s)", secs)?;
        }
        Ok(())
    }
}

/// Unified error enum for all Galileo core errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Invalid input provided
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing failed
    #[error("url parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// HTTP request failed (network layer)
    #[error(
        "request failed: {0} (is_connect={connect}, is_timeout={timeout})",
        connect = .0.is_connect(),
        timeout = .0.is_timeout()
    )]
    Http(#[from] reqwest::Error),

    /// 400
    #[error("bad request: {0}")]
    BadRequest(HttpErrorInfo),

    /// 401
    #[error("unauthorized: {0}")]
    Unauthorized(HttpErrorInfo),

    /// 403
    #[error("forbidden: {0}")]
    Forbidden(HttpErrorInfo),

    /// 404
    #[error("not found: {0}")]
    NotFound(HttpErrorInfo),

    /// 409
    #[error("conflict: {0}")]
    Conflict(HttpErrorInfo),

    /// 429
    #[error("{0}")]
    RateLimited(RateLimitInfo),

    /// 5xx
    #[error("server error: {0}")]
    Server(HttpErrorInfo),

    /// Any status the endpoint does not document, raised only when the
    /// client is configured with `raise_on_unexpected_status`.
    #[error("unexpected status: {0}")]
    UnexpectedStatus(HttpErrorInfo),

    /// No credentials could be resolved
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// Request body could not be encoded
    #[error("failed to serialize request: {0}")]
    Serialization(String),

    /// Response body did not match the documented model
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    /// A union payload matched none of its variants
    #[error(transparent)]
    Union(#[from] UnionError),

    /// Blocking runtime could not be started
    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

impl CoreError {
    /// Classify a non-success, non-422 response.
    ///
    /// Returns `None` for statuses outside the documented set so the caller
    /// can decide between `UnexpectedStatus` and a silent `None`.
    pub fn from_status(
        status: u16,
        url: &str,
        body: &[u8],
        retry_after_seconds: Option<u64>,
    ) -> Option<Self> {
        let info = HttpErrorInfo::from_body(status, url, body);
        let err = match status {
            400 => CoreError::BadRequest(info),
            401 => CoreError::Unauthorized(info),
            403 => CoreError::Forbidden(info),
            404 => CoreError::NotFound(info),
            409 => CoreError::Conflict(info),
            429 => CoreError::RateLimited(RateLimitInfo {
                http: info,
                retry_after_seconds,
            }),
            500..=599 => CoreError::Server(info),
            _ => return None,
        };
        Some(err)
    }

    /// Create an unexpected-status error.
    pub fn unexpected_status(status: u16, url: &str, body: &[u8]) -> Self {
        CoreError::UnexpectedStatus(HttpErrorInfo::from_body(status, url, body))
    }

    /// Create a decode error.
    pub fn decode(url: &str, message: impl Into<String>) -> Self {
        CoreError::Decode {
            url: url.to_string(),
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        CoreError::Config(message.into())
    }

    /// Details of the HTTP response, for status-derived errors.
    pub fn http_info(&self) -> Option<&HttpErrorInfo> {
        match self {
            CoreError::BadRequest(info)
            | CoreError::Unauthorized(info)
            | CoreError::Forbidden(info)
            | CoreError::NotFound(info)
            | CoreError::Conflict(info)
            | CoreError::Server(info)
            | CoreError::UnexpectedStatus(info) => Some(info),
            CoreError::RateLimited(rl) => Some(&rl.http),
            _ => None,
        }
    }

    /// Get HTTP status code if this is an HTTP error.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            CoreError::Http(e) => e.status().map(|s| s.as_u16()),
            other => other.http_info().map(|info| info.status),
        }
    }

    /// Check if this is an authentication or authorization error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            CoreError::Authentication(_) | CoreError::Unauthorized(_) | CoreError::Forbidden(_)
        )
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, CoreError::RateLimited(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound(_))
    }

    pub fn is_client_error(&self) -> bool {
        self.http_status()
            .map(|s| (400..500).contains(&s))
            .unwrap_or(false)
    }

    pub fn is_server_error(&self) -> bool {
        self.http_status().map(|s| s >= 500).unwrap_or(false)
    }
}

/// Pull a human-readable message out of a FastAPI error body.
fn extract_detail(text: &str) -> Option<String> {
    let value: Value = serde_json::from_str(text).ok()?;
    match value.get("detail")? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Result type alias using CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
