//! Credentials and request identification headers.
//!
//! An API key is sent as `Galileo-API-Key`. A JWT (from a console login) is
//! sent as `Authorization: Bearer` and only used when no API key is set.

use once_cell::sync::Lazy;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::config::ClientConfig;
use crate::errors::CoreError;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "Galileo-API-Key";

/// Header identifying the SDK and its version.
pub const SDK_HEADER: &str = "X-Galileo-SDK";

static SDK_IDENTIFIER: Lazy<String> =
    Lazy::new(|| format!("galileo-rs/{}", env!("CARGO_PKG_VERSION")));

/// Value of [`SDK_HEADER`].
pub fn sdk_identifier() -> &'static str {
    SDK_IDENTIFIER.as_str()
}

/// Credentials resolved from a [`ClientConfig`].
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    ApiKey(String),
    Bearer(String),
    Anonymous,
}

impl Credentials {
    pub fn from_config(config: &ClientConfig) -> Self {
        let non_blank = |v: &Option<String>| v.clone().filter(|s| !s.trim().is_empty());
        if let Some(key) = non_blank(&config.api_key) {
            Credentials::ApiKey(key)
        } else if let Some(token) = non_blank(&config.jwt_token) {
            Credentials::Bearer(token)
        } else {
            Credentials::Anonymous
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Credentials::Anonymous)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::ApiKey(k) => write!(f, "ApiKey({})", mask_str(k)),
            Credentials::Bearer(t) => write!(f, "Bearer({})", mask_str(t)),
            Credentials::Anonymous => f.write_str("Anonymous"),
        }
    }
}

/// Build the headers sent with every request.
pub fn default_headers(config: &ClientConfig) -> Result<HeaderMap, CoreError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        SDK_HEADER,
        HeaderValue::from_str(sdk_identifier())
            .map_err(|_| CoreError::config("invalid sdk identifier"))?,
    );

    match Credentials::from_config(config) {
        Credentials::ApiKey(key) => {
            let mut value = HeaderValue::from_str(&key)
                .map_err(|_| CoreError::config("invalid api key characters"))?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }
        Credentials::Bearer(token) => {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| CoreError::config("invalid jwt token characters"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Credentials::Anonymous => {}
    }

    for (name, value) in &config.extra_headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| CoreError::config(format!("invalid header name: {name}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| CoreError::config(format!("invalid value for header {name}")))?;
        headers.insert(name, value);
    }

    Ok(headers)
}

/// Mask a secret for display (shows first 8 chars + "...").
pub fn mask_str(s: &str) -> String {
    if s.chars().count() <= 8 {
        "*".repeat(s.chars().count())
    } else {
        let head: String = s.chars().take(8).collect();
        format!("{}...", head)
    }
}
