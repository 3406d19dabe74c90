//! Pooled `reqwest` client construction.
//!
//! Every [`crate::http::ApiClient`] owns one pooled client so that repeated
//! endpoint calls reuse connections instead of paying a TLS handshake each.

use reqwest::header::HeaderMap;
use reqwest::redirect::Policy;
use reqwest::Client;
use std::time::Duration;

use crate::config::ClientConfig;

/// Default pool size for idle connections per host.
pub const DEFAULT_POOL_SIZE: usize = 32;

/// Default connection timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Build a pooled client for `config` with `headers` sent on every request.
pub fn build_pooled_client(
    config: &ClientConfig,
    headers: HeaderMap,
) -> Result<Client, reqwest::Error> {
    let redirect = if config.follow_redirects {
        Policy::limited(10)
    } else {
        Policy::none()
    };

    Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .pool_max_idle_per_host(DEFAULT_POOL_SIZE)
        .pool_idle_timeout(Duration::from_secs(90))
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .tcp_keepalive(Duration::from_secs(60))
        .tcp_nodelay(true)
        .redirect(redirect)
        .danger_accept_invalid_certs(!config.verify_ssl)
        .build()
}
