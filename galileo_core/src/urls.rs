use url::Url;

use crate::CoreError;

/// Console port used by local development deployments.
const LOCAL_CONSOLE_PORT: u16 = 3000;

/// API port used by local development deployments.
const LOCAL_API_PORT: u16 = 8088;

/// Derive the API base URL from a console URL.
///
/// - `https://app.galileo.ai` → `https://api.galileo.ai`
/// - `https://console.<host>` → `https://api.<host>`
/// - `http://localhost:3000` → `http://localhost:8088`
///
/// Path, query and fragment are dropped.
pub fn api_url_from_console(console_url: &str) -> Result<String, CoreError> {
    let mut parsed = Url::parse(console_url.trim())?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(CoreError::InvalidInput(format!(
                "unsupported scheme: {other}"
            )))
        }
    }
    let host = parsed
        .host_str()
        .ok_or_else(|| CoreError::InvalidInput(format!("console url has no host: {console_url}")))?
        .to_string();

    if host == "localhost" || host == "127.0.0.1" {
        if parsed.port() == Some(LOCAL_CONSOLE_PORT) {
            parsed
                .set_port(Some(LOCAL_API_PORT))
                .map_err(|_| CoreError::InvalidInput(format!("cannot set port on {console_url}")))?;
        }
    } else if let Some(rest) = host
        .strip_prefix("console.")
        .or_else(|| host.strip_prefix("app."))
    {
        parsed.set_host(Some(&format!("api.{rest}")))?;
    }

    parsed.set_path("");
    parsed.set_query(None);
    parsed.set_fragment(None);
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

/// Join an endpoint path onto a base URL.
pub fn join(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_console() {
        assert_eq!(
            api_url_from_console("https://app.galileo.ai").unwrap(),
            "https://api.galileo.ai"
        );
    }

    #[test]
    fn test_console_prefix() {
        assert_eq!(
            api_url_from_console("https://console.acme.galileocloud.io/projects?x=1").unwrap(),
            "https://api.acme.galileocloud.io"
        );
    }

    #[test]
    fn test_localhost_port_swap() {
        assert_eq!(
            api_url_from_console("http://localhost:3000/").unwrap(),
            "http://localhost:8088"
        );
    }

    #[test]
    fn test_unknown_host_kept() {
        assert_eq!(
            api_url_from_console("https://galileo.internal.corp").unwrap(),
            "https://galileo.internal.corp"
        );
    }

    #[test]
    fn test_rejects_non_http() {
        assert!(api_url_from_console("ftp://console.acme.io").is_err());
        assert!(api_url_from_console("not a url").is_err());
    }

    #[test]
    fn test_join() {
        assert_eq!(join("https://api.galileo.ai/", "/projects"), "https://api.galileo.ai/projects");
        assert_eq!(join("https://api.galileo.ai", "projects"), "https://api.galileo.ai/projects");
        assert_eq!(join("https://api.galileo.ai", "https://other.io/x"), "https://other.io/x");
    }
}
