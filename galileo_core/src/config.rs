//! Client configuration.
//!
//! Values resolve in three layers: built-in defaults, an optional TOML file
//! (`~/.galileo/config.toml` unless a path is given), then `GALILEO_*`
//! environment variables.

use crate::errors::CoreError;
use crate::urls;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default console URL.
pub const DEFAULT_CONSOLE_URL: &str = "https://app.galileo.ai";

/// Default API URL (derived from the default console URL).
pub const DEFAULT_API_URL: &str = "https://api.galileo.ai";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default config directory name
pub const CONFIG_DIR: &str = ".galileo";

/// Default config file name
pub const CONFIG_FILE: &str = "config.toml";

pub const ENV_API_KEY: &str = "GALILEO_API_KEY";
pub const ENV_JWT_TOKEN: &str = "GALILEO_JWT_TOKEN";
pub const ENV_CONSOLE_URL: &str = "GALILEO_CONSOLE_URL";
pub const ENV_API_URL: &str = "GALILEO_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "GALILEO_TIMEOUT_SECS";
pub const ENV_RAISE_ON_UNEXPECTED_STATUS: &str = "GALILEO_RAISE_ON_UNEXPECTED_STATUS";

/// Settings for [`crate::http::ApiClient`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL every endpoint path is joined to.
    pub api_url: String,
    /// Console URL; when set without `api_url`, the API URL is derived from it.
    pub console_url: Option<String>,
    /// Sent as `Galileo-API-Key`.
    pub api_key: Option<String>,
    /// Sent as `Authorization: Bearer` when no API key is configured.
    pub jwt_token: Option<String>,
    pub timeout_secs: u64,
    /// Turn undocumented status codes into `CoreError::UnexpectedStatus`
    /// instead of a response with no parsed body.
    pub raise_on_unexpected_status: bool,
    pub verify_ssl: bool,
    pub follow_redirects: bool,
    /// Extra headers added to every request.
    pub extra_headers: BTreeMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            console_url: None,
            api_key: None,
            jwt_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            raise_on_unexpected_status: false,
            verify_ssl: true,
            follow_redirects: false,
            extra_headers: BTreeMap::new(),
        }
    }
}

/// The subset of [`ClientConfig`] that may appear in a TOML file. Every key
/// is optional so a file only overrides what it names.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_url: Option<String>,
    console_url: Option<String>,
    api_key: Option<String>,
    jwt_token: Option<String>,
    timeout_secs: Option<u64>,
    raise_on_unexpected_status: Option<bool>,
    verify_ssl: Option<bool>,
    follow_redirects: Option<bool>,
    #[serde(default)]
    extra_headers: BTreeMap<String, String>,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Default::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_jwt_token(mut self, token: impl Into<String>) -> Self {
        self.jwt_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_raise_on_unexpected_status(mut self, raise: bool) -> Self {
        self.raise_on_unexpected_status = raise;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(name.into(), value.into());
        self
    }

    /// Resolve configuration from the default file location and environment.
    pub fn load() -> Result<Self, CoreError> {
        Self::load_from(None)
    }

    /// Resolve configuration from `path` (or the default location) and
    /// environment. A missing file is not an error.
    pub fn load_from(path: Option<&Path>) -> Result<Self, CoreError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
        let mut config = Self::default();
        if path.exists() {
            config.apply_file(&read_config_file(&path)?)?;
        }
        config.apply_env(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML document layered over the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, CoreError> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| CoreError::Config(format!("failed to parse TOML: {}", e)))?;
        let mut config = Self::default();
        config.apply_file(&file)?;
        Ok(config)
    }

    fn apply_file(&mut self, file: &ConfigFile) -> Result<(), CoreError> {
        if let Some(console) = &file.console_url {
            self.set_console_url(console)?;
        }
        if let Some(api_url) = &file.api_url {
            self.api_url = api_url.trim_end_matches('/').to_string();
        }
        if file.api_key.is_some() {
            self.api_key = file.api_key.clone();
        }
        if file.jwt_token.is_some() {
            self.jwt_token = file.jwt_token.clone();
        }
        if let Some(t) = file.timeout_secs {
            self.timeout_secs = t;
        }
        if let Some(v) = file.raise_on_unexpected_status {
            self.raise_on_unexpected_status = v;
        }
        if let Some(v) = file.verify_ssl {
            self.verify_ssl = v;
        }
        if let Some(v) = file.follow_redirects {
            self.follow_redirects = v;
        }
        self.extra_headers
            .extend(file.extra_headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(())
    }

    /// Overlay environment variables read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(console) = get(ENV_CONSOLE_URL) {
            self.set_console_url(&console)?;
        }
        if let Some(api_url) = get(ENV_API_URL) {
            self.api_url = api_url.trim_end_matches('/').to_string();
        }
        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(token) = get(ENV_JWT_TOKEN) {
            self.jwt_token = Some(token);
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            self.timeout_secs = raw.trim().parse().map_err(|_| {
                CoreError::Config(format!("{} must be an integer, got {:?}", ENV_TIMEOUT_SECS, raw))
            })?;
        }
        if let Some(raw) = get(ENV_RAISE_ON_UNEXPECTED_STATUS) {
            self.raise_on_unexpected_status = parse_bool(&raw).ok_or_else(|| {
                CoreError::Config(format!(
                    "{} must be a boolean, got {:?}",
                    ENV_RAISE_ON_UNEXPECTED_STATUS, raw
                ))
            })?;
        }
        Ok(())
    }

    fn set_console_url(&mut self, console: &str) -> Result<(), CoreError> {
        self.api_url = urls::api_url_from_console(console)?;
        self.console_url = Some(console.trim_end_matches('/').to_string());
        Ok(())
    }
}

/// Get the default config directory path (~/.galileo).
pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
}

/// Get the default config file path (~/.galileo/config.toml).
pub fn default_config_path() -> PathBuf {
    get_config_dir().join(CONFIG_FILE)
}

fn read_config_file(path: &Path) -> Result<ConfigFile, CoreError> {
    let content = fs::read_to_string(path)
        .map_err(|e| CoreError::Config(format!("failed to read {}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| CoreError::Config(format!("failed to parse {}: {}", path.display(), e)))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(!config.raise_on_unexpected_status);
        assert!(config.verify_ssl);
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let config = ClientConfig::from_toml_str(
            r#"
            console_url = "https://console.acme.galileocloud.io/"
            timeout_secs = 5
            raise_on_unexpected_status = true

            [extra_headers]
            X-Team = "evals"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_url, "https://api.acme.galileocloud.io");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.raise_on_unexpected_status);
        assert_eq!(config.extra_headers["X-Team"], "evals");
    }

    #[test]
    fn test_explicit_api_url_beats_console() {
        let config = ClientConfig::from_toml_str(
            r#"
            console_url = "https://console.acme.io"
            api_url = "http://localhost:8088/"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:8088");
    }

    #[test]
    fn test_unknown_toml_key_rejected() {
        let err = ClientConfig::from_toml_str("api_ulr = \"x\"").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = ClientConfig::from_toml_str("api_key = \"from-file\"").unwrap();
        config
            .apply_env(env_of(&[
                (ENV_API_KEY, "from-env"),
                (ENV_TIMEOUT_SECS, "12"),
                (ENV_RAISE_ON_UNEXPECTED_STATUS, "yes"),
            ]))
            .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.timeout_secs, 12);
        assert!(config.raise_on_unexpected_status);
    }

    #[test]
    fn test_blank_env_ignored() {
        let mut config = ClientConfig::default().with_api_key("keep");
        config.apply_env(env_of(&[(ENV_API_KEY, "  ")])).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("keep"));
    }

    #[test]
    fn test_bad_env_values() {
        let mut config = ClientConfig::default();
        assert!(config
            .apply_env(env_of(&[(ENV_TIMEOUT_SECS, "soon")]))
            .is_err());
        assert!(config
            .apply_env(env_of(&[(ENV_RAISE_ON_UNEXPECTED_STATUS, "maybe")]))
            .is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_url = \"https://api.example.com\"").unwrap();
        writeln!(file, "verify_ssl = false").unwrap();
        let config = ClientConfig::load_from(Some(file.path())).unwrap();
        assert!(!config.verify_ssl);
        // GALILEO_API_URL in the test environment would win; only check when unset.
        if env::var(ENV_API_URL).is_err() && env::var(ENV_CONSOLE_URL).is_err() {
            assert_eq!(config.api_url, "https://api.example.com");
        }
    }
}
