//! # Galileo SDK
//!
//! Ergonomic Rust SDK for the Galileo evaluation and observability platform.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use galileo::{CollaboratorRole, Galileo};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), galileo::Error> {
//!     // Reads GALILEO_API_KEY / GALILEO_CONSOLE_URL and ~/.galileo/config.toml
//!     let galileo = Galileo::from_env()?;
//!     let projects = galileo.projects();
//!
//!     let project = projects.get_by_name("chatbot-evals").await?;
//!     for collaborator in projects.list_user_collaborators(project.id).await? {
//!         if collaborator.role() == CollaboratorRole::Viewer {
//!             let promoted = collaborator.update(&projects, CollaboratorRole::Editor).await?;
//!             println!("{} is now {}", promoted.email(), promoted.role());
//!         }
//!     }
//!     Ok(())
//! }
//! ```

use galileo_core::auth::{mask_str, Credentials};
use galileo_core::config::ENV_API_KEY;
use galileo_core::{ApiClient, ClientConfig, CoreError, Parsed, Response};
use galileo_core_types::HttpValidationError;
use thiserror::Error;

pub mod collaborator;
pub mod log_records;
pub mod projects;
pub mod prompts;

pub use collaborator::Collaborator;
pub use log_records::LogRecords;
pub use projects::Projects;
pub use prompts::Prompts;

// Re-export core for advanced usage
pub use galileo_core as core;
pub use galileo_core_types as types;

// Re-export commonly used core types
pub use galileo_core::models::{
    BasePromptTemplateResponse, CollaboratorRole, CreatePromptTemplateWithVersionRequestBody,
    FilterParams, HealthcheckResponse, ListPromptTemplateParams, LogRecord,
    LogRecordsQueryRequest, LogRecordsQueryResponse, ProjectDb, ProjectType, ProjectUpdate,
    UserCollaboratorCreate, UserInfo,
};
pub use galileo_core::{BlockingClient, Field};

/// SDK version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Error Types
// =============================================================================

/// SDK error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Neither an API key nor a JWT could be resolved.
    #[error("API key not found. Set {ENV_API_KEY} or add api_key to ~/.galileo/config.toml.")]
    MissingApiKey,

    /// Core error passthrough.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The API rejected the request body or parameters (HTTP 422).
    #[error("{0}")]
    Validation(HttpValidationError),

    /// No project matched the given id or name.
    #[error("project not found: {0}")]
    ProjectNotFound(String),

    /// The API answered with a status the endpoint does not document.
    #[error("unexpected response (HTTP {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Turn a detailed endpoint response into its 200 model.
pub(crate) fn into_output<T>(response: Response<T>) -> Result<T> {
    match response.parsed {
        Some(Parsed::Ok(output)) => Ok(output),
        Some(Parsed::ValidationError(err)) => Err(Error::Validation(err)),
        None => {
            let text = String::from_utf8_lossy(&response.content);
            Err(Error::UnexpectedResponse {
                status: response.status.as_u16(),
                body: text.chars().take(200).collect(),
            })
        }
    }
}

// =============================================================================
// Main Client
// =============================================================================

/// Main Galileo client.
///
/// # Example
///
/// ```rust,ignore
/// use galileo::{core::ClientConfig, Galileo};
///
/// let galileo = Galileo::from_env()?;
///
/// // Or with explicit settings
/// let galileo = Galileo::new(ClientConfig::new("https://api.galileo.ai").with_api_key("gal_..."))?;
/// ```
#[derive(Clone)]
pub struct Galileo {
    client: ApiClient,
    credentials: Credentials,
}

impl Galileo {
    /// Create a client from explicit settings. Credentials are required.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let credentials = Credentials::from_config(&config);
        if credentials.is_anonymous() {
            return Err(Error::MissingApiKey);
        }
        let client = ApiClient::new(config)?;
        Ok(Self {
            client,
            credentials,
        })
    }

    /// Create a client from `~/.galileo/config.toml` and `GALILEO_*`
    /// environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::load()?)
    }

    /// Credential in use, masked for display.
    pub fn api_key_masked(&self) -> String {
        match &self.credentials {
            Credentials::ApiKey(key) => mask_str(key),
            Credentials::Bearer(token) => format!("Bearer {}", mask_str(token)),
            Credentials::Anonymous => String::new(),
        }
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Access the underlying core client.
    pub fn core(&self) -> &ApiClient {
        &self.client
    }

    pub fn projects(&self) -> Projects<'_> {
        Projects::new(&self.client)
    }

    pub fn prompts(&self) -> Prompts<'_> {
        Prompts::new(&self.client)
    }

    pub fn log_records(&self) -> LogRecords<'_> {
        LogRecords::new(&self.client)
    }

    /// Check that the API is reachable.
    pub async fn healthcheck(&self) -> Result<HealthcheckResponse> {
        let resp = self
            .client
            .asyncio_detailed(&galileo_core::api::Healthcheck)
            .await?;
        into_output(resp)
    }

    /// The user these credentials belong to.
    pub async fn current_user(&self) -> Result<UserInfo> {
        let resp = self
            .client
            .asyncio_detailed(&galileo_core::api::GetCurrentUser)
            .await?;
        into_output(resp)
    }
}

impl std::fmt::Debug for Galileo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Galileo")
            .field("api_key", &self.api_key_masked())
            .field("base_url", &self.base_url())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub(crate) fn galileo(base_url: String) -> Galileo {
        Galileo::new(ClientConfig::new(base_url).with_api_key("gal_test_key_123456")).unwrap()
    }
}
