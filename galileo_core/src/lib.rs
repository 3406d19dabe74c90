//! Galileo core library.
//!
//! This crate provides the wire layer of the Galileo SDK:
//! - Request and response models for every supported resource
//! - Endpoint descriptors with four calling conventions
//! - Status-code classification into parsed bodies and typed errors
//! - Configuration, credentials and connection pooling

pub mod api;
pub mod auth;
pub mod blocking;
pub mod config;
pub mod errors;
pub mod http;
pub mod models;
pub mod shared_client;
pub mod urls;

// Re-export core types at crate root for convenience
pub use api::Endpoint;
pub use blocking::BlockingClient;
pub use config::ClientConfig;
pub use errors::{CoreError, CoreResult, HttpErrorInfo, RateLimitInfo};
pub use http::{ApiClient, Parsed, Response};

pub use galileo_core_types::{
    AdditionalProperties, Field, HttpValidationError, LocationItem, ValidationError,
};
