//! Wire-level primitives shared by the Galileo SDK crates.
//!
//! - [`Field`]: omitted / `null` / value tri-state for optional model fields
//! - [`AdditionalProperties`]: bag of unrecognized JSON keys kept on every model
//! - [`union`]: discriminant-first, ordered-fallback decoding of object unions
//! - [`HttpValidationError`]: the body of a 422 response

pub mod field;
pub mod union;
pub mod validation;

pub use field::Field;
pub use union::{decode_union, Candidate, UnionError};
pub use validation::{HttpValidationError, LocationItem, ValidationError};

/// Unrecognized keys of a model, preserved verbatim for re-serialization.
pub type AdditionalProperties = serde_json::Map<String, serde_json::Value>;
