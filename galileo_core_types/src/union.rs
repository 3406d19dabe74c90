//! Decoding for object unions.
//!
//! A union is a list of [`Candidate`]s. When the payload carries the union's
//! discriminant key, the candidate with that tag is the only one tried. When
//! the key is missing, candidates are tried in list order and the first one
//! that parses wins, so list order is the tie-break between variants that
//! accept the same payload.

use serde_json::Value;
use thiserror::Error;

/// One variant of a union.
pub struct Candidate<T> {
    /// Variant name used in error reports.
    pub name: &'static str,
    /// Discriminant value that selects this variant.
    pub tag: &'static str,
    pub parse: fn(Value) -> Result<T, serde_json::Error>,
}

impl<T> Candidate<T> {
    pub const fn new(
        name: &'static str,
        tag: &'static str,
        parse: fn(Value) -> Result<T, serde_json::Error>,
    ) -> Self {
        Self { name, tag, parse }
    }
}

/// Failure to decode a union.
#[derive(Debug, Error)]
pub enum UnionError {
    #[error("{union}: unknown {key} {tag:?}")]
    UnknownTag {
        union: &'static str,
        key: &'static str,
        tag: String,
    },

    #[error("{union}: {candidate} rejected payload: {source}")]
    Tagged {
        union: &'static str,
        candidate: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{union}: no variant matched ({tried})", tried = format_attempts(.attempts))]
    NoMatch {
        union: &'static str,
        attempts: Vec<(&'static str, String)>,
    },
}

fn format_attempts(attempts: &[(&'static str, String)]) -> String {
    attempts
        .iter()
        .map(|(name, err)| format!("{name}: {err}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Decode `value` as one of `candidates`.
///
/// `key` is the discriminant field. A non-string discriminant is treated as
/// missing.
pub fn decode_union<T>(
    union: &'static str,
    key: &'static str,
    value: Value,
    candidates: &[Candidate<T>],
) -> Result<T, UnionError> {
    if let Some(tag) = value.get(key).and_then(Value::as_str) {
        let Some(candidate) = candidates.iter().find(|c| c.tag == tag) else {
            return Err(UnionError::UnknownTag {
                union,
                key,
                tag: tag.to_string(),
            });
        };
        return (candidate.parse)(value).map_err(|source| UnionError::Tagged {
            union,
            candidate: candidate.name,
            source,
        });
    }

    let mut attempts = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match (candidate.parse)(value.clone()) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => attempts.push((candidate.name, e.to_string())),
        }
    }
    Err(UnionError::NoMatch { union, attempts })
}
