//! Model construction errors.
//!
//! Malformed server responses are not recoverable at this layer, so every
//! failure is surfaced to the caller as a tagged error at construction time.

use thiserror::Error;

/// Errors produced when building a model from a backend dict.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The wire record could not be deserialized (missing required field,
    /// wrong type, invalid JSON shape).
    #[error("malformed {kind} backend dict: {source}")]
    Malformed {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A millisecond timestamp that does not represent a valid instant.
    #[error("invalid {field} timestamp in {kind} backend dict: {millis}")]
    InvalidTimestamp {
        kind: &'static str,
        field: &'static str,
        millis: f64,
    },

    /// A required identifier or content field arrived empty.
    #[error("{kind}.{field} must not be empty")]
    EmptyField {
        kind: &'static str,
        field: &'static str,
    },
}

impl ModelError {
    /// Returns `true` if the failure is a deserialization problem rather than
    /// a semantic one.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ModelError::Malformed { .. })
    }
}
