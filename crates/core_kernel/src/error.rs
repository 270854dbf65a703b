//! Decoding error types shared by every entity decoder

use std::fmt;
use thiserror::Error;

/// Errors raised while turning a provider payload into an entity
///
/// Unknown fields and unrecognized enumeration values are never errors;
/// they are ignored or mapped to the `Unknown` variant respectively.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The text could not be parsed as XML
    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    /// The text could not be parsed as JSON
    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// The root element or wrapper key names a different entity
    #[error("Unexpected root: expected `{expected}`, found `{found}`")]
    UnexpectedRoot { expected: String, found: String },

    /// The element or object carries no fields
    #[error("Empty payload: `{0}` has no fields")]
    EmptyPayload(String),

    /// A required source value was null
    #[error("Missing argument: `{0}` is null")]
    MissingArgument(String),
}

impl DecodeError {
    pub fn malformed_xml(message: impl fmt::Display) -> Self {
        DecodeError::MalformedXml(message.to_string())
    }

    pub fn unexpected_root(expected: impl Into<String>, found: impl Into<String>) -> Self {
        DecodeError::UnexpectedRoot {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        DecodeError::EmptyPayload(name.into())
    }

    pub fn missing(name: impl Into<String>) -> Self {
        DecodeError::MissingArgument(name.into())
    }

    /// Returns true for errors caused by the payload's shape rather than its syntax
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            DecodeError::UnexpectedRoot { .. }
                | DecodeError::EmptyPayload(_)
                | DecodeError::MissingArgument(_)
        )
    }
}
