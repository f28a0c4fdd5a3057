//! Error types for the placeholder API client.
//!
//! # Design
//! The framework's only assertion is "the response status matches the
//! expected one", so a mismatch gets a dedicated variant carrying both codes
//! and the body for debugging. An expected 404 that receives 404 is a
//! success, not an error — there is no special-cased not-found variant.

use std::fmt;

/// Errors returned by endpoint operations.
#[derive(Debug)]
pub enum ApiError {
    /// The HTTP round-trip itself failed (connect, DNS, I/O).
    Transport(String),

    /// The response status did not match the expected one.
    UnexpectedStatus {
        expected: u16,
        actual: u16,
        body: String,
    },

    /// The request payload could not be serialized to JSON.
    SerializationError(String),

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::UnexpectedStatus {
                expected,
                actual,
                body,
            } => {
                write!(f, "expected status {expected}, got {actual}: {body}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
