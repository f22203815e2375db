//! Shared Error Types
//!
//! Error taxonomy for the chat client. Transport and API failures surface to
//! callers of user-initiated loads; background operations (mark-as-read,
//! acknowledgements) log and swallow these instead of propagating.

use thiserror::Error;

/// Errors produced by the chat client.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Network-level failure (DNS, connect, body read)
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend responded with a non-success status
    #[error("Request failed: {status} - {body}")]
    Api { status: u16, body: String },

    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Invalid or incomplete configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// An operation that requires a selected conversation ran without one
    #[error("No conversation selected")]
    NoSelection,
}

impl ChatError {
    /// Create an API error from a response status and body
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
