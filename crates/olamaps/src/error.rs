//! Ola Maps client error types

use thiserror::Error;

/// Errors that can occur while talking to the Ola Maps API
#[derive(Debug, Error)]
pub enum OlaMapsError {
    /// Client was constructed with invalid settings (missing API key, bad base URL)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The API answered with a non-success status code
    #[error("HTTP {status}: {status_text}")]
    Http {
        /// Numeric status code
        status: u16,
        /// Canonical reason phrase for the status code
        status_text: String,
    },

    /// The underlying connection failed
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// A header name or value is not valid HTTP
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Request body could not be serialized to JSON
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl OlaMapsError {
    /// Build an HTTP error from a status code, filling in the reason phrase
    #[must_use]
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        Self::Http {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// Status code carried by this error, if it came from an HTTP response
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true for 4xx responses
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns true for 5xx responses
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }
}
