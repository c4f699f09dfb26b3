//! Decoded API responses

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::OlaMapsError;

/// Body of a successful response, chosen by its declared content type
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Body declared `application/json`
    Json(Value),
    /// Any other body, as UTF-8 text
    Text(String),
}

impl ApiResponse {
    /// Decode a body according to its `Content-Type` header
    ///
    /// # Errors
    ///
    /// Returns [`OlaMapsError::Decode`] if the body claims to be JSON but
    /// does not parse.
    pub fn decode(content_type: Option<&str>, body: String) -> Result<Self, OlaMapsError> {
        let is_json = content_type
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"));

        if is_json {
            serde_json::from_str(&body)
                .map(Self::Json)
                .map_err(|e| OlaMapsError::Decode(e.to_string()))
        } else {
            Ok(Self::Text(body))
        }
    }

    /// Returns true for a JSON body
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// Borrow the JSON value, if any
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Borrow the text body, if any
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Json(_) => None,
        }
    }

    /// Take the JSON value, if any
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Deserialize the body into a typed model
    ///
    /// Text bodies are parsed as JSON as a fallback, since some endpoints
    /// serve JSON under a generic content type.
    ///
    /// # Errors
    ///
    /// Returns [`OlaMapsError::Decode`] if the body does not match `T`.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, OlaMapsError> {
        match self {
            Self::Json(value) => serde_json::from_value(value),
            Self::Text(text) => serde_json::from_str(&text),
        }
        .map_err(|e| OlaMapsError::Decode(e.to_string()))
    }
}
