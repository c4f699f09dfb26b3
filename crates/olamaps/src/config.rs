//! Ola Maps client configuration

use std::collections::BTreeMap;
use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::OlaMapsError;

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://api.olamaps.io";

/// Configuration for [`OlaMapsClient`](crate::OlaMapsClient)
#[derive(Clone, Serialize, Deserialize)]
pub struct OlaMapsConfig {
    /// API key sent as `api_key` on every call (sensitive - uses SecretString)
    #[serde(default = "default_api_key", skip_serializing)]
    pub api_key: SecretString,

    /// Base URL for the REST API (default: <https://api.olamaps.io>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Headers added to every request, on top of `Accept: application/json`
    #[serde(default)]
    pub default_headers: BTreeMap<String, String>,

    /// Request timeout in seconds (default: none)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_key() -> SecretString {
    SecretString::from(String::new())
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("olamaps-rs/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for OlaMapsConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            base_url: default_base_url(),
            default_headers: BTreeMap::new(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl fmt::Debug for OlaMapsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OlaMapsConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl OlaMapsConfig {
    /// Create a configuration for the production host with the given key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            ..Default::default()
        }
    }

    /// Create a configuration pointing at a local mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from("test-api-key".to_string()),
            base_url: base_url.into(),
            timeout_secs: Some(5),
            ..Default::default()
        }
    }

    /// Override the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Add a header sent with every request
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Set a request timeout
    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Get the API key
    #[must_use]
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`OlaMapsError::Configuration`] if the API key is empty, the
    /// base URL is not an absolute http(s) URL, or the timeout is zero.
    pub fn validate(&self) -> Result<(), OlaMapsError> {
        if self.api_key().trim().is_empty() {
            return Err(OlaMapsError::Configuration(
                "API key is required".to_string(),
            ));
        }

        validate_base_url(&self.base_url)?;

        if self.timeout_secs == Some(0) {
            return Err(OlaMapsError::Configuration(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Load configuration from `olamaps.toml` (optional) and `OLAMAPS__*`
    /// environment variables, e.g. `OLAMAPS__API_KEY`
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or the result is invalid.
    pub fn load() -> Result<Self, OlaMapsError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("olamaps").required(false))
            .add_source(config::Environment::with_prefix("OLAMAPS").separator("__"))
            .build()
            .map_err(|e| OlaMapsError::Configuration(e.to_string()))?;

        Self::from_settings(settings)
    }

    /// Deserialize and validate from already-built settings
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization or validation fails.
    pub fn from_settings(settings: config::Config) -> Result<Self, OlaMapsError> {
        let config: Self = settings
            .try_deserialize()
            .map_err(|e| OlaMapsError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Check that a base URL is an absolute http(s) URL
pub(crate) fn validate_base_url(base_url: &str) -> Result<(), OlaMapsError> {
    if base_url.trim().is_empty() {
        return Err(OlaMapsError::Configuration(
            "base_url must not be empty".to_string(),
        ));
    }

    let parsed = Url::parse(base_url)
        .map_err(|e| OlaMapsError::Configuration(format!("invalid base_url: {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(OlaMapsError::Configuration(format!(
            "base_url must use http or https, got {}",
            parsed.scheme()
        )));
    }

    Ok(())
}
