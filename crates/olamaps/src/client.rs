//! Top-level Ola Maps client

use std::sync::Arc;

use secrecy::SecretString;
use tracing::debug;

use crate::config::OlaMapsConfig;
use crate::endpoints::{EndpointContext, Geocode, Places, Routing, Tiles};
use crate::error::OlaMapsError;
use crate::transport::{HttpDispatcher, Transport};

/// Entry point bundling the four endpoint groups
///
/// One dispatcher is built per client and shared by every group.
#[derive(Debug, Clone)]
pub struct OlaMapsClient {
    /// Place search and lookup
    pub places: Places,
    /// Forward and reverse geocoding
    pub geocode: Geocode,
    /// Vector tiles and styles
    pub tiles: Tiles,
    /// Directions
    pub routing: Routing,
}

impl OlaMapsClient {
    /// Create a client for the production API
    ///
    /// # Errors
    ///
    /// Returns [`OlaMapsError::Configuration`] if the API key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, OlaMapsError> {
        Self::from_config(OlaMapsConfig::new(api_key))
    }

    /// Create a client against a different host
    ///
    /// # Errors
    ///
    /// Returns [`OlaMapsError::Configuration`] if the API key is empty or
    /// the base URL is invalid.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, OlaMapsError> {
        Self::from_config(OlaMapsConfig::new(api_key).with_base_url(base_url))
    }

    /// Create a client from a full configuration
    ///
    /// # Errors
    ///
    /// Returns [`OlaMapsError::Configuration`] if the configuration does not
    /// validate.
    pub fn from_config(config: OlaMapsConfig) -> Result<Self, OlaMapsError> {
        config.validate()?;
        let dispatcher = HttpDispatcher::from_config(&config)?;
        debug!(base_url = %dispatcher.base_url(), "Creating Ola Maps client");
        Ok(Self::assemble(Arc::new(dispatcher), config.api_key))
    }

    /// Create a client over a custom transport
    ///
    /// # Errors
    ///
    /// Returns [`OlaMapsError::Configuration`] if the API key is empty.
    pub fn with_transport(
        api_key: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, OlaMapsError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(OlaMapsError::Configuration(
                "API key is required".to_string(),
            ));
        }
        Ok(Self::assemble(transport, SecretString::from(api_key)))
    }

    fn assemble(transport: Arc<dyn Transport>, api_key: SecretString) -> Self {
        let ctx = Arc::new(EndpointContext::new(transport, api_key));
        Self {
            places: Places::new(Arc::clone(&ctx)),
            geocode: Geocode::new(Arc::clone(&ctx)),
            tiles: Tiles::new(Arc::clone(&ctx)),
            routing: Routing::new(ctx),
        }
    }
}
