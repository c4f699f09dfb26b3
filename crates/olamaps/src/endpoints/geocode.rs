//! Geocode endpoint group

use std::sync::Arc;

use tracing::instrument;

use super::EndpointContext;
use crate::error::OlaMapsError;
use crate::models::{GeocodeRequest, ReverseGeocodeRequest};
use crate::transport::{ApiResponse, QueryParams, RequestOptions, TransportExt};

const GEOCODE_PATH: &str = "/places/v1/geocode";
const REVERSE_GEOCODE_PATH: &str = "/places/v1/reverse-geocode";

/// Address to coordinate conversion and back
#[derive(Debug, Clone)]
pub struct Geocode {
    ctx: Arc<EndpointContext>,
}

impl Geocode {
    /// Create the group over a shared context
    pub fn new(ctx: Arc<EndpointContext>) -> Self {
        Self { ctx }
    }

    /// Resolve an address to candidate locations
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self))]
    pub async fn geocode(&self, request: &GeocodeRequest) -> Result<ApiResponse, OlaMapsError> {
        let params = QueryParams::new()
            .insert("address", &request.address)
            .insert("language", request.resolved_language());

        self.ctx
            .transport()
            .get(
                GEOCODE_PATH,
                RequestOptions::new().with_params(self.ctx.with_api_key(params)),
            )
            .await
    }

    /// Resolve coordinates to nearby addresses
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self))]
    pub async fn reverse_geocode(
        &self,
        request: &ReverseGeocodeRequest,
    ) -> Result<ApiResponse, OlaMapsError> {
        let params = QueryParams::new().insert("latlng", request.to_string());

        self.ctx
            .transport()
            .get(
                REVERSE_GEOCODE_PATH,
                RequestOptions::new().with_params(self.ctx.with_api_key(params)),
            )
            .await
    }
}
