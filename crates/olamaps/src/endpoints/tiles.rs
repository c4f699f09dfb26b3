//! Tiles endpoint group

use std::sync::Arc;

use tracing::instrument;

use super::EndpointContext;
use crate::encoding::encode_path_segment;
use crate::error::OlaMapsError;
use crate::transport::{ApiResponse, QueryParams, RequestOptions, TransportExt};

const STYLES_PATH: &str = "/tiles/vector/v1/styles.json";

/// Vector tile metadata and map styles
#[derive(Debug, Clone)]
pub struct Tiles {
    ctx: Arc<EndpointContext>,
}

impl Tiles {
    /// Create the group over a shared context
    pub fn new(ctx: Arc<EndpointContext>) -> Self {
        Self { ctx }
    }

    /// Fetch the TileJSON document for a dataset
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self))]
    pub async fn get_data_tile_json(
        &self,
        dataset_name: &str,
    ) -> Result<ApiResponse, OlaMapsError> {
        let path = format!(
            "/tiles/vector/v1/data/{}.json",
            encode_path_segment(dataset_name)
        );
        self.fetch(&path).await
    }

    /// List available map styles
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self))]
    pub async fn get_styles(&self) -> Result<ApiResponse, OlaMapsError> {
        self.fetch(STYLES_PATH).await
    }

    /// Fetch one map style by name
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self))]
    pub async fn get_style_by_name(&self, style_name: &str) -> Result<ApiResponse, OlaMapsError> {
        let path = format!(
            "/tiles/vector/v1/styles/{}/style.json",
            encode_path_segment(style_name)
        );
        self.fetch(&path).await
    }

    async fn fetch(&self, path: &str) -> Result<ApiResponse, OlaMapsError> {
        self.ctx
            .transport()
            .get(
                path,
                RequestOptions::new().with_params(self.ctx.with_api_key(QueryParams::new())),
            )
            .await
    }
}
