//! Places endpoint group

use std::sync::Arc;

use tracing::instrument;

use super::EndpointContext;
use crate::error::OlaMapsError;
use crate::models::{PlacesAutocompleteRequest, PlacesDetailsRequest};
use crate::transport::{ApiResponse, QueryParams, RequestOptions, TransportExt};

const AUTOCOMPLETE_PATH: &str = "/places/v1/autocomplete";
const DETAILS_PATH: &str = "/places/v1/details";
const ADVANCED_DETAILS_PATH: &str = "/places/v1/details/advanced";

/// Place search and lookup
#[derive(Debug, Clone)]
pub struct Places {
    ctx: Arc<EndpointContext>,
}

impl Places {
    /// Create the group over a shared context
    pub fn new(ctx: Arc<EndpointContext>) -> Self {
        Self { ctx }
    }

    /// Suggest places for partially typed input
    ///
    /// Every request field is forwarded as a query parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self))]
    pub async fn autocomplete(
        &self,
        request: &PlacesAutocompleteRequest,
    ) -> Result<ApiResponse, OlaMapsError> {
        let params = QueryParams::new()
            .insert("input", &request.input)
            .insert_opt("location", request.location.as_deref())
            .insert_opt("radius", request.radius)
            .insert_opt("strictbounds", request.strictbounds);

        self.ctx
            .transport()
            .get(
                AUTOCOMPLETE_PATH,
                RequestOptions::new().with_params(self.ctx.with_api_key(params)),
            )
            .await
    }

    /// Fetch details for a place id
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self))]
    pub async fn details(
        &self,
        request: &PlacesDetailsRequest,
    ) -> Result<ApiResponse, OlaMapsError> {
        self.lookup(DETAILS_PATH, request).await
    }

    /// Fetch advanced details for a place id
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self))]
    pub async fn advanced_details(
        &self,
        request: &PlacesDetailsRequest,
    ) -> Result<ApiResponse, OlaMapsError> {
        self.lookup(ADVANCED_DETAILS_PATH, request).await
    }

    async fn lookup(
        &self,
        path: &str,
        request: &PlacesDetailsRequest,
    ) -> Result<ApiResponse, OlaMapsError> {
        let params = QueryParams::new().insert("place_id", &request.place_id);
        self.ctx
            .transport()
            .get(
                path,
                RequestOptions::new().with_params(self.ctx.with_api_key(params)),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::endpoints::test_support::{TEST_KEY, only, recording, scalar};
    use crate::models::Coordinates;

    #[tokio::test]
    async fn test_autocomplete_forwards_all_fields() {
        let (ctx, seen) = recording(ApiResponse::Json(json!({"predictions": []})));
        let places = Places::new(ctx);

        let request = PlacesAutocompleteRequest::new("coffee")
            .with_location(Coordinates::new(12.93, 77.61))
            .with_radius(1000)
            .with_strictbounds(true);
        let resp = places.autocomplete(&request).await.unwrap();
        assert_eq!(resp.as_json(), Some(&json!({"predictions": []})));

        let req = only(&seen);
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/places/v1/autocomplete");
        assert_eq!(
            req.params.encode(),
            format!(
                "input=coffee&location=12.93%2C77.61&radius=1000&strictbounds=true&api_key={TEST_KEY}"
            )
        );
    }

    #[tokio::test]
    async fn test_autocomplete_skips_unset_fields() {
        let (ctx, seen) = recording(ApiResponse::Json(json!({})));
        let places = Places::new(ctx);

        places
            .autocomplete(&PlacesAutocompleteRequest::new("tea"))
            .await
            .unwrap();

        let req = only(&seen);
        assert_eq!(req.params.encode(), format!("input=tea&api_key={TEST_KEY}"));
    }

    #[tokio::test]
    async fn test_details_forwards_place_id_only() {
        let (ctx, seen) = recording(ApiResponse::Json(json!({})));
        let places = Places::new(ctx);

        places
            .details(&PlacesDetailsRequest::new("ola-platform:abc"))
            .await
            .unwrap();

        let req = only(&seen);
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/places/v1/details");
        assert_eq!(scalar(&req, "place_id").as_deref(), Some("ola-platform:abc"));
        assert_eq!(scalar(&req, "api_key").as_deref(), Some(TEST_KEY));
        assert_eq!(req.params.len(), 2);
    }

    #[tokio::test]
    async fn test_advanced_details_path() {
        let (ctx, seen) = recording(ApiResponse::Json(json!({})));
        let places = Places::new(ctx);

        places
            .advanced_details(&PlacesDetailsRequest::new("p1"))
            .await
            .unwrap();

        let req = only(&seen);
        assert_eq!(req.path, "/places/v1/details/advanced");
        assert_eq!(req.params.encode(), format!("place_id=p1&api_key={TEST_KEY}"));
    }
}
