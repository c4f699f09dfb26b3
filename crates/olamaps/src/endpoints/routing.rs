//! Routing endpoint group

use std::sync::Arc;

use tracing::instrument;

use super::EndpointContext;
use crate::error::OlaMapsError;
use crate::models::{Coordinates, DirectionsOptions};
use crate::transport::{ApiResponse, QueryParams, RequestOptions, TransportExt};

const DIRECTIONS_PATH: &str = "/routing/v1/directions";

/// Route planning between two points
#[derive(Debug, Clone)]
pub struct Routing {
    ctx: Arc<EndpointContext>,
}

impl Routing {
    /// Create the group over a shared context
    pub fn new(ctx: Arc<EndpointContext>) -> Self {
        Self { ctx }
    }

    /// Plan a route from `origin` to `destination`
    ///
    /// Sent as a POST without a body; every option travels in the query
    /// string, with unset options replaced by their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self, origin, destination), fields(origin = %origin, destination = %destination))]
    pub async fn get_directions(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        options: Option<DirectionsOptions>,
    ) -> Result<ApiResponse, OlaMapsError> {
        let resolved = options.unwrap_or_default().resolve();

        let params = self
            .ctx
            .with_api_key(QueryParams::new())
            .insert("origin", origin.to_string())
            .insert("destination", destination.to_string())
            .insert("alternatives", resolved.alternatives)
            .insert("steps", resolved.steps)
            .insert("overview", resolved.overview)
            .insert("language", resolved.language)
            .insert("traffic_metadata", resolved.traffic_metadata);

        let options = RequestOptions::new()
            .with_params(params)
            .with_header("Accept", "application/json");

        self.ctx
            .transport()
            .post(DIRECTIONS_PATH, None, options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::endpoints::test_support::{TEST_KEY, only, recording, scalar};

    fn origin() -> Coordinates {
        Coordinates::new(12.993_103, 77.543_326)
    }

    fn destination() -> Coordinates {
        Coordinates::new(12.972_006, 77.580_629)
    }

    #[tokio::test]
    async fn test_directions_defaults() {
        let (ctx, seen) = recording(ApiResponse::Json(json!({"routes": []})));
        let routing = Routing::new(ctx);

        routing
            .get_directions(origin(), destination(), None)
            .await
            .unwrap();

        let req = only(&seen);
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "/routing/v1/directions");
        assert!(req.body.is_none());
        assert_eq!(
            req.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(
            req.params.encode(),
            format!(
                "api_key={TEST_KEY}&origin=12.993103%2C77.543326&destination=12.972006%2C77.580629\
                 &alternatives=false&steps=false&overview=full&language=en&traffic_metadata=false"
            )
        );
    }

    #[tokio::test]
    async fn test_directions_with_options() {
        let (ctx, seen) = recording(ApiResponse::Json(json!({})));
        let routing = Routing::new(ctx);

        let options = DirectionsOptions::new()
            .with_alternatives(true)
            .with_steps(true)
            .with_overview("simplified")
            .with_language("kn")
            .with_traffic_metadata(true);
        routing
            .get_directions(origin(), destination(), Some(options))
            .await
            .unwrap();

        let req = only(&seen);
        assert_eq!(scalar(&req, "alternatives").as_deref(), Some("true"));
        assert_eq!(scalar(&req, "steps").as_deref(), Some("true"));
        assert_eq!(scalar(&req, "overview").as_deref(), Some("simplified"));
        assert_eq!(scalar(&req, "language").as_deref(), Some("kn"));
        assert_eq!(scalar(&req, "traffic_metadata").as_deref(), Some("true"));
    }

    #[tokio::test]
    async fn test_directions_partial_options_keep_defaults() {
        let (ctx, seen) = recording(ApiResponse::Json(json!({})));
        let routing = Routing::new(ctx);

        routing
            .get_directions(
                origin(),
                destination(),
                Some(DirectionsOptions::new().with_steps(true)),
            )
            .await
            .unwrap();

        let req = only(&seen);
        assert_eq!(scalar(&req, "steps").as_deref(), Some("true"));
        assert_eq!(scalar(&req, "alternatives").as_deref(), Some("false"));
        assert_eq!(scalar(&req, "overview").as_deref(), Some("full"));
    }
}
