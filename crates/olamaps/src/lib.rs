//! Ola Maps API client
//!
//! Typed async access to the [Ola Maps](https://maps.olakrutrim.com) REST API:
//! places, geocoding, vector tiles and routing.
//!
//! # Architecture
//!
//! A single [`HttpDispatcher`] owns the base URL and default headers, attaches
//! fresh `X-Request-Id` / `X-Correlation-Id` headers to every call, serializes
//! query parameters and decodes responses by content type. The endpoint groups
//! ([`Places`], [`Geocode`], [`Tiles`], [`Routing`]) are stateless façades that
//! share one [`EndpointContext`] holding the [`Transport`] and API key.
//!
//! # Example
//!
//! ```rust,ignore
//! use olamaps::{Coordinates, GeocodeRequest, OlaMapsClient};
//!
//! let client = OlaMapsClient::new(std::env::var("OLAMAPS_API_KEY")?)?;
//!
//! let places = client.geocode.geocode(&GeocodeRequest::new("MG Road, Bengaluru")).await?;
//! let route = client
//!     .routing
//!     .get_directions(
//!         Coordinates::new(12.993, 77.543),
//!         Coordinates::new(12.972, 77.580),
//!         None,
//!     )
//!     .await?;
//! ```

mod client;
mod config;
mod encoding;
mod endpoints;
mod error;
mod models;
pub mod transport;

pub use client::OlaMapsClient;
pub use config::{DEFAULT_BASE_URL, OlaMapsConfig};
pub use encoding::encode_path_segment;
pub use endpoints::{API_KEY_PARAM, EndpointContext, Geocode, Places, Routing, Tiles};
pub use error::OlaMapsError;
pub use models::{
    Coordinates, DEFAULT_GEOCODE_LANGUAGE, DirectionsOptions, GeocodeRequest,
    PlacesAutocompleteRequest, PlacesDetailsRequest, ResolvedDirectionsOptions,
    ReverseGeocodeRequest,
};
pub use transport::{
    ApiResponse, HttpDispatcher, QueryParams, QueryValue, RequestDescriptor, RequestOptions,
    Transport, TransportExt,
};
