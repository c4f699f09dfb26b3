//! Request models for the endpoint groups

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language sent by `geocode` when the request does not name one
pub const DEFAULT_GEOCODE_LANGUAGE: &str = "English";

/// Place autocomplete query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacesAutocompleteRequest {
    /// Partial text typed by the user
    pub input: String,
    /// Bias location as `"lat,lng"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Bias radius in metres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
    /// Restrict results to the radius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strictbounds: Option<bool>,
}

impl PlacesAutocompleteRequest {
    /// Create a query for the given input text
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            location: None,
            radius: None,
            strictbounds: None,
        }
    }

    /// Bias results towards a point
    #[must_use]
    pub fn with_location(mut self, location: Coordinates) -> Self {
        self.location = Some(location.to_string());
        self
    }

    /// Bias radius in metres
    #[must_use]
    pub const fn with_radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Restrict results to the bias radius
    #[must_use]
    pub const fn with_strictbounds(mut self, strictbounds: bool) -> Self {
        self.strictbounds = Some(strictbounds);
        self
    }
}

/// Lookup of a single place by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacesDetailsRequest {
    /// Place identifier returned by autocomplete
    pub place_id: String,
}

impl PlacesDetailsRequest {
    /// Create a details lookup
    pub fn new(place_id: impl Into<String>) -> Self {
        Self {
            place_id: place_id.into(),
        }
    }
}

/// Forward geocoding query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodeRequest {
    /// Free-form address
    pub address: String,
    /// Response language (default: `English`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl GeocodeRequest {
    /// Create a geocoding query
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            language: None,
        }
    }

    /// Set the response language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Language to send; empty strings fall back to the default too
    #[must_use]
    pub fn resolved_language(&self) -> &str {
        self.language
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_GEOCODE_LANGUAGE)
    }
}

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Formats as `"lat,lng"`
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Reverse geocoding takes a bare coordinate pair
pub type ReverseGeocodeRequest = Coordinates;

/// Optional routing flags; unset fields take the documented defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionsOptions {
    /// Return alternative routes (default: `false`)
    #[serde(default)]
    pub alternatives: Option<bool>,
    /// Return turn-by-turn steps (default: `false`)
    #[serde(default)]
    pub steps: Option<bool>,
    /// Polyline detail level (default: `"full"`)
    #[serde(default)]
    pub overview: Option<String>,
    /// Instruction language (default: `"en"`)
    #[serde(default)]
    pub language: Option<String>,
    /// Include traffic metadata (default: `false`)
    #[serde(default)]
    pub traffic_metadata: Option<bool>,
}

impl DirectionsOptions {
    /// Options with every field at its default
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request alternative routes
    #[must_use]
    pub const fn with_alternatives(mut self, alternatives: bool) -> Self {
        self.alternatives = Some(alternatives);
        self
    }

    /// Request turn-by-turn steps
    #[must_use]
    pub const fn with_steps(mut self, steps: bool) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Set the polyline detail level
    #[must_use]
    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = Some(overview.into());
        self
    }

    /// Set the instruction language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Request traffic metadata
    #[must_use]
    pub const fn with_traffic_metadata(mut self, traffic_metadata: bool) -> Self {
        self.traffic_metadata = Some(traffic_metadata);
        self
    }

    /// Fill unset fields with their defaults
    #[must_use]
    pub fn resolve(&self) -> ResolvedDirectionsOptions {
        let defaults = ResolvedDirectionsOptions::default();
        ResolvedDirectionsOptions {
            alternatives: self.alternatives.unwrap_or(defaults.alternatives),
            steps: self.steps.unwrap_or(defaults.steps),
            overview: self.overview.clone().unwrap_or(defaults.overview),
            language: self.language.clone().unwrap_or(defaults.language),
            traffic_metadata: self.traffic_metadata.unwrap_or(defaults.traffic_metadata),
        }
    }
}

/// Routing flags with every value decided
#[allow(clippy::struct_excessive_bools)] // mirrors the API's flag parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDirectionsOptions {
    /// Return alternative routes
    pub alternatives: bool,
    /// Return turn-by-turn steps
    pub steps: bool,
    /// Polyline detail level
    pub overview: String,
    /// Instruction language
    pub language: String,
    /// Include traffic metadata
    pub traffic_metadata: bool,
}

impl Default for ResolvedDirectionsOptions {
    fn default() -> Self {
        Self {
            alternatives: false,
            steps: false,
            overview: "full".to_string(),
            language: "en".to_string(),
            traffic_metadata: false,
        }
    }
}
