//! HTTP dispatcher
//!
//! Turns a [`RequestDescriptor`] into a network call and decodes the result.
//! Configuration is fixed at construction and shared read-only across any
//! number of concurrent requests.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::query::QueryParams;
use super::request::{RequestDescriptor, RequestOptions};
use super::request_id::{
    RequestIdGenerator, RequestIds, UuidRequestIdGenerator, X_CORRELATION_ID, X_REQUEST_ID,
};
use super::response::ApiResponse;
use crate::config::{OlaMapsConfig, validate_base_url};
use crate::error::OlaMapsError;

const APPLICATION_JSON: &str = "application/json";

/// Executes request descriptors against the API
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request/response round trip
    async fn send(&self, request: RequestDescriptor) -> Result<ApiResponse, OlaMapsError>;
}

/// Verb helpers available on every [`Transport`]
#[async_trait]
pub trait TransportExt: Transport {
    /// Issue a GET request
    async fn get(&self, path: &str, options: RequestOptions) -> Result<ApiResponse, OlaMapsError> {
        self.send(RequestDescriptor::get(path).with_options(options))
            .await
    }

    /// Issue a POST request with an optional JSON body
    async fn post(
        &self,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<ApiResponse, OlaMapsError> {
        self.send(
            RequestDescriptor::post(path)
                .with_body(body)
                .with_options(options),
        )
        .await
    }

    /// Issue a PUT request with an optional JSON body
    async fn put(
        &self,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<ApiResponse, OlaMapsError> {
        self.send(
            RequestDescriptor::put(path)
                .with_body(body)
                .with_options(options),
        )
        .await
    }

    /// Issue a DELETE request
    async fn delete(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, OlaMapsError> {
        self.send(RequestDescriptor::delete(path).with_options(options))
            .await
    }
}

impl<T: Transport + ?Sized> TransportExt for T {}

/// reqwest-backed [`Transport`]
#[derive(Clone)]
pub struct HttpDispatcher {
    client: Client,
    base_url: String,
    default_headers: HeaderMap,
    id_generator: Arc<dyn RequestIdGenerator>,
}

impl fmt::Debug for HttpDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpDispatcher")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl HttpDispatcher {
    /// Create a dispatcher for `base_url` with extra default headers
    ///
    /// A single trailing slash is stripped from the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`OlaMapsError::Configuration`] for an invalid base URL or
    /// default header.
    pub fn new(
        base_url: &str,
        default_headers: &BTreeMap<String, String>,
    ) -> Result<Self, OlaMapsError> {
        Self::build(base_url, default_headers, None, None)
    }

    /// Create a dispatcher from a client configuration
    ///
    /// # Errors
    ///
    /// Returns [`OlaMapsError::Configuration`] for an invalid base URL or
    /// default header.
    pub fn from_config(config: &OlaMapsConfig) -> Result<Self, OlaMapsError> {
        Self::build(
            &config.base_url,
            &config.default_headers,
            config.timeout_secs.map(Duration::from_secs),
            Some(&config.user_agent),
        )
    }

    fn build(
        base_url: &str,
        default_headers: &BTreeMap<String, String>,
        timeout: Option<Duration>,
        user_agent: Option<&str>,
    ) -> Result<Self, OlaMapsError> {
        validate_base_url(base_url)?;
        let base_url = base_url.strip_suffix('/').unwrap_or(base_url).to_string();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        for (name, value) in default_headers {
            let (name, value) = parse_header(name, value)
                .map_err(|e| OlaMapsError::Configuration(format!("default header: {e}")))?;
            headers.insert(name, value);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url,
            default_headers: headers,
            id_generator: Arc::new(UuidRequestIdGenerator),
        })
    }

    /// Replace the source of request and correlation ids
    #[must_use]
    pub fn with_id_generator(mut self, id_generator: Arc<dyn RequestIdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    /// Normalized base URL, without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers sent with every request
    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Full URL for a path and its query parameters
    #[must_use]
    pub fn url_for(&self, path: &str, params: &QueryParams) -> String {
        let mut url = self.base_url.clone();
        if !path.starts_with('/') {
            url.push('/');
        }
        url.push_str(path);

        let query = params.encode();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    /// Merge headers for one call: generated ids, then defaults, then
    /// `Content-Type` when a body is present, then per-call overrides
    ///
    /// # Errors
    ///
    /// Returns [`OlaMapsError::InvalidHeader`] if an override or generated
    /// id is not a valid header.
    pub fn build_headers(
        &self,
        ids: &RequestIds,
        overrides: &BTreeMap<String, String>,
        has_body: bool,
    ) -> Result<HeaderMap, OlaMapsError> {
        let mut headers = HeaderMap::new();
        for (name, value) in [
            (X_REQUEST_ID, &ids.request_id),
            (X_CORRELATION_ID, &ids.correlation_id),
        ] {
            let (name, value) = parse_header(name, value)?;
            headers.insert(name, value);
        }

        for (name, value) in &self.default_headers {
            headers.insert(name.clone(), value.clone());
        }

        if has_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        }

        for (name, value) in overrides {
            let (name, value) = parse_header(name, value)?;
            headers.insert(name, value);
        }

        Ok(headers)
    }
}

#[async_trait]
impl Transport for HttpDispatcher {
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: RequestDescriptor) -> Result<ApiResponse, OlaMapsError> {
        let url = self.url_for(&request.path, &request.params);
        let ids = RequestIds::generate(self.id_generator.as_ref());
        let headers = self.build_headers(&ids, &request.headers, request.body.is_some())?;

        debug!(
            request_id = %ids.request_id,
            correlation_id = %ids.correlation_id,
            "Dispatching request"
        );

        let mut builder = self
            .client
            .request(request.method, url.as_str())
            .headers(headers);
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), request_id = %ids.request_id, "Request failed");
            return Err(OlaMapsError::from_status(status));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await?;

        debug!(status = status.as_u16(), "Request completed");
        ApiResponse::decode(content_type.as_deref(), body)
    }
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), OlaMapsError> {
    let header_name = HeaderName::try_from(name)
        .map_err(|e| OlaMapsError::InvalidHeader(format!("{name}: {e}")))?;
    let header_value = HeaderValue::try_from(value)
        .map_err(|e| OlaMapsError::InvalidHeader(format!("{name}: {e}")))?;
    Ok((header_name, header_value))
}
