//! Request descriptors handed to a [`Transport`](super::Transport)

use std::collections::BTreeMap;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::query::QueryParams;
use crate::error::OlaMapsError;

/// Per-call header overrides and query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Headers that override both generated and default headers
    pub headers: BTreeMap<String, String>,
    /// Query parameters appended to the URL
    pub params: QueryParams,
}

impl RequestOptions {
    /// Create empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header override
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Replace the query parameters
    #[must_use]
    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }
}

/// One HTTP call described as plain data
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// HTTP verb
    pub method: Method,
    /// Path relative to the base URL; a leading `/` is added if missing
    pub path: String,
    /// Per-call header overrides
    pub headers: BTreeMap<String, String>,
    /// Query parameters
    pub params: QueryParams,
    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<Value>,
}

impl RequestDescriptor {
    /// Describe a request with no headers, parameters or body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: BTreeMap::new(),
            params: QueryParams::new(),
            body: None,
        }
    }

    /// Describe a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Describe a POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Describe a PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Describe a DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Merge per-call options into the descriptor
    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.headers.extend(options.headers);
        self.params = options.params;
        self
    }

    /// Add a header override
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Replace the query parameters
    #[must_use]
    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    /// Set the body; `None` and JSON `null` both mean no body
    #[must_use]
    pub fn with_body(mut self, body: Option<Value>) -> Self {
        self.body = body.filter(|b| !b.is_null());
        self
    }

    /// Serialize any value as the JSON body
    ///
    /// # Errors
    ///
    /// Returns [`OlaMapsError::Serialization`] if the value cannot be
    /// represented as JSON.
    pub fn with_json<T: Serialize + ?Sized>(self, body: &T) -> Result<Self, OlaMapsError> {
        let value =
            serde_json::to_value(body).map_err(|e| OlaMapsError::Serialization(e.to_string()))?;
        Ok(self.with_body(Some(value)))
    }

    /// Path with a guaranteed leading slash
    #[must_use]
    pub fn normalized_path(&self) -> String {
        if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_constructors_pick_method() {
        assert_eq!(RequestDescriptor::get("/a").method, Method::GET);
        assert_eq!(RequestDescriptor::post("/a").method, Method::POST);
        assert_eq!(RequestDescriptor::put("/a").method, Method::PUT);
        assert_eq!(RequestDescriptor::delete("/a").method, Method::DELETE);
    }

    #[test]
    fn test_normalized_path() {
        assert_eq!(RequestDescriptor::get("places").normalized_path(), "/places");
        assert_eq!(RequestDescriptor::get("/places").normalized_path(), "/places");
    }

    #[test]
    fn test_null_body_is_dropped() {
        let req = RequestDescriptor::post("/x").with_body(Some(Value::Null));
        assert!(req.body.is_none());

        let req = RequestDescriptor::post("/x").with_body(Some(json!({"a": 1})));
        assert_eq!(req.body, Some(json!({"a": 1})));
    }

    #[test]
    fn test_with_json_serializes() {
        #[derive(Serialize)]
        struct Payload {
            name: &'static str,
        }

        let req = RequestDescriptor::put("/x")
            .with_json(&Payload { name: "tiles" })
            .unwrap();
        assert_eq!(req.body, Some(json!({"name": "tiles"})));
    }

    #[test]
    fn test_with_options_merges() {
        let options = RequestOptions::new()
            .with_header("Accept", "text/plain")
            .with_params(QueryParams::new().insert("q", "1"));
        let req = RequestDescriptor::get("/x")
            .with_header("X-Trace", "t")
            .with_options(options);

        assert_eq!(req.headers.len(), 2);
        assert_eq!(req.headers.get("Accept").map(String::as_str), Some("text/plain"));
        assert_eq!(req.params.encode(), "q=1");
    }
}
