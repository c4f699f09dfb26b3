//! Per-request tracing identifiers
//!
//! Every outgoing call carries a fresh `X-Request-Id` and `X-Correlation-Id`.
//! The source of those ids is injectable so tests can pin them.

use std::fmt;

use uuid::Uuid;

/// Header name for the request id
pub const X_REQUEST_ID: &str = "x-request-id";

/// Header name for the correlation id
pub const X_CORRELATION_ID: &str = "x-correlation-id";

/// Source of unique identifiers attached to outgoing requests
pub trait RequestIdGenerator: Send + Sync {
    /// Produce a new identifier; called twice per request
    fn next_id(&self) -> String;
}

/// Random UUID v4 generator
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestIdGenerator;

impl RequestIdGenerator for UuidRequestIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Request and correlation ids generated for one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestIds {
    /// Value of `X-Request-Id`
    pub request_id: String,
    /// Value of `X-Correlation-Id`
    pub correlation_id: String,
}

impl RequestIds {
    /// Draw a fresh pair from the generator
    pub fn generate(generator: &dyn RequestIdGenerator) -> Self {
        Self {
            request_id: generator.next_id(),
            correlation_id: generator.next_id(),
        }
    }
}

impl fmt::Display for RequestIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.request_id, self.correlation_id)
    }
}
