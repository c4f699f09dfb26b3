//! Endpoint groups
//!
//! Each group is a stateless façade over the shared [`EndpointContext`],
//! with one method per remote route.

mod geocode;
mod places;
mod routing;
mod tiles;

use std::fmt;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::transport::{QueryParams, Transport};

pub use geocode::Geocode;
pub use places::Places;
pub use routing::Routing;
pub use tiles::Tiles;

/// Query parameter carrying the API key on every call
pub const API_KEY_PARAM: &str = "api_key";

/// Transport and API key shared by all endpoint groups
pub struct EndpointContext {
    transport: Arc<dyn Transport>,
    api_key: SecretString,
}

impl fmt::Debug for EndpointContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointContext")
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl EndpointContext {
    /// Bundle a transport with the key sent on every request
    pub fn new(transport: Arc<dyn Transport>, api_key: SecretString) -> Self {
        Self { transport, api_key }
    }

    /// Transport used for every call
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Append the API key to a parameter set
    pub(crate) fn with_api_key(&self, params: QueryParams) -> QueryParams {
        params.insert(API_KEY_PARAM, self.api_key.expose_secret())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Arc, Mutex};

    use secrecy::SecretString;

    use super::EndpointContext;
    use crate::transport::{ApiResponse, MockTransport, QueryValue, RequestDescriptor};

    pub type Recorded = Arc<Mutex<Vec<RequestDescriptor>>>;

    pub const TEST_KEY: &str = "test-key";

    pub fn context(mock: MockTransport) -> Arc<EndpointContext> {
        Arc::new(EndpointContext::new(
            Arc::new(mock),
            SecretString::from(TEST_KEY.to_string()),
        ))
    }

    /// Mock that records every descriptor and answers with `response`
    pub fn recording(response: ApiResponse) -> (Arc<EndpointContext>, Recorded) {
        let seen: Recorded = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut mock = MockTransport::new();
        mock.expect_send().returning(move |req| {
            sink.lock().unwrap().push(req);
            Ok(response.clone())
        });
        (context(mock), seen)
    }

    pub fn only(seen: &Recorded) -> RequestDescriptor {
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1, "expected exactly one request");
        seen[0].clone()
    }

    pub fn scalar(req: &RequestDescriptor, key: &str) -> Option<String> {
        match req.params.get(key) {
            Some(QueryValue::Scalar(v)) => Some(v.clone()),
            _ => None,
        }
    }
}
