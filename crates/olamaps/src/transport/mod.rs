//! Request dispatch layer
//!
//! Owns the base URL and default headers, builds per-request headers and
//! query strings, and decodes responses by content type.

mod dispatcher;
mod query;
mod request;
mod request_id;
mod response;

#[cfg(test)]
pub use dispatcher::MockTransport;
pub use dispatcher::{HttpDispatcher, Transport, TransportExt};
pub use query::{QueryParams, QueryValue};
pub use request::{RequestDescriptor, RequestOptions};
pub use request_id::{
    RequestIdGenerator, RequestIds, UuidRequestIdGenerator, X_CORRELATION_ID, X_REQUEST_ID,
};
pub use response::ApiResponse;
