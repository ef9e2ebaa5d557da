//! Request identity.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) on ingress
//! - Propagate the ID onto the response for client-side correlation
//!
//! # Design Decisions
//! - Request ID added as early as possible so every log line carries it
//! - A client-supplied `x-request-id` is preserved, not overwritten

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates a fresh UUID v4 request ID for each inbound request.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(id))
    }
}
