//! The root route handler.

use axum::http::StatusCode;

/// Body returned for every `GET /`.
pub const GREETING: &str = "Hello, World from Flask in a Docker container!";

/// Handle `GET /`.
///
/// Stateless: every invocation produces an identical response. Axum renders
/// a `&'static str` as `200 OK` with `text/plain; charset=utf-8`.
pub async fn greeting() -> &'static str {
    GREETING
}

/// Handle any path without a registered route.
pub async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found")
}
