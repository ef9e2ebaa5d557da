//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the greeting handler and 404 fallback
//! - Wire up middleware (request ID, tracing)
//! - Bind the server to a listener
//! - Drain in-flight requests on shutdown
//!
//! A non-GET method on `/` is answered with 405 by Axum's method router;
//! no handler code is involved.

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::GreeterConfig;
use crate::http::greeting;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};

/// HTTP server for the greeter service.
pub struct HttpServer {
    router: Router,
    config: GreeterConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GreeterConfig) -> Self {
        let router = Self::build_router();
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// ServiceBuilder applies layers top-down: the request ID is set before
    /// TraceLayer opens its span, and propagated onto the response inside it.
    fn build_router() -> Router {
        Router::new()
            .route("/", get(greeting::greeting))
            .fallback(greeting::fallback)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID.clone(), UuidRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID.clone())),
            )
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once the shutdown signal fires and in-flight requests have
    /// drained.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GreeterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn root_returns_greeting() {
        let app = HttpServer::build_router();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/plain"));

        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], greeting::GREETING.as_bytes());
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let app = HttpServer::build_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_on_root_is_method_not_allowed() {
        let app = HttpServer::build_router();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn response_carries_request_id() {
        let app = HttpServer::build_router();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.headers().contains_key(&X_REQUEST_ID));
    }

    #[tokio::test]
    async fn client_supplied_request_id_is_preserved() {
        let app = HttpServer::build_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(&X_REQUEST_ID, "caller-chosen-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(&X_REQUEST_ID).unwrap(),
            "caller-chosen-id"
        );
    }
}
