//! HTTP Greeter Service
//!
//! A single-endpoint web service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌─────────────────────────────────────────┐
//!                        │             GREETER SERVICE             │
//!                        │                                         │
//!     Client Request     │  ┌─────────┐     ┌───────────────────┐  │
//!     ───────────────────┼─▶│  http   │────▶│ GET /  → greeting │  │
//!                        │  │ server  │     │ other  → 404      │  │
//!     Client Response    │  └─────────┘     └───────────────────┘  │
//!     ◀──────────────────┼───────┘                                 │
//!                        │                                         │
//!                        │  ┌───────────────────────────────────┐  │
//!                        │  │       Cross-Cutting Concerns      │  │
//!                        │  │  ┌────────┐ ┌────────┐ ┌───────┐  │  │
//!                        │  │  │ config │ │observa-│ │ life- │  │  │
//!                        │  │  │        │ │ bility │ │ cycle │  │  │
//!                        │  │  └────────┘ └────────┘ └───────┘  │  │
//!                        │  └───────────────────────────────────┘  │
//!                        └─────────────────────────────────────────┘
//! ```
//!
//! Every request is handled statelessly: `GET /` returns a fixed plain-text
//! greeting, unknown paths get a 404, and a non-GET method on `/` gets a 405.

use tokio::net::TcpListener;

use greeter_server::config::GreeterConfig;
use greeter_server::http::HttpServer;
use greeter_server::lifecycle::{signals, Shutdown};
use greeter_server::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The built-in defaults are the whole contract; no flags, environment
    // variables, or config files are consumed.
    let config = GreeterConfig::default();

    logging::init(&config.observability.log_filter);

    tracing::info!("greeter-server v0.1.0 starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Translate Ctrl-C / SIGTERM into the shutdown broadcast
    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(&shutdown);

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
