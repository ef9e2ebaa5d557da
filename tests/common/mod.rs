//! Shared utilities for integration testing.

use std::net::SocketAddr;

use greeter_server::config::GreeterConfig;
use greeter_server::http::HttpServer;
use greeter_server::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// Start the greeter on an ephemeral local port.
///
/// The listener is bound before the server task is spawned, so the returned
/// address accepts connections immediately. The shutdown handle stops the
/// server task.
pub async fn start_greeter() -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(GreeterConfig::default());
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}
