//! HTTP Greeter Service Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::GreeterConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
