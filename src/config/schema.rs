//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config documents,
//! and every struct carries a `Default` impl so an empty document yields the
//! contractual behavior.

use serde::{Deserialize, Serialize};

/// Root configuration for the greeter service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GreeterConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Observability settings.
    pub observability: LogConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_filter: "greeter_server=debug,tower_http=debug".to_string(),
        }
    }
}
