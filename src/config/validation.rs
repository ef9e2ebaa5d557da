//! Configuration validation.
//!
//! Serde handles the syntactic checks; this pass covers semantics. All
//! failures are collected and returned together, not just the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::GreeterConfig;

/// A semantic configuration error.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Bind address is not a valid `ip:port` pair.
    #[error("invalid bind address '{address}': {reason}")]
    BindAddress { address: String, reason: String },

    /// Log filter directive is empty.
    #[error("log filter must not be empty")]
    EmptyLogFilter,
}

/// Validate a configuration, returning every error found.
pub fn validate_config(config: &GreeterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.listener.bind_address.parse::<SocketAddr>() {
        errors.push(ValidationError::BindAddress {
            address: config.listener.bind_address.clone(),
            reason: e.to_string(),
        });
    }

    if config.observability.log_filter.trim().is_empty() {
        errors.push(ValidationError::EmptyLogFilter);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
