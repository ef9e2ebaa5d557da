//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config document (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GreeterConfig (validated, immutable)
//!
//! The binary itself runs on GreeterConfig::default(): the defaults
//! reproduce the service contract (bind 0.0.0.0:5000) and the process
//! consumes no flags, environment variables, or config files.
//! ```
//!
//! # Design Decisions
//! - Config is immutable once constructed
//! - All fields have defaults to allow minimal (or absent) documents
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::GreeterConfig;
pub use schema::ListenerConfig;
pub use schema::LogConfig;
