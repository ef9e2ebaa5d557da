//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → stdout (collected by whatever supervises the process)
//! ```
//!
//! # Design Decisions
//! - Structured logging only; nothing is surfaced to an operator beyond logs
//! - Request ID appears on every per-request log line (TraceLayer span)

pub mod logging;
