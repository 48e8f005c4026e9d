//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging through the tracing crate
//! - Default level comes from config, `RUST_LOG` wins when set
//! - Per-request spans come from tower-http's trace layer

pub mod logging;

pub use logging::init_logging;
