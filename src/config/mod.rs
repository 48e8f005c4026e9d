//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     CLI flags (clap) + optional TOML file
//!     → loader.rs (read, deserialize)
//!     → CLI overrides applied in main
//!     → validation.rs (semantic checks, all errors reported)
//!     → Freeze as immutable ServerConfig
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the server is constructed
//! - Every section has defaults; an empty file is a valid config
//! - Validation is a pure function and returns all errors, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, ServerConfig, StaticFilesConfig};
pub use validation::{validate_config, ValidationError};
