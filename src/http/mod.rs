//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, one task per request)
//!     → catch-all route feeds the prefix router
//!     → matched handler (delay gate, then body)
//!     → Send to client
//! ```

pub mod server;

pub use server::{HttpServer, ServerError};
