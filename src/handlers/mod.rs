//! Response handlers.
//!
//! # Data Flow
//! ```text
//! PrefixRouter match
//!     → handler.handle(suffix, request)
//!     → delay gate (honor delay-milliseconds header)
//!     → compute response body
//! ```
//!
//! # Design Decisions
//! - Every handler invokes the delay gate before doing any work
//! - Handler state (counter, RNG) lives on the handler instance owned by the
//!   route table, never in a global
//! - Handlers are trait objects so the router stays agnostic of their shape

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;

pub mod counter;
pub mod echo;
pub mod random;
pub mod static_files;

pub use counter::CounterHandler;
pub use echo::EchoHandler;
pub use random::RandomHandler;
pub use static_files::{StaticFileHandler, StaticFileError};

/// A unit of response production, registered under a path prefix.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Produce a response for a dispatched request.
    ///
    /// `suffix` is the request path with the matched route prefix already
    /// stripped; the full request is available for headers and query string.
    async fn handle(&self, suffix: &str, request: Request<Body>) -> Response;
}
