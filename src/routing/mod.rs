//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → router.rs (longest-prefix lookup over registered entries)
//!     → Strip matched prefix, hand suffix to the handler
//!     → Return: matched entry or explicit no-match
//!
//! Route Registration (at startup):
//!     (prefix, handler) pairs
//!     → Reject duplicate prefixes
//!     → Freeze as immutable PrefixRouter
//! ```
//!
//! # Design Decisions
//! - Routes registered at startup, immutable at runtime
//! - No regex in the hot path (prefix matching only)
//! - Longest matching prefix wins, insertion order irrelevant
//! - Explicit no-match rather than a silent default

pub mod router;

pub use router::{PrefixRouter, RouteEntry, RouterError};
