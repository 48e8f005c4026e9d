//! Synthetic latency subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (headers)
//!     → parser.rs (read delay-milliseconds header, parse base-10)
//!     → gate.rs (sleep the current task for positive durations)
//!     → Return control to the handler
//! ```
//!
//! # Design Decisions
//! - Unparseable header values are logged and skipped, never an error response
//! - Non-positive durations are a no-op
//! - The sleep suspends only the request's own task; other requests proceed
//! - No upper bound on the requested delay (trusted local tool)

pub mod gate;
pub mod parser;

pub use gate::honor_delay;
pub use parser::{parse_delay, DelayDirective, DELAY_HEADER};
