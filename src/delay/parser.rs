//! Delay directive parsing.
//!
//! # Responsibilities
//! - Read the `delay-milliseconds` request header
//! - Parse it as a base-10 integer
//! - Treat absent, empty, or unparseable values as "no directive"

use axum::http::HeaderMap;

/// Request header carrying the synthetic latency directive.
pub const DELAY_HEADER: &str = "delay-milliseconds";

/// A parsed synthetic latency request.
///
/// Negative values parse successfully; the gate treats them as "no wait".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayDirective {
    /// Requested delay in milliseconds.
    pub millis: i64,
}

/// Extract a delay directive from the request headers.
///
/// Returns `None` when the header is absent, empty, or unparseable. A
/// malformed value is a client mistake worth surfacing in the logs, but the
/// request itself proceeds normally.
pub fn parse_delay(headers: &HeaderMap) -> Option<DelayDirective> {
    let raw = headers.get(DELAY_HEADER)?.to_str().ok()?;

    if raw.is_empty() {
        return None;
    }

    match raw.parse::<i64>() {
        Ok(millis) => Some(DelayDirective { millis }),
        Err(_) => {
            tracing::warn!(value = %raw, "Received unparseable delay time in header");
            None
        }
    }
}
