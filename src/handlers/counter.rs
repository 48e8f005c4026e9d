//! Incrementing counter handler.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};

use crate::delay::honor_delay;
use crate::handlers::RequestHandler;

/// Returns the next value of a strictly increasing sequence starting at 1.
///
/// The counter lives on the handler instance owned by the route table and is
/// advanced with an atomic read-modify-write: N completed requests observe
/// exactly the set {1..N}, with no duplicate and no gap, regardless of
/// interleaving.
pub struct CounterHandler {
    value: AtomicU64,
}

impl CounterHandler {
    pub fn new() -> Self {
        Self {
            value: AtomicU64::new(0),
        }
    }

    fn next_value(&self) -> u64 {
        self.value.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Default for CounterHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RequestHandler for CounterHandler {
    async fn handle(&self, _suffix: &str, request: Request<Body>) -> Response {
        // Delay first so simulated latency is visible independent of
        // contention on the counter.
        honor_delay(request.headers()).await;

        self.next_value().to_string().into_response()
    }
}
