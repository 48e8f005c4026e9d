//! Random value handler.

use std::sync::Mutex;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::delay::honor_delay;
use crate::handlers::RequestHandler;

/// Returns a fresh non-negative integer on every call.
///
/// One generator is seeded from OS entropy at construction and shared by all
/// requests; the mutex serializes draws so concurrent callers each get an
/// independent value.
pub struct RandomHandler {
    rng: Mutex<StdRng>,
}

impl RandomHandler {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    fn next_value(&self) -> u64 {
        let mut rng = self.rng.lock().expect("rng mutex poisoned");
        rng.gen()
    }
}

impl Default for RandomHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RequestHandler for RandomHandler {
    async fn handle(&self, _suffix: &str, request: Request<Body>) -> Response {
        honor_delay(request.headers()).await;

        self.next_value().to_string().into_response()
    }
}
