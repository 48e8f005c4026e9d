//! Echo handler.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};

use crate::delay::honor_delay;
use crate::handlers::RequestHandler;

/// Returns the request's remaining path and query exactly as received.
///
/// No decoding or escaping is applied; the body is the wire form of whatever
/// followed the registered prefix.
pub struct EchoHandler;

#[async_trait]
impl RequestHandler for EchoHandler {
    async fn handle(&self, suffix: &str, request: Request<Body>) -> Response {
        honor_delay(request.headers()).await;

        let body = match request.uri().query() {
            Some(query) => format!("{suffix}?{query}"),
            None => suffix.to_string(),
        };

        body.into_response()
    }
}
