//! Delay gate.
//!
//! # Responsibilities
//! - Obtain a delay directive for the current request
//! - Suspend the request's task for the requested duration
//! - Leave every other in-flight request unaffected

use std::time::Duration;

use axum::http::HeaderMap;

use crate::delay::parser::parse_delay;

/// Honor a client-requested delay before the handler produces its response.
///
/// Sleeps the current task for the requested number of milliseconds when the
/// directive is valid and positive. Directives that are absent, malformed,
/// zero, or negative wait for nothing. The sleep is not cancelled by the
/// client closing the connection.
pub async fn honor_delay(headers: &HeaderMap) {
    let Some(directive) = parse_delay(headers) else {
        return;
    };

    if directive.millis <= 0 {
        return;
    }

    let duration = Duration::from_millis(directive.millis as u64);
    tracing::debug!(delay = ?duration, "Delaying response");
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use crate::delay::parser::DELAY_HEADER;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(DELAY_HEADER, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[tokio::test(start_paused = true)]
    async fn test_positive_delay_sleeps() {
        let start = tokio::time::Instant::now();
        honor_delay(&headers_with("250")).await;
        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_is_noop() {
        let start = tokio::time::Instant::now();
        honor_delay(&headers_with("0")).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_negative_delay_is_noop() {
        let start = tokio::time::Instant::now();
        honor_delay(&headers_with("-100")).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_delay_is_noop() {
        let start = tokio::time::Instant::now();
        honor_delay(&headers_with("not-a-number")).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
