//! Structured logging.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `default_level` applies when `RUST_LOG` is not set. Call once at startup;
/// a second call would panic, so tests use their own subscribers.
pub fn init_logging(default_level: &str) {
    let default_filter = format!("slowserve={default_level},tower_http={default_level}");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
