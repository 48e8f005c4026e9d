//! OS signal handling.
//!
//! # Responsibilities
//! - Listen for the operator interrupt (ctrl-c)
//! - Translate it into the internal shutdown signal

use crate::lifecycle::Shutdown;

/// Spawn a task that triggers graceful shutdown on the first ctrl-c.
pub fn spawn_signal_listener(shutdown: &Shutdown) {
    let shutdown = shutdown.clone();
    tokio::spawn(async move {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "Failed to install ctrl-c handler");
            return;
        }
        tracing::info!("Interrupt received, shutting down");
        shutdown.trigger();
    });
}
