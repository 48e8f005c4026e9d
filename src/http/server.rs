//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the route table from the server configuration
//! - Create the Axum router with a catch-all entry point
//! - Wire up middleware (tracing)
//! - Bind to the listener and serve until shutdown
//!
//! # Design Decisions
//! - Axum's own path matching is bypassed: a single catch-all route feeds
//!   every request to the longest-prefix router, which owns dispatch
//! - No request timeout layer; a client-requested delay of any length must
//!   run to completion

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handlers::{
    CounterHandler, EchoHandler, RandomHandler, StaticFileError, StaticFileHandler,
};
use crate::routing::{PrefixRouter, RouterError};

/// Path prefixes registered at startup.
pub const ECHO_PREFIX: &str = "/echo/";
pub const RANDOM_PREFIX: &str = "/random";
pub const INCREMENT_PREFIX: &str = "/increment";

/// Error type for server construction.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("route registration failed: {0}")]
    Route(#[from] RouterError),

    #[error("static file serving unavailable: {0}")]
    StaticRoot(#[from] StaticFileError),
}

/// Application state injected into the dispatch handler.
#[derive(Clone)]
struct AppState {
    router: Arc<PrefixRouter>,
}

/// HTTP server for the development endpoints.
#[derive(Debug)]
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Builds the route table: the static file entry first (when enabled),
    /// then the stateless and stateful synthetic endpoints. Handler state is
    /// constructed here, once, and owned by the table.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let mut routes = PrefixRouter::new();

        if config.static_files.enabled {
            let handler = StaticFileHandler::new(&config.static_files.root)?;
            routes.register(config.static_files.url_prefix.clone(), Arc::new(handler))?;
        } else {
            tracing::info!("Static file serving disabled");
        }

        routes.register(ECHO_PREFIX, Arc::new(EchoHandler))?;
        routes.register(RANDOM_PREFIX, Arc::new(RandomHandler::new()))?;
        routes.register(INCREMENT_PREFIX, Arc::new(CounterHandler::new()))?;

        let state = AppState {
            router: Arc::new(routes),
        };

        Ok(Self {
            router: Self::build_router(state),
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch_request))
            .route("/", any(dispatch_request))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self.router;
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Entry point for every request: longest-prefix lookup, then handler.
async fn dispatch_request(State(state): State<AppState>, request: Request<Body>) -> Response {
    let path = request.uri().path().to_string();

    match state.router.match_path(&path) {
        Some((entry, suffix)) => {
            tracing::debug!(path = %path, prefix = %entry.prefix, "Dispatching request");
            entry.handler.handle(suffix, request).await
        }
        None => {
            tracing::debug!(path = %path, "No route matched");
            (StatusCode::NOT_FOUND, "not found").into_response()
        }
    }
}
