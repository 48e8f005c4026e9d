//! slowserve — local development HTTP server with synthetic latency injection.
//!
//! # Architecture Overview
//!
//! ```text
//! Client Request
//!     → axum catch-all route (one task per request)
//!     → prefix router (longest match, strip prefix)
//!     → delay gate (delay-milliseconds header)
//!     → handler: echo | random | increment | static files
//! ```
//!
//! Startup wires CLI flags over an optional TOML config, validates the
//! result, and serves until ctrl-c.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use slowserve::config::{self, ConfigError};
use slowserve::lifecycle::{spawn_signal_listener, Shutdown};
use slowserve::observability::init_logging;
use slowserve::{HttpServer, ServerConfig};

#[derive(Parser)]
#[command(name = "slowserve")]
#[command(about = "Local development HTTP server with synthetic latency injection", long_about = None)]
struct Cli {
    /// Port on which to listen for connections.
    #[arg(long)]
    port: Option<u16>,

    /// Directory to serve under /dir/. Default is the current directory.
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Disable the file server.
    #[arg(long)]
    no_dir: bool,

    /// Allow any host to connect. Default allows only localhost.
    #[arg(short = 'a', long)]
    any_host: bool,

    /// Optional TOML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Flags override whatever the config file supplied.
    fn apply_to(&self, config: &mut ServerConfig) {
        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if let Some(dir) = &self.dir {
            config.static_files.root = dir.clone();
        }
        if self.no_dir {
            config.static_files.enabled = false;
        }
        if self.any_host {
            config.listener.host = "0.0.0.0".to_string();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ServerConfig::default(),
    };
    cli.apply_to(&mut config);

    init_logging(&config.observability.log_level);

    config::validate_config(&config).map_err(ConfigError::Validation)?;

    display_server_info(&config);

    let shutdown = Shutdown::new();
    spawn_signal_listener(&shutdown);

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Log the startup banner: what is served, to whom, and on which port.
fn display_server_info(config: &ServerConfig) {
    if config.static_files.enabled {
        let directory = std::fs::canonicalize(&config.static_files.root)
            .unwrap_or_else(|_| config.static_files.root.clone());
        tracing::info!(directory = %directory.display(), "Serving directory");
    } else {
        tracing::info!("File server is disabled");
    }

    let visible_to = if config.listener.host == "0.0.0.0" {
        "all interfaces"
    } else {
        "localhost"
    };
    tracing::info!(
        visible_to,
        port = config.listener.port,
        "slowserve is running, hit ctrl-c to quit"
    );
}
