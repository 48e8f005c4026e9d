//! Shared utilities for integration testing.

use std::net::SocketAddr;

use slowserve::{HttpServer, ServerConfig, Shutdown};
use tokio::net::TcpListener;

/// Spawn the real server on an ephemeral port.
///
/// Returns the bound address and the shutdown handle; trigger it at the end
/// of the test to stop the accept loop.
pub async fn spawn_server(config: ServerConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config).unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// Config with the static file endpoint turned off.
pub fn no_dir_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.static_files.enabled = false;
    config
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Send a GET with the path written to the wire verbatim.
///
/// reqwest normalizes dot segments in URLs before sending, so traversal
/// probes have to go over a raw socket.
#[allow(dead_code)]
pub async fn raw_get(addr: SocketAddr, path: &str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let mut socket = tokio::net::TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    socket.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    socket.read_to_string(&mut response).await.unwrap();
    response
}
