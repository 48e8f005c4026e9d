//! Synthetic latency contract tests.

use std::time::{Duration, Instant};

use reqwest::StatusCode;

mod common;

const DELAY_HEADER: &str = "delay-milliseconds";

async fn timed_echo(addr: std::net::SocketAddr, delay_value: &str) -> (Duration, StatusCode, String) {
    let start = Instant::now();
    let res = common::client()
        .get(format!("http://{addr}/echo/ping"))
        .header(DELAY_HEADER, delay_value)
        .send()
        .await
        .unwrap();
    let status = res.status();
    let body = res.text().await.unwrap();
    (start.elapsed(), status, body)
}

#[tokio::test]
async fn test_valid_delay_stalls_the_response() {
    let (addr, shutdown) = common::spawn_server(common::no_dir_config()).await;

    let (elapsed, status, body) = timed_echo(addr, "300").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ping");
    assert!(
        elapsed >= Duration::from_millis(300),
        "response arrived after only {elapsed:?}"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_unparseable_delay_adds_no_latency() {
    let (addr, shutdown) = common::spawn_server(common::no_dir_config()).await;

    for value in ["soon", "12.5", ""] {
        let (elapsed, status, body) = timed_echo(addr, value).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ping");
        // Generous margin for scheduler jitter; the point is that nothing
        // slept for a client-visible amount.
        assert!(
            elapsed < Duration::from_millis(250),
            "delay '{value}' took {elapsed:?}"
        );
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_non_positive_delay_adds_no_latency() {
    let (addr, shutdown) = common::spawn_server(common::no_dir_config()).await;

    for value in ["0", "-500"] {
        let (elapsed, status, _) = timed_echo(addr, value).await;
        assert_eq!(status, StatusCode::OK);
        assert!(
            elapsed < Duration::from_millis(250),
            "delay '{value}' took {elapsed:?}"
        );
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_delayed_request_does_not_block_others() {
    let (addr, shutdown) = common::spawn_server(common::no_dir_config()).await;

    let slow = tokio::spawn(async move { timed_echo(addr, "700").await });

    // Give the slow request a head start, then race a fast one past it.
    tokio::time::sleep(Duration::from_millis(50)).await;
    let (fast_elapsed, status, _) = timed_echo(addr, "0").await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        fast_elapsed < Duration::from_millis(250),
        "fast request was held up for {fast_elapsed:?}"
    );

    let (slow_elapsed, _, _) = slow.await.unwrap();
    assert!(slow_elapsed >= Duration::from_millis(700));

    shutdown.trigger();
}

#[tokio::test]
async fn test_every_endpoint_honors_the_delay_header() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("f.txt"), b"x").unwrap();

    let mut config = slowserve::ServerConfig::default();
    config.static_files.root = dir.path().to_path_buf();
    let (addr, shutdown) = common::spawn_server(config).await;
    let client = common::client();

    for path in ["/echo/x", "/random", "/increment", "/dir/f.txt"] {
        let start = Instant::now();
        let res = client
            .get(format!("http://{addr}{path}"))
            .header(DELAY_HEADER, "300")
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK, "path {path}");
        assert!(
            start.elapsed() >= Duration::from_millis(300),
            "path {path} ignored the delay header"
        );
    }

    shutdown.trigger();
}
