//! Shared utilities for integration testing: programmable mock services.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use traffic_generator::TrafficConfig;

/// A request as the mock saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path_and_query: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// Canned answer from a mock service.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Reply {
    pub fn html(status: u16, body: impl Into<String>) -> Self {
        Self { status, content_type: "text/html; charset=utf-8", body: body.into() }
    }

    pub fn json(status: u16, value: serde_json::Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: serde_json::to_string_pretty(&value).unwrap(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self { status, content_type: "text/plain", body: String::new() }
    }
}

/// A running mock service.
pub struct MockService {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockService {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path_and_query).collect()
    }
}

/// Start a mock service on an ephemeral port answering every request with `f`.
pub async fn start_programmable_service<F>(f: F) -> MockService
where
    F: Fn(&Method, &str) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let recorded = requests.clone();
    let app = Router::new().fallback(
        move |method: Method, uri: Uri, headers: HeaderMap, body: String| {
            let f = f.clone();
            let recorded = recorded.clone();
            async move {
                let path_and_query = uri
                    .path_and_query()
                    .map(|pq| pq.as_str().to_string())
                    .unwrap_or_else(|| uri.path().to_string());
                let reply = f(&method, &path_and_query);
                recorded.lock().unwrap().push(Recorded {
                    method,
                    path_and_query,
                    content_type: headers
                        .get(header::CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string),
                    body,
                });
                (
                    StatusCode::from_u16(reply.status).unwrap(),
                    [(header::CONTENT_TYPE, reply.content_type)],
                    reply.body,
                )
            }
        },
    );

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockService { addr, requests }
}

/// Start a mock service that answers 200 with a fixed body.
pub async fn start_mock_service(body: &'static str) -> MockService {
    start_programmable_service(move |_, _| Reply::html(200, body)).await
}

/// Start a mock that writes `raw` verbatim to every connection, then hangs up.
pub async fn start_raw_service(raw: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;
                let _ = socket.write_all(raw.as_bytes()).await;
                let _ = socket.shutdown().await;
                tokio::time::sleep(Duration::from_millis(10)).await;
            });
        }
    });

    addr
}

/// An address nothing listens on.
pub async fn refused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Default config aimed at the given origins, without pauses.
pub fn config_for(productpage: &str, details: &str, reviews: &str, ratings: &str) -> TrafficConfig {
    colored::control::set_override(false);

    let mut config = TrafficConfig::default();
    config.targets.productpage = productpage.to_string();
    config.targets.details = details.to_string();
    config.targets.reviews = reviews.to_string();
    config.targets.ratings = ratings.to_string();
    config.pacing.startup_grace_ms = 0;
    config.pacing.request_interval_ms = 0;
    config
}

/// Request numbers in the order they were printed.
pub fn printed_numbers(output: &str) -> Vec<u64> {
    output
        .lines()
        .filter_map(|line| line.strip_prefix("[Request #"))
        .filter_map(|rest| rest.split(']').next())
        .map(|n| n.parse().unwrap())
        .collect()
}
