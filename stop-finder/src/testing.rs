//! In-process HTTP fixtures for tests.
//!
//! Spins up an axum server on an ephemeral localhost port so the real
//! reqwest-based clients can be exercised end to end.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::{StatusCode, Uri};
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A running test server. Aborted on drop.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn spawn(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Path-and-query of every request a route has served.
#[derive(Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<String>>>);

impl RequestLog {
    pub fn requests(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// A GET route that answers with a fixed status and body.
pub fn text_route(path: &str, status: StatusCode, body: impl Into<String>) -> Router {
    recorded_route(path, status, body, &RequestLog::default())
}

/// Like [`text_route`], but records each request URI into `log`.
pub fn recorded_route(
    path: &str,
    status: StatusCode,
    body: impl Into<String>,
    log: &RequestLog,
) -> Router {
    let body = body.into();
    let log = log.clone();
    Router::new().route(
        path,
        get(move |uri: Uri| {
            let body = body.clone();
            let log = log.clone();
            async move {
                log.0.lock().unwrap().push(uri.to_string());
                (status, body)
            }
        }),
    )
}
