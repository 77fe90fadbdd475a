//! Mock wiki list API for exercising the HTTP fetcher.
//!
//! The server runs on its own thread with a private tokio runtime so the
//! blocking client under test can be driven from plain `#[test]` functions.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Response, StatusCode, Uri};
use axum::routing::get;
use axum::Router;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{mpsc, Arc};
use std::thread::JoinHandle;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A mock response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::json(r#"{"items": []}"#)
    }
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    /// A list envelope holding `(id, title, articles)` entries, ids as numbers
    /// the way the real API sends them.
    pub fn wikis(entries: &[(u64, &str, u32)]) -> Self {
        let items: Vec<serde_json::Value> = entries
            .iter()
            .map(|(id, title, articles)| {
                serde_json::json!({
                    "id": id,
                    "name": title,
                    "title": title,
                    "stats": { "articles": articles, "edits": 10 },
                    "image": null,
                })
            })
            .collect();
        Self::json(&serde_json::json!({ "items": items, "batches": 3 }).to_string())
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: format!(r#"{{"error": "{}"}}"#, message),
        }
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<String>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

/// Mock wiki API server.
pub struct MockApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl MockApi {
    /// Start the server and wait until it is listening.
    pub fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        };

        let (addr_tx, addr_rx) = mpsc::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let server_state = state.clone();

        let thread = std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build mock runtime");

            runtime.block_on(async move {
                let app = Router::new()
                    .route("/{*path}", get(handle_request))
                    .with_state(server_state);

                let listener = TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("Failed to bind mock server");
                addr_tx
                    .send(listener.local_addr().unwrap())
                    .expect("Test thread gone");

                axum::serve(listener, app)
                    .with_graceful_shutdown(async move {
                        let _ = shutdown_rx.await;
                    })
                    .await
                    .ok();
            });
        });

        let addr = addr_rx.recv().expect("Mock server failed to start");

        Self {
            addr,
            state,
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        }
    }

    /// Enqueue a response to be returned for the next request.
    pub fn enqueue_response(&self, resp: MockResponse) {
        self.state.responses.lock().push_back(resp);
    }

    /// Path and query of every request received, in order.
    pub fn captured_requests(&self) -> Vec<String> {
        self.state.requests.lock().clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// List URL template pointing at this server.
    pub fn url_template(&self) -> String {
        format!("{}/api/v1/Wikis/List?expand=1&limit=%d&batch=%d", self.base_url())
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

async fn handle_request(State(state): State<MockState>, uri: Uri) -> Response<Body> {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.to_string())
        .unwrap_or_else(|| uri.path().to_string());
    state.requests.lock().push(path_and_query);

    let mock_resp = state.responses.lock().pop_front().unwrap_or_default();

    Response::builder()
        .status(StatusCode::from_u16(mock_resp.status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(mock_resp.body))
        .unwrap()
}
