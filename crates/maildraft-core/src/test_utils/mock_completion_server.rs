// src/test_utils/mock_completion_server.rs
use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::post, Json, Router};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// One scripted response for the mock endpoint, served in queue order.
#[derive(Debug, Clone)]
pub enum CannedResponse {
    /// 200 with a well-formed completion body wrapping the given content.
    Reply(String),
    /// 200 with an arbitrary JSON body, for malformed-shape tests.
    Body(Value),
    /// An error status with a small JSON error body.
    Status(u16),
}

#[derive(Clone)]
struct MockServerState {
    responses: Arc<Mutex<VecDeque<CannedResponse>>>,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl MockServerState {
    fn new(responses: Vec<CannedResponse>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

async fn chat_completions_handler(
    State(state): State<MockServerState>,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    log::debug!("mock completion server received request: {}", payload);
    state.requests.lock().unwrap().push(payload);

    match state.responses.lock().unwrap().pop_front() {
        Some(CannedResponse::Reply(content)) => (
            StatusCode::OK,
            Json(json!({"choices": [{"message": {"content": content}}]})),
        ),
        Some(CannedResponse::Body(body)) => (StatusCode::OK, Json(body)),
        Some(CannedResponse::Status(code)) => (
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(json!({"error": "scripted failure"})),
        ),
        None => {
            log::error!("mock completion server ran out of responses!");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"error": "no responses queued"})),
            )
        }
    }
}

pub struct MockCompletionServer {
    addr: SocketAddr,
    shutdown_tx: tokio::sync::oneshot::Sender<()>,
    recorded_requests: Arc<Mutex<Vec<Value>>>,
}

impl MockCompletionServer {
    pub async fn start(responses: Vec<CannedResponse>) -> Self {
        let state = MockServerState::new(responses);
        let recorded_requests = state.requests.clone();

        let app = Router::new()
            .route("/chat/completions", post(chat_completions_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap_or_else(|e| {
            panic!("Failed to bind mock server to 127.0.0.1:0. Error: {}", e);
        });
        let addr = listener.local_addr().unwrap();
        log::info!("mock completion server listening on {}", addr);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap_or_else(|e| {
                    log::error!("mock completion server error: {}", e);
                });
        });

        MockCompletionServer {
            addr,
            shutdown_tx,
            recorded_requests,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Request bodies received so far, in arrival order.
    pub fn requests(&self) -> Vec<Value> {
        self.recorded_requests.lock().unwrap().clone()
    }

    pub async fn shutdown(self) {
        if self.shutdown_tx.send(()).is_err() {
            log::warn!("mock completion server shutdown signal already sent");
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
    }
}
