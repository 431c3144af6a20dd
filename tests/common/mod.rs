//! Shared test utilities: a canned-response mock agent served over axum.
//!
//! The mock exposes the three discovery routes (`/.well-known/agent-card.json`,
//! the legacy `/.well-known/agent.json`, `/agent/authenticatedExtendedCard`)
//! plus a JSON-RPC endpoint at `/` that answers `message/send` with a canned
//! result and `message/stream` with a canned SSE body. Every route counts its
//! hits and the RPC endpoint records request bodies, so tests can assert on
//! what the client actually put on the wire.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

/// Token the mock's extended-card route accepts.
pub const TEST_TOKEN: &str = "dummy-token-for-extended-card";

#[derive(Clone)]
pub struct MockAgentConfig {
    /// Serve the card only at the legacy path; the current path returns 404.
    pub legacy_card_path_only: bool,
    /// Replace the generated public card wholesale (e.g. with a payload
    /// that is not a valid card).
    pub public_card_override: Option<Value>,
    /// Advertise `supportsAuthenticatedExtendedCard` in the public card.
    pub advertises_extended: bool,
    /// Card served by the extended route; `None` makes every extended fetch
    /// fail with 401 even when advertised.
    pub extended_card: Option<Value>,
    /// JSON-RPC `result` returned by `message/send`.
    pub send_result: Value,
    /// JSON-RPC `error` object for `message/send`; takes precedence over
    /// `send_result`.
    pub send_error: Option<Value>,
    /// Raw SSE body returned by `message/stream`.
    pub stream_body: String,
}

impl Default for MockAgentConfig {
    fn default() -> Self {
        Self {
            legacy_card_path_only: false,
            public_card_override: None,
            advertises_extended: false,
            extended_card: None,
            send_result: completed_task_json("task-1", "Echo: hello"),
            send_error: None,
            stream_body: sse_body(&[completed_task_json("task-1", "Echo: hello")]),
        }
    }
}

pub struct MockAgentState {
    pub public_card: Value,
    pub config: MockAgentConfig,
    pub card_hits: AtomicUsize,
    pub legacy_hits: AtomicUsize,
    pub extended_hits: AtomicUsize,
    pub rpc_requests: Mutex<Vec<Value>>,
}

pub struct MockAgentHandle {
    pub base_url: String,
    pub state: Arc<MockAgentState>,
    _server: tokio::task::JoinHandle<()>,
}

impl MockAgentHandle {
    pub fn rpc_hits(&self) -> usize {
        self.state.rpc_requests.lock().unwrap().len()
    }

    pub fn rpc_requests(&self) -> Vec<Value> {
        self.state.rpc_requests.lock().unwrap().clone()
    }
}

/// Start a mock agent on a random port.
pub async fn start_mock_agent(config: MockAgentConfig) -> MockAgentHandle {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    let public_card = config
        .public_card_override
        .clone()
        .unwrap_or_else(|| public_card_json(&base_url, config.advertises_extended));
    let state = Arc::new(MockAgentState {
        public_card,
        config,
        card_hits: AtomicUsize::new(0),
        legacy_hits: AtomicUsize::new(0),
        extended_hits: AtomicUsize::new(0),
        rpc_requests: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/.well-known/agent-card.json", get(well_known_card))
        .route("/.well-known/agent.json", get(legacy_card))
        .route("/agent/authenticatedExtendedCard", get(extended_card))
        .route("/", post(rpc))
        .with_state(state.clone());

    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Brief wait for the server to start accepting connections.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    MockAgentHandle {
        base_url,
        state,
        _server: server,
    }
}

async fn well_known_card(State(state): State<Arc<MockAgentState>>) -> Response {
    state.card_hits.fetch_add(1, Ordering::SeqCst);
    if state.config.legacy_card_path_only {
        StatusCode::NOT_FOUND.into_response()
    } else {
        Json(state.public_card.clone()).into_response()
    }
}

async fn legacy_card(State(state): State<Arc<MockAgentState>>) -> Response {
    state.legacy_hits.fetch_add(1, Ordering::SeqCst);
    Json(state.public_card.clone()).into_response()
}

async fn extended_card(
    State(state): State<Arc<MockAgentState>>,
    headers: HeaderMap,
) -> Response {
    state.extended_hits.fetch_add(1, Ordering::SeqCst);

    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TEST_TOKEN))
        .unwrap_or(false);

    match (&state.config.extended_card, authorized) {
        (Some(card), true) => Json(card.clone()).into_response(),
        _ => StatusCode::UNAUTHORIZED.into_response(),
    }
}

async fn rpc(State(state): State<Arc<MockAgentState>>, Json(body): Json<Value>) -> Response {
    state.rpc_requests.lock().unwrap().push(body.clone());

    let id = body["id"].clone();
    match body["method"].as_str().unwrap_or_default() {
        "message/send" => {
            let envelope = match &state.config.send_error {
                Some(err) => json!({ "jsonrpc": "2.0", "id": id, "error": err }),
                None => json!({ "jsonrpc": "2.0", "id": id, "result": state.config.send_result }),
            };
            Json(envelope).into_response()
        }
        "message/stream" => (
            [(header::CONTENT_TYPE, "text/event-stream")],
            state.config.stream_body.clone(),
        )
            .into_response(),
        other => Json(json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": -32601, "message": format!("method not found: {}", other) }
        }))
        .into_response(),
    }
}

/// A minimal valid public agent card pointing its RPC endpoint at `rpc_url`.
pub fn public_card_json(rpc_url: &str, advertises_extended: bool) -> Value {
    json!({
        "name": "Currency Agent",
        "description": "Helps with exchange rates for currencies",
        "version": "1.0.0",
        "url": rpc_url,
        "capabilities": { "streaming": true },
        "defaultInputModes": ["text"],
        "defaultOutputModes": ["text"],
        "skills": [{
            "id": "convert_currency",
            "name": "Currency Exchange Rates Tool",
            "description": "Helps with exchange values between various currencies",
            "tags": ["currency conversion", "currency exchange"]
        }],
        "supportsAuthenticatedExtendedCard": advertises_extended
    })
}

/// An extended card distinguishable from the public one by name and an
/// extra skill.
pub fn extended_card_json(rpc_url: &str) -> Value {
    let mut card = public_card_json(rpc_url, true);
    card["name"] = json!("Currency Agent (Extended)");
    card["skills"]
        .as_array_mut()
        .unwrap()
        .push(json!({
            "id": "historical_rates",
            "name": "Historical Rates Tool",
            "description": "Looks up past exchange rates",
            "tags": ["currency history"]
        }));
    card
}

/// A completed task payload as a `message/send` result or stream chunk.
pub fn completed_task_json(task_id: &str, text: &str) -> Value {
    json!({
        "kind": "task",
        "id": task_id,
        "contextId": "ctx-1",
        "status": {
            "state": "completed",
            "message": {
                "kind": "message",
                "messageId": format!("{}-reply", task_id),
                "role": "agent",
                "parts": [{ "kind": "text", "text": text }]
            }
        }
    })
}

/// A status-update stream chunk.
pub fn status_update_json(task_id: &str, state: &str, is_final: bool) -> Value {
    json!({
        "kind": "status-update",
        "taskId": task_id,
        "contextId": "ctx-1",
        "status": { "state": state },
        "final": is_final
    })
}

/// Wrap chunk payloads in JSON-RPC envelopes and frame them as an SSE body.
pub fn sse_body(chunks: &[Value]) -> String {
    let mut body = String::new();
    for chunk in chunks {
        let envelope = json!({ "jsonrpc": "2.0", "id": "stream-1", "result": chunk });
        body.push_str(&format!("data: {}\n\n", envelope));
    }
    body
}
