#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::{Json, Router};
use portfolio_admin::application::ports::notifier::Notifier;
use portfolio_admin::application::ports::token_store::TokenStore;
use portfolio_admin::infrastructure::notify::QueuedNotifier;
use portfolio_admin::infrastructure::storage::MemoryTokenStore;
use portfolio_admin::shared::config::TokenStoreKind;
use portfolio_admin::{AppConfig, AppState};
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const TOKEN: &str = "test-token";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Default)]
struct MockState {
    routes: HashMap<(String, String), VecDeque<(u16, Value)>>,
    requests: Vec<RecordedRequest>,
}

/// In-process stand-in for the portfolio API. Each route answers with its
/// queued responses in order and repeats the last one.
pub struct MockApi {
    pub base_url: String,
    state: Arc<Mutex<MockState>>,
    server: JoinHandle<()>,
}

async fn handle(
    State(state): State<Arc<Mutex<MockState>>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().unwrap();
    state.requests.push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    let key = (method.to_string(), uri.path().to_string());
    let response = match state.routes.get_mut(&key) {
        Some(queue) if queue.len() > 1 => queue.pop_front(),
        Some(queue) => queue.front().cloned(),
        None => None,
    };
    match response {
        Some((status, body)) => (StatusCode::from_u16(status).unwrap(), Json(body)),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": { "message": format!("no route for {} {}", key.0, key.1) } })),
        ),
    }
}

impl MockApi {
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(MockState::default()));
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind api mock");
        let addr = listener.local_addr().expect("mock addr");
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve api mock");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
            server,
        }
    }

    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.state
            .lock()
            .unwrap()
            .routes
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back((status, body));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.method == method && request.path == path)
            .collect()
    }

    pub fn config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        config.api.base_url = self.base_url.clone();
        config.api.public_timeout_secs = 5;
        config.api.admin_timeout_secs = 5;
        config.editor.mutation_timeout_secs = 5;
        config.auth.token_store = TokenStoreKind::Memory;
        config
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.server.abort();
    }
}

pub struct Harness {
    pub api: MockApi,
    pub state: AppState,
    pub notifier: Arc<QueuedNotifier>,
    pub tokens: Arc<MemoryTokenStore>,
}

/// App state against a fresh mock, optionally already holding an admin token.
pub async fn harness(signed_in: bool) -> Harness {
    let api = MockApi::start().await;
    let notifier = Arc::new(QueuedNotifier::new());
    let tokens = Arc::new(if signed_in {
        MemoryTokenStore::with_token(TOKEN)
    } else {
        MemoryTokenStore::default()
    });

    let state = AppState::with_token_store(
        api.config(),
        notifier.clone() as Arc<dyn Notifier>,
        tokens.clone() as Arc<dyn TokenStore>,
    )
    .expect("app state");

    Harness {
        api,
        state,
        notifier,
        tokens,
    }
}

pub fn admin_user() -> Value {
    json!({ "id": "u1", "name": "Admin", "email": "admin@example.com", "role": "admin" })
}
