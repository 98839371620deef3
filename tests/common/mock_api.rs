use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header::CONTENT_TYPE},
    response::IntoResponse,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

/// Local HTTP server answering every request with a fixed response and
/// recording what it received.
pub struct MockApi {
    pub url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub fn last_updated() -> Value {
    json!({
        "timestamp": "2024-05-01 12:00:00",
        "block_hash": "3f8a1b0c",
        "block_slot": 123456789
    })
}

impl MockApi {
    pub async fn json(body: Value) -> Self {
        Self::start(StatusCode::OK, "application/json", body.to_string()).await
    }

    /// Single-item envelope around `data`.
    pub async fn timestamped(data: Value) -> Self {
        Self::json(json!({ "data": data, "last_updated": last_updated() })).await
    }

    pub async fn text(body: &str) -> Self {
        Self::start(StatusCode::ACCEPTED, "text/plain", body.to_string()).await
    }

    pub async fn failing(status: StatusCode, body: &str) -> Self {
        Self::start(status, "application/json", body.to_string()).await
    }

    async fn start(status: StatusCode, content_type: &'static str, body: String) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            requests: requests.clone(),
            status,
            content_type,
            body,
        };

        let mock_app = Router::new().fallback(capture).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let url = format!("http://{addr}");

        tokio::spawn(async move {
            axum::serve(listener, mock_app).await.unwrap();
        });

        Self { url, requests }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> CapturedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");

        requests.into_iter().next().unwrap()
    }
}

async fn capture(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    state.requests.lock().unwrap().push(CapturedRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body: body.to_vec(),
    });

    (
        state.status,
        [(CONTENT_TYPE, state.content_type)],
        state.body.clone(),
    )
}
