#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, Request, StatusCode},
    routing::post,
    Json, Router,
};
use ollama_relay::{create_router, AppState, Settings};
use serde_json::Value;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Serve `router` on an ephemeral localhost port and return its base URL
pub async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Counts calls to the stub backend
#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Stub Ollama whose `/api/chat` answers with the payload it received
pub fn echo_backend(counter: CallCounter) -> Router {
    async fn echo(State(counter): State<CallCounter>, Json(payload): Json<Value>) -> Json<Value> {
        counter.0.fetch_add(1, Ordering::SeqCst);
        Json(payload)
    }

    Router::new()
        .route("/api/chat", post(echo))
        .layer(DefaultBodyLimit::disable())
        .with_state(counter)
}

/// Stub Ollama that always answers with `status` and `body`
pub fn fixed_backend(status: StatusCode, body: Value) -> Router {
    Router::new().route(
        "/api/chat",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    )
}

/// Stub Ollama that sleeps longer than any test timeout before answering
pub fn slow_backend(delay: Duration) -> Router {
    Router::new().route(
        "/api/chat",
        post(move || async move {
            tokio::time::sleep(delay).await;
            Json(serde_json::json!({"done": true}))
        }),
    )
}

pub fn settings_for(ollama_url: &str) -> Settings {
    Settings {
        ollama_url: ollama_url.to_string(),
        ..Settings::default()
    }
}

pub fn relay(settings: Settings) -> Router {
    create_router(AppState::new(settings).unwrap())
}

pub fn chat_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn chat_json(payload: &Value) -> Request<Body> {
    chat_request(payload.to_string())
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(router: Router, request: Request<Body>) -> Reply {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    Reply {
        status,
        headers,
        body,
    }
}
