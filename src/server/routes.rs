//! Application routing

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

use crate::api::{chat, health};
use crate::middleware::logging::log_request;
use crate::server::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Chat payloads may carry base64 images; forward them at any size
        .route("/chat", post(chat::chat).layer(DefaultBodyLimit::disable()))
        // Request logging with trace IDs
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
