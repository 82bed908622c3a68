//! Chat forwarding endpoint
//!
//! Implements POST /chat: fills in the default model if the caller did not
//! provide one, forwards the payload to Ollama and relays the JSON answer.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;
use std::time::Instant;

use crate::error::ApiError;
use crate::schemas::ChatPayload;
use crate::server::state::AppState;

/// POST /chat
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatPayload>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(mut payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected chat payload");
        ApiError::from(rejection)
    })?;

    if payload.ensure_model(&state.settings.default_model) {
        tracing::debug!(model = %state.settings.default_model, "Injected default model");
    }

    let start = Instant::now();
    let result = state.ollama.chat(&payload).await;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(body) => {
            tracing::info!(
                model = payload.model().unwrap_or("-"),
                elapsed_ms,
                "Chat forwarded"
            );
            Ok(Json(body))
        }
        Err(err) => {
            tracing::warn!(
                model = payload.model().unwrap_or("-"),
                elapsed_ms,
                timeout = err.is_timeout(),
                error = %err,
                "Ollama request failed"
            );
            Err(err.into())
        }
    }
}
