//! API error types

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::OllamaError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The downstream backend failed or could not be reached
    #[error("{0}")]
    BadGateway(String),

    /// The inbound body could not be read as a JSON object
    #[error("{0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<OllamaError> for ApiError {
    fn from(err: OllamaError) -> Self {
        ApiError::BadGateway(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut detail = self.to_string();
        if detail.is_empty() {
            detail = status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string();
        }

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// JSON error body: `{"detail": "..."}`
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}
