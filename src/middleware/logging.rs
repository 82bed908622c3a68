//! Request logging middleware
//!
//! Logs every request with its duration and status, runs the handler inside
//! an `http_request` span, and stamps the trace id on the response.

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Header name for trace ID
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Header name for request ID (alias for trace ID)
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id stamped on every response
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceId(pub String);

impl TraceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Reuse the caller's id from `x-trace-id` or `x-request-id`, else a new one
    pub fn from_headers(headers: &HeaderMap) -> Self {
        [TRACE_ID_HEADER, REQUEST_ID_HEADER]
            .iter()
            .filter_map(|name| headers.get(*name))
            .filter_map(|v| v.to_str().ok())
            .map(str::trim)
            .find(|v| !v.is_empty())
            .map(|v| Self(v.to_string()))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub async fn log_request(request: Request, next: Next) -> Response<Body> {
    let start = Instant::now();
    let trace_id = TraceId::from_headers(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "http_request",
        trace_id = %trace_id,
        method = %method,
        path = %path,
    );

    let mut response = next.run(request).instrument(span).await;

    let status = response.status().as_u16();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    if response.status().is_server_error() {
        tracing::error!(trace_id = %trace_id, method = %method, path = %path, status, duration_ms = %duration_ms, "Server error");
    } else if response.status().is_client_error() {
        tracing::warn!(trace_id = %trace_id, method = %method, path = %path, status, duration_ms = %duration_ms, "Client error");
    } else {
        tracing::info!(trace_id = %trace_id, method = %method, path = %path, status, duration_ms = %duration_ms, "Request completed");
    }

    if let Ok(value) = HeaderValue::from_str(trace_id.as_str()) {
        response.headers_mut().insert(TRACE_ID_HEADER, value.clone());
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
