//! Ollama service for forwarding chat requests
//!
//! One outbound `POST {base}/api/chat` per call, bounded by the client
//! timeout. No retries.

use crate::config::Settings;
use crate::schemas::ChatPayload;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the Ollama API
#[derive(Error, Debug)]
pub enum OllamaError {
    /// Connection failure, timeout, or an undecodable response body
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Downstream answered with a non-success status
    #[error("Ollama returned {status} for {url}{}", format_body(.body))]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },
}

fn format_body(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

impl OllamaError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, OllamaError::Http(e) if e.is_timeout())
    }
}

/// Client for the downstream Ollama chat endpoint
#[derive(Clone)]
pub struct OllamaService {
    /// HTTP client, shared across requests for connection reuse
    client: Client,

    chat_url: String,
}

impl OllamaService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, OllamaError> {
        // Ollama lives next to the relay; never route it through HTTP(S)_PROXY
        let client = Client::builder().timeout(timeout).no_proxy().build()?;
        let chat_url = format!("{}/api/chat", crate::config::normalize_base_url(base_url));

        tracing::info!(
            url = %chat_url,
            timeout_secs = timeout.as_secs(),
            "Initialized Ollama service"
        );

        Ok(Self { client, chat_url })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, OllamaError> {
        Self::new(&settings.ollama_url, settings.ollama_timeout())
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    /// Forward a chat payload and return the decoded response body
    pub async fn chat(&self, payload: &ChatPayload) -> Result<Value, OllamaError> {
        tracing::debug!(
            url = %self.chat_url,
            model = payload.model().unwrap_or("-"),
            "Calling Ollama chat API"
        );

        let response = self
            .client
            .post(&self.chat_url)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OllamaError::Status {
                status,
                url: self.chat_url.clone(),
                body: body.trim().to_string(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_url_from_settings() {
        let settings = Settings {
            ollama_url: "http://localhost:11434".to_string(),
            ..Settings::default()
        };
        let service = OllamaService::from_settings(&settings).unwrap();
        assert_eq!(service.chat_url(), "http://localhost:11434/api/chat");
    }

    #[test]
    fn test_chat_url_strips_trailing_slash() {
        let service = OllamaService::new("http://ollama:11434/", Duration::from_secs(60)).unwrap();
        assert_eq!(service.chat_url(), "http://ollama:11434/api/chat");
    }

    #[test]
    fn test_status_error_message() {
        let err = OllamaError::Status {
            status: StatusCode::NOT_FOUND,
            url: "http://ollama:11434/api/chat".to_string(),
            body: r#"{"error":"model 'nope' not found"}"#.to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("404 Not Found"));
        assert!(message.contains("model 'nope' not found"));
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_status_error_without_body() {
        let err = OllamaError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: "http://ollama:11434/api/chat".to_string(),
            body: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "Ollama returned 500 Internal Server Error for http://ollama:11434/api/chat"
        );
    }
}
