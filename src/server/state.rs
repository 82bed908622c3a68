//! Application state container
//!
//! This module defines the shared application state that is passed
//! to all request handlers via Axum's state extraction.

use crate::config::Settings;
use crate::services::OllamaService;
use std::sync::Arc;

/// Shared application state
///
/// Cheap to clone; everything inside is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Client for the downstream Ollama backend
    pub ollama: Arc<OllamaService>,
}

impl AppState {
    /// Create a new application state
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        tracing::debug!(
            ollama_url = %settings.ollama_url,
            default_model = %settings.default_model,
            "Initializing application state"
        );

        let ollama = OllamaService::from_settings(&settings)?;

        Ok(Self {
            settings: Arc::new(settings),
            ollama: Arc::new(ollama),
        })
    }
}
