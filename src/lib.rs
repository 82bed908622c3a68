//! Ollama relay library
//!
//! A small gateway that forwards chat payloads to an Ollama backend.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod schemas;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use config::Settings;
pub use error::ApiError;
pub use server::{create_router, App, AppState};
