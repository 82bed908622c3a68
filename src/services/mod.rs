//! Services module
//!
//! Contains external service integrations.

pub mod ollama;

pub use ollama::{OllamaError, OllamaService};
