//! Request and response schemas

pub mod ollama;

pub use ollama::{is_truthy, ChatPayload, MODEL_FIELD};
