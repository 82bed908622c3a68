//! Ollama chat payload
//!
//! The relay does not model Ollama's chat schema. A payload is an ordered
//! JSON object that is forwarded as-is, except for the `model` field which
//! receives a default when the caller leaves it out.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the field carrying the model id
pub const MODEL_FIELD: &str = "model";

/// Open-ended chat request body
///
/// Wraps a `serde_json::Map` so unknown fields (messages, options, format,
/// keep_alive, ...) survive the round trip untouched and in their original
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatPayload(Map<String, Value>);

impl ChatPayload {
    /// The `model` value if present as a string
    pub fn model(&self) -> Option<&str> {
        self.0.get(MODEL_FIELD).and_then(Value::as_str)
    }

    /// Whether the payload carries a usable `model`
    pub fn has_model(&self) -> bool {
        self.0.get(MODEL_FIELD).is_some_and(is_truthy)
    }

    /// Inject `default_model` unless a truthy `model` is already present.
    ///
    /// Returns true when the payload was modified.
    pub fn ensure_model(&mut self, default_model: &str) -> bool {
        if self.has_model() {
            return false;
        }
        self.0
            .insert(MODEL_FIELD.to_string(), Value::String(default_model.to_string()));
        true
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// JSON truthiness: null, false, zero and empty containers are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
