//! Engine response type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response produced by a model invocation (or served from cache).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineResponse {
    /// Whether the invocation produced a usable result.
    pub success: bool,
    /// Payload, opaque to the engine.
    pub data: Value,
    /// Human-readable status or error message.
    pub message: String,
}

impl EngineResponse {
    /// Successful response with a payload.
    pub fn ok(data: impl Into<Value>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: data.into(),
            message: message.into(),
        }
    }

    /// Failed response with no payload.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: Value::Null,
            message: message.into(),
        }
    }
}
