//! Classified user intents.
//!
//! An [`Intent`] is the unit of work the engine optimises for: an action
//! string (e.g. `"get_weather"`) plus optional named entities extracted
//! by the upstream classifier. The engine never interprets entity values;
//! they participate only in cache fingerprinting.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named entity attached to an intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity name (e.g. "city").
    pub name: String,
    /// Entity value, opaque to the engine.
    pub value: Value,
}

/// A classified unit of user request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// Action identifier (e.g. "get_weather", "send_message").
    pub action: String,
    /// Extracted entities, possibly empty.
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl Intent {
    /// Create an intent with no entities.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            entities: Vec::new(),
        }
    }

    /// Attach an entity.
    pub fn with_entity(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entities.push(Entity {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}
