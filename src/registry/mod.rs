//! Model registry.
//!
//! Owns the catalog of [`ModelConfig`] entries. Mutation happens only
//! through [`add`](ModelRegistry::add) and [`remove`](ModelRegistry::remove);
//! the raw map is never exposed, so no external code can violate the
//! one-entry-per-id invariant.

use std::collections::HashMap;

use crate::types::ModelConfig;

mod preset;

pub use preset::default_models;

/// In-memory catalog of available models, keyed by id.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: HashMap<String, ModelConfig>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the preset default catalog.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for model in default_models() {
            registry.add(model);
        }
        registry
    }

    /// Insert a model, replacing any existing entry with the same id.
    pub fn add(&mut self, model: ModelConfig) {
        self.models.insert(model.id.clone(), model);
    }

    /// Remove a model by id. No-op if absent.
    pub fn remove(&mut self, id: &str) {
        self.models.remove(id);
    }

    /// Look up a model by id.
    pub fn get(&self, id: &str) -> Option<&ModelConfig> {
        self.models.get(id)
    }

    /// All enabled models, sorted ascending by id.
    ///
    /// The sort gives selection a deterministic iteration order — score
    /// ties resolve to the lowest id regardless of insertion history.
    pub fn list_enabled(&self) -> Vec<&ModelConfig> {
        let mut enabled: Vec<&ModelConfig> =
            self.models.values().filter(|m| m.enabled).collect();
        enabled.sort_by(|a, b| a.id.cmp(&b.id));
        enabled
    }

    /// Number of registered models (enabled or not).
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
