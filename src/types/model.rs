//! Model configuration types.
//!
//! Types describing backend models available for selection: identity,
//! provider tag, generation parameters, and the operating characteristics
//! (cost, latency, accuracy) the scoring engine ranks on.

use serde::{Deserialize, Serialize};

/// Backend provider tag. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Anthropic,
    Google,
    Azure,
    Local,
}

impl Provider {
    /// Stable lowercase tag, used in fingerprints and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Google => "google",
            Self::Azure => "azure",
            Self::Local => "local",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for one backend model.
///
/// Created at startup from the preset catalog or host configuration;
/// mutated only via explicit registry add/remove, never implicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model identifier (e.g. "gpt-4o", "claude-sonnet-4").
    pub id: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Provider serving this model.
    pub provider: Provider,
    /// Maximum tokens per completion.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Nucleus sampling threshold.
    pub top_p: f32,
    /// Frequency penalty.
    pub frequency_penalty: f32,
    /// Presence penalty.
    pub presence_penalty: f32,
    /// Cost per token (USD).
    pub cost_per_token: f64,
    /// Expected end-to-end latency in milliseconds.
    pub expected_latency_ms: f64,
    /// Accuracy score in [0, 1].
    pub accuracy: f64,
    /// Capability tags (e.g. "text_generation", "reasoning").
    pub capabilities: Vec<String>,
    /// Whether the model participates in selection.
    pub enabled: bool,
}

impl ModelConfig {
    /// Create a model config with neutral generation defaults.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, provider: Provider) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            provider,
            max_tokens: 4096,
            temperature: 0.7,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            cost_per_token: 0.0,
            expected_latency_ms: 0.0,
            accuracy: 0.0,
            capabilities: Vec::new(),
            enabled: true,
        }
    }

    /// Set the cost per token.
    pub fn cost_per_token(mut self, cost: f64) -> Self {
        self.cost_per_token = cost;
        self
    }

    /// Set the expected latency in milliseconds.
    pub fn expected_latency_ms(mut self, latency: f64) -> Self {
        self.expected_latency_ms = latency;
        self
    }

    /// Set the accuracy score.
    pub fn accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Set the maximum completion tokens.
    pub fn max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    /// Set the sampling temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Add a capability tag (deduplicated).
    pub fn with_capability(mut self, cap: impl Into<String>) -> Self {
        let cap = cap.into();
        if !self.capabilities.contains(&cap) {
            self.capabilities.push(cap);
        }
        self
    }

    /// Mark the model disabled (excluded from selection).
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Whether this model carries the given capability tag.
    pub fn has_capability(&self, cap: &str) -> bool {
        self.capabilities.iter().any(|c| c == cap)
    }
}
