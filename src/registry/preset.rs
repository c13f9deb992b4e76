//! Preset model catalog.
//!
//! Static defaults used when the host supplies no catalog of its own.
//! Costs are per-token USD; latency figures are conservative estimates
//! for a typical completion, not SLAs. Hosts with real telemetry should
//! register their own [`ModelConfig`] entries instead.

use crate::types::{ModelConfig, Provider};

/// The built-in default catalog, one or more entries per provider tag.
pub fn default_models() -> Vec<ModelConfig> {
    vec![
        ModelConfig::new("gpt-4o", "GPT-4o", Provider::OpenAi)
            .cost_per_token(0.01)
            .expected_latency_ms(1200.0)
            .accuracy(0.95)
            .max_tokens(8192)
            .with_capability("text_generation")
            .with_capability("reasoning")
            .with_capability("code_generation"),
        ModelConfig::new("gpt-4o-mini", "GPT-4o mini", Provider::OpenAi)
            .cost_per_token(0.0006)
            .expected_latency_ms(600.0)
            .accuracy(0.85)
            .with_capability("text_generation"),
        ModelConfig::new("claude-sonnet-4", "Claude Sonnet 4", Provider::Anthropic)
            .cost_per_token(0.003)
            .expected_latency_ms(900.0)
            .accuracy(0.93)
            .max_tokens(8192)
            .with_capability("text_generation")
            .with_capability("reasoning"),
        ModelConfig::new("gemini-2.0-flash", "Gemini 2.0 Flash", Provider::Google)
            .cost_per_token(0.0003)
            .expected_latency_ms(500.0)
            .accuracy(0.82)
            .with_capability("text_generation"),
        ModelConfig::new("azure-gpt-4o", "GPT-4o (Azure)", Provider::Azure)
            .cost_per_token(0.01)
            .expected_latency_ms(1400.0)
            .accuracy(0.95)
            .with_capability("text_generation")
            .with_capability("reasoning"),
        ModelConfig::new("llama-3.1-8b", "Llama 3.1 8B (local)", Provider::Local)
            .cost_per_token(0.0001)
            .expected_latency_ms(300.0)
            .accuracy(0.75)
            .with_capability("text_generation"),
    ]
}
