//! Intent classification and strategy selection.
//!
//! Every intent classifies into exactly one [`IntentCategory`] by
//! substring match against fixed keyword lists, and each category maps
//! to a named strategy in the [`StrategyTable`]. Classification is a
//! total function: unknown actions land in `Standard`, and a category
//! whose named strategy is missing from the table falls back to the
//! built-in default. Selection never errors.

use std::collections::HashMap;

use tracing::debug;

use crate::types::{Intent, RoutingStrategy, StrategyCriteria, StrategyWeights};

pub mod scoring;

/// Intent actions containing any of these route to `high_accuracy`.
const CRITICAL_KEYWORDS: &[&str] = &["emergency", "security", "medical", "financial"];

/// Intent actions containing any of these route to `cost_optimized`.
const COST_SENSITIVE_KEYWORDS: &[&str] = &["bulk_processing", "batch_analysis", "data_export"];

/// Intent actions containing any of these route to `low_latency`.
const REAL_TIME_KEYWORDS: &[&str] = &["voice_interaction", "live_chat", "real_time_analysis"];

/// Category an intent classifies into. Determines the strategy used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentCategory {
    Critical,
    CostSensitive,
    RealTime,
    Standard,
}

impl IntentCategory {
    /// Name of the strategy this category maps to, if any.
    ///
    /// `Standard` has no named strategy — it always takes the default.
    pub fn strategy_name(&self) -> Option<&'static str> {
        match self {
            Self::Critical => Some("high_accuracy"),
            Self::CostSensitive => Some("cost_optimized"),
            Self::RealTime => Some("low_latency"),
            Self::Standard => None,
        }
    }
}

/// Classify an intent action by keyword substring match.
///
/// Lists are checked in a fixed order (critical, cost-sensitive,
/// real-time); the first list containing a match wins.
pub fn classify_intent(action: &str) -> IntentCategory {
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| action.contains(k));
    if contains_any(CRITICAL_KEYWORDS) {
        IntentCategory::Critical
    } else if contains_any(COST_SENSITIVE_KEYWORDS) {
        IntentCategory::CostSensitive
    } else if contains_any(REAL_TIME_KEYWORDS) {
        IntentCategory::RealTime
    } else {
        IntentCategory::Standard
    }
}

/// Named strategies plus a built-in default.
///
/// Strategies are immutable once inserted. Selection per request is a
/// pure function of the intent's category.
#[derive(Debug)]
pub struct StrategyTable {
    strategies: HashMap<String, RoutingStrategy>,
    default: RoutingStrategy,
}

impl StrategyTable {
    /// Create a table with only the built-in default (balanced weights).
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
            default: RoutingStrategy::new("default")
                .description("balanced across all dimensions"),
        }
    }

    /// Create a table with the built-in named strategies:
    /// `high_accuracy`, `cost_optimized`, `low_latency`.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.insert(
            RoutingStrategy::new("high_accuracy")
                .description("accuracy first, for critical intents")
                .criteria(StrategyCriteria::new().min_accuracy(0.9))
                .weights(StrategyWeights {
                    latency: 0.1,
                    cost: 0.1,
                    accuracy: 0.7,
                    availability: 0.1,
                }),
        );
        table.insert(
            RoutingStrategy::new("cost_optimized")
                .description("cheapest acceptable model, for bulk work")
                .criteria(StrategyCriteria::new().max_cost_per_token(0.01))
                .weights(StrategyWeights {
                    latency: 0.2,
                    cost: 0.6,
                    accuracy: 0.1,
                    availability: 0.1,
                }),
        );
        table.insert(
            RoutingStrategy::new("low_latency")
                .description("fastest acceptable model, for interactive use")
                .criteria(
                    StrategyCriteria::new()
                        .max_latency_ms(1000.0)
                        .min_accuracy(0.8),
                )
                .weights(StrategyWeights {
                    latency: 0.6,
                    cost: 0.2,
                    accuracy: 0.1,
                    availability: 0.1,
                }),
        );
        table
    }

    /// Insert a strategy, keyed by its name. Replaces any existing entry.
    pub fn insert(&mut self, strategy: RoutingStrategy) {
        self.strategies.insert(strategy.name.clone(), strategy);
    }

    /// The built-in default strategy.
    pub fn default_strategy(&self) -> &RoutingStrategy {
        &self.default
    }

    /// Select the strategy for an intent. Total — never fails.
    pub fn select(&self, intent: &Intent) -> &RoutingStrategy {
        let category = classify_intent(&intent.action);
        let strategy = category
            .strategy_name()
            .and_then(|name| self.strategies.get(name))
            .unwrap_or(&self.default);
        debug!(
            action = %intent.action,
            category = ?category,
            strategy = %strategy.name,
            "strategy selected"
        );
        strategy
    }
}

impl Default for StrategyTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}
