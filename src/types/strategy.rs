//! Routing strategy types.
//!
//! A [`RoutingStrategy`] is a named weighting profile the scoring engine
//! ranks candidate models under: hard criteria filters plus a relative
//! weight vector over latency, cost, accuracy, and availability.
//! Strategies are immutable once loaded into the
//! [`StrategyTable`](crate::routing::StrategyTable).

use serde::Deserialize;

use super::Provider;

/// Relative weights over the four scoring dimensions.
///
/// Components are non-negative and need not sum to 1 — only their
/// relative magnitudes matter.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct StrategyWeights {
    pub latency: f64,
    pub cost: f64,
    pub accuracy: f64,
    pub availability: f64,
}

impl Default for StrategyWeights {
    /// Balanced weights: 0.3 / 0.3 / 0.3 / 0.1.
    fn default() -> Self {
        Self {
            latency: 0.3,
            cost: 0.3,
            accuracy: 0.3,
            availability: 0.1,
        }
    }
}

/// Hard filters a model must pass before it is scored at all.
///
/// All fields optional; an empty criteria set admits every model.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StrategyCriteria {
    /// Maximum acceptable expected latency in milliseconds.
    #[serde(default)]
    pub max_latency_ms: Option<f64>,
    /// Maximum acceptable cost per token.
    #[serde(default)]
    pub max_cost_per_token: Option<f64>,
    /// Minimum acceptable accuracy score.
    #[serde(default)]
    pub min_accuracy: Option<f64>,
    /// Capability tags the model must all carry.
    #[serde(default)]
    pub required_capabilities: Vec<String>,
    /// Providers that earn a flat scoring bonus.
    #[serde(default)]
    pub preferred_providers: Vec<Provider>,
}

impl StrategyCriteria {
    /// Create an empty criteria set (admits everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum latency filter.
    pub fn max_latency_ms(mut self, ms: f64) -> Self {
        self.max_latency_ms = Some(ms);
        self
    }

    /// Set the maximum cost filter.
    pub fn max_cost_per_token(mut self, cost: f64) -> Self {
        self.max_cost_per_token = Some(cost);
        self
    }

    /// Set the minimum accuracy filter.
    pub fn min_accuracy(mut self, accuracy: f64) -> Self {
        self.min_accuracy = Some(accuracy);
        self
    }

    /// Require a capability tag.
    pub fn require_capability(mut self, cap: impl Into<String>) -> Self {
        self.required_capabilities.push(cap.into());
        self
    }

    /// Add a preferred provider.
    pub fn prefer_provider(mut self, provider: Provider) -> Self {
        self.preferred_providers.push(provider);
        self
    }
}

/// A named weighting profile used to rank candidate models.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoutingStrategy {
    /// Strategy name (e.g. "low_latency").
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Hard filters applied before scoring.
    #[serde(default)]
    pub criteria: StrategyCriteria,
    /// Relative scoring weights.
    #[serde(default)]
    pub weights: StrategyWeights,
}

impl RoutingStrategy {
    /// Create a strategy with empty criteria and balanced weights.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            criteria: StrategyCriteria::default(),
            weights: StrategyWeights::default(),
        }
    }

    /// Set the description.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Set the criteria filter.
    pub fn criteria(mut self, criteria: StrategyCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Set the weight vector.
    pub fn weights(mut self, weights: StrategyWeights) -> Self {
        self.weights = weights;
        self
    }
}
