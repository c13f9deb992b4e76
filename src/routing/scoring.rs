//! Model scoring and selection.
//!
//! [`score`] reduces a candidate model to a single comparable number
//! under a strategy: hard criteria filters first (any failure scores 0,
//! meaning "excluded"), then a weighted sum of reciprocal latency,
//! reciprocal cost, accuracy, and availability, each scaled so
//! reasonable values land in comparable ranges, plus a flat bonus for
//! preferred providers.
//!
//! [`select_model`] ranks candidates and picks the maximum. Candidates
//! are expected in ascending id order (the registry's `list_enabled`
//! order) and only a strictly greater score displaces the incumbent, so
//! ties resolve deterministically to the lowest id.

use tracing::debug;

use crate::traits::AvailabilityProbe;
use crate::types::{ModelConfig, RoutingStrategy};
use crate::{OptimizerError, Result};

/// Flat score bonus for models from a preferred provider.
const PREFERRED_PROVIDER_BONUS: f64 = 50.0;

/// Score a model under a strategy. Higher is better; exactly 0 means
/// "excluded" by the hard filters.
pub fn score(model: &ModelConfig, strategy: &RoutingStrategy, availability: f64) -> f64 {
    let criteria = &strategy.criteria;

    if let Some(max_latency) = criteria.max_latency_ms {
        if model.expected_latency_ms > max_latency {
            return 0.0;
        }
    }
    if let Some(max_cost) = criteria.max_cost_per_token {
        if model.cost_per_token > max_cost {
            return 0.0;
        }
    }
    if let Some(min_accuracy) = criteria.min_accuracy {
        if model.accuracy < min_accuracy {
            return 0.0;
        }
    }
    if !criteria
        .required_capabilities
        .iter()
        .all(|cap| model.has_capability(cap))
    {
        return 0.0;
    }

    let weights = &strategy.weights;
    let mut total = 0.0;
    // Reciprocal terms: a zero latency or cost would divide by zero, so
    // such a value simply contributes nothing.
    if model.expected_latency_ms > 0.0 {
        total += (1.0 / model.expected_latency_ms) * weights.latency * 1000.0;
    }
    if model.cost_per_token > 0.0 {
        total += (1.0 / model.cost_per_token) * weights.cost * 1000.0;
    }
    total += model.accuracy * weights.accuracy * 100.0;
    total += availability * weights.availability * 100.0;

    if criteria.preferred_providers.contains(&model.provider) {
        total += PREFERRED_PROVIDER_BONUS;
    }

    total
}

/// Pick the highest-scoring candidate.
///
/// `candidates` must already be filtered to enabled models; pass them in
/// ascending id order for deterministic tie-breaking (lowest id wins).
/// Errors with [`OptimizerError::NoModelsAvailable`] when every
/// candidate is excluded or the slice is empty.
pub fn select_model<'a>(
    candidates: &[&'a ModelConfig],
    strategy: &RoutingStrategy,
    probe: &dyn AvailabilityProbe,
) -> Result<&'a ModelConfig> {
    let mut best: Option<(&ModelConfig, f64)> = None;
    for model in candidates {
        let s = score(model, strategy, probe.availability(model));
        if s <= 0.0 {
            continue;
        }
        match best {
            Some((_, best_score)) if s <= best_score => {}
            _ => best = Some((model, s)),
        }
    }
    match best {
        Some((model, s)) => {
            debug!(model = %model.id, score = s, strategy = %strategy.name, "model selected");
            Ok(model)
        }
        None => Err(OptimizerError::NoModelsAvailable),
    }
}
