//! Request metrics aggregation.
//!
//! [`MetricsAggregator`] is the sole writer of [`OptimizationMetrics`];
//! readers get an owned snapshot via [`snapshot`](MetricsAggregator::snapshot).
//!
//! # Averaging rule
//!
//! Response time and cost use a two-sample blend, `avg = (avg + new) / 2`,
//! seeded at 0. This is not a true windowed mean — it weights the most
//! recent sample at 1/2, the one before at 1/4, and so on. Downstream
//! consumers assert the exact sequence this produces, so the rule must
//! not be replaced with a running mean.
//!
//! Facade counters (see [`telemetry`](crate::telemetry)) are emitted
//! alongside the aggregate for hosts with a `metrics` recorder installed.

use std::collections::HashMap;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::trace;

use crate::telemetry;
use crate::types::{Intent, ModelConfig};

/// Number of intents reported in [`OptimizationMetrics::top_intents`].
const TOP_INTENTS_CAP: usize = 10;

/// Divisor scaling average response time into the performance score:
/// 5000 ms average maps to a response-time score of 0.
const RESPONSE_TIME_SCORE_CEILING_MS: f64 = 5000.0;

/// Divisor scaling average cost into the performance score: an average
/// cost of 0.01 per token maps to a cost score of 0.
const COST_SCORE_CEILING: f64 = 0.01;

/// One entry in the top-intents ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentCount {
    pub action: String,
    pub count: u64,
}

/// Aggregate engine metrics. Obtained as a read-only snapshot.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OptimizationMetrics {
    pub total_requests: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    /// Two-sample blended average response time in milliseconds.
    pub avg_response_time_ms: f64,
    /// Two-sample blended average cost per token.
    pub avg_cost_per_token: f64,
    /// Running error rate in [0, 1].
    pub error_rate: f64,
    /// Invocation counts per model id.
    pub model_usage: HashMap<String, u64>,
    /// Invocation counts per provider tag.
    pub provider_usage: HashMap<String, u64>,
    /// The ten most frequent intents, descending by count.
    pub top_intents: Vec<IntentCount>,
    /// Derived composite score in [0, 100].
    pub performance_score: f64,
}

#[derive(Debug, Default)]
struct Inner {
    total_requests: u64,
    cache_hits: u64,
    cache_misses: u64,
    avg_response_time_ms: f64,
    avg_cost_per_token: f64,
    error_rate: f64,
    model_usage: HashMap<String, u64>,
    provider_usage: HashMap<String, u64>,
    intent_counts: HashMap<String, u64>,
}

/// Single-writer aggregator over engine request outcomes.
#[derive(Debug, Default)]
pub struct MetricsAggregator {
    inner: Mutex<Inner>,
}

impl MetricsAggregator {
    /// Create an aggregator with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cache hit.
    pub async fn record_hit(&self, key: &str) {
        trace!(key, "cache hit");
        self.inner.lock().await.cache_hits += 1;
    }

    /// Record a cache miss.
    pub async fn record_miss(&self, key: &str) {
        trace!(key, "cache miss");
        self.inner.lock().await.cache_misses += 1;
    }

    /// Record the outcome of one model invocation.
    ///
    /// `model` is `None` when the request failed before a model was
    /// selected; usage maps and the cost average are then left untouched.
    pub async fn record_outcome(
        &self,
        intent: &Intent,
        model: Option<&ModelConfig>,
        processing_time_ms: f64,
        success: bool,
    ) {
        let mut inner = self.inner.lock().await;
        inner.total_requests += 1;
        inner.avg_response_time_ms = (inner.avg_response_time_ms + processing_time_ms) / 2.0;

        let provider_label = if let Some(model) = model {
            inner.avg_cost_per_token = (inner.avg_cost_per_token + model.cost_per_token) / 2.0;
            *inner.model_usage.entry(model.id.clone()).or_insert(0) += 1;
            *inner
                .provider_usage
                .entry(model.provider.as_str().to_string())
                .or_insert(0) += 1;
            model.provider.as_str()
        } else {
            "none"
        };

        let failures = if success { 0.0 } else { 1.0 };
        let total = inner.total_requests as f64;
        inner.error_rate = (inner.error_rate * (total - 1.0) + failures) / total;

        *inner
            .intent_counts
            .entry(intent.action.clone())
            .or_insert(0) += 1;

        let status = if success { "ok" } else { "error" };
        metrics::counter!(
            telemetry::REQUESTS_TOTAL,
            "provider" => provider_label,
            "status" => status
        )
        .increment(1);
        metrics::histogram!(
            telemetry::REQUEST_DURATION_SECONDS,
            "provider" => provider_label
        )
        .record(processing_time_ms / 1000.0);
    }

    /// Read-only snapshot of the current aggregate, including the
    /// derived performance score and top-intents ranking.
    pub async fn snapshot(&self) -> OptimizationMetrics {
        let inner = self.inner.lock().await;

        let accesses = inner.cache_hits + inner.cache_misses;
        let hit_rate = if accesses == 0 {
            0.0
        } else {
            inner.cache_hits as f64 / accesses as f64
        };
        let response_time_score =
            (1.0 - inner.avg_response_time_ms / RESPONSE_TIME_SCORE_CEILING_MS).max(0.0);
        let error_rate_score = 1.0 - inner.error_rate;
        let cost_score = (1.0 - inner.avg_cost_per_token / COST_SCORE_CEILING).max(0.0);
        let performance_score = (hit_rate * 0.3
            + response_time_score * 0.3
            + error_rate_score * 0.2
            + cost_score * 0.2)
            * 100.0;

        let mut top_intents: Vec<IntentCount> = inner
            .intent_counts
            .iter()
            .map(|(action, count)| IntentCount {
                action: action.clone(),
                count: *count,
            })
            .collect();
        top_intents.sort_by(|a, b| b.count.cmp(&a.count).then(a.action.cmp(&b.action)));
        top_intents.truncate(TOP_INTENTS_CAP);

        OptimizationMetrics {
            total_requests: inner.total_requests,
            cache_hits: inner.cache_hits,
            cache_misses: inner.cache_misses,
            avg_response_time_ms: inner.avg_response_time_ms,
            avg_cost_per_token: inner.avg_cost_per_token,
            error_rate: inner.error_rate,
            model_usage: inner.model_usage.clone(),
            provider_usage: inner.provider_usage.clone(),
            top_intents,
            performance_score,
        }
    }
}
