//! The optimization orchestrator.
//!
//! [`Optimizer::process`] runs each request through a fixed pipeline:
//! cache check, then on miss strategy selection, model scoring, external
//! invocation, cache store, and metrics update. Cache misses are the
//! only condition recovered silently; every true failure is recorded in
//! the metrics aggregator and propagated to the caller.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::cache::sweeper::Sweeper;
use crate::cache::{CacheStats, ResponseCache, fingerprint};
use crate::registry::ModelRegistry;
use crate::routing::{StrategyTable, scoring};
use crate::stats::{MetricsAggregator, OptimizationMetrics};
use crate::telemetry;
use crate::traits::{AvailabilityProbe, ModelInvoker};
use crate::types::{EngineResponse, Intent, ModelConfig};
use crate::{OptimizerError, Result};

use super::OptimizerBuilder;

/// AI-request optimization engine.
///
/// Selects the backend model for each classified intent and caches
/// computed responses to avoid redundant model calls. Requests run as
/// independent units of work; shared state (cache, registry, metrics)
/// sits behind its own lock, so any number may be in flight at once.
pub struct Optimizer {
    pub(super) registry: RwLock<ModelRegistry>,
    pub(super) strategies: StrategyTable,
    pub(super) cache: Arc<ResponseCache>,
    pub(super) stats: MetricsAggregator,
    pub(super) invoker: Arc<dyn ModelInvoker>,
    pub(super) probe: Arc<dyn AvailabilityProbe>,
    pub(super) sweeper: Sweeper,
}

impl std::fmt::Debug for Optimizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Optimizer").finish_non_exhaustive()
    }
}

impl Optimizer {
    /// Create a new builder for configuring the engine.
    pub fn builder() -> OptimizerBuilder {
        OptimizerBuilder::new()
    }

    /// Process one request.
    ///
    /// Serves from cache when a live entry exists; otherwise selects a
    /// strategy for the intent, scores the registry under it, invokes
    /// the winning model, caches the response, and records the outcome.
    ///
    /// # Errors
    ///
    /// - [`OptimizerError::NoModelsAvailable`] when scoring excludes
    ///   every enabled model. Engine state is unaffected.
    /// - [`OptimizerError::Invocation`] when the external capability
    ///   fails; the failure is recorded as an outcome first.
    #[instrument(skip_all, fields(action = %intent.action))]
    pub async fn process(&self, intent: &Intent, context: &Value) -> Result<EngineResponse> {
        let key = fingerprint(intent, context);

        if let Some(response) = self.cache.lookup(&key).await {
            self.stats.record_hit(&key).await;
            return Ok(response);
        }
        self.stats.record_miss(&key).await;

        let strategy = self.strategies.select(intent);
        let model = {
            let registry = self.registry.read().await;
            let candidates = registry.list_enabled();
            scoring::select_model(&candidates, strategy, self.probe.as_ref())?.clone()
        };
        metrics::counter!(
            telemetry::MODELS_SELECTED_TOTAL,
            "model" => model.id.clone(),
            "provider" => model.provider.as_str()
        )
        .increment(1);

        let started = Instant::now();
        match self.invoker.invoke(intent, context, &model).await {
            Ok(response) => {
                let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
                self.cache
                    .store(&key, response.clone(), intent, &model, elapsed_ms)
                    .await;
                self.stats
                    .record_outcome(intent, Some(&model), elapsed_ms, response.success)
                    .await;
                Ok(response)
            }
            Err(err) => {
                let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
                self.stats
                    .record_outcome(intent, Some(&model), elapsed_ms, false)
                    .await;
                Err(OptimizerError::Invocation(err.to_string()))
            }
        }
    }

    /// Read-only snapshot of the aggregate metrics.
    pub async fn get_metrics(&self) -> OptimizationMetrics {
        self.stats.snapshot().await
    }

    /// Cache size, hit rate, and live keys.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    /// Empty the response cache unconditionally.
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    /// Register (or replace) a model.
    pub async fn add_model(&self, model: ModelConfig) {
        self.registry.write().await.add(model);
    }

    /// Remove a model by id. No-op if absent.
    pub async fn remove_model(&self, id: &str) {
        self.registry.write().await.remove(id);
    }

    /// Stop the background sweeper.
    ///
    /// Idempotent; also happens automatically when the engine is dropped.
    pub fn shutdown(&self) {
        self.sweeper.stop();
    }
}
