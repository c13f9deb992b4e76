//! Builder for configuring [`Optimizer`] instances.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::ResponseCache;
use crate::cache::sweeper::Sweeper;
use crate::config::EngineConfig;
use crate::registry::ModelRegistry;
use crate::routing::StrategyTable;
use crate::stats::MetricsAggregator;
use crate::traits::{AvailabilityProbe, ConstantAvailability, ModelInvoker};
use crate::types::ModelConfig;
use crate::{OptimizerError, Result};

use super::Optimizer;

/// Builder for configuring [`Optimizer`] instances.
///
/// Only the invoker is required; everything else defaults sensibly
/// (preset model catalog, built-in strategies, constant availability,
/// default cache settings).
pub struct OptimizerBuilder {
    invoker: Option<Arc<dyn ModelInvoker>>,
    probe: Arc<dyn AvailabilityProbe>,
    config: EngineConfig,
    models: Option<Vec<ModelConfig>>,
    strategies: StrategyTable,
}

impl OptimizerBuilder {
    pub fn new() -> Self {
        Self {
            invoker: None,
            probe: Arc::new(ConstantAvailability(1.0)),
            config: EngineConfig::default(),
            models: None,
            strategies: StrategyTable::with_defaults(),
        }
    }

    /// Set the external model-invocation capability. Required.
    pub fn invoker(mut self, invoker: impl ModelInvoker + 'static) -> Self {
        self.invoker = Some(Arc::new(invoker));
        self
    }

    /// Set a shared invoker.
    pub fn invoker_arc(mut self, invoker: Arc<dyn ModelInvoker>) -> Self {
        self.invoker = Some(invoker);
        self
    }

    /// Set the availability probe (default: constant 1.0).
    pub fn availability_probe(mut self, probe: impl AvailabilityProbe + 'static) -> Self {
        self.probe = Arc::new(probe);
        self
    }

    /// Set the engine configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the initial model catalog (default: preset catalog).
    ///
    /// An empty vec yields an engine that fails every request with
    /// `NoModelsAvailable` until models are added.
    pub fn models(mut self, models: Vec<ModelConfig>) -> Self {
        self.models = Some(models);
        self
    }

    /// Add one model to the initial catalog, keeping earlier additions.
    pub fn model(mut self, model: ModelConfig) -> Self {
        self.models.get_or_insert_with(Vec::new).push(model);
        self
    }

    /// Replace the strategy table (default: built-in strategies).
    pub fn strategies(mut self, table: StrategyTable) -> Self {
        self.strategies = table;
        self
    }

    /// Build the engine and start its background sweeper.
    ///
    /// Must be called within a tokio runtime — the sweeper task is
    /// spawned on it. Errors with `Configuration` if no invoker was set.
    pub fn build(self) -> Result<Optimizer> {
        let invoker = self
            .invoker
            .ok_or_else(|| OptimizerError::Configuration("no invoker configured".into()))?;

        let registry = match self.models {
            Some(models) => {
                let mut registry = ModelRegistry::new();
                for model in models {
                    registry.add(model);
                }
                registry
            }
            None => ModelRegistry::with_defaults(),
        };

        let cache = Arc::new(ResponseCache::new(&self.config.cache));
        let sweeper = Sweeper::spawn(
            Arc::clone(&cache),
            Duration::from_millis(self.config.cache.sweep_interval_ms),
        );

        Ok(Optimizer {
            registry: RwLock::new(registry),
            strategies: self.strategies,
            cache,
            stats: MetricsAggregator::new(),
            invoker,
            probe: self.probe,
            sweeper,
        })
    }
}

impl Default for OptimizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
