//! Muninn - AI request optimizer
//!
//! This crate decides which backend model should serve a classified
//! intent and caches computed responses to avoid redundant, costly model
//! calls. Intents classify into routing strategies (low latency, high
//! accuracy, cost optimized), strategies rank the model registry through
//! a weighted scoring engine, and results land in a bounded TTL cache
//! with approximate-LRU eviction.
//!
//! The engine performs no network I/O itself: model calls go through a
//! [`ModelInvoker`] supplied by the integration layer, and availability
//! telemetry comes from an [`AvailabilityProbe`] (constant by default).
//!
//! # Example
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use muninn::{
//!     BoxError, EngineResponse, Intent, ModelConfig, ModelInvoker, Optimizer,
//! };
//! use serde_json::json;
//!
//! struct MyInvoker;
//!
//! #[async_trait]
//! impl ModelInvoker for MyInvoker {
//!     async fn invoke(
//!         &self,
//!         _intent: &Intent,
//!         _context: &serde_json::Value,
//!         model: &ModelConfig,
//!     ) -> Result<EngineResponse, BoxError> {
//!         Ok(EngineResponse::ok(json!({"text": "..."}), model.id.clone()))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> muninn::Result<()> {
//!     let engine = Optimizer::builder().invoker(MyInvoker).build()?;
//!
//!     let intent = Intent::new("get_weather").with_entity("city", "Oslo");
//!     let response = engine.process(&intent, &json!({"user": "alice"})).await?;
//!     println!("{}", response.message);
//!
//!     engine.shutdown();
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod registry;
pub mod routing;
pub mod stats;
pub mod telemetry;
pub mod traits;
pub mod types;

// Re-export main types at crate root
pub use cache::{CacheStats, ResponseCache, fingerprint};
pub use config::{CacheSettings, EngineConfig};
pub use engine::{Optimizer, OptimizerBuilder};
pub use error::{OptimizerError, Result};
pub use registry::ModelRegistry;
pub use routing::{IntentCategory, StrategyTable, classify_intent};
pub use stats::{IntentCount, MetricsAggregator, OptimizationMetrics};
pub use traits::{AvailabilityProbe, BoxError, ConstantAvailability, ModelInvoker};

// Re-export all types
pub use types::{
    EngineResponse, Entity, Intent, ModelConfig, Provider, RoutingStrategy, StrategyCriteria,
    StrategyWeights,
};
