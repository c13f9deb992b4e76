//! Seams to the surrounding system.
//!
//! The engine itself performs no network I/O. Model calls go through
//! [`ModelInvoker`], provided by the integration layer; availability
//! telemetry comes from an [`AvailabilityProbe`], which may be a plain
//! constant where no live telemetry exists.

use async_trait::async_trait;
use serde_json::Value;

use crate::types::{EngineResponse, Intent, ModelConfig};

/// Boxed error type crossing the invocation seam.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// External model-invocation capability.
///
/// Implemented by the integration layer. Any error it returns is wrapped
/// in [`OptimizerError::Invocation`](crate::OptimizerError::Invocation)
/// after being recorded as a failed outcome. Retries and credential
/// management live behind this trait, not in the engine.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// Invoke the given model for an intent.
    async fn invoke(
        &self,
        intent: &Intent,
        context: &Value,
        model: &ModelConfig,
    ) -> std::result::Result<EngineResponse, BoxError>;
}

/// Source of current per-model availability in [0, 1].
///
/// Consulted by the scoring engine for the availability term. Must not
/// block — implementations should read cached telemetry, not probe live.
pub trait AvailabilityProbe: Send + Sync {
    /// Current availability estimate for a model.
    fn availability(&self, model: &ModelConfig) -> f64;
}

/// Probe reporting a fixed availability for every model.
///
/// The default probe (`ConstantAvailability(1.0)`) for environments
/// without live telemetry; also convenient in tests.
#[derive(Debug, Clone, Copy)]
pub struct ConstantAvailability(pub f64);

impl AvailabilityProbe for ConstantAvailability {
    fn availability(&self, _model: &ModelConfig) -> f64 {
        self.0
    }
}
