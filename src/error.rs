//! Muninn error types

/// Muninn error types
#[derive(Debug, thiserror::Error)]
pub enum OptimizerError {
    /// Scoring excluded every enabled model (or the registry is empty).
    ///
    /// Fatal for the single request only — engine state is unaffected and
    /// the next request starts fresh.
    #[error("no models available for this request")]
    NoModelsAvailable,

    /// The external model-invocation capability failed.
    ///
    /// Recorded as a failed outcome in the metrics aggregator before
    /// being surfaced to the caller. Retries, if any, belong to the
    /// invocation capability, not to this engine.
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for Muninn operations
pub type Result<T> = std::result::Result<T, OptimizerError>;
