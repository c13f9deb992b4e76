//! Telemetry metric name constants.
//!
//! Centralised metric names for muninn operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! These are the low-level facade counters. The engine additionally
//! maintains its own [`OptimizationMetrics`](crate::stats::OptimizationMetrics)
//! aggregate, queryable as a snapshot via
//! [`Optimizer::get_metrics()`](crate::Optimizer::get_metrics).
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `muninn_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `provider` — provider tag (e.g. "openai", "anthropic", "local")
//! - `model` — model identifier
//! - `status` — outcome: "ok" or "error"

/// Total requests processed by the orchestrator (cache hits excluded).
///
/// Labels: `provider`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "muninn_requests_total";

/// End-to-end invocation duration in seconds.
///
/// Labels: `provider`.
pub const REQUEST_DURATION_SECONDS: &str = "muninn_request_duration_seconds";

/// Total response cache hits.
pub const CACHE_HITS_TOTAL: &str = "muninn_cache_hits_total";

/// Total response cache misses (includes expired-on-read entries).
pub const CACHE_MISSES_TOTAL: &str = "muninn_cache_misses_total";

/// Entries removed by capacity eviction.
pub const CACHE_EVICTIONS_TOTAL: &str = "muninn_cache_evictions_total";

/// Entries removed because their TTL elapsed (on read or by the sweeper).
pub const CACHE_EXPIRED_TOTAL: &str = "muninn_cache_expired_total";

/// Total model selections made by the scoring engine.
///
/// Labels: `model`, `provider`.
pub const MODELS_SELECTED_TOTAL: &str = "muninn_models_selected_total";
