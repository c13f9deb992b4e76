//! Tests for the metrics aggregator: monotone counters, the two-sample
//! blended averages, error-rate recurrence, and the derived performance
//! score.

use muninn::{Intent, MetricsAggregator, ModelConfig, Provider};

fn model(id: &str, cost: f64) -> ModelConfig {
    ModelConfig::new(id, id, Provider::OpenAi)
        .cost_per_token(cost)
        .expected_latency_ms(500.0)
        .accuracy(0.9)
}

// =========================================================================
// Monotone counters
// =========================================================================

#[tokio::test]
async fn total_requests_counts_outcomes_exactly() {
    let stats = MetricsAggregator::new();
    let intent = Intent::new("x");
    let m = model("m", 0.001);
    for _ in 0..5 {
        stats.record_outcome(&intent, Some(&m), 10.0, true).await;
    }
    assert_eq!(stats.snapshot().await.total_requests, 5);
}

#[tokio::test]
async fn hits_plus_misses_count_accesses_exactly() {
    let stats = MetricsAggregator::new();
    for _ in 0..3 {
        stats.record_hit("k").await;
    }
    for _ in 0..4 {
        stats.record_miss("k").await;
    }
    let snapshot = stats.snapshot().await;
    assert_eq!(snapshot.cache_hits, 3);
    assert_eq!(snapshot.cache_misses, 4);
    assert_eq!(snapshot.cache_hits + snapshot.cache_misses, 7);
}

// =========================================================================
// Blended averages
// =========================================================================

#[tokio::test]
async fn response_time_uses_two_sample_blend() {
    let stats = MetricsAggregator::new();
    let intent = Intent::new("x");
    let m = model("m", 0.001);

    stats.record_outcome(&intent, Some(&m), 100.0, true).await;
    // Seeded at 0: first sample lands at (0 + 100)/2 = 50.
    assert_eq!(stats.snapshot().await.avg_response_time_ms, 50.0);

    stats.record_outcome(&intent, Some(&m), 200.0, true).await;
    // (50 + 200)/2 = 125 — not the true mean of 150.
    assert_eq!(stats.snapshot().await.avg_response_time_ms, 125.0);
}

#[tokio::test]
async fn cost_average_blends_model_cost() {
    let stats = MetricsAggregator::new();
    let intent = Intent::new("x");
    stats
        .record_outcome(&intent, Some(&model("a", 0.004)), 10.0, true)
        .await;
    stats
        .record_outcome(&intent, Some(&model("b", 0.008)), 10.0, true)
        .await;
    // (0 + 0.004)/2 = 0.002, then (0.002 + 0.008)/2 = 0.005.
    assert!((stats.snapshot().await.avg_cost_per_token - 0.005).abs() < 1e-12);
}

// =========================================================================
// Usage maps
// =========================================================================

#[tokio::test]
async fn usage_maps_count_per_model_and_provider() {
    let stats = MetricsAggregator::new();
    let intent = Intent::new("x");
    let a = model("a", 0.001);
    let mut b = model("b", 0.001);
    b.provider = Provider::Anthropic;

    stats.record_outcome(&intent, Some(&a), 10.0, true).await;
    stats.record_outcome(&intent, Some(&a), 10.0, true).await;
    stats.record_outcome(&intent, Some(&b), 10.0, true).await;

    let snapshot = stats.snapshot().await;
    assert_eq!(snapshot.model_usage["a"], 2);
    assert_eq!(snapshot.model_usage["b"], 1);
    assert_eq!(snapshot.provider_usage["openai"], 2);
    assert_eq!(snapshot.provider_usage["anthropic"], 1);
}

// =========================================================================
// Performance score
// =========================================================================

#[tokio::test]
async fn pristine_engine_scores_from_components() {
    let stats = MetricsAggregator::new();
    // No accesses: hit_rate 0; averages 0 → rt and cost scores 1;
    // error rate 0 → error score 1. (0*0.3 + 1*0.3 + 1*0.2 + 1*0.2)*100.
    assert!((stats.snapshot().await.performance_score - 70.0).abs() < 1e-9);
}

#[tokio::test]
async fn performance_score_reflects_hit_rate() {
    let stats = MetricsAggregator::new();
    stats.record_hit("k").await;
    stats.record_hit("k").await;
    // hit_rate 1.0, everything else pristine: full 100.
    assert!((stats.snapshot().await.performance_score - 100.0).abs() < 1e-9);
}

#[tokio::test]
async fn slow_expensive_failures_floor_the_score() {
    let stats = MetricsAggregator::new();
    let intent = Intent::new("x");
    let pricey = model("m", 1.0);
    // Repeated failures drive error rate toward 1; huge latency and cost
    // push their component scores to the 0 floor.
    for _ in 0..20 {
        stats.record_miss("k").await;
        stats.record_outcome(&intent, Some(&pricey), 60_000.0, false).await;
    }
    let snapshot = stats.snapshot().await;
    assert!(snapshot.performance_score < 5.0);
    assert!(snapshot.performance_score >= 0.0);
}
