//! Tests for model scoring and selection.

use muninn::routing::scoring::{score, select_model};
use muninn::{
    ConstantAvailability, ModelConfig, OptimizerError, Provider, RoutingStrategy,
    StrategyCriteria, StrategyWeights,
};

fn model_a() -> ModelConfig {
    ModelConfig::new("model-a", "Model A", Provider::OpenAi)
        .expected_latency_ms(500.0)
        .cost_per_token(0.002)
        .accuracy(0.9)
        .with_capability("text_generation")
}

fn model_b() -> ModelConfig {
    ModelConfig::new("model-b", "Model B", Provider::Anthropic)
        .expected_latency_ms(2000.0)
        .cost_per_token(0.03)
        .accuracy(0.95)
        .with_capability("text_generation")
        .with_capability("reasoning")
}

fn low_latency() -> RoutingStrategy {
    RoutingStrategy::new("low_latency")
        .criteria(
            StrategyCriteria::new()
                .max_latency_ms(1000.0)
                .min_accuracy(0.8),
        )
        .weights(StrategyWeights {
            latency: 0.6,
            cost: 0.2,
            accuracy: 0.1,
            availability: 0.1,
        })
}

// =========================================================================
// Exclusion
// =========================================================================

#[test]
fn excluded_models_score_exactly_zero() {
    let strategy = low_latency();
    // model_b violates max_latency_ms (2000 > 1000).
    assert_eq!(score(&model_b(), &strategy, 1.0), 0.0);

    let strict_cap = RoutingStrategy::new("s")
        .criteria(StrategyCriteria::new().require_capability("vision"));
    assert_eq!(score(&model_a(), &strict_cap, 1.0), 0.0);
}

#[test]
fn excluded_model_never_selected_while_another_remains() {
    let a = model_a();
    let b = model_b();
    let candidates = [&a, &b];
    let selected = select_model(&candidates, &low_latency(), &ConstantAvailability(1.0)).unwrap();
    assert_eq!(selected.id, "model-a");
}

#[test]
fn empty_candidates_fail_with_no_models_available() {
    let err = select_model(&[], &low_latency(), &ConstantAvailability(1.0)).unwrap_err();
    assert!(matches!(err, OptimizerError::NoModelsAvailable));
}

#[test]
fn all_excluded_fails_with_no_models_available() {
    let b = model_b();
    let candidates = [&b];
    let err = select_model(&candidates, &low_latency(), &ConstantAvailability(1.0)).unwrap_err();
    assert!(matches!(err, OptimizerError::NoModelsAvailable));
}

// =========================================================================
// Scoring formula
// =========================================================================

#[test]
fn score_is_weighted_sum_of_scaled_terms() {
    let strategy = low_latency();
    // (1/500)*0.6*1000 + (1/0.002)*0.2*1000 + 0.9*0.1*100 + 1.0*0.1*100
    let expected = 1.2 + 100_000.0 + 9.0 + 10.0;
    assert!((score(&model_a(), &strategy, 1.0) - expected).abs() < 1e-9);
}

#[test]
fn availability_scales_with_probe_value() {
    let strategy = RoutingStrategy::new("s").weights(StrategyWeights {
        latency: 0.0,
        cost: 0.0,
        accuracy: 0.0,
        availability: 1.0,
    });
    assert!((score(&model_a(), &strategy, 0.5) - 50.0).abs() < 1e-9);
    assert!((score(&model_a(), &strategy, 1.0) - 100.0).abs() < 1e-9);
}

#[test]
fn preferred_provider_bonus_is_flat_fifty() {
    let base = RoutingStrategy::new("s");
    let preferring = RoutingStrategy::new("s")
        .criteria(StrategyCriteria::new().prefer_provider(Provider::OpenAi));
    let diff = score(&model_a(), &preferring, 1.0) - score(&model_a(), &base, 1.0);
    assert!((diff - 50.0).abs() < 1e-9);
    // Bonus does not apply to other providers.
    assert_eq!(
        score(&model_b(), &preferring, 1.0),
        score(&model_b(), &base, 1.0)
    );
}

#[test]
fn preference_can_flip_selection() {
    // Two otherwise identical models from different providers.
    let mut x = model_a();
    x.id = "x".into();
    let mut y = model_a();
    y.id = "y".into();
    y.provider = Provider::Anthropic;

    let preferring = RoutingStrategy::new("s")
        .criteria(StrategyCriteria::new().prefer_provider(Provider::Anthropic));
    let candidates = [&x, &y];
    let selected = select_model(&candidates, &preferring, &ConstantAvailability(1.0)).unwrap();
    assert_eq!(selected.id, "y");
}

// =========================================================================
// Tie-breaking
// =========================================================================

#[test]
fn identical_scores_resolve_to_lowest_id() {
    let mut first = model_a();
    first.id = "aardvark".into();
    let mut second = model_a();
    second.id = "zebra".into();

    let strategy = RoutingStrategy::new("s");
    let candidates = [&first, &second];
    let selected = select_model(&candidates, &strategy, &ConstantAvailability(1.0)).unwrap();
    assert_eq!(selected.id, "aardvark");

    // Same result regardless of registration history: candidates come
    // from the registry pre-sorted by id.
    let candidates = [&first, &second];
    let selected = select_model(&candidates, &strategy, &ConstantAvailability(1.0)).unwrap();
    assert_eq!(selected.id, "aardvark");
}
