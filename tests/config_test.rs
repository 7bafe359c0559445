// ABOUTME: Integration tests for estimator configuration
// ABOUTME: Covers environment overrides, validation, and engine construction errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bradley_nutrition::config::EstimatorConfig;
use bradley_nutrition::errors::ConfigError;
use bradley_nutrition::{EngineError, NutritionEngine};
use serial_test::serial;
use std::env;
use std::ptr;

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    let config = EstimatorConfig::load().unwrap();
    let defaults = EstimatorConfig::default();

    assert_eq!(config.thresholds, defaults.thresholds);
    assert!((config.portions.default_portion_grams - 100.0).abs() < f64::EPSILON);
    assert_eq!(config.conservative.min_token_chars, 2);
}

#[test]
#[serial]
fn test_environment_overrides_are_applied() {
    env::set_var("MEAL_ESTIMATOR_WARNING_AT_MG", "180");
    env::set_var("MEAL_ESTIMATOR_EXCEEDED_ABOVE_MG", " 300 ");
    env::set_var("MEAL_ESTIMATOR_CONSERVATIVE_PORTION_GRAMS", "80");

    let config = EstimatorConfig::load();

    env::remove_var("MEAL_ESTIMATOR_WARNING_AT_MG");
    env::remove_var("MEAL_ESTIMATOR_EXCEEDED_ABOVE_MG");
    env::remove_var("MEAL_ESTIMATOR_CONSERVATIVE_PORTION_GRAMS");

    let config = config.unwrap();
    assert_eq!(config.thresholds.warning_at_mg, 180);
    assert_eq!(config.thresholds.exceeded_above_mg, 300);
    assert!((config.conservative.portion_grams - 80.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    env::set_var("MEAL_ESTIMATOR_MIN_TOKEN_CHARS", "two");
    let config = EstimatorConfig::load();
    env::remove_var("MEAL_ESTIMATOR_MIN_TOKEN_CHARS");

    assert!(matches!(config, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_overrides_are_validated() {
    env::set_var("MEAL_ESTIMATOR_WARNING_AT_MG", "260");
    let config = EstimatorConfig::load();
    env::remove_var("MEAL_ESTIMATOR_WARNING_AT_MG");

    assert!(matches!(config, Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_engine_rejects_invalid_config() {
    let mut config = EstimatorConfig::default();
    config.portions.default_portion_grams = 0.0;

    let result = NutritionEngine::new(&config);

    assert!(matches!(
        result,
        Err(EngineError::Config(ConfigError::ValueOutOfRange(_)))
    ));
}

#[test]
fn test_conservative_profile_follows_config() {
    let mut config = EstimatorConfig::default();
    config.conservative.portion_grams = 100.0;
    let engine = NutritionEngine::new(&config).unwrap();

    let result = engine.estimate("xyzfoodnoone", "");

    assert_eq!(result.estimated_cholesterol, 10);
    assert_eq!(result.estimated_calories, 50);
}

#[test]
fn test_min_token_chars_drops_short_unknowns() {
    let mut config = EstimatorConfig::default();
    config.conservative.min_token_chars = 4;
    let engine = NutritionEngine::new(&config).unwrap();

    let result = engine.estimate("zzz", "");

    assert!(!result.has_data);
    assert!(result.unrecognized_foods.is_empty());
}

#[test]
fn test_fallback_portion_follows_config() {
    let mut config = EstimatorConfig::default();
    config.portions.default_portion_grams = 200.0;
    let engine = NutritionEngine::new(&config).unwrap();

    let result = engine.estimate("bluefish", "");

    assert_eq!(result.estimated_cholesterol, 100);
    assert!((result.foods_found[0].portion_grams - 200.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_global_config_is_valid() {
    let config = EstimatorConfig::global();

    assert!(config.validate().is_ok());
    assert!(ptr::eq(config, EstimatorConfig::global()));
}
