// ABOUTME: Shared test utilities for meal estimator integration tests
// ABOUTME: Builds engines over the built-in knowledge base and finds matches by food
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
//! Shared test utilities for `bradley_nutrition`

use bradley_nutrition::config::EstimatorConfig;
use bradley_nutrition::models::{FoodMatch, MealAnalysisResult};
use bradley_nutrition::NutritionEngine;

/// Engine over the built-in tables with default configuration
pub fn default_engine() -> NutritionEngine {
    NutritionEngine::new(&EstimatorConfig::default()).expect("default config is valid")
}

/// The match recorded for `food`, panicking if it is missing
pub fn find_food<'a>(result: &'a MealAnalysisResult, food: &str) -> &'a FoodMatch {
    result
        .foods_found
        .iter()
        .find(|found| found.food == food)
        .unwrap_or_else(|| panic!("no match for {food} in {:?}", result.foods_found))
}

/// Float comparison for nutrient values
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
