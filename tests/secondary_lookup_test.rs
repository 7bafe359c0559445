// ABOUTME: Integration tests for the pluggable secondary nutrition lookup
// ABOUTME: Swaps the static table for custom lookups and custom tier lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bradley_intelligence::resolver::{ConservativeEstimateResolver, ExactMatchResolver};
use bradley_intelligence::{
    KnowledgeBase, MealEstimator, NutrientResolver, NutritionLookup, StaticNutritionTable,
};
use bradley_nutrition::config::EstimatorConfig;
use bradley_nutrition::models::{FoodProfile, FoodSource, NutrientDensity};
use bradley_nutrition::NutritionEngine;

/// Lookup that knows a single food and counts how often it is asked
struct CountingLookup {
    calls: Arc<AtomicUsize>,
}

impl NutritionLookup for CountingLookup {
    fn lookup(&self, token: &str) -> Option<FoodProfile> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (token == "xyzfoodnoone").then(|| {
            FoodProfile::new("xyzfoodnoone", NutrientDensity::new(30.0, 200.0, 8.0), &[])
        })
    }
}

#[test]
fn test_custom_lookup_replaces_static_table() {
    let calls = Arc::new(AtomicUsize::new(0));
    let lookup = CountingLookup {
        calls: Arc::clone(&calls),
    };
    let engine =
        NutritionEngine::with_lookup(&EstimatorConfig::default(), Box::new(lookup)).unwrap();

    let result = engine.estimate("eggs xyzfoodnoone sandwhich", "");

    let sources: Vec<(&str, FoodSource)> = result
        .foods_found
        .iter()
        .map(|found| (found.food.as_str(), found.source))
        .collect();
    assert_eq!(
        sources,
        vec![
            ("eggs", FoodSource::Database),
            ("xyzfoodnoone", FoodSource::OnlineSearch),
            ("sandwhich", FoodSource::Estimate),
        ]
    );
    // eggs stops at the exact tier
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(result.unrecognized_foods, vec!["sandwhich".to_owned()]);
}

#[test]
fn test_static_table_corrections() {
    let table = StaticNutritionTable::builtin()
        .with_profile(FoodProfile::new(
            "bibimbap",
            NutrientDensity::new(60.0, 150.0, 5.0),
            &[],
        ))
        .with_correction("bibimbop", "bibimbap");

    assert_eq!(table.correct_spelling("brocoli"), "broccoli");
    assert_eq!(table.correct_spelling("bibimbop"), "bibimbap");
    assert_eq!(table.correct_spelling("unknown"), "unknown");
    assert_eq!(
        table.lookup("bibimbop").map(|profile| profile.name),
        Some("bibimbap".to_owned())
    );
    assert!(table.lookup("xyzfoodnoone").is_none());
}

#[test]
fn test_estimator_over_custom_tiers() {
    let knowledge = Arc::new(KnowledgeBase::builtin());
    let tiers: Vec<Box<dyn NutrientResolver>> = vec![
        Box::new(ExactMatchResolver::new(Arc::clone(&knowledge))),
        Box::new(ConservativeEstimateResolver::default()),
    ];
    let estimator = MealEstimator::from_tiers(tiers);

    assert_eq!(estimator.tier_count(), 2);

    // without the category tier bluefish falls through to the estimate
    let result = estimator.estimate("eggs bluefish", "");
    assert_eq!(result.foods_found[1].source, FoodSource::Estimate);
    assert_eq!(result.unrecognized_foods, vec!["bluefish".to_owned()]);
}

#[test]
fn test_default_estimator_has_four_tiers() {
    let estimator = MealEstimator::new(
        &Arc::new(KnowledgeBase::builtin()),
        &EstimatorConfig::default(),
    );

    assert_eq!(estimator.tier_count(), 4);
    assert_eq!(
        estimator.resolve_token("eggs").map(|found| found.source),
        Some(FoodSource::Database)
    );
}
