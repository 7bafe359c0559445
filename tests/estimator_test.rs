// ABOUTME: Integration tests for meal text estimation
// ABOUTME: Covers tier selection, dedup, portions, rounding, and batch estimation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use bradley_nutrition::models::{FoodCategory, FoodSource};
use bradley_nutrition::NutritionEngine;
use common::{assert_close, default_engine, find_food};

#[test]
fn test_empty_meal_has_no_data() {
    let engine = default_engine();
    let result = engine.estimate("", "");

    assert_eq!(result.estimated_cholesterol, 0);
    assert_eq!(result.estimated_calories, 0);
    assert_close(result.estimated_fat, 0.0);
    assert!(result.foods_found.is_empty());
    assert!(result.unrecognized_foods.is_empty());
    assert!(!result.has_data);
}

#[test]
fn test_all_filtered_meal_has_no_data() {
    let engine = default_engine();
    let result = engine.estimate("I had a", "with the 2 of them today");

    assert!(!result.has_data);
    assert!(result.unrecognized_foods.is_empty());
}

#[test]
fn test_eggs_resolve_from_database_with_default_portion() {
    let engine = default_engine();
    let result = engine.estimate("eggs", "");

    assert_eq!(result.estimated_cholesterol, 187);
    assert_eq!(result.estimated_calories, 78);
    assert_close(result.estimated_fat, 5.7);
    assert_eq!(result.foods_found.len(), 1);

    let eggs = &result.foods_found[0];
    assert_eq!(eggs.food, "eggs");
    assert_close(eggs.portion_grams, 50.0);
    assert_eq!(eggs.source, FoodSource::Database);
    assert!(eggs.category.is_none());
    assert!(result.has_data);
}

#[test]
fn test_repeated_token_counts_once() {
    let engine = default_engine();
    let result = engine.estimate("egg egg egg", "");

    assert_eq!(result.foods_found.len(), 1);
    assert_eq!(result.foods_found[0].food, "egg");
    assert_eq!(result.estimated_cholesterol, 187);
}

#[test]
fn test_repeats_across_name_and_notes_count_once() {
    let engine = default_engine();
    let once = engine.estimate("eggs", "");
    let twice = engine.estimate("Eggs", "more eggs");

    assert_eq!(once, twice);
}

#[test]
fn test_conjunction_is_filtered() {
    let engine = default_engine();
    let result = engine.estimate("eggs and cheese", "");

    assert_eq!(result.estimated_cholesterol, 218);
    assert_eq!(result.estimated_calories, 198);
    assert_close(result.estimated_fat, 15.6);
    assert_eq!(result.foods_found.len(), 2);
    assert!(result.foods_found.iter().all(|found| found.food != "and"));
    assert_close(find_food(&result, "cheese").portion_grams, 30.0);
}

#[test]
fn test_category_pattern_match() {
    let engine = default_engine();
    let result = engine.estimate("bluefish sandwich", "");

    let bluefish = find_food(&result, "bluefish");
    assert_eq!(bluefish.source, FoodSource::Category);
    assert_eq!(bluefish.category, Some(FoodCategory::Fish));
    assert_close(bluefish.portion_grams, 100.0);
    assert_close(bluefish.cholesterol, 50.0);

    let sandwich = find_food(&result, "sandwich");
    assert_eq!(sandwich.source, FoodSource::Database);
    assert_eq!(result.estimated_cholesterol, 100);
    assert!(result.unrecognized_foods.is_empty());
}

#[test]
fn test_secondary_table_dish_resolves_after_category_miss() {
    let engine = default_engine();
    let result = engine.estimate("bluefish burrito", "");

    assert_eq!(find_food(&result, "bluefish").source, FoodSource::Category);

    let burrito = find_food(&result, "burrito");
    assert_eq!(burrito.source, FoodSource::OnlineSearch);
    assert!(burrito.category.is_none());
    assert_close(burrito.portion_grams, 100.0);
    assert_close(burrito.cholesterol, 15.0);
    assert_eq!(result.estimated_cholesterol, 65);
}

#[test]
fn test_exact_match_beats_category_pattern() {
    let engine = default_engine();
    let result = engine.estimate("tea", "");

    let tea = find_food(&result, "tea");
    assert_eq!(tea.source, FoodSource::Database);
    assert!(tea.category.is_none());
}

#[test]
fn test_misspelling_resolves_to_corrected_name() {
    let engine = default_engine();
    let result = engine.estimate("turkey sandwhich", "");

    let sandwich = find_food(&result, "sandwich");
    assert_eq!(sandwich.source, FoodSource::OnlineSearch);
    assert_close(sandwich.portion_grams, 100.0);
    assert_close(sandwich.cholesterol, 50.0);
    assert!(result.foods_found.iter().all(|found| found.food != "sandwhich"));
}

#[test]
fn test_unknown_tokens_use_conservative_estimate() {
    let engine = default_engine();
    let result = engine.estimate("xyzfoodnoone knows", "");

    assert_eq!(result.foods_found.len(), 2);
    for found in &result.foods_found {
        assert_eq!(found.source, FoodSource::Estimate);
        assert_close(found.portion_grams, 50.0);
        assert_close(found.cholesterol, 5.0);
    }
    assert_eq!(
        result.unrecognized_foods,
        vec!["xyzfoodnoone".to_owned(), "knows".to_owned()]
    );
    assert_eq!(result.estimated_cholesterol, 10);
    assert_eq!(result.estimated_calories, 50);
    assert_close(result.estimated_fat, 2.0);
}

#[test]
fn test_portion_hint_is_consumed_without_binding() {
    let engine = default_engine();
    let result = engine.estimate("eggs 3pieces", "");

    assert_eq!(result.foods_found.len(), 1);
    assert_close(result.foods_found[0].portion_grams, 50.0);
    assert!(result.unrecognized_foods.is_empty());
}

#[test]
fn test_spelled_out_grams_are_consumed_as_hint() {
    let engine = default_engine();
    let result = engine.estimate("eggs 100grams", "2oz");

    assert_eq!(result, engine.estimate("eggs", ""));
    assert!(result.unrecognized_foods.is_empty());
}

#[test]
fn test_label_amounts_and_asides_are_stripped() {
    let engine = default_engine();
    let plain = engine.estimate("eggs", "");
    let noisy = engine.estimate("Eggs (scrambled, 2 large)", "[200mg] 90cal");

    assert_eq!(plain, noisy);
}

#[test]
fn test_sentence_punctuation_does_not_block_matches() {
    let engine = default_engine();
    let result = engine.estimate("Eggs, cheese.", "");

    assert_eq!(result.estimated_cholesterol, 218);
    assert!(result.unrecognized_foods.is_empty());
}

#[test]
fn test_unicode_dashes_and_ellipses_are_not_foods() {
    let engine = default_engine();
    let result = engine.estimate("eggs", "\u{2014}\u{2014} \u{2026}\u{2026}");

    assert_eq!(result, engine.estimate("eggs", ""));
    assert!(result.unrecognized_foods.is_empty());
}

#[test]
fn test_sources_are_kept_per_match() {
    let engine = default_engine();
    let result = engine.estimate("eggs bluefish sandwhich zorp", "");

    let sources: Vec<FoodSource> = result.foods_found.iter().map(|found| found.source).collect();
    assert_eq!(
        sources,
        vec![
            FoodSource::Database,
            FoodSource::Category,
            FoodSource::OnlineSearch,
            FoodSource::Estimate,
        ]
    );
    assert_eq!(result.foods_from(FoodSource::Estimate).count(), 1);
}

#[test]
fn test_estimate_is_deterministic() {
    let engine = default_engine();
    let first = engine.estimate("Salmon with rice and broccoli", "large portion, mayo");
    for _ in 0..10 {
        assert_eq!(
            engine.estimate("Salmon with rice and broccoli", "large portion, mayo"),
            first
        );
    }
}

#[test]
fn test_totals_are_never_negative() {
    let engine = default_engine();
    for meal in ["", "water", "!!!", "zz", "beef burger with fries", "???  ..."] {
        let result = engine.estimate(meal, meal);
        assert!(result.estimated_fat >= 0.0);
        assert_eq!(result.has_data, !result.foods_found.is_empty());
    }
}

#[test]
fn test_estimate_many_preserves_order() {
    let engine = default_engine();
    let meals = vec![
        ("eggs", ""),
        ("", ""),
        ("eggs and cheese", ""),
        ("xyzfoodnoone", "knows"),
    ];

    let batch = engine.estimate_many(&meals);

    assert_eq!(batch.len(), meals.len());
    for ((name, notes), result) in meals.iter().zip(&batch) {
        assert_eq!(result, &engine.estimate(name, notes));
    }
}

#[test]
fn test_engine_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NutritionEngine>();
}
