// ABOUTME: Integration tests for the food knowledge base
// ABOUTME: Covers built-in tables, extra profile files, and profile validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;

use bradley_intelligence::KnowledgeBase;
use bradley_nutrition::config::EstimatorConfig;
use bradley_nutrition::errors::KnowledgeBaseError;
use bradley_nutrition::models::{FoodCategory, FoodProfile, FoodSource, NutrientDensity};
use bradley_nutrition::{EngineError, NutritionEngine};
use tempfile::NamedTempFile;

fn write_foods(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_builtin_tables_are_populated() {
    let knowledge = KnowledgeBase::builtin();

    assert!(knowledge.food_count() > 100);
    assert!(knowledge.food("eggs").is_some());
    assert!(knowledge.food("Eggs").is_none(), "keys are lowercase");

    let order: Vec<FoodCategory> = knowledge
        .categories()
        .iter()
        .map(|entry| entry.profile.category)
        .collect();
    assert_eq!(order, FoodCategory::ALL.to_vec());
}

#[test]
fn test_default_portions() {
    let knowledge = KnowledgeBase::builtin();

    assert!((knowledge.default_portion("milk") - 240.0).abs() < f64::EPSILON);
    assert!((knowledge.default_portion("butter") - 14.0).abs() < f64::EPSILON);
    assert!((knowledge.default_portion("jackfruit") - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_category_lookup_uses_priority_order() {
    let knowledge = KnowledgeBase::builtin();

    let entry = knowledge.match_category("bluefish").unwrap();
    assert_eq!(entry.profile.category, FoodCategory::Fish);
    assert_eq!(entry.matching_pattern("bluefish"), Some("fish"));
    assert!(knowledge.match_category("xyzfoodnoone").is_none());
}

#[test]
fn test_extra_foods_file_adds_exact_matches() {
    let engine = NutritionEngine::new(&EstimatorConfig::default()).unwrap();
    let before = engine.estimate("jackfruit", "");
    assert_eq!(before.foods_found[0].source, FoodSource::Category);

    let file = write_foods(
        r#"[{"name": "Jackfruit", "cholesterol_mg_per_100g": 0.0,
             "calories_per_100g": 95.0, "fat_g_per_100g": 0.6,
             "alternatives": ["banana"]}]"#,
    );
    let engine =
        NutritionEngine::with_extra_foods(&EstimatorConfig::default(), file.path()).unwrap();

    let after = engine.estimate("jackfruit", "");
    assert_eq!(after.foods_found[0].source, FoodSource::Database);
    assert_eq!(after.estimated_calories, 95);
    assert!(engine.knowledge().food("jackfruit").is_some());
}

#[test]
fn test_extra_foods_replace_builtin_profiles() {
    let replacement = FoodProfile::new("eggs", NutrientDensity::new(200.0, 150.0, 10.0), &[]);
    let knowledge = KnowledgeBase::builtin()
        .with_extra_foods(vec![replacement])
        .unwrap();

    let eggs = knowledge.food("eggs").unwrap();
    assert!((eggs.cholesterol_mg_per_100g - 200.0).abs() < f64::EPSILON);
    assert!(eggs.alternatives.is_empty());
}

#[test]
fn test_negative_nutrient_is_rejected() {
    let bad = FoodProfile::new("mystery", NutrientDensity::new(-1.0, 10.0, 1.0), &[]);
    let good = FoodProfile::new("jackfruit", NutrientDensity::new(0.0, 95.0, 0.6), &[]);

    let result = KnowledgeBase::builtin().with_extra_foods(vec![good, bad]);

    match result {
        Err(KnowledgeBaseError::InvalidProfile { name, .. }) => assert_eq!(name, "mystery"),
        other => panic!("expected an invalid profile error, got {other:?}"),
    }
}

#[test]
fn test_empty_name_is_rejected() {
    let file = write_foods(
        r#"[{"name": "  ", "cholesterol_mg_per_100g": 1.0,
             "calories_per_100g": 1.0, "fat_g_per_100g": 1.0}]"#,
    );

    let result = NutritionEngine::with_extra_foods(&EstimatorConfig::default(), file.path());

    assert!(matches!(
        result,
        Err(EngineError::KnowledgeBase(KnowledgeBaseError::InvalidProfile { .. }))
    ));
}

#[test]
fn test_malformed_file_is_a_json_error() {
    let file = write_foods(r#"{"name": "not a list"}"#);

    let result = KnowledgeBase::builtin().extend_from_json_file(file.path());

    assert!(matches!(result, Err(KnowledgeBaseError::Json(_))));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = KnowledgeBase::builtin().extend_from_json_file(dir.path().join("absent.json"));

    assert!(matches!(result, Err(KnowledgeBaseError::Io(_))));
}
