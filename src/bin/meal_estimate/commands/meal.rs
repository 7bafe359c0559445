// ABOUTME: Single-meal commands for meal-estimate
// ABOUTME: Estimates one meal and lists lower-cholesterol alternatives for a food
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

use anyhow::Result;
use bradley_nutrition::NutritionEngine;
use tracing::info;

use crate::helpers::display::{display_alternatives, display_analysis};
use crate::OutputFormat;

/// Estimate one meal and print the analysis
pub fn estimate(
    engine: &NutritionEngine,
    name: &str,
    notes: &str,
    format: OutputFormat,
) -> Result<()> {
    let result = engine.estimate(name, notes);
    info!(
        meal = name,
        cholesterol = result.estimated_cholesterol,
        foods = result.foods_found.len(),
        "Meal estimated"
    );

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            let summary = engine.meal_summary(&result);
            display_analysis(&result, &summary);
        }
    }

    Ok(())
}

/// Print the known lower-cholesterol alternatives for a food
pub fn alternatives(engine: &NutritionEngine, food: &str) {
    let alternatives = engine.alternatives(food);
    if alternatives.is_empty() {
        info!(food, "No lower-cholesterol alternatives known");
    }
    display_alternatives(food, &alternatives);
}
