// ABOUTME: Daily roll-up command for meal-estimate
// ABOUTME: Reads a day of meals from JSON, estimates them, and classifies the total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bradley_nutrition::NutritionEngine;
use serde::Deserialize;
use tracing::info;

/// One meal of the daily input file
#[derive(Debug, Deserialize)]
struct DailyMeal {
    name: String,
    #[serde(default)]
    notes: String,
}

/// Estimate every meal in `file` and print the daily report as JSON
pub fn report(engine: &NutritionEngine, file: &Path) -> Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("Failed to read meals from {}", file.display()))?;
    let meals: Vec<DailyMeal> = serde_json::from_str(&raw).with_context(|| {
        format!(
            "Expected a JSON array of {{name, notes}} in {}",
            file.display()
        )
    })?;

    let pairs: Vec<(&str, &str)> = meals
        .iter()
        .map(|meal| (meal.name.as_str(), meal.notes.as_str()))
        .collect();
    let results = engine.estimate_many(&pairs);
    let report = engine.daily_report(&results);

    info!(
        meals = meals.len(),
        with_data = report.intake.meals_with_data,
        status = report.limit_check.status.as_str(),
        "Daily report built"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
