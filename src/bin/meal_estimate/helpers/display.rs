// ABOUTME: Output formatting helpers for meal-estimate
// ABOUTME: Text rendering of meal analyses and alternative lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

use bradley_nutrition::models::{Alternative, MealAnalysisResult, MealSummary};

/// Print a meal analysis as an aligned table followed by its summary
pub fn display_analysis(result: &MealAnalysisResult, summary: &MealSummary) {
    println!(
        "{:<20} {:>8} {:>12} {:>10} {:>8}  source",
        "food", "grams", "chol (mg)", "kcal", "fat (g)"
    );
    println!("{}", "-".repeat(80));
    for found in &result.foods_found {
        println!(
            "{:<20} {:>8.0} {:>12.1} {:>10.1} {:>8.1}  {}",
            found.food,
            found.portion_grams,
            found.cholesterol,
            found.calories,
            found.fat,
            found.source
        );
    }
    println!("{}", "-".repeat(80));
    println!(
        "{:<20} {:>8} {:>12} {:>10} {:>8.1}",
        "total",
        "",
        result.estimated_cholesterol,
        result.estimated_calories,
        result.estimated_fat
    );

    if !result.unrecognized_foods.is_empty() {
        println!(
            "\nEstimated (not recognized): {}",
            result.unrecognized_foods.join(", ")
        );
    }

    println!("\n{}", summary.message);
}

/// Print the alternatives for a food, best reduction first as given
pub fn display_alternatives(food: &str, alternatives: &[Alternative]) {
    if alternatives.is_empty() {
        println!("No lower-cholesterol alternatives known for {food}");
        return;
    }

    println!("Lower-cholesterol alternatives for {food}:");
    for alternative in alternatives {
        println!(
            "   {:<24} {:>6.0} mg/100g  (saves {:.0} mg/100g)",
            alternative.name, alternative.cholesterol, alternative.reduction
        );
    }
}
