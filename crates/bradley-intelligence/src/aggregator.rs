// ABOUTME: Accumulates portion-scaled nutrients across the foods of one meal
// ABOUTME: Rounds totals and produces the final MealAnalysisResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

use bradley_core::models::{FoodMatch, FoodSource, MealAnalysisResult};

/// Running totals for one meal
#[derive(Debug, Clone, Default)]
pub struct NutrientAggregator {
    cholesterol_mg: f64,
    calories: f64,
    fat_g: f64,
    foods_found: Vec<FoodMatch>,
    unrecognized_foods: Vec<String>,
}

impl NutrientAggregator {
    /// Start an empty meal
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one resolved food; conservative estimates are also recorded as unrecognized
    pub fn add(&mut self, found: FoodMatch) {
        self.cholesterol_mg += found.cholesterol;
        self.calories += found.calories;
        self.fat_g += found.fat;

        if found.source == FoodSource::Estimate {
            self.unrecognized_foods.push(found.food.clone());
        }
        self.foods_found.push(found);
    }

    /// Round the totals and build the result
    #[must_use]
    pub fn finish(self) -> MealAnalysisResult {
        let has_data = !self.foods_found.is_empty();
        MealAnalysisResult {
            estimated_cholesterol: round_to_whole(self.cholesterol_mg),
            estimated_calories: round_to_whole(self.calories),
            estimated_fat: round_to_tenth(self.fat_g),
            foods_found: self.foods_found,
            unrecognized_foods: self.unrecognized_foods,
            has_data,
        }
    }
}

/// Nearest whole number, clamped at zero
fn round_to_whole(value: f64) -> u32 {
    value.max(0.0).round() as u32
}

/// Nearest tenth, clamped at zero
fn round_to_tenth(value: f64) -> f64 {
    (value.max(0.0) * 10.0).round() / 10.0
}
