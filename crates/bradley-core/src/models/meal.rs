// ABOUTME: Meal record envelope handed to the persistence collaborator
// ABOUTME: MealType and MealRecord definitions with the attached analysis fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nutrition::{FoodMatch, MealAnalysisResult};

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Standalone drink
    Drink,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            "drink" => Self::Drink,
            _ => Self::Other,
        }
    }
}

/// Meal as stored by the persistence layer
///
/// Caller-supplied fields travel unchanged; the analysis fields are copied
/// from a [`MealAnalysisResult`]. `unrecognized_foods` is kept so history
/// views can flag unknown foods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRecord {
    /// Meal name as typed by the user
    pub name: String,
    /// Meal type
    #[serde(rename = "type")]
    pub meal_type: MealType,
    /// Calendar date (`YYYY-MM-DD`) as entered
    pub date: String,
    /// Time of day (`HH:MM`) as entered
    pub time: String,
    /// Free-text notes
    #[serde(default)]
    pub notes: String,
    /// When the meal was eaten
    pub timestamp: DateTime<Utc>,
    /// Estimated cholesterol (mg)
    pub estimated_cholesterol: u32,
    /// Estimated calories
    pub estimated_calories: u32,
    /// Estimated fat (g)
    pub estimated_fat: f64,
    /// Resolved foods with their source tags
    pub foods_found: Vec<FoodMatch>,
    /// Tokens resolved by conservative estimate
    #[serde(default)]
    pub unrecognized_foods: Vec<String>,
    /// Whether any food was resolved
    pub has_nutrition_data: bool,
}

impl MealRecord {
    /// Attach an analysis result to caller-supplied meal fields
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        meal_type: MealType,
        date: impl Into<String>,
        time: impl Into<String>,
        notes: impl Into<String>,
        timestamp: DateTime<Utc>,
        analysis: MealAnalysisResult,
    ) -> Self {
        Self {
            name: name.into(),
            meal_type,
            date: date.into(),
            time: time.into(),
            notes: notes.into(),
            timestamp,
            estimated_cholesterol: analysis.estimated_cholesterol,
            estimated_calories: analysis.estimated_calories,
            estimated_fat: analysis.estimated_fat,
            foods_found: analysis.foods_found,
            unrecognized_foods: analysis.unrecognized_foods,
            has_nutrition_data: analysis.has_data,
        }
    }

    /// Rebuild the analysis view of a stored record
    #[must_use]
    pub fn analysis(&self) -> MealAnalysisResult {
        MealAnalysisResult {
            estimated_cholesterol: self.estimated_cholesterol,
            estimated_calories: self.estimated_calories,
            estimated_fat: self.estimated_fat,
            foods_found: self.foods_found.clone(),
            unrecognized_foods: self.unrecognized_foods.clone(),
            has_data: self.has_nutrition_data,
        }
    }
}
