// ABOUTME: Nutrition models for meal-text analysis
// ABOUTME: FoodProfile, CategoryProfile, FoodMatch, FoodSource, and MealAnalysisResult definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::constants::portions::PROFILE_BASIS_GRAMS;

/// Nutrient content per 100 grams of a food
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientDensity {
    /// Cholesterol (mg per 100g)
    pub cholesterol_mg: f64,
    /// Energy (kcal per 100g)
    pub calories: f64,
    /// Fat (g per 100g)
    pub fat_g: f64,
}

impl NutrientDensity {
    /// Create a density from per-100g values
    #[must_use]
    pub const fn new(cholesterol_mg: f64, calories: f64, fat_g: f64) -> Self {
        Self {
            cholesterol_mg,
            calories,
            fat_g,
        }
    }

    /// Nutrients contained in `portion_grams` of this food, as
    /// `(cholesterol_mg, calories, fat_g)`
    #[must_use]
    pub fn scaled(&self, portion_grams: f64) -> (f64, f64, f64) {
        (
            self.cholesterol_mg * portion_grams / PROFILE_BASIS_GRAMS,
            self.calories * portion_grams / PROFILE_BASIS_GRAMS,
            self.fat_g * portion_grams / PROFILE_BASIS_GRAMS,
        )
    }
}

/// Per-100g nutrient record for one named food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodProfile {
    /// Canonical lowercase food name
    pub name: String,
    /// Cholesterol (mg per 100g)
    pub cholesterol_mg_per_100g: f64,
    /// Energy (kcal per 100g)
    pub calories_per_100g: f64,
    /// Fat (g per 100g)
    pub fat_g_per_100g: f64,
    /// Lower-cholesterol substitutes, best first
    #[serde(default)]
    pub alternatives: Vec<String>,
}

impl FoodProfile {
    /// Build a profile from static table data
    #[must_use]
    pub fn new(name: &str, density: NutrientDensity, alternatives: &[&str]) -> Self {
        Self {
            name: name.to_lowercase(),
            cholesterol_mg_per_100g: density.cholesterol_mg,
            calories_per_100g: density.calories,
            fat_g_per_100g: density.fat_g,
            alternatives: alternatives.iter().map(|alt| (*alt).to_owned()).collect(),
        }
    }

    /// Per-100g nutrient content
    #[must_use]
    pub const fn density(&self) -> NutrientDensity {
        NutrientDensity::new(
            self.cholesterol_mg_per_100g,
            self.calories_per_100g,
            self.fat_g_per_100g,
        )
    }
}

/// Coarse food category used when no exact profile matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    /// Red meat, poultry, and processed meat
    Meat,
    /// Fish and seafood
    Fish,
    /// Milk, cheese, and other dairy
    Dairy,
    /// Vegetables
    Vegetable,
    /// Fruits
    Fruit,
    /// Grains, breads, and pasta
    Grain,
    /// Nuts, seeds, and spices
    Nut,
    /// Desserts, sweets, and sweet drinks
    Dessert,
    /// Other beverages
    Beverage,
}

impl FoodCategory {
    /// All categories in pattern-matching priority order
    pub const ALL: [Self; 9] = [
        Self::Meat,
        Self::Fish,
        Self::Dairy,
        Self::Vegetable,
        Self::Fruit,
        Self::Grain,
        Self::Nut,
        Self::Dessert,
        Self::Beverage,
    ];

    /// Lowercase category name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meat => "meat",
            Self::Fish => "fish",
            Self::Dairy => "dairy",
            Self::Vegetable => "vegetable",
            Self::Fruit => "fruit",
            Self::Grain => "grain",
            Self::Nut => "nut",
            Self::Dessert => "dessert",
            Self::Beverage => "beverage",
        }
    }
}

impl Display for FoodCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Per-100g nutrient record representing a whole food category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProfile {
    /// Category this profile stands in for
    pub category: FoodCategory,
    /// Cholesterol (mg per 100g)
    pub cholesterol_mg_per_100g: f64,
    /// Energy (kcal per 100g)
    pub calories_per_100g: f64,
    /// Fat (g per 100g)
    pub fat_g_per_100g: f64,
    /// Generic substitutes for foods in this category
    pub alternatives: Vec<String>,
}

impl CategoryProfile {
    /// Build a category profile from static table data
    #[must_use]
    pub fn new(category: FoodCategory, density: NutrientDensity, alternatives: &[&str]) -> Self {
        Self {
            category,
            cholesterol_mg_per_100g: density.cholesterol_mg,
            calories_per_100g: density.calories,
            fat_g_per_100g: density.fat_g,
            alternatives: alternatives.iter().map(|alt| (*alt).to_owned()).collect(),
        }
    }

    /// Per-100g nutrient content
    #[must_use]
    pub const fn density(&self) -> NutrientDensity {
        NutrientDensity::new(
            self.cholesterol_mg_per_100g,
            self.calories_per_100g,
            self.fat_g_per_100g,
        )
    }
}

/// Resolution tier that produced a food match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodSource {
    /// Exact match in the food profile table
    Database,
    /// Substring match against a category's patterns
    Category,
    /// Secondary lookup table (named for the pluggable external lookup)
    OnlineSearch,
    /// Conservative default for unrecognized tokens
    Estimate,
}

impl FoodSource {
    /// Tag stored alongside persisted matches
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Category => "category",
            Self::OnlineSearch => "online_search",
            Self::Estimate => "estimate",
        }
    }
}

impl Display for FoodSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// One resolved food mention with its portion-scaled nutrients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodMatch {
    /// Food name as resolved (the token, or its corrected spelling)
    pub food: String,
    /// Portion attributed to this mention (grams)
    pub portion_grams: f64,
    /// Cholesterol in this portion (mg)
    pub cholesterol: f64,
    /// Energy in this portion (kcal)
    pub calories: f64,
    /// Fat in this portion (g)
    pub fat: f64,
    /// Tier that resolved the token
    pub source: FoodSource,
    /// Category name when resolved by category pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<FoodCategory>,
}

impl FoodMatch {
    /// Scale a per-100g density to the given portion
    #[must_use]
    pub fn scaled(
        food: impl Into<String>,
        density: NutrientDensity,
        portion_grams: f64,
        source: FoodSource,
    ) -> Self {
        let (cholesterol, calories, fat) = density.scaled(portion_grams);
        Self {
            food: food.into(),
            portion_grams,
            cholesterol,
            calories,
            fat,
            source,
            category: None,
        }
    }

    /// Attach the category that produced this match
    #[must_use]
    pub fn with_category(mut self, category: FoodCategory) -> Self {
        self.category = Some(category);
        self
    }
}

/// Nutrient estimate for one meal description
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealAnalysisResult {
    /// Total cholesterol (mg, rounded)
    pub estimated_cholesterol: u32,
    /// Total energy (kcal, rounded)
    pub estimated_calories: u32,
    /// Total fat (g, one decimal)
    pub estimated_fat: f64,
    /// One entry per resolved token
    pub foods_found: Vec<FoodMatch>,
    /// Raw tokens that fell through to the conservative estimate
    pub unrecognized_foods: Vec<String>,
    /// True iff `foods_found` is non-empty
    pub has_data: bool,
}

impl MealAnalysisResult {
    /// Matches produced by the given tier, in input order
    pub fn foods_from(&self, source: FoodSource) -> impl Iterator<Item = &FoodMatch> {
        self.foods_found
            .iter()
            .filter(move |found| found.source == source)
    }
}
