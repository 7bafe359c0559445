// ABOUTME: Core data models for meal nutrient estimation
// ABOUTME: Re-exports food profiles, matches, analysis results, advice, and meal records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

//! # Data Models
//!
//! - `FoodProfile` / `CategoryProfile`: per-100g nutrient records in the knowledge base
//! - `FoodMatch`: one resolved token with portion-scaled nutrients and its source tier
//! - `MealAnalysisResult`: the estimate for one meal description
//! - `DailyIntake` / `LimitCheck`: daily totals and their classification
//! - `MealRecord`: the persisted meal envelope

mod advice;
mod cholesterol;
mod meal;
mod nutrition;

// Nutrition domain
pub use nutrition::{
    CategoryProfile, FoodCategory, FoodMatch, FoodProfile, FoodSource, MealAnalysisResult,
    NutrientDensity,
};

// Cholesterol intake and readings
pub use cholesterol::{CholesterolStatus, DailyIntake, LimitCheck, ReadingStatus};

// Advice derived from analysis
pub use advice::{Alternative, MealSummary, Recommendation, RecommendationType, SummarySeverity};

// Persistence envelope
pub use meal::{MealRecord, MealType};
