// ABOUTME: Meal-text nutrient estimation engine for Bradley Health
// ABOUTME: Normalizer, non-food filter, portions, tiered resolvers, aggregation, and advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

#![deny(unsafe_code)]

//! # Bradley Intelligence
//!
//! Estimates dietary cholesterol, calories, and fat from a free-text meal
//! description:
//!
//! ```text
//! name + notes -> normalizer -> non-food filter -> portion hints
//!              -> resolver tiers (exact, category, secondary, estimate)
//!              -> aggregator -> MealAnalysisResult
//! ```
//!
//! The knowledge base is immutable and shared; estimation is pure and safe to
//! run concurrently.

/// Cholesterol advice (alternatives, recommendations, meal summaries)
pub mod advice;
/// Running nutrient totals for one meal
pub mod aggregator;
/// Daily cholesterol classification
pub mod classifier;
/// Estimator configuration
pub mod config;
/// Meal estimator pipeline
pub mod estimator;
/// Food, category, and portion tables
pub mod knowledge;
/// Non-food token filter
pub mod non_food;
/// Meal text normalization
pub mod normalizer;
/// Portion hints and default portions
pub mod portion;
/// Nutrient resolver tiers
pub mod resolver;

pub use advice::CholesterolAdvisor;
pub use classifier::{CholesterolClassifier, DailyReport};
pub use config::EstimatorConfig;
pub use estimator::MealEstimator;
pub use knowledge::KnowledgeBase;
pub use resolver::{NutrientResolver, NutritionLookup, StaticNutritionTable};
