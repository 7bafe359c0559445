// ABOUTME: Main library entry point for the Bradley Health meal nutrient estimator
// ABOUTME: Exposes the nutrition engine, configuration, logging, and shared models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

#![deny(unsafe_code)]

//! # Bradley Nutrition
//!
//! Estimates dietary cholesterol, calories, and fat from the free-text name
//! and notes of a logged meal.
//!
//! ## Architecture
//!
//! - **`bradley-core`**: models, error types, and constants
//! - **`bradley-intelligence`**: the estimation pipeline (normalizer, non-food
//!   filter, portion hints, resolver tiers, aggregator, classifier, advice)
//! - **this crate**: the [`NutritionEngine`] facade, logging setup, and the
//!   `meal-estimate` command-line tool
//!
//! ## Example Usage
//!
//! ```rust
//! use bradley_nutrition::config::EstimatorConfig;
//! use bradley_nutrition::engine::{EngineError, NutritionEngine};
//!
//! fn main() -> Result<(), EngineError> {
//!     let engine = NutritionEngine::new(&EstimatorConfig::default())?;
//!     let result = engine.estimate("eggs", "");
//!     assert_eq!(result.estimated_cholesterol, 187);
//!     Ok(())
//! }
//! ```

/// Estimator configuration (re-exported from the intelligence crate)
pub use bradley_intelligence::config;

/// Shared data models
pub use bradley_core::models;

/// Error types for configuration and knowledge base loading
pub use bradley_core::errors;

/// Nutrition engine facade
pub mod engine;

/// Structured logging setup
pub mod logging;

pub use engine::{EngineError, MealEntry, NutritionEngine};
