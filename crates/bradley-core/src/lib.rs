// ABOUTME: Core types and constants for the Bradley Health meal nutrient estimator
// ABOUTME: Foundation crate with error types, nutrition models, and cholesterol thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

#![deny(unsafe_code)]

//! # Bradley Core
//!
//! Foundation crate providing shared types and constants for the meal nutrient
//! estimation engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Configuration and knowledge base error types
//! - **constants**: Unit factors, default portions, and cholesterol thresholds
//! - **models**: Food profiles, matches, meal analysis results, and meal records

/// Error types for configuration and knowledge base loading
pub mod errors;

/// Constants organized by domain (portions, cholesterol limits, estimates)
pub mod constants;

/// Core data models (`FoodProfile`, `FoodMatch`, `MealAnalysisResult`, etc.)
pub mod models;
