// ABOUTME: Dietary advice models derived from meal analysis
// ABOUTME: Alternative, Recommendation, and MealSummary definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

use serde::{Deserialize, Serialize};

/// Lower-cholesterol substitute for a known food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// Substitute food name
    pub name: String,
    /// Cholesterol of the substitute (mg per 100g, 0 when unknown)
    pub cholesterol: f64,
    /// Cholesterol saved per 100g by switching
    pub reduction: f64,
}

/// Kind of recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    /// Swap one food for a lower-cholesterol one
    Substitution,
}

/// Suggestion to reduce cholesterol in a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recommendation kind
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    /// Food the recommendation is about
    pub food: String,
    /// Cholesterol contributed by that food in the meal (mg)
    pub cholesterol: f64,
    /// Suggested substitute
    pub alternative: String,
    /// Cholesterol saved per 100g by the substitute (mg)
    pub reduction: f64,
    /// User-facing message
    pub message: String,
}

/// Severity of a meal summary notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarySeverity {
    /// Normal confirmation
    Success,
    /// High-cholesterol meal
    Warning,
}

/// Notification text shown after a meal is logged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    /// Message body
    pub message: String,
    /// Severity used to style the notification
    pub severity: SummarySeverity,
}
