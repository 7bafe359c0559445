// ABOUTME: Cholesterol intake models for daily limit checks and blood readings
// ABOUTME: CholesterolStatus, LimitCheck, DailyIntake, and ReadingStatus definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

use serde::{Deserialize, Serialize};

use super::nutrition::MealAnalysisResult;
use crate::constants::readings::{BORDERLINE_FROM_MG_DL, HIGH_FROM_MG_DL};

/// Daily dietary cholesterol status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CholesterolStatus {
    /// Below the warning threshold
    Ok,
    /// Between the warning and exceeded thresholds (inclusive)
    Warning,
    /// Above the exceeded threshold
    Exceeded,
}

impl CholesterolStatus {
    /// Lowercase status tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Exceeded => "exceeded",
        }
    }
}

/// Result of comparing a daily cholesterol total against the limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitCheck {
    /// Classified status
    pub status: CholesterolStatus,
    /// Limit the total was compared against (mg)
    pub limit: u32,
    /// Amount over `limit` (mg), for warning and exceeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overage: Option<u32>,
    /// Headroom left under `limit` (mg), for ok
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<u32>,
    /// User-facing message
    pub message: String,
}

/// Summed intake over the meals of one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyIntake {
    /// Sum of estimated cholesterol (mg) over meals with data
    pub total_cholesterol: u32,
    /// Sum of estimated calories over meals with data
    pub total_calories: u32,
    /// Number of meals that contributed
    pub meals_with_data: usize,
    /// Rounded mean cholesterol per contributing meal (0 when none)
    pub average_cholesterol_per_meal: u32,
}

impl DailyIntake {
    /// Sum the meals that produced nutrient data; meals without data are skipped
    #[must_use]
    pub fn from_meals<'a, I>(meals: I) -> Self
    where
        I: IntoIterator<Item = &'a MealAnalysisResult>,
    {
        let mut intake = Self::default();
        for meal in meals.into_iter().filter(|meal| meal.has_data) {
            intake.total_cholesterol = intake
                .total_cholesterol
                .saturating_add(meal.estimated_cholesterol);
            intake.total_calories = intake
                .total_calories
                .saturating_add(meal.estimated_calories);
            intake.meals_with_data += 1;
        }

        if intake.meals_with_data > 0 {
            let average = f64::from(intake.total_cholesterol) / intake.meals_with_data as f64;
            intake.average_cholesterol_per_meal = average.round() as u32;
        }

        intake
    }
}

/// Classification of a blood cholesterol reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingStatus {
    /// Below 200 mg/dL
    Optimal,
    /// 200 to 239 mg/dL
    Borderline,
    /// 240 mg/dL and above
    High,
}

impl ReadingStatus {
    /// Classify a total cholesterol reading in mg/dL
    #[must_use]
    pub fn from_mg_dl(value: f64) -> Self {
        if value < BORDERLINE_FROM_MG_DL {
            Self::Optimal
        } else if value < HIGH_FROM_MG_DL {
            Self::Borderline
        } else {
            Self::High
        }
    }
}
