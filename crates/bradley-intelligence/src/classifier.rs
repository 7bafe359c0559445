// ABOUTME: Daily cholesterol classification against warning and exceeded limits
// ABOUTME: Turns a day's meal estimates into DailyIntake plus a LimitCheck
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

//! Cholesterol classifier.
//!
//! | total (mg)              | status     | compared against |
//! |-------------------------|------------|------------------|
//! | below warning           | `ok`       | warning limit    |
//! | warning..=exceeded      | `warning`  | warning limit    |
//! | above exceeded          | `exceeded` | exceeded limit   |

use bradley_core::models::{CholesterolStatus, DailyIntake, LimitCheck, MealAnalysisResult};
use serde::{Deserialize, Serialize};

use crate::config::CholesterolThresholds;

/// A day's intake together with its classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    /// Summed intake over meals with data
    pub intake: DailyIntake,
    /// Classification of the total cholesterol
    pub limit_check: LimitCheck,
}

/// Classifies daily cholesterol totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CholesterolClassifier {
    thresholds: CholesterolThresholds,
}

impl CholesterolClassifier {
    /// Classifier using the given limits
    #[must_use]
    pub const fn new(thresholds: CholesterolThresholds) -> Self {
        Self { thresholds }
    }

    /// Classify a daily cholesterol total (mg)
    #[must_use]
    pub fn classify(&self, total_mg: u32) -> LimitCheck {
        let CholesterolThresholds {
            warning_at_mg,
            exceeded_above_mg,
        } = self.thresholds;

        if total_mg > exceeded_above_mg {
            let overage = total_mg - exceeded_above_mg;
            LimitCheck {
                status: CholesterolStatus::Exceeded,
                limit: exceeded_above_mg,
                overage: Some(overage),
                remaining: None,
                message: format!(
                    "You've exceeded the daily limit of {exceeded_above_mg}mg by {overage}mg"
                ),
            }
        } else if total_mg >= warning_at_mg {
            LimitCheck {
                status: CholesterolStatus::Warning,
                limit: warning_at_mg,
                overage: Some(total_mg - warning_at_mg),
                remaining: None,
                message: format!(
                    "You're approaching the daily limit of {exceeded_above_mg}mg \
                     ({total_mg}mg so far)"
                ),
            }
        } else {
            let remaining = warning_at_mg - total_mg;
            LimitCheck {
                status: CholesterolStatus::Ok,
                limit: warning_at_mg,
                overage: None,
                remaining: Some(remaining),
                message: format!("Great job! You have {remaining}mg remaining today"),
            }
        }
    }

    /// Sum a day's meal estimates and classify the total
    #[must_use]
    pub fn daily_report(&self, meals: &[MealAnalysisResult]) -> DailyReport {
        let intake = DailyIntake::from_meals(meals);
        DailyReport {
            intake,
            limit_check: self.classify(intake.total_cholesterol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_inclusive_for_warning() {
        let classifier = CholesterolClassifier::default();
        assert_eq!(classifier.classify(199).status, CholesterolStatus::Ok);
        assert_eq!(classifier.classify(200).status, CholesterolStatus::Warning);
        assert_eq!(classifier.classify(240).status, CholesterolStatus::Warning);
        assert_eq!(classifier.classify(241).status, CholesterolStatus::Exceeded);
    }
}
