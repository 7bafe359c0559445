// ABOUTME: Lower-cholesterol substitutions and post-logging meal summaries
// ABOUTME: Alternatives lookup, substitution recommendations, and summary messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

//! Cholesterol advice.
//!
//! Alternatives come from the exact-match table only. The reduction of an
//! alternative is the difference of the two per-100g cholesterol values; an
//! alternative that is not itself in the table counts as 0 mg.

use std::sync::Arc;

use bradley_core::models::{
    Alternative, FoodMatch, MealAnalysisResult, MealSummary, Recommendation, RecommendationType,
    SummarySeverity,
};

use crate::config::AdviceConfig;
use crate::knowledge::KnowledgeBase;

/// Produces substitutions and meal summaries from the knowledge base
#[derive(Debug, Clone)]
pub struct CholesterolAdvisor {
    knowledge: Arc<KnowledgeBase>,
    config: AdviceConfig,
}

impl CholesterolAdvisor {
    /// Create an advisor over a shared knowledge base
    #[must_use]
    pub const fn new(knowledge: Arc<KnowledgeBase>, config: AdviceConfig) -> Self {
        Self { knowledge, config }
    }

    /// Lower-cholesterol substitutes for a food, in table order
    ///
    /// Unknown foods and alternatives that would not reduce cholesterol are
    /// left out.
    #[must_use]
    pub fn alternatives(&self, food: &str) -> Vec<Alternative> {
        let name = food.trim().to_lowercase();
        let Some(profile) = self.knowledge.food(&name) else {
            return Vec::new();
        };

        profile
            .alternatives
            .iter()
            .map(|alternative| {
                let cholesterol = self
                    .knowledge
                    .food(alternative)
                    .map_or(0.0, |alt| alt.cholesterol_mg_per_100g);
                Alternative {
                    name: alternative.clone(),
                    cholesterol,
                    reduction: profile.cholesterol_mg_per_100g - cholesterol,
                }
            })
            .filter(|alternative| alternative.reduction > 0.0)
            .collect()
    }

    /// One substitution per high-cholesterol match that has an alternative
    #[must_use]
    pub fn recommendations(&self, matches: &[FoodMatch]) -> Vec<Recommendation> {
        matches
            .iter()
            .filter(|found| found.cholesterol > self.config.high_cholesterol_food_mg)
            .filter_map(|found| {
                let best = self.alternatives(&found.food).into_iter().next()?;
                Some(Recommendation {
                    kind: RecommendationType::Substitution,
                    message: format!(
                        "Replace {} with {} to reduce cholesterol by {}mg",
                        found.food, best.name, best.reduction
                    ),
                    food: found.food.clone(),
                    cholesterol: found.cholesterol,
                    alternative: best.name,
                    reduction: best.reduction,
                })
            })
            .collect()
    }

    /// User-facing summary shown after a meal is logged
    #[must_use]
    pub fn meal_summary(&self, result: &MealAnalysisResult) -> MealSummary {
        if !result.has_data {
            return MealSummary {
                message: "Meal logged successfully".to_owned(),
                severity: SummarySeverity::Success,
            };
        }

        let mut message = format!(
            "Meal logged! Estimated: {} cal, {}mg cholesterol",
            result.estimated_calories, result.estimated_cholesterol
        );

        if result.estimated_cholesterol > self.config.meal_tip_above_mg {
            if let Some(tip) = self.recommendations(&result.foods_found).first() {
                message.push_str("\nTip: ");
                message.push_str(&tip.message);
            }
        }

        let severity = if result.estimated_cholesterol > self.config.meal_warning_above_mg {
            SummarySeverity::Warning
        } else {
            SummarySeverity::Success
        };

        MealSummary { message, severity }
    }
}
