// ABOUTME: Nutrition engine facade bundling estimator, advisor, and classifier
// ABOUTME: Builds the shared knowledge base once from configuration and optional extra foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

//! Nutrition engine.
//!
//! [`NutritionEngine`] is the entry point used by the persistence collaborator
//! and the command-line tool. It owns one immutable [`KnowledgeBase`] and the
//! components built on it.

use std::path::Path;
use std::sync::Arc;

use bradley_core::errors::{ConfigError, KnowledgeBaseError};
use bradley_core::models::{
    Alternative, FoodMatch, MealAnalysisResult, MealRecord, MealSummary, MealType, Recommendation,
};
use bradley_intelligence::config::EstimatorConfig;
use bradley_intelligence::{
    CholesterolAdvisor, CholesterolClassifier, DailyReport, KnowledgeBase, MealEstimator,
    NutritionLookup,
};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

/// Errors raised while building the engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration failed to load or validate
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Extra food profiles could not be loaded
    #[error("Knowledge base error: {0}")]
    KnowledgeBase(#[from] KnowledgeBaseError),
}

/// Caller-supplied fields of a meal being logged
#[derive(Debug, Clone)]
pub struct MealEntry<'a> {
    /// Meal name as typed
    pub name: &'a str,
    /// Meal type
    pub meal_type: MealType,
    /// Calendar date (`YYYY-MM-DD`)
    pub date: &'a str,
    /// Time of day (`HH:MM`)
    pub time: &'a str,
    /// Free-text notes
    pub notes: &'a str,
    /// When the meal was eaten
    pub timestamp: DateTime<Utc>,
}

/// Meal estimator with advice and daily classification over one knowledge base
#[derive(Debug)]
pub struct NutritionEngine {
    knowledge: Arc<KnowledgeBase>,
    estimator: MealEstimator,
    advisor: CholesterolAdvisor,
    classifier: CholesterolClassifier,
}

impl NutritionEngine {
    /// Engine over the built-in knowledge base
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: &EstimatorConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::from_knowledge(base_knowledge(config), config))
    }

    /// Engine over the built-in knowledge base extended from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the file cannot be loaded
    pub fn with_extra_foods(
        config: &EstimatorConfig,
        path: impl AsRef<Path>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let knowledge = base_knowledge(config).extend_from_json_file(path)?;
        Ok(Self::from_knowledge(knowledge, config))
    }

    /// Engine using a custom secondary lookup in place of the static table
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn with_lookup(
        config: &EstimatorConfig,
        lookup: Box<dyn NutritionLookup>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let knowledge = Arc::new(base_knowledge(config));
        let estimator = MealEstimator::with_lookup(&knowledge, config, lookup);
        Ok(Self::assemble(knowledge, estimator, config))
    }

    fn from_knowledge(knowledge: KnowledgeBase, config: &EstimatorConfig) -> Self {
        let knowledge = Arc::new(knowledge);
        let estimator = MealEstimator::new(&knowledge, config);
        Self::assemble(knowledge, estimator, config)
    }

    fn assemble(
        knowledge: Arc<KnowledgeBase>,
        estimator: MealEstimator,
        config: &EstimatorConfig,
    ) -> Self {
        info!(
            foods = knowledge.food_count(),
            tiers = estimator.tier_count(),
            "Nutrition engine ready"
        );
        Self {
            advisor: CholesterolAdvisor::new(Arc::clone(&knowledge), config.advice.clone()),
            classifier: CholesterolClassifier::new(config.thresholds),
            knowledge,
            estimator,
        }
    }

    /// Estimate one meal
    #[must_use]
    pub fn estimate(&self, meal_name: &str, meal_notes: &str) -> MealAnalysisResult {
        self.estimator.estimate(meal_name, meal_notes)
    }

    /// Estimate many meals in parallel, preserving input order
    #[must_use]
    pub fn estimate_many<N, M>(&self, meals: &[(N, M)]) -> Vec<MealAnalysisResult>
    where
        N: AsRef<str> + Sync,
        M: AsRef<str> + Sync,
    {
        self.estimator.estimate_many(meals)
    }

    /// Estimate a meal and wrap it in the persistence envelope
    #[must_use]
    pub fn record(&self, entry: &MealEntry<'_>) -> MealRecord {
        let analysis = self.estimate(entry.name, entry.notes);
        MealRecord::new(
            entry.name,
            entry.meal_type,
            entry.date,
            entry.time,
            entry.notes,
            entry.timestamp,
            analysis,
        )
    }

    /// Lower-cholesterol substitutes for a food
    #[must_use]
    pub fn alternatives(&self, food: &str) -> Vec<Alternative> {
        self.advisor.alternatives(food)
    }

    /// Substitutions for the high-cholesterol foods of a meal
    #[must_use]
    pub fn recommendations(&self, matches: &[FoodMatch]) -> Vec<Recommendation> {
        self.advisor.recommendations(matches)
    }

    /// Summary message for a logged meal
    #[must_use]
    pub fn meal_summary(&self, result: &MealAnalysisResult) -> MealSummary {
        self.advisor.meal_summary(result)
    }

    /// Daily intake and limit classification for a day's meals
    #[must_use]
    pub fn daily_report(&self, meals: &[MealAnalysisResult]) -> DailyReport {
        self.classifier.daily_report(meals)
    }

    /// The shared knowledge base
    #[must_use]
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }
}

fn base_knowledge(config: &EstimatorConfig) -> KnowledgeBase {
    KnowledgeBase::builtin().with_fallback_portion(config.portions.default_portion_grams)
}
