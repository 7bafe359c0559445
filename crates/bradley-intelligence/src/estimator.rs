// ABOUTME: Meal nutrient estimator driving normalization, filtering, and tiered resolution
// ABOUTME: Single-meal and parallel batch estimation over a shared knowledge base
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

//! Meal estimator.
//!
//! For each token of the normalized meal text, in order:
//!
//! 1. skip it if the same token was already handled in this meal
//! 2. drop it if the non-food filter rejects it
//! 3. consume it if it is a portion hint (the hint is not bound to a food)
//! 4. otherwise hand it to the resolver tiers; the first match wins
//!
//! Estimation never fails. The estimator holds no mutable state, so one
//! instance can serve concurrent callers.

use std::collections::HashSet;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use bradley_core::models::{FoodMatch, MealAnalysisResult};
use rayon::prelude::*;
use tracing::debug;

use crate::aggregator::NutrientAggregator;
use crate::config::EstimatorConfig;
use crate::knowledge::KnowledgeBase;
use crate::non_food::is_non_food;
use crate::normalizer::tokenize_meal;
use crate::portion::parse_portion_hint;
use crate::resolver::{standard_tiers, NutrientResolver, NutritionLookup, StaticNutritionTable};

/// Turns free-text meal descriptions into nutrient estimates
pub struct MealEstimator {
    tiers: Vec<Box<dyn NutrientResolver>>,
}

impl MealEstimator {
    /// Estimator with the standard tiers and the built-in secondary table
    #[must_use]
    pub fn new(knowledge: &Arc<KnowledgeBase>, config: &EstimatorConfig) -> Self {
        Self::with_lookup(knowledge, config, Box::new(StaticNutritionTable::builtin()))
    }

    /// Estimator with the standard tiers and a custom secondary lookup
    #[must_use]
    pub fn with_lookup(
        knowledge: &Arc<KnowledgeBase>,
        config: &EstimatorConfig,
        lookup: Box<dyn NutritionLookup>,
    ) -> Self {
        Self::from_tiers(standard_tiers(knowledge, lookup, &config.conservative))
    }

    /// Estimator over an explicit, ordered list of tiers
    #[must_use]
    pub fn from_tiers(tiers: Vec<Box<dyn NutrientResolver>>) -> Self {
        Self { tiers }
    }

    /// Resolve one token through the tiers in order
    #[must_use]
    pub fn resolve_token(&self, token: &str) -> Option<FoodMatch> {
        self.tiers.iter().find_map(|tier| tier.resolve(token))
    }

    /// Estimate the nutrients of one meal
    ///
    /// Either argument may be empty. Identical input always produces
    /// identical output.
    #[must_use]
    pub fn estimate(&self, meal_name: &str, meal_notes: &str) -> MealAnalysisResult {
        let tokens = tokenize_meal(meal_name, meal_notes);
        let mut processed: HashSet<&str> = HashSet::with_capacity(tokens.len());
        let mut aggregator = NutrientAggregator::new();

        for token in &tokens {
            let token = token.as_str();
            if !processed.insert(token) {
                continue;
            }

            if is_non_food(token) {
                continue;
            }

            if let Some(hint) = parse_portion_hint(token) {
                debug!(
                    token,
                    grams = hint.grams,
                    "Portion hint parsed; foods keep their default portions"
                );
                continue;
            }

            match self.resolve_token(token) {
                Some(found) => {
                    debug!(token, source = %found.source, "Token resolved");
                    aggregator.add(found);
                }
                None => debug!(token, "Token dropped by every tier"),
            }
        }

        aggregator.finish()
    }

    /// Estimate many meals in parallel, preserving input order
    #[must_use]
    pub fn estimate_many<N, M>(&self, meals: &[(N, M)]) -> Vec<MealAnalysisResult>
    where
        N: AsRef<str> + Sync,
        M: AsRef<str> + Sync,
    {
        meals
            .par_iter()
            .map(|(name, notes)| self.estimate(name.as_ref(), notes.as_ref()))
            .collect()
    }

    /// Number of resolver tiers
    #[must_use]
    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }
}

impl Debug for MealEstimator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let sources: Vec<_> = self.tiers.iter().map(|tier| tier.source()).collect();
        f.debug_struct("MealEstimator")
            .field("tiers", &sources)
            .finish()
    }
}

impl Default for MealEstimator {
    fn default() -> Self {
        Self::new(
            &Arc::new(KnowledgeBase::builtin()),
            &EstimatorConfig::default(),
        )
    }
}
