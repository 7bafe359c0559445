// ABOUTME: Tiered nutrient resolution for meal tokens
// ABOUTME: Ordered resolver strategies from exact match down to the conservative estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

//! Nutrient resolver tiers.
//!
//! Each tier implements [`NutrientResolver`]. The estimator tries tiers in
//! order and keeps the first match, so the tie-break policy is the order of
//! the list returned by [`standard_tiers`]:
//!
//! 1. [`ExactMatchResolver`] (`database`)
//! 2. [`CategoryPatternResolver`] (`category`)
//! 3. [`SecondaryLookupResolver`] (`online_search`)
//! 4. [`ConservativeEstimateResolver`] (`estimate`)

mod category;
mod estimate;
mod exact;
mod secondary;

use std::sync::Arc;

use bradley_core::models::{FoodMatch, FoodSource};

pub use category::CategoryPatternResolver;
pub use estimate::ConservativeEstimateResolver;
pub use exact::ExactMatchResolver;
pub use secondary::{NutritionLookup, SecondaryLookupResolver, StaticNutritionTable};

use crate::config::ConservativeEstimateConfig;
use crate::knowledge::KnowledgeBase;

/// One resolution strategy in the fallback chain
pub trait NutrientResolver: Send + Sync {
    /// Source tag attached to matches from this tier
    fn source(&self) -> FoodSource;

    /// Resolve a normalized, non-filtered token
    ///
    /// Returns `None` to pass the token on to the next tier.
    fn resolve(&self, token: &str) -> Option<FoodMatch>;
}

/// The four tiers in resolution order
#[must_use]
pub fn standard_tiers(
    knowledge: &Arc<KnowledgeBase>,
    lookup: Box<dyn NutritionLookup>,
    conservative: &ConservativeEstimateConfig,
) -> Vec<Box<dyn NutrientResolver>> {
    vec![
        Box::new(ExactMatchResolver::new(Arc::clone(knowledge))),
        Box::new(CategoryPatternResolver::new(Arc::clone(knowledge))),
        Box::new(SecondaryLookupResolver::new(Arc::clone(knowledge), lookup)),
        Box::new(ConservativeEstimateResolver::from_config(conservative)),
    ]
}
