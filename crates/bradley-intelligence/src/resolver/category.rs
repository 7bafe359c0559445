// ABOUTME: Category tier classifying unknown tokens by substring patterns
// ABOUTME: First matching category in priority order supplies the nutrient profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

use std::sync::Arc;

use bradley_core::models::{FoodMatch, FoodSource};
use tracing::debug;

use super::NutrientResolver;
use crate::knowledge::KnowledgeBase;

/// Matches a token to the first category with a pattern it contains or is contained by
#[derive(Debug, Clone)]
pub struct CategoryPatternResolver {
    knowledge: Arc<KnowledgeBase>,
}

impl CategoryPatternResolver {
    /// Create the tier over a shared knowledge base
    #[must_use]
    pub const fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }
}

impl NutrientResolver for CategoryPatternResolver {
    fn source(&self) -> FoodSource {
        FoodSource::Category
    }

    fn resolve(&self, token: &str) -> Option<FoodMatch> {
        let entry = self.knowledge.match_category(token)?;
        let category = entry.profile.category;

        debug!(
            token,
            category = %category,
            pattern = entry.matching_pattern(token).unwrap_or_default(),
            "Token classified by category pattern"
        );

        Some(
            FoodMatch::scaled(
                token,
                entry.profile.density(),
                self.knowledge.default_portion(token),
                FoodSource::Category,
            )
            .with_category(category),
        )
    }
}
