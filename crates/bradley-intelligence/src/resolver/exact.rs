// ABOUTME: Exact-match tier resolving tokens against the food profile table
// ABOUTME: Produces database-sourced matches at the food's default portion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

use std::sync::Arc;

use bradley_core::models::{FoodMatch, FoodSource};

use super::NutrientResolver;
use crate::knowledge::KnowledgeBase;

/// Looks the token up verbatim in the exact-match table
#[derive(Debug, Clone)]
pub struct ExactMatchResolver {
    knowledge: Arc<KnowledgeBase>,
}

impl ExactMatchResolver {
    /// Create the tier over a shared knowledge base
    #[must_use]
    pub const fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }
}

impl NutrientResolver for ExactMatchResolver {
    fn source(&self) -> FoodSource {
        FoodSource::Database
    }

    fn resolve(&self, token: &str) -> Option<FoodMatch> {
        let profile = self.knowledge.food(token)?;
        Some(FoodMatch::scaled(
            token,
            profile.density(),
            self.knowledge.default_portion(token),
            FoodSource::Database,
        ))
    }
}
