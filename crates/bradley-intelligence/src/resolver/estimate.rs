// ABOUTME: Last-resort tier assigning a fixed low-impact profile to unknown tokens
// ABOUTME: Tokens resolved here are also reported as unrecognized foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

use bradley_core::models::{FoodMatch, FoodSource, NutrientDensity};

use super::NutrientResolver;
use crate::config::ConservativeEstimateConfig;

/// Conservative default for tokens no other tier recognizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConservativeEstimateResolver {
    density: NutrientDensity,
    portion_grams: f64,
    min_token_chars: usize,
}

impl ConservativeEstimateResolver {
    /// Create the tier with an explicit profile
    #[must_use]
    pub const fn new(density: NutrientDensity, portion_grams: f64, min_token_chars: usize) -> Self {
        Self {
            density,
            portion_grams,
            min_token_chars,
        }
    }

    /// Create the tier from configuration
    #[must_use]
    pub const fn from_config(config: &ConservativeEstimateConfig) -> Self {
        Self::new(config.density(), config.portion_grams, config.min_token_chars)
    }
}

impl Default for ConservativeEstimateResolver {
    fn default() -> Self {
        Self::from_config(&ConservativeEstimateConfig::default())
    }
}

impl NutrientResolver for ConservativeEstimateResolver {
    fn source(&self) -> FoodSource {
        FoodSource::Estimate
    }

    fn resolve(&self, token: &str) -> Option<FoodMatch> {
        if token.chars().count() < self.min_token_chars {
            return None;
        }
        Some(FoodMatch::scaled(
            token,
            self.density,
            self.portion_grams,
            FoodSource::Estimate,
        ))
    }
}
