// ABOUTME: Read-only food knowledge base shared by every resolver tier
// ABOUTME: Exact food profiles, category profiles with patterns, and default portions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

//! Food knowledge base.
//!
//! Built once (normally via [`KnowledgeBase::builtin`]) and shared behind an
//! `Arc`; nothing mutates it after construction. Extra exact-match profiles
//! may be merged in from a JSON file before the estimator is built.

mod categories;
mod foods;
mod secondary;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use bradley_core::constants::portions::DEFAULT_PORTION_GRAMS;
use bradley_core::errors::KnowledgeBaseError;
use bradley_core::models::{CategoryProfile, FoodProfile, NutrientDensity};
use tracing::info;

use crate::portion::PortionTable;

/// A category profile together with its substring patterns
#[derive(Debug, Clone)]
pub struct CategoryEntry {
    /// Per-100g profile used for every token matching this category
    pub profile: CategoryProfile,
    /// Substring patterns, in table order
    pub patterns: &'static [&'static str],
}

impl CategoryEntry {
    /// First pattern that `token` contains or is contained by
    #[must_use]
    pub fn matching_pattern(&self, token: &str) -> Option<&'static str> {
        if token.is_empty() {
            return None;
        }
        self.patterns
            .iter()
            .copied()
            .find(|pattern| token.contains(pattern) || pattern.contains(token))
    }
}

/// Immutable food knowledge base
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    foods: HashMap<String, FoodProfile>,
    categories: Vec<CategoryEntry>,
    portions: PortionTable,
}

impl KnowledgeBase {
    /// Knowledge base with the built-in food, category, and portion tables
    #[must_use]
    pub fn builtin() -> Self {
        let foods = foods::FOOD_ROWS
            .iter()
            .map(|&(name, cholesterol, calories, fat, alternatives)| {
                let density = NutrientDensity::new(cholesterol, calories, fat);
                let profile = FoodProfile::new(name, density, alternatives);
                (profile.name.clone(), profile)
            })
            .collect();

        let categories = categories::CATEGORY_ROWS
            .iter()
            .map(|&(category, cholesterol, calories, fat, alternatives)| CategoryEntry {
                profile: CategoryProfile::new(
                    category,
                    NutrientDensity::new(cholesterol, calories, fat),
                    alternatives,
                ),
                patterns: categories::patterns_for(category),
            })
            .collect();

        Self {
            foods,
            categories,
            portions: PortionTable::new(
                foods::DEFAULT_PORTIONS.iter().copied(),
                DEFAULT_PORTION_GRAMS,
            ),
        }
    }

    /// Replace the portion used for foods without a default-portion entry
    #[must_use]
    pub fn with_fallback_portion(mut self, grams: f64) -> Self {
        self.portions = self.portions.with_fallback(grams);
        self
    }

    /// Merge additional exact-match profiles, replacing same-named entries
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeBaseError::InvalidProfile`] when a profile has an
    /// empty name or a negative or non-finite nutrient value. Nothing is
    /// merged if any profile is rejected.
    pub fn with_extra_foods(
        mut self,
        profiles: Vec<FoodProfile>,
    ) -> Result<Self, KnowledgeBaseError> {
        for profile in &profiles {
            validate_profile(profile)?;
        }

        for mut profile in profiles {
            profile.name = profile.name.trim().to_lowercase();
            self.foods.insert(profile.name.clone(), profile);
        }

        Ok(self)
    }

    /// Merge exact-match profiles from a JSON array file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON array of
    /// profiles, or contains an invalid profile.
    pub fn extend_from_json_file(self, path: impl AsRef<Path>) -> Result<Self, KnowledgeBaseError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let profiles: Vec<FoodProfile> = serde_json::from_str(&contents)?;
        let count = profiles.len();

        let extended = self.with_extra_foods(profiles)?;
        info!(
            path = %path.display(),
            added = count,
            total = extended.foods.len(),
            "Loaded extra food profiles"
        );
        Ok(extended)
    }

    /// Exact-match profile for a lowercase food name
    #[must_use]
    pub fn food(&self, name: &str) -> Option<&FoodProfile> {
        self.foods.get(name)
    }

    /// Number of exact-match profiles
    #[must_use]
    pub fn food_count(&self) -> usize {
        self.foods.len()
    }

    /// Category entries in matching priority order
    #[must_use]
    pub fn categories(&self) -> &[CategoryEntry] {
        &self.categories
    }

    /// First category, in priority order, with a pattern matching `token`
    #[must_use]
    pub fn match_category(&self, token: &str) -> Option<&CategoryEntry> {
        self.categories
            .iter()
            .find(|entry| entry.matching_pattern(token).is_some())
    }

    /// Default portion (g) for a resolved food
    #[must_use]
    pub fn default_portion(&self, food: &str) -> f64 {
        self.portions.grams_for(food)
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Built-in secondary profiles, consumed by the static nutrition lookup
pub(crate) fn builtin_secondary_profiles() -> impl Iterator<Item = FoodProfile> {
    secondary::SECONDARY_ROWS
        .iter()
        .map(|&(name, cholesterol, calories, fat, alternatives)| {
            FoodProfile::new(name, NutrientDensity::new(cholesterol, calories, fat), alternatives)
        })
}

/// Built-in `(misspelling, correction)` pairs
pub(crate) fn builtin_spelling_corrections() -> impl Iterator<Item = (&'static str, &'static str)> {
    secondary::SPELLING_CORRECTIONS.iter().copied()
}

fn validate_profile(profile: &FoodProfile) -> Result<(), KnowledgeBaseError> {
    let invalid = |reason| KnowledgeBaseError::InvalidProfile {
        name: profile.name.clone(),
        reason,
    };

    if profile.name.trim().is_empty() {
        return Err(invalid("name must not be empty"));
    }

    let density = profile.density();
    for value in [density.cholesterol_mg, density.calories, density.fat_g] {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid("nutrient values must be finite and non-negative"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bradley_core::models::FoodCategory;

    #[test]
    fn test_builtin_tables_are_consistent() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.categories().len(), FoodCategory::ALL.len());
        for (entry, category) in kb.categories().iter().zip(FoodCategory::ALL) {
            assert_eq!(entry.profile.category, category);
            assert!(!entry.patterns.is_empty());
        }
        for profile in kb.foods.values() {
            assert!(validate_profile(profile).is_ok(), "{}", profile.name);
        }
    }

    #[test]
    fn test_corrections_target_secondary_entries() {
        let names: Vec<String> = builtin_secondary_profiles().map(|p| p.name).collect();
        for (_, corrected) in builtin_spelling_corrections() {
            assert!(names.iter().any(|name| name == corrected), "{corrected}");
        }
    }

    #[test]
    fn test_empty_token_matches_no_category() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.match_category("").is_none());
    }
}
