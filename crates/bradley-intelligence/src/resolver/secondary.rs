// ABOUTME: Secondary lookup tier behind a pluggable NutritionLookup trait
// ABOUTME: Default implementation is a static table with spelling corrections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

//! Secondary lookup tier.
//!
//! Matches from this tier carry the `online_search` source tag. The built-in
//! [`StaticNutritionTable`] performs no I/O; a network-backed source can be
//! plugged in by implementing [`NutritionLookup`].

use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use bradley_core::models::{FoodMatch, FoodProfile, FoodSource};
use tracing::debug;

use super::NutrientResolver;
use crate::knowledge::{self, KnowledgeBase};

/// Source of nutrient profiles for tokens the knowledge base does not know
pub trait NutritionLookup: Send + Sync {
    /// Profile for a token, named with the spelling the source recognized
    fn lookup(&self, token: &str) -> Option<FoodProfile>;
}

/// Static secondary nutrient table with a misspelling map
#[derive(Debug, Clone, Default)]
pub struct StaticNutritionTable {
    profiles: HashMap<String, FoodProfile>,
    corrections: HashMap<String, String>,
}

impl StaticNutritionTable {
    /// Table with the built-in dishes and spelling corrections
    #[must_use]
    pub fn builtin() -> Self {
        let profiles = knowledge::builtin_secondary_profiles()
            .map(|profile| (profile.name.clone(), profile))
            .collect();
        let corrections = knowledge::builtin_spelling_corrections()
            .map(|(typo, fixed)| (typo.to_owned(), fixed.to_owned()))
            .collect();

        Self {
            profiles,
            corrections,
        }
    }

    /// Add or replace a profile
    #[must_use]
    pub fn with_profile(mut self, profile: FoodProfile) -> Self {
        self.profiles.insert(profile.name.clone(), profile);
        self
    }

    /// Add or replace a spelling correction
    #[must_use]
    pub fn with_correction(mut self, misspelling: &str, corrected: &str) -> Self {
        self.corrections
            .insert(misspelling.to_lowercase(), corrected.to_lowercase());
        self
    }

    /// Corrected spelling of a token, or the token itself
    #[must_use]
    pub fn correct_spelling<'a>(&'a self, token: &'a str) -> &'a str {
        self.corrections.get(token).map_or(token, String::as_str)
    }
}

impl NutritionLookup for StaticNutritionTable {
    fn lookup(&self, token: &str) -> Option<FoodProfile> {
        let corrected = self.correct_spelling(token);
        self.profiles.get(corrected).cloned()
    }
}

/// Third tier: consult the pluggable lookup and scale to the default portion
pub struct SecondaryLookupResolver {
    knowledge: Arc<KnowledgeBase>,
    lookup: Box<dyn NutritionLookup>,
}

impl SecondaryLookupResolver {
    /// Create the tier with a lookup source
    #[must_use]
    pub fn new(knowledge: Arc<KnowledgeBase>, lookup: Box<dyn NutritionLookup>) -> Self {
        Self { knowledge, lookup }
    }
}

impl Debug for SecondaryLookupResolver {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SecondaryLookupResolver")
            .field("knowledge", &self.knowledge)
            .finish_non_exhaustive()
    }
}

impl NutrientResolver for SecondaryLookupResolver {
    fn source(&self) -> FoodSource {
        FoodSource::OnlineSearch
    }

    fn resolve(&self, token: &str) -> Option<FoodMatch> {
        let profile = self.lookup.lookup(token)?;
        if profile.name != token {
            debug!(token, corrected = %profile.name, "Secondary lookup corrected spelling");
        }

        let portion = self.knowledge.default_portion(&profile.name);
        let density = profile.density();
        Some(FoodMatch::scaled(
            profile.name,
            density,
            portion,
            FoodSource::OnlineSearch,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misspelling_resolves_to_corrected_name() {
        let table = StaticNutritionTable::builtin();
        let name = table.lookup("sandwhich").map(|profile| profile.name);
        assert_eq!(name.as_deref(), Some("sandwich"));
    }

    #[test]
    fn test_custom_correction_is_lowercased() {
        let table = StaticNutritionTable::builtin().with_correction("Burritto", "Burrito");
        assert_eq!(table.correct_spelling("burritto"), "burrito");
    }
}
