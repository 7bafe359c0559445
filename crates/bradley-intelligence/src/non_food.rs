// ABOUTME: Non-food token filter applied before nutrient resolution
// ABOUTME: Closed word lists plus unit, portion, preparation, and descriptor patterns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

//! Non-food filter.
//!
//! A token is non-food when it is one of the closed-set function words below,
//! or when it is a bare number, bare punctuation, a single letter, a unit
//! abbreviation, a portion noun, a preparation verb, or a taste/health
//! descriptor. Filtered tokens never reach the resolver and are never reported
//! as unrecognized.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

const ARTICLES: &[&str] = &["a", "an", "the"];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "after", "along", "alongside", "around", "as", "at", "before", "behind",
    "below", "beside", "between", "by", "during", "for", "from", "in", "inside", "into", "near",
    "of", "off", "on", "onto", "out", "outside", "over", "per", "through", "to", "top", "toward",
    "under", "until", "up", "upon", "via", "w/", "with", "within", "without",
];

const CONJUNCTIONS: &[&str] = &[
    "also", "and", "because", "but", "if", "nor", "or", "plus", "so", "than", "then", "though",
    "when", "while", "yet", "&", "+",
];

const PRONOUNS: &[&str] = &[
    "anything", "everyone", "everything", "he", "her", "hers", "him", "his", "i", "it", "its",
    "me", "mine", "my", "myself", "nothing", "our", "ours", "she", "someone", "something",
    "that", "their", "them", "these", "they", "this", "those", "us", "we", "what", "which",
    "who", "you", "your", "yours",
];

const COMMON_VERBS: &[&str] = &[
    "add", "added", "am", "are", "ate", "be", "been", "being", "can", "could", "did", "didn't",
    "do", "does", "don't", "drank", "drink", "drinking", "eat", "eaten", "eating", "eats",
    "enjoyed", "felt", "finished", "get", "getting", "got", "grabbed", "had", "has", "have",
    "having", "is", "liked", "love", "loved", "made", "make", "making", "mixed", "ordered",
    "picked", "served", "shared", "skipped", "take", "took", "topped", "tried", "try", "use",
    "used", "want", "wanted", "was", "went", "were", "will", "would",
];

const TIME_WORDS: &[&str] = &[
    "afternoon", "again", "breakfast", "brunch", "daily", "dinner", "early", "evening", "late",
    "later", "lunch", "meal", "meals", "midnight", "morning", "night", "noon", "now", "pm",
    "snack", "snacks", "sometimes", "supper", "today", "tomorrow", "tonight", "usually",
    "weekly", "yesterday",
];

const QUANTITY_WORDS: &[&str] = &[
    "all", "another", "any", "approximately", "big", "bit", "bowl", "bowls", "bunch", "couple",
    "double", "each", "eight", "enough", "every", "extra", "few", "five", "four", "full",
    "glass", "glasses", "half", "handful", "just", "large", "less", "little", "lot", "lots",
    "many", "medium", "more", "much", "nine", "no", "none", "one", "only", "pair", "plate",
    "quarter", "really", "roughly", "seven", "several", "single", "six", "small", "some", "ten",
    "three", "too", "triple", "two", "very", "whole",
];

const PREPARATION_WORDS: &[&str] = &[
    "braised", "broiled", "chopped", "cold", "creamy", "crispy", "crunchy", "diced", "grated",
    "hot", "iced", "leftover", "leftovers", "mashed", "microwaved", "poached", "sauteed",
    "scrambled", "seared", "shredded", "sliced", "smoked", "stewed", "toasted", "warm",
];

const NUTRITION_LABEL_WORDS: &[&str] = &[
    "calorie", "calories", "carbs", "cholesterol", "fat", "fats", "fiber", "gram", "grams",
    "kcal", "lb", "lbs", "liter", "liters", "ml", "ounce", "ounces", "pound", "pounds",
    "protein", "sodium", "tablespoon", "tablespoons", "teaspoon", "teaspoons",
];

/// Every closed-set word, merged once
static NON_FOOD_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        ARTICLES,
        PREPOSITIONS,
        CONJUNCTIONS,
        PRONOUNS,
        COMMON_VERBS,
        TIME_WORDS,
        QUANTITY_WORDS,
        PREPARATION_WORDS,
        NUTRITION_LABEL_WORDS,
    ]
    .iter()
    .flat_map(|list| list.iter().copied())
    .collect()
});

/// Unit abbreviations, portion nouns, preparation verbs, and taste/health descriptors
/// Stored as Option to handle compilation failures gracefully (should never fail for static patterns)
static NON_FOOD_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:",
        r"mg|g|oz|cups?|tbsps?|tsps?|cal|kcal",
        r"|(?:slice|piece|serving|portion)s?",
        r"|cooked|raw|fried|baked|grilled|roasted|boiled|steamed",
        r"|fresh|frozen|organic|natural|homemade|store|bought|delicious|tasty|yummy",
        r"|gross|disgusting|healthy|unhealthy",
        r")$"
    ))
    .ok()
});

/// Whether a token carries no food meaning
///
/// Matching is case-insensitive; callers normally pass already-lowercased
/// tokens from the normalizer.
#[must_use]
pub fn is_non_food(token: &str) -> bool {
    let lowered = token.to_lowercase();
    let word = lowered.as_str();

    if word.is_empty() || NON_FOOD_WORDS.contains(word) {
        return true;
    }

    if word.chars().all(|c| c.is_ascii_digit())
        || word.chars().all(|c| c.is_ascii_punctuation() || !c.is_alphanumeric())
    {
        return true;
    }

    let mut chars = word.chars();
    if let (Some(only), None) = (chars.next(), chars.next()) {
        if only.is_alphabetic() {
            return true;
        }
    }

    NON_FOOD_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(word))
}
