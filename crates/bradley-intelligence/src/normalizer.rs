// ABOUTME: Meal text normalization into lowercase tokens
// ABOUTME: Strips parenthesized asides, unit-attached numbers, brackets, and edge punctuation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

//! Text normalizer.
//!
//! The meal name and notes are combined, lowercased, and cleaned before being
//! split on whitespace. Token order follows the input; duplicates are kept
//! because deduplication happens at resolution time.

use std::sync::LazyLock;

use regex::Regex;

/// Parenthesized asides such as `(2 slices)`
/// Stored as Option to handle compilation failures gracefully (should never fail for static patterns)
static PARENTHESIZED: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\([^)]*\)").ok());

/// Nutrition-label amounts such as `200g`, `5mg`, `120cal`
static UNIT_ATTACHED_NUMBER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\d+(?:g|mg|cal)\b").ok());

/// Square and curly brackets
static BRACKETS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[\[\]{}]").ok());

/// Sentence punctuation trimmed from both ends of a token
const EDGE_PUNCTUATION: &[char] = &[',', '.', ';', ':', '!', '?', '"', '\''];

/// Combine meal name and notes into the cleaned text that gets tokenized
#[must_use]
pub fn clean_meal_text(meal_name: &str, meal_notes: &str) -> String {
    let mut text = format!("{meal_name} {meal_notes}").to_lowercase();

    if let Some(pattern) = PARENTHESIZED.as_ref() {
        text = pattern.replace_all(&text, " ").into_owned();
    }
    if let Some(pattern) = UNIT_ATTACHED_NUMBER.as_ref() {
        text = pattern.replace_all(&text, " ").into_owned();
    }
    if let Some(pattern) = BRACKETS.as_ref() {
        text = pattern.replace_all(&text, "").into_owned();
    }

    text
}

/// Split a meal description into ordered lowercase tokens
///
/// Either argument may be empty. Edge punctuation is trimmed from each token
/// and tokens left empty by trimming are dropped.
#[must_use]
pub fn tokenize_meal(meal_name: &str, meal_notes: &str) -> Vec<String> {
    clean_meal_text(meal_name, meal_notes)
        .split_whitespace()
        .map(|word| word.trim_matches(EDGE_PUNCTUATION))
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}
