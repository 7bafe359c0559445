// ABOUTME: Portion resolution for meal tokens
// ABOUTME: Parses quantity+unit hints into grams and looks up per-food default portions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

//! Portion resolver.
//!
//! Two uses: recognizing `<quantity><unit>` tokens such as `2cups` (which are
//! consumed as hints and never become food matches), and assigning a default
//! portion to a resolved food.
//!
//! Hints are not bound to the food they modify; a resolved food always uses
//! its default portion regardless of any quantity written next to it.

use std::collections::HashMap;
use std::iter;
use std::sync::LazyLock;

use bradley_core::constants::portions::{
    DEFAULT_PORTION_GRAMS, GRAMS_PER_CUP, GRAMS_PER_OZ, GRAMS_PER_PIECE, GRAMS_PER_SLICE,
    GRAMS_PER_TBSP, GRAMS_PER_TSP,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Stored as Option to handle compilation failures gracefully (should never fail for static patterns)
static PORTION_HINT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(\d+)(g|gram|grams|oz|ounce|ounces|cup|cups|tbsp|tablespoon|tablespoons",
        r"|tsp|teaspoon|teaspoons|slice|slices|piece|pieces)$"
    ))
    .ok()
});

/// Unit of a portion hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortionUnit {
    /// Grams (g, gram, grams)
    Grams,
    /// Ounces (oz, ounce, ounces)
    Ounces,
    /// Cups
    Cups,
    /// Tablespoons (tbsp)
    Tablespoons,
    /// Teaspoons (tsp)
    Teaspoons,
    /// Slices
    Slices,
    /// Pieces
    Pieces,
}

impl PortionUnit {
    /// Parse a unit spelling accepted in portion hints
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "g" | "gram" | "grams" => Some(Self::Grams),
            "oz" | "ounce" | "ounces" => Some(Self::Ounces),
            "cup" | "cups" => Some(Self::Cups),
            "tbsp" | "tablespoon" | "tablespoons" => Some(Self::Tablespoons),
            "tsp" | "teaspoon" | "teaspoons" => Some(Self::Teaspoons),
            "slice" | "slices" => Some(Self::Slices),
            "piece" | "pieces" => Some(Self::Pieces),
            _ => None,
        }
    }

    /// Grams in one unit
    #[must_use]
    pub const fn grams_per_unit(self) -> f64 {
        match self {
            Self::Grams => 1.0,
            Self::Ounces => GRAMS_PER_OZ,
            Self::Cups => GRAMS_PER_CUP,
            Self::Tablespoons => GRAMS_PER_TBSP,
            Self::Teaspoons => GRAMS_PER_TSP,
            Self::Slices => GRAMS_PER_SLICE,
            Self::Pieces => GRAMS_PER_PIECE,
        }
    }
}

/// A `<quantity><unit>` token converted to grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortionHint {
    /// Quantity as written
    pub amount: f64,
    /// Unit as written
    pub unit: PortionUnit,
    /// Equivalent mass
    pub grams: f64,
}

/// Recognize a portion hint token such as `3oz` or `2slices`
///
/// Returns `None` for anything else, including malformed units, so the token
/// simply continues through the pipeline.
#[must_use]
pub fn parse_portion_hint(token: &str) -> Option<PortionHint> {
    let pattern = PORTION_HINT.as_ref()?;
    let captures = pattern.captures(token)?;
    let amount: f64 = captures.get(1)?.as_str().parse().ok()?;
    let unit = PortionUnit::from_suffix(captures.get(2)?.as_str())?;

    Some(PortionHint {
        amount,
        unit,
        grams: amount * unit.grams_per_unit(),
    })
}

/// Default portion sizes keyed by food name
#[derive(Debug, Clone, PartialEq)]
pub struct PortionTable {
    entries: HashMap<String, f64>,
    fallback_grams: f64,
}

impl PortionTable {
    /// Build a table from `(food, grams)` pairs
    pub fn new<I, S>(entries: I, fallback_grams: f64) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(food, grams)| (food.into(), grams))
                .collect(),
            fallback_grams,
        }
    }

    /// Portion for a food, or the fallback when the food has no entry
    #[must_use]
    pub fn grams_for(&self, food: &str) -> f64 {
        self.entries
            .get(food)
            .copied()
            .unwrap_or(self.fallback_grams)
    }

    /// Replace the fallback portion
    #[must_use]
    pub fn with_fallback(mut self, fallback_grams: f64) -> Self {
        self.fallback_grams = fallback_grams;
        self
    }
}

impl Default for PortionTable {
    fn default() -> Self {
        Self::new(iter::empty::<(String, f64)>(), DEFAULT_PORTION_GRAMS)
    }
}
