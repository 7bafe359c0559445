// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit factors, portion defaults, conservative estimates, and cholesterol limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file. Values that operators may want to tune are mirrored in
//! `EstimatorConfig`; these constants are its defaults.

/// Unit conversion and portion size constants
pub mod portions {
    /// Grams per ounce
    pub const GRAMS_PER_OZ: f64 = 28.35;
    /// Grams per cup
    pub const GRAMS_PER_CUP: f64 = 240.0;
    /// Grams per tablespoon
    pub const GRAMS_PER_TBSP: f64 = 15.0;
    /// Grams per teaspoon
    pub const GRAMS_PER_TSP: f64 = 5.0;
    /// Grams per slice
    pub const GRAMS_PER_SLICE: f64 = 30.0;
    /// Grams per piece
    pub const GRAMS_PER_PIECE: f64 = 50.0;
    /// Portion used when a food has no entry in the default-portion table
    pub const DEFAULT_PORTION_GRAMS: f64 = 100.0;
    /// Nutrient profiles are expressed per this many grams
    pub const PROFILE_BASIS_GRAMS: f64 = 100.0;
}

/// Conservative estimate applied to unrecognized food tokens
pub mod estimate {
    /// Cholesterol per 100g (mg)
    pub const CHOLESTEROL_MG_PER_100G: f64 = 10.0;
    /// Calories per 100g (kcal)
    pub const CALORIES_PER_100G: f64 = 50.0;
    /// Fat per 100g (g)
    pub const FAT_G_PER_100G: f64 = 2.0;
    /// Portion assumed for an unrecognized token
    pub const PORTION_GRAMS: f64 = 50.0;
    /// Shortest token (in characters) that still earns an estimate
    pub const MIN_TOKEN_CHARS: usize = 2;
}

/// Dietary cholesterol limits (mg per day)
pub mod cholesterol {
    /// Daily totals at or above this value are a warning
    pub const WARNING_AT_MG: u32 = 200;
    /// Daily totals above this value exceed the limit
    pub const EXCEEDED_ABOVE_MG: u32 = 240;
    /// A single food contributing more than this is worth substituting
    pub const HIGH_CHOLESTEROL_FOOD_MG: f64 = 50.0;
    /// Meals above this total get a substitution tip in their summary
    pub const MEAL_TIP_ABOVE_MG: u32 = 100;
    /// Meals above this total get a warning severity in their summary
    pub const MEAL_WARNING_ABOVE_MG: u32 = 200;
}

/// Blood cholesterol reading bands (mg/dL)
pub mod readings {
    /// Readings below this are optimal
    pub const BORDERLINE_FROM_MG_DL: f64 = 200.0;
    /// Readings at or above this are high
    pub const HIGH_FROM_MG_DL: f64 = 240.0;
}
