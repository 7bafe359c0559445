// ABOUTME: Estimator configuration with environment overrides and validation
// ABOUTME: Portion fallback, conservative estimate profile, limit and advice thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

//! Estimator configuration.
//!
//! Defaults come from `bradley_core::constants`. [`EstimatorConfig::load`]
//! applies `MEAL_ESTIMATOR_*` environment overrides and validates the result;
//! [`EstimatorConfig::global`] caches the loaded configuration for the process.

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use bradley_core::constants::{cholesterol, estimate, portions};
use bradley_core::errors::ConfigError;
use bradley_core::models::NutrientDensity;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Global configuration singleton
static ESTIMATOR_CONFIG: OnceLock<EstimatorConfig> = OnceLock::new();

/// Main estimator configuration container
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Default portion handling
    pub portions: PortionConfig,
    /// Profile applied to unrecognized tokens
    pub conservative: ConservativeEstimateConfig,
    /// Daily cholesterol limits
    pub thresholds: CholesterolThresholds,
    /// Substitution and meal summary thresholds
    pub advice: AdviceConfig,
}

/// Default portion handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortionConfig {
    /// Portion (g) for foods without a default-portion entry
    pub default_portion_grams: f64,
}

impl Default for PortionConfig {
    fn default() -> Self {
        Self {
            default_portion_grams: portions::DEFAULT_PORTION_GRAMS,
        }
    }
}

/// Fixed low-impact profile for tokens no tier recognizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConservativeEstimateConfig {
    /// Cholesterol (mg per 100g)
    pub cholesterol_mg_per_100g: f64,
    /// Energy (kcal per 100g)
    pub calories_per_100g: f64,
    /// Fat (g per 100g)
    pub fat_g_per_100g: f64,
    /// Portion assumed per unrecognized token (g)
    pub portion_grams: f64,
    /// Tokens shorter than this (in characters) are dropped instead of estimated
    pub min_token_chars: usize,
}

impl ConservativeEstimateConfig {
    /// Per-100g nutrient content
    #[must_use]
    pub const fn density(&self) -> NutrientDensity {
        NutrientDensity::new(
            self.cholesterol_mg_per_100g,
            self.calories_per_100g,
            self.fat_g_per_100g,
        )
    }
}

impl Default for ConservativeEstimateConfig {
    fn default() -> Self {
        Self {
            cholesterol_mg_per_100g: estimate::CHOLESTEROL_MG_PER_100G,
            calories_per_100g: estimate::CALORIES_PER_100G,
            fat_g_per_100g: estimate::FAT_G_PER_100G,
            portion_grams: estimate::PORTION_GRAMS,
            min_token_chars: estimate::MIN_TOKEN_CHARS,
        }
    }
}

/// Daily dietary cholesterol limits (mg)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CholesterolThresholds {
    /// Totals at or above this are a warning
    pub warning_at_mg: u32,
    /// Totals above this have exceeded the limit
    pub exceeded_above_mg: u32,
}

impl Default for CholesterolThresholds {
    fn default() -> Self {
        Self {
            warning_at_mg: cholesterol::WARNING_AT_MG,
            exceeded_above_mg: cholesterol::EXCEEDED_ABOVE_MG,
        }
    }
}

/// Substitution and meal summary thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceConfig {
    /// Matches contributing more than this (mg) get a substitution
    pub high_cholesterol_food_mg: f64,
    /// Meals above this total (mg) get a tip in their summary
    pub meal_tip_above_mg: u32,
    /// Meals above this total (mg) are summarized as a warning
    pub meal_warning_above_mg: u32,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            high_cholesterol_food_mg: cholesterol::HIGH_CHOLESTEROL_FOOD_MG,
            meal_tip_above_mg: cholesterol::MEAL_TIP_ABOVE_MG,
            meal_warning_above_mg: cholesterol::MEAL_WARNING_ABOVE_MG,
        }
    }
}

impl EstimatorConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        ESTIMATOR_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load estimator config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a portion is not positive, a nutrient is negative,
    /// or thresholds are out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.portions.default_portion_grams) {
            return Err(ConfigError::ValueOutOfRange(
                "default_portion_grams must be positive",
            ));
        }

        let conservative = &self.conservative;
        if !is_positive(conservative.portion_grams) {
            return Err(ConfigError::ValueOutOfRange(
                "conservative portion_grams must be positive",
            ));
        }
        let density = conservative.density();
        if [density.cholesterol_mg, density.calories, density.fat_g]
            .iter()
            .any(|value| !is_non_negative(*value))
        {
            return Err(ConfigError::ValueOutOfRange(
                "conservative nutrient values must be non-negative",
            ));
        }
        if conservative.min_token_chars == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_token_chars must be at least 1",
            ));
        }

        if self.thresholds.warning_at_mg >= self.thresholds.exceeded_above_mg {
            return Err(ConfigError::InvalidRange(
                "warning_at_mg must be < exceeded_above_mg",
            ));
        }

        if !is_non_negative(self.advice.high_cholesterol_food_mg) {
            return Err(ConfigError::ValueOutOfRange(
                "high_cholesterol_food_mg must be non-negative",
            ));
        }
        if self.advice.meal_tip_above_mg > self.advice.meal_warning_above_mg {
            return Err(ConfigError::InvalidRange(
                "meal_tip_above_mg must be <= meal_warning_above_mg",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "MEAL_ESTIMATOR_DEFAULT_PORTION_GRAMS",
            &mut self.portions.default_portion_grams,
        )?;

        // Conservative estimate overrides
        Self::apply_env_var(
            "MEAL_ESTIMATOR_CONSERVATIVE_CHOLESTEROL",
            &mut self.conservative.cholesterol_mg_per_100g,
        )?;
        Self::apply_env_var(
            "MEAL_ESTIMATOR_CONSERVATIVE_CALORIES",
            &mut self.conservative.calories_per_100g,
        )?;
        Self::apply_env_var(
            "MEAL_ESTIMATOR_CONSERVATIVE_FAT",
            &mut self.conservative.fat_g_per_100g,
        )?;
        Self::apply_env_var(
            "MEAL_ESTIMATOR_CONSERVATIVE_PORTION_GRAMS",
            &mut self.conservative.portion_grams,
        )?;
        Self::apply_env_var(
            "MEAL_ESTIMATOR_MIN_TOKEN_CHARS",
            &mut self.conservative.min_token_chars,
        )?;

        // Limit overrides
        Self::apply_env_var(
            "MEAL_ESTIMATOR_WARNING_AT_MG",
            &mut self.thresholds.warning_at_mg,
        )?;
        Self::apply_env_var(
            "MEAL_ESTIMATOR_EXCEEDED_ABOVE_MG",
            &mut self.thresholds.exceeded_above_mg,
        )?;

        // Advice overrides
        Self::apply_env_var(
            "MEAL_ESTIMATOR_HIGH_CHOLESTEROL_FOOD_MG",
            &mut self.advice.high_cholesterol_food_mg,
        )?;
        Self::apply_env_var(
            "MEAL_ESTIMATOR_MEAL_TIP_ABOVE_MG",
            &mut self.advice.meal_tip_above_mg,
        )?;
        Self::apply_env_var(
            "MEAL_ESTIMATOR_MEAL_WARNING_ABOVE_MG",
            &mut self.advice.meal_warning_above_mg,
        )?;

        Ok(self)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(EstimatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_thresholds_must_be_ordered() {
        let mut config = EstimatorConfig::default();
        config.thresholds.warning_at_mg = 240;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_non_finite_portion_rejected() {
        let mut config = EstimatorConfig::default();
        config.portions.default_portion_grams = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
