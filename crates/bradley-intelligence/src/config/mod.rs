// ABOUTME: Configuration module for bradley-intelligence crate
// ABOUTME: Re-exports estimator configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

/// Estimator tuning (portions, conservative profile, thresholds)
pub mod estimator;

pub use estimator::{
    AdviceConfig, CholesterolThresholds, ConservativeEstimateConfig, EstimatorConfig,
    PortionConfig,
};
