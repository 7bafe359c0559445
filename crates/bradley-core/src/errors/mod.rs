// ABOUTME: Error types for estimator configuration and knowledge base loading
// ABOUTME: Defines ConfigError and KnowledgeBaseError using thiserror
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

//! Error types.
//!
//! Estimation itself never fails: malformed meal text degrades to conservative
//! estimates. Errors only surface while loading configuration or extending the
//! knowledge base from an external file.

use std::io;

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., warning threshold above exceeded threshold)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

/// Errors raised while loading additional food profiles
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    /// The food profile file could not be read
    #[error("Failed to read food profiles: {0}")]
    Io(#[from] io::Error),

    /// The food profile file is not valid JSON for a list of profiles
    #[error("Invalid food profile JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A profile was rejected during validation
    #[error("Invalid food profile '{name}': {reason}")]
    InvalidProfile {
        /// Name of the offending profile (may be empty)
        name: String,
        /// Why the profile was rejected
        reason: &'static str,
    },
}
