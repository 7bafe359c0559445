// ABOUTME: meal-estimate CLI for estimating cholesterol, calories, and fat from meal text
// ABOUTME: Estimates single meals, lists lower-cholesterol alternatives, and rolls up a day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health
//!
//! Usage:
//! ```bash
//! # Estimate one meal as JSON
//! meal-estimate estimate "eggs and bacon" --notes "with toast"
//!
//! # Estimate one meal as a text table
//! meal-estimate estimate "salmon salad" --format text
//!
//! # Add foods from a JSON file before estimating
//! meal-estimate estimate "tofu bowl" --foods ./extra_foods.json
//!
//! # List lower-cholesterol alternatives for a food
//! meal-estimate alternatives "butter"
//!
//! # Roll up a day of meals from a JSON array of {name, notes}
//! meal-estimate daily ./today.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use bradley_nutrition::config::EstimatorConfig;
use bradley_nutrition::logging::LoggingConfig;
use bradley_nutrition::NutritionEngine;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "meal-estimate",
    about = "Meal nutrient estimator",
    long_about = "Estimate dietary cholesterol, calories, and fat from the free-text name and notes of a meal"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// JSON file of extra food profiles to add to the built-in table
    #[arg(long, global = true)]
    foods: Option<PathBuf>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate the nutrients of one meal
    Estimate {
        /// Meal name as typed
        name: String,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// List lower-cholesterol alternatives for a food
    Alternatives {
        /// Food name
        food: String,
    },

    /// Estimate a day of meals and classify the total against the daily limit
    Daily {
        /// JSON file holding an array of `{"name": ..., "notes": ...}`
        file: PathBuf,
    },
}

/// Output format for single-meal estimates
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Aligned text table
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let config = EstimatorConfig::load()?;
    let engine = match &cli.foods {
        Some(path) => NutritionEngine::with_extra_foods(&config, path)?,
        None => NutritionEngine::new(&config)?,
    };
    debug!(foods = engine.knowledge().food_count(), "Engine built");

    match cli.command {
        Command::Estimate {
            name,
            notes,
            format,
        } => commands::meal::estimate(
            &engine,
            &name,
            notes.as_deref().unwrap_or_default(),
            format,
        )?,
        Command::Alternatives { food } => commands::meal::alternatives(&engine, &food),
        Command::Daily { file } => commands::daily::report(&engine, &file)?,
    }

    Ok(())
}
