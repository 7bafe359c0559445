// ABOUTME: Integration tests for daily cholesterol classification
// ABOUTME: Covers threshold boundaries, daily intake sums, and reading status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use bradley_intelligence::CholesterolClassifier;
use bradley_nutrition::config::CholesterolThresholds;
use bradley_nutrition::models::{
    CholesterolStatus, DailyIntake, MealAnalysisResult, ReadingStatus,
};
use common::default_engine;

#[test]
fn test_below_warning_is_ok_with_headroom() {
    let check = CholesterolClassifier::default().classify(199);

    assert_eq!(check.status, CholesterolStatus::Ok);
    assert_eq!(check.limit, 200);
    assert_eq!(check.remaining, Some(1));
    assert_eq!(check.overage, None);
    assert_eq!(check.message, "Great job! You have 1mg remaining today");
}

#[test]
fn test_warning_band_is_inclusive() {
    let classifier = CholesterolClassifier::default();

    let low = classifier.classify(200);
    assert_eq!(low.status, CholesterolStatus::Warning);
    assert_eq!(low.overage, Some(0));

    let high = classifier.classify(240);
    assert_eq!(high.status, CholesterolStatus::Warning);
    assert_eq!(high.limit, 200);
    assert_eq!(
        high.message,
        "You're approaching the daily limit of 240mg (240mg so far)"
    );
}

#[test]
fn test_above_limit_is_exceeded() {
    let check = CholesterolClassifier::default().classify(241);

    assert_eq!(check.status, CholesterolStatus::Exceeded);
    assert_eq!(check.limit, 240);
    assert_eq!(check.overage, Some(1));
    assert_eq!(check.remaining, None);
    assert_eq!(
        check.message,
        "You've exceeded the daily limit of 240mg by 1mg"
    );
}

#[test]
fn test_custom_thresholds() {
    let classifier = CholesterolClassifier::new(CholesterolThresholds {
        warning_at_mg: 150,
        exceeded_above_mg: 300,
    });

    assert_eq!(classifier.classify(149).status, CholesterolStatus::Ok);
    assert_eq!(classifier.classify(250).status, CholesterolStatus::Warning);
    assert_eq!(classifier.classify(301).status, CholesterolStatus::Exceeded);
}

#[test]
fn test_daily_intake_skips_meals_without_data() {
    let engine = default_engine();
    let meals = engine.estimate_many(&[
        ("eggs", ""),
        ("", ""),
        ("eggs and cheese", ""),
    ]);

    let intake = DailyIntake::from_meals(&meals);

    assert_eq!(intake.total_cholesterol, 405);
    assert_eq!(intake.total_calories, 78 + 198);
    assert_eq!(intake.meals_with_data, 2);
    assert_eq!(intake.average_cholesterol_per_meal, 203);
}

#[test]
fn test_empty_day_averages_zero() {
    let meals: Vec<MealAnalysisResult> = Vec::new();
    let intake = DailyIntake::from_meals(&meals);

    assert_eq!(intake, DailyIntake::default());
    assert_eq!(intake.average_cholesterol_per_meal, 0);
}

#[test]
fn test_daily_report_classifies_total() {
    let engine = default_engine();
    let meals = engine.estimate_many(&[("eggs", ""), ("eggs and cheese", "")]);

    let report = engine.daily_report(&meals);

    assert_eq!(report.intake.total_cholesterol, 405);
    assert_eq!(report.limit_check.status, CholesterolStatus::Exceeded);
    assert_eq!(report.limit_check.overage, Some(165));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["intake"]["totalCholesterol"], 405);
    assert_eq!(json["limitCheck"]["status"], "exceeded");
    assert!(json["limitCheck"].get("remaining").is_none());
}

#[test]
fn test_reading_status_bands() {
    assert_eq!(ReadingStatus::from_mg_dl(199.9), ReadingStatus::Optimal);
    assert_eq!(ReadingStatus::from_mg_dl(200.0), ReadingStatus::Borderline);
    assert_eq!(ReadingStatus::from_mg_dl(239.9), ReadingStatus::Borderline);
    assert_eq!(ReadingStatus::from_mg_dl(240.0), ReadingStatus::High);
}
