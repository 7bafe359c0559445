// ABOUTME: Integration tests for logging configuration
// ABOUTME: Validates environment handling and format parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bradley_nutrition::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("SERVICE_NAME");

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "test-service");
}

#[test]
#[serial]
fn test_default_logging_config() {
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("SERVICE_NAME");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.format, LogFormat::from_str_or_default("unknown"));
    assert_eq!(config.service_name, "meal-estimate");
    assert!(!config.include_location);
}

#[test]
fn test_verbose_override() {
    let config = LoggingConfig::default().with_level("debug");
    assert_eq!(config.level, "debug");
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default(" Pretty "), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default(""), LogFormat::Pretty);
}

#[test]
fn test_pretty_subscriber_installs_once() {
    let config = LoggingConfig::default();
    assert_eq!(config.format, LogFormat::Pretty);

    assert!(config.init().is_ok());
    assert!(config.init().is_err(), "a second global subscriber must be rejected");
}
