// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates environment handling, defaults and subscriber installation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use gait_timeline::logging::{init_default, init_from_env, AppLogger, LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

fn clear_env() {
    for name in [
        "RUST_LOG",
        "LOG_FORMAT",
        "ENVIRONMENT",
        "SERVICE_NAME",
        "LOG_INCLUDE_LOCATION",
        "LOG_INCLUDE_THREAD",
    ] {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-service");
    assert!(config.include_location); // Always on in production
    assert!(config.include_thread);

    clear_env();
}

#[test]
#[serial]
fn test_development_env_keeps_output_lean() {
    clear_env();
    env::set_var("LOG_FORMAT", "compact");
    env::set_var("LOG_INCLUDE_THREAD", "1");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Compact);
    assert!(!config.include_location);
    assert!(config.include_thread);

    clear_env();
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "gait-timeline");
    assert!(!config.include_location);
}

#[test]
fn test_with_level_overrides_level() {
    let config = LoggingConfig::default().with_level("trace");

    assert_eq!(config.level, "trace");
}

#[test]
#[serial]
fn test_second_init_is_rejected() {
    clear_env();
    let config = LoggingConfig::default().with_level("warn");

    // The first call may lose to another test in this process; the second never succeeds
    let _ = init_default();
    assert!(init_from_env().is_err());
    assert!(config.init().is_err());

    AppLogger::log_chart_load("in_memory", 12, 10, 3);
}
