// ABOUTME: Tests for environment-driven logging configuration
// ABOUTME: Runs serially because the tests mutate process environment variables
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use rehab_progression_engine::logging::{LogFormat, LoggingConfig, DEFAULT_SERVICE_NAME};
use serial_test::serial;

const LOGGING_VARS: [&str; 5] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "SERVICE_NAME",
];

fn clear_logging_env() {
    for var in LOGGING_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_logging_env();

    let config = LoggingConfig::from_env();
    assert_eq!(config, LoggingConfig::default());
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
    assert_eq!(config.service_version, env!("CARGO_PKG_VERSION"));
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_logging_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    env::set_var("SERVICE_NAME", "rehab-clinic-api");

    let config = LoggingConfig::from_env();
    clear_logging_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(!config.include_thread);
    assert_eq!(config.service_name, "rehab-clinic-api");
}

#[test]
#[serial]
fn test_unknown_format_falls_back_to_pretty() {
    clear_logging_env();
    env::set_var("LOG_FORMAT", "xml");
    let config = LoggingConfig::from_env();
    clear_logging_env();

    assert_eq!(config.format, LogFormat::Pretty);

    env::set_var("LOG_FORMAT", "compact");
    let compact = LoggingConfig::from_env();
    clear_logging_env();
    assert_eq!(compact.format, LogFormat::Compact);
}

#[test]
fn test_env_filter_pins_engine_crates() {
    let config = LoggingConfig {
        level: "warn".to_owned(),
        ..LoggingConfig::default()
    };
    let rendered = config.env_filter().to_string().to_lowercase();

    assert!(rendered.contains("rehab_intelligence=warn"));
    assert!(rendered.contains("rehab_core=warn"));
    assert!(rendered.contains("rehab_progression_engine=warn"));
}

#[test]
fn test_composite_level_is_used_unchanged() {
    let config = LoggingConfig {
        level: "warn,rehab_intelligence=debug".to_owned(),
        ..LoggingConfig::default()
    };
    let rendered = config.env_filter().to_string().to_lowercase();
    let directives: Vec<&str> = rendered.split(',').collect();

    assert_eq!(directives.len(), 2);
    assert!(directives.contains(&"warn"));
    assert!(directives.contains(&"rehab_intelligence=debug"));
    assert!(!rendered.contains("info"));
    assert!(!rendered.contains("rehab_core"));
}

#[test]
#[serial]
fn test_second_init_is_an_error() {
    let config = LoggingConfig {
        format: LogFormat::Compact,
        ..LoggingConfig::default()
    };

    // the first call may lose to a subscriber installed elsewhere in this
    // process; the second can never succeed
    let _ = config.init();
    assert!(config.init().is_err());
}
