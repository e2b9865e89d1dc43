// ABOUTME: Integration tests for environment-driven application configuration
// ABOUTME: Serialized because every test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriai::config::{AppConfig, Environment, DEFAULT_CHAT_MODEL};
use nutriai::errors::ErrorCode;
use nutriai::models::BiometricSnapshot;
use serial_test::serial;
use std::env;

const MANAGED_VARS: [&str; 6] = [
    "ENVIRONMENT",
    "NUTRIAI_DEFAULT_STRAIN",
    "NUTRIAI_DEFAULT_RECOVERY",
    "NUTRIAI_DEFAULT_SLEEP_HOURS",
    "NUTRIAI_CHAT_MODEL",
    "NUTRIAI_STRAIN_HIGH",
];

fn clear_env() {
    for name in MANAGED_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.default_biometrics, BiometricSnapshot::default());
    assert_eq!(config.chat_model, DEFAULT_CHAT_MODEL);
    assert!((config.intelligence.adaptive.strain.high_strain - 16.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("NUTRIAI_DEFAULT_STRAIN", " 15.5 ");
    env::set_var("NUTRIAI_DEFAULT_SLEEP_HOURS", "6");
    env::set_var("NUTRIAI_CHAT_MODEL", "gpt-4o-mini");
    env::set_var("NUTRIAI_STRAIN_HIGH", "17.5");

    let config = AppConfig::from_env();
    clear_env();
    let config = config.unwrap();

    assert!(config.environment.is_production());
    assert!((config.default_biometrics.strain - 15.5).abs() < f64::EPSILON);
    assert!((config.default_biometrics.recovery - 65.0).abs() < f64::EPSILON);
    assert!((config.default_biometrics.sleep_hours - 6.0).abs() < f64::EPSILON);
    assert_eq!(config.chat_model, "gpt-4o-mini");
    assert!((config.intelligence.adaptive.strain.high_strain - 17.5).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_blank_chat_model_falls_back() {
    clear_env();
    env::set_var("NUTRIAI_CHAT_MODEL", "   ");
    let config = AppConfig::from_env();
    clear_env();
    assert_eq!(config.unwrap().chat_model, DEFAULT_CHAT_MODEL);
}

#[test]
#[serial]
fn test_unparseable_default_is_config_error() {
    clear_env();
    env::set_var("NUTRIAI_DEFAULT_RECOVERY", "lots");
    let result = AppConfig::from_env();
    clear_env();

    let err = result.unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);
    assert!(err.message.contains("NUTRIAI_DEFAULT_RECOVERY"));
}

#[test]
#[serial]
fn test_default_outside_wearable_scale() {
    clear_env();
    env::set_var("NUTRIAI_DEFAULT_STRAIN", "30");
    let result = AppConfig::from_env();
    clear_env();

    assert_eq!(result.unwrap_err().code, ErrorCode::ValueOutOfRange);
}

#[test]
#[serial]
fn test_invalid_intelligence_override_is_config_error() {
    clear_env();
    env::set_var("NUTRIAI_STRAIN_HIGH", "high");
    let result = AppConfig::from_env();
    clear_env();

    assert_eq!(result.unwrap_err().code, ErrorCode::ConfigError);
}
