// ABOUTME: Integration tests for insulin-resistance screening
// ABOUTME: Covers risk tiers, inclusive cut-offs, monitoring window, and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::init_test_logging;
use nutriai::errors::ErrorCode;
use nutriai::intelligence::config::InsulinResistanceConfig;
use nutriai::intelligence::{assess_insulin_resistance, InsulinResistanceRisk};

fn screen(fasting: &[u32], postmeal: &[u32], days: usize) -> InsulinResistanceRisk {
    assess_insulin_resistance(fasting, postmeal, days, &InsulinResistanceConfig::default())
        .unwrap()
        .risk
}

#[test]
fn test_risk_tiers() {
    init_test_logging();
    assert_eq!(
        screen(&[102, 104, 100], &[145, 150, 140], 3),
        InsulinResistanceRisk::High
    );
    assert_eq!(
        screen(&[96, 95, 94], &[120, 120, 120], 3),
        InsulinResistanceRisk::Early
    );
    assert_eq!(
        screen(&[90, 90, 90], &[135, 135, 135], 3),
        InsulinResistanceRisk::Early
    );
    assert_eq!(
        screen(&[85, 90, 88], &[120, 125, 118], 3),
        InsulinResistanceRisk::Normal
    );
}

#[test]
fn test_cut_offs_are_inclusive() {
    assert_eq!(
        screen(&[100, 100, 100], &[140, 140, 140], 3),
        InsulinResistanceRisk::High
    );
    // high tier needs both averages; fasting alone lands in early
    assert_eq!(
        screen(&[100, 100, 100], &[139, 139, 139], 3),
        InsulinResistanceRisk::Early
    );
}

#[test]
fn test_assessment_reports_averages() {
    let assessment = assess_insulin_resistance(
        &[90, 95, 100, 105],
        &[130, 140, 150, 120],
        4,
        &InsulinResistanceConfig::default(),
    )
    .unwrap();

    assert_eq!(assessment.days, 4);
    assert!((assessment.avg_fasting - 97.5).abs() < f64::EPSILON);
    assert!((assessment.avg_postmeal - 135.0).abs() < f64::EPSILON);
    assert_eq!(assessment.risk, InsulinResistanceRisk::Early);
    assert_eq!(
        assessment.risk.to_string(),
        "Early insulin resistance risk. Monitor your diet."
    );
}

#[test]
fn test_series_are_cut_to_the_monitoring_window() {
    let assessment = assess_insulin_resistance(
        &[90, 90, 90, 200, 200],
        &[120, 120, 120, 250],
        3,
        &InsulinResistanceConfig::default(),
    )
    .unwrap();

    assert_eq!(assessment.days, 3);
    assert!((assessment.avg_fasting - 90.0).abs() < f64::EPSILON);
    assert_eq!(assessment.risk, InsulinResistanceRisk::Normal);
}

#[test]
fn test_monitoring_window_bounds() {
    let config = InsulinResistanceConfig::default();
    for days in [2, 15] {
        let err = assess_insulin_resistance(&[90; 15], &[120; 15], days, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange, "{days} days");
    }
    assert!(assess_insulin_resistance(&[90; 14], &[120; 14], 14, &config).is_ok());
}

#[test]
fn test_invalid_series() {
    let config = InsulinResistanceConfig::default();

    let err = assess_insulin_resistance(&[], &[120, 130, 125], 3, &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::EmptyInput);

    let err = assess_insulin_resistance(&[90, 92, 91], &[120, 130], 3, &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_risk_serializes_snake_case() {
    let json = serde_json::to_string(&InsulinResistanceRisk::High).unwrap();
    assert_eq!(json, "\"high\"");
}
