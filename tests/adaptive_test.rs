// ABOUTME: Integration tests for the adaptive macro adjustment engine
// ABOUTME: Covers rule thresholds, rule interaction, truncation, and empty-series behaviour
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, reference_male};
use nutriai::intelligence::adaptive::{adjust_macros_with_config, AdjustmentRule};
use nutriai::intelligence::config::AdaptiveConfig;
use nutriai::intelligence::{adjust_macros, compute_baseline};
use nutriai::models::{BaselineMacros, MacroTargets};

fn reference_baseline() -> BaselineMacros {
    MacroTargets::new(2200.0, 150, 180, 60)
}

#[test]
fn test_neutral_day_returns_baseline_exactly() {
    init_test_logging();
    let baseline = reference_baseline();
    let adjusted = adjust_macros(&[110, 115, 120, 108, 95], 12.0, 65.0, 7.5, &baseline);
    assert_eq!(adjusted, baseline);
}

#[test]
fn test_neutral_day_keeps_gram_targets_of_computed_baseline() {
    let baseline = compute_baseline(&reference_male());
    let adjusted = adjust_macros(&[110, 115, 120, 108, 95], 12.0, 65.0, 7.5, &baseline);

    assert_eq!(adjusted.protein_g, baseline.protein_g);
    assert_eq!(adjusted.carbs_g, baseline.carbs_g);
    assert_eq!(adjusted.fat_g, baseline.fat_g);
    assert!((adjusted.calories - baseline.calories.trunc()).abs() < f64::EPSILON);
}

#[test]
fn test_high_glucose_with_high_strain() {
    let result = adjust_macros_with_config(
        &[130, 140, 135],
        18.0,
        65.0,
        7.5,
        &reference_baseline(),
        &AdaptiveConfig::default(),
    );

    assert_eq!(result.macros, MacroTargets::new(2420.0, 150, 175, 66));
    assert_eq!(
        result.fired_rules,
        vec![AdjustmentRule::HighGlucose, AdjustmentRule::HighStrain]
    );
    assert!((result.multipliers.carbs - 0.9775).abs() < 1e-12);
    assert!((result.multipliers.calories - 1.10).abs() < 1e-12);
    assert!((result.multipliers.fat - 1.1).abs() < 1e-12);
    assert!((result.multipliers.protein - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_every_rule_except_high_branches() {
    let result = adjust_macros_with_config(
        &[60, 110],
        5.0,
        30.0,
        5.0,
        &reference_baseline(),
        &AdaptiveConfig::default(),
    );

    assert_eq!(
        result.fired_rules,
        vec![
            AdjustmentRule::LowGlucose,
            AdjustmentRule::HighVariability,
            AdjustmentRule::LowStrain,
            AdjustmentRule::LowRecovery,
            AdjustmentRule::ShortSleep,
        ]
    );
    assert_eq!(result.macros, MacroTargets::new(1886.0, 157, 160, 66));
}

#[test]
fn test_thresholds_are_strict() {
    // avg 125, range 40, strain 16, recovery 40, sleep 6: every value sits on a boundary
    let baseline = reference_baseline();
    let result = adjust_macros_with_config(
        &[105, 145],
        16.0,
        40.0,
        6.0,
        &baseline,
        &AdaptiveConfig::default(),
    );
    assert!(result.fired_rules.is_empty());
    assert_eq!(result.macros, baseline);

    // avg 90 and strain 8 are not "low"
    let result = adjust_macros_with_config(
        &[90, 90],
        8.0,
        65.0,
        7.5,
        &baseline,
        &AdaptiveConfig::default(),
    );
    assert!(result.fired_rules.is_empty());
}

#[test]
fn test_empty_glucose_ignores_biometrics() {
    let baseline = reference_baseline();
    let result = adjust_macros_with_config(
        &[],
        20.0,
        5.0,
        3.0,
        &baseline,
        &AdaptiveConfig::default(),
    );

    assert_eq!(result.macros, baseline);
    assert!(result.fired_rules.is_empty());
    assert!(result.glucose_stats.is_none());
}

#[test]
fn test_empty_glucose_identity_across_biometric_scales() {
    let baselines = [
        reference_baseline(),
        compute_baseline(&reference_male()),
        MacroTargets::new(540.0, 66, 90, -10),
    ];

    for baseline in &baselines {
        for strain in [0.0, 8.0, 16.0, 21.0] {
            for recovery in [0.0, 40.0, 100.0] {
                for sleep in [0.0, 6.0, 12.0] {
                    let adjusted = adjust_macros(&[], strain, recovery, sleep, baseline);
                    assert_eq!(
                        &adjusted, baseline,
                        "strain={strain} recovery={recovery} sleep={sleep}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_adjustment_is_deterministic() {
    let baseline = compute_baseline(&reference_male());
    let config = AdaptiveConfig::default();
    let glucose = [62, 145, 170, 98, 133];

    let first = adjust_macros_with_config(&glucose, 17.5, 35.0, 5.5, &baseline, &config);
    let second = adjust_macros_with_config(&glucose, 17.5, 35.0, 5.5, &baseline, &config);
    assert_eq!(first, second);

    assert_eq!(
        adjust_macros(&glucose, 17.5, 35.0, 5.5, &baseline),
        adjust_macros(&glucose, 17.5, 35.0, 5.5, &baseline)
    );
    assert_eq!(first.macros, adjust_macros(&glucose, 17.5, 35.0, 5.5, &baseline));
}

#[test]
fn test_negative_fat_keeps_its_sign() {
    let baseline = MacroTargets::new(540.0, 66, 90, -10);
    let adjusted = adjust_macros(&[150, 155, 160], 12.0, 65.0, 7.5, &baseline);
    assert_eq!(adjusted.fat_g, -11);
    assert_eq!(adjusted.carbs_g, 76);
}

#[test]
fn test_custom_thresholds_are_honoured() {
    let mut config = AdaptiveConfig::default();
    config.strain.high_strain = 10.0;

    let result = adjust_macros_with_config(
        &[100, 105],
        12.0,
        65.0,
        7.5,
        &reference_baseline(),
        &config,
    );
    assert_eq!(result.fired_rules, vec![AdjustmentRule::HighStrain]);
}

#[test]
fn test_rule_names_serialize_snake_case() {
    let json = serde_json::to_string(&AdjustmentRule::HighVariability).unwrap();
    assert_eq!(json, "\"high_variability\"");
}
