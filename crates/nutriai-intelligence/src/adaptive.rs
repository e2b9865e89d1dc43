// ABOUTME: Adaptive macro adjustment engine combining CGM statistics with wearable biometrics
// ABOUTME: Rule-driven multiplicative adjustment of baseline calorie and macronutrient targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adaptive Macro Adjustment Engine
//!
//! Four multipliers (calories, protein, carbohydrate, fat) start at 1.0 and each
//! applicable rule multiplies into them, evaluated in this fixed order:
//!
//! | Rule | Condition | Effect |
//! |---|---|---|
//! | High glucose | avg > 125 | carbs x0.85, fat x1.1 |
//! | Low glucose | else avg < 90 | carbs x1.1 |
//! | Variability | max - min > 40 | calories x0.95, carbs x0.9 |
//! | High strain | strain > 16 | calories x1.10, carbs x1.15 |
//! | Low strain | else strain < 8 | calories x0.95 |
//! | Low recovery | recovery < 40 | protein x1.05, calories x0.95 |
//! | Short sleep | sleep < 6 h | fat x1.1, carbs x0.9 |
//!
//! Only the two glucose branches and the two strain branches exclude each other;
//! every category fires independently of the others. Each adjusted value is
//! truncated toward zero. An empty glucose series returns the baseline unchanged
//! and ignores strain, recovery and sleep entirely.

use crate::config::AdaptiveConfig;
use crate::glucose::{summarize, GlucoseStats};
use nutriai_core::models::{AdjustedMacros, BaselineMacros, BiometricSnapshot};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Adjustment rule that fired for a given day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentRule {
    /// Average glucose above the high threshold
    HighGlucose,
    /// Average glucose below the low threshold
    LowGlucose,
    /// Glucose range above the variability threshold
    HighVariability,
    /// Strain above the high threshold
    HighStrain,
    /// Strain below the low threshold
    LowStrain,
    /// Recovery below the low threshold
    LowRecovery,
    /// Sleep below the short-sleep threshold
    ShortSleep,
}

impl AdjustmentRule {
    /// Short human-readable explanation
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::HighGlucose => "Elevated average glucose: fewer carbohydrates, more fat",
            Self::LowGlucose => "Low average glucose: more carbohydrates",
            Self::HighVariability => "Volatile glucose: fewer calories and carbohydrates",
            Self::HighStrain => "High strain: more calories and carbohydrates",
            Self::LowStrain => "Low strain: fewer calories",
            Self::LowRecovery => "Poor recovery: more protein, fewer calories",
            Self::ShortSleep => "Short sleep: more fat, fewer carbohydrates",
        }
    }
}

/// Multipliers applied to each baseline target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroMultipliers {
    /// Calorie multiplier
    pub calories: f64,
    /// Protein multiplier
    pub protein: f64,
    /// Carbohydrate multiplier
    pub carbs: f64,
    /// Fat multiplier
    pub fat: f64,
}

impl Default for MacroMultipliers {
    fn default() -> Self {
        Self {
            calories: 1.0,
            protein: 1.0,
            carbs: 1.0,
            fat: 1.0,
        }
    }
}

/// Full engine output: adjusted targets plus how they were reached
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroAdjustment {
    /// Adjusted targets
    pub macros: AdjustedMacros,
    /// Final multipliers
    pub multipliers: MacroMultipliers,
    /// Rules that fired, in evaluation order
    pub fired_rules: Vec<AdjustmentRule>,
    /// Glucose statistics, `None` when the series was empty
    pub glucose_stats: Option<GlucoseStats>,
}

impl MacroAdjustment {
    fn unchanged(baseline: &BaselineMacros) -> Self {
        Self {
            macros: *baseline,
            multipliers: MacroMultipliers::default(),
            fired_rules: Vec::new(),
            glucose_stats: None,
        }
    }
}

/// Evaluate every rule against glucose statistics and biometrics
#[must_use]
pub fn compute_multipliers(
    stats: &GlucoseStats,
    strain: f64,
    recovery: f64,
    sleep_hours: f64,
    config: &AdaptiveConfig,
) -> (MacroMultipliers, Vec<AdjustmentRule>) {
    let mut mult = MacroMultipliers::default();
    let mut fired = Vec::new();

    if stats.mean > config.glucose.high_avg_mg_dl {
        mult.carbs *= config.glucose.high_carb_mult;
        mult.fat *= config.glucose.high_fat_mult;
        fired.push(AdjustmentRule::HighGlucose);
    } else if stats.mean < config.glucose.low_avg_mg_dl {
        mult.carbs *= config.glucose.low_carb_mult;
        fired.push(AdjustmentRule::LowGlucose);
    }

    if stats.range > config.variability.max_range_mg_dl {
        mult.calories *= config.variability.calorie_mult;
        mult.carbs *= config.variability.carb_mult;
        fired.push(AdjustmentRule::HighVariability);
    }

    if strain > config.strain.high_strain {
        mult.calories *= config.strain.high_calorie_mult;
        mult.carbs *= config.strain.high_carb_mult;
        fired.push(AdjustmentRule::HighStrain);
    } else if strain < config.strain.low_strain {
        mult.calories *= config.strain.low_calorie_mult;
        fired.push(AdjustmentRule::LowStrain);
    }

    if recovery < config.recovery.low_recovery {
        mult.protein *= config.recovery.protein_mult;
        mult.calories *= config.recovery.calorie_mult;
        fired.push(AdjustmentRule::LowRecovery);
    }

    if sleep_hours < config.sleep.short_sleep_hours {
        mult.fat *= config.sleep.fat_mult;
        mult.carbs *= config.sleep.carb_mult;
        fired.push(AdjustmentRule::ShortSleep);
    }

    for rule in &fired {
        debug!(rule = ?rule, "{}", rule.description());
    }

    (mult, fired)
}

/// Scale baseline targets, truncating each product toward zero
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn apply_multipliers(baseline: &BaselineMacros, mult: &MacroMultipliers) -> AdjustedMacros {
    AdjustedMacros {
        calories: (baseline.calories * mult.calories).trunc(),
        protein_g: (baseline.protein_g as f64 * mult.protein) as i64,
        carbs_g: (baseline.carbs_g as f64 * mult.carbs) as i64,
        fat_g: (baseline.fat_g as f64 * mult.fat) as i64,
    }
}

/// Run the engine with explicit configuration and keep the reasoning
#[must_use]
pub fn adjust_macros_with_config(
    glucose_values: &[u32],
    strain: f64,
    recovery: f64,
    sleep_hours: f64,
    baseline: &BaselineMacros,
    config: &AdaptiveConfig,
) -> MacroAdjustment {
    let Ok(stats) = summarize(glucose_values) else {
        debug!("No glucose readings; returning baseline unchanged");
        return MacroAdjustment::unchanged(baseline);
    };

    let (multipliers, fired_rules) =
        compute_multipliers(&stats, strain, recovery, sleep_hours, config);

    MacroAdjustment {
        macros: apply_multipliers(baseline, &multipliers),
        multipliers,
        fired_rules,
        glucose_stats: Some(stats),
    }
}

/// Run the engine for a biometric snapshot
#[must_use]
pub fn adjust_for_snapshot(
    glucose_values: &[u32],
    biometrics: &BiometricSnapshot,
    baseline: &BaselineMacros,
    config: &AdaptiveConfig,
) -> MacroAdjustment {
    adjust_macros_with_config(
        glucose_values,
        biometrics.strain,
        biometrics.recovery,
        biometrics.sleep_hours,
        baseline,
        config,
    )
}

/// Adjust baseline targets for glucose and wearable metrics with default rules
#[must_use]
pub fn adjust_macros(
    glucose_values: &[u32],
    strain: f64,
    recovery: f64,
    sleep_hours: f64,
    baseline: &BaselineMacros,
) -> AdjustedMacros {
    adjust_macros_with_config(
        glucose_values,
        strain,
        recovery,
        sleep_hours,
        baseline,
        &AdaptiveConfig::default(),
    )
    .macros
}
