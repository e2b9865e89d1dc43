// ABOUTME: Adaptive macro adjustment configuration for glucose and wearable rules
// ABOUTME: Thresholds and multipliers for glucose, variability, strain, recovery, and sleep
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adaptive Adjustment Configuration
//!
//! Every threshold is compared strictly (`>` / `<`); a value sitting exactly on a
//! threshold never fires its rule.

use serde::{Deserialize, Serialize};

/// Configuration for the adaptive macro adjustment engine
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdaptiveConfig {
    /// Average glucose rules (high / low branch)
    pub glucose: GlucoseRuleConfig,
    /// Glucose range (max - min) rule
    pub variability: VariabilityRuleConfig,
    /// Day strain rules (high / low branch)
    pub strain: StrainRuleConfig,
    /// Low recovery rule
    pub recovery: RecoveryRuleConfig,
    /// Short sleep rule
    pub sleep: SleepRuleConfig,
}

/// Average glucose thresholds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlucoseRuleConfig {
    /// Average above this is elevated (mg/dL): 125
    pub high_avg_mg_dl: f64,
    /// Carb multiplier when elevated: 0.85
    pub high_carb_mult: f64,
    /// Fat multiplier when elevated: 1.1
    pub high_fat_mult: f64,
    /// Average below this is low (mg/dL): 90
    pub low_avg_mg_dl: f64,
    /// Carb multiplier when low: 1.1
    pub low_carb_mult: f64,
}

impl Default for GlucoseRuleConfig {
    fn default() -> Self {
        Self {
            high_avg_mg_dl: 125.0,
            high_carb_mult: 0.85,
            high_fat_mult: 1.1,
            low_avg_mg_dl: 90.0,
            low_carb_mult: 1.1,
        }
    }
}

/// Glucose variability threshold
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariabilityRuleConfig {
    /// Range above this is volatile (mg/dL): 40
    pub max_range_mg_dl: f64,
    /// Calorie multiplier when volatile: 0.95
    pub calorie_mult: f64,
    /// Carb multiplier when volatile: 0.9
    pub carb_mult: f64,
}

impl Default for VariabilityRuleConfig {
    fn default() -> Self {
        Self {
            max_range_mg_dl: 40.0,
            calorie_mult: 0.95,
            carb_mult: 0.9,
        }
    }
}

/// Day strain thresholds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrainRuleConfig {
    /// Strain above this is high: 16
    pub high_strain: f64,
    /// Calorie multiplier on high strain: 1.10
    pub high_calorie_mult: f64,
    /// Carb multiplier on high strain: 1.15
    pub high_carb_mult: f64,
    /// Strain below this is low: 8
    pub low_strain: f64,
    /// Calorie multiplier on low strain: 0.95
    pub low_calorie_mult: f64,
}

impl Default for StrainRuleConfig {
    fn default() -> Self {
        Self {
            high_strain: 16.0,
            high_calorie_mult: 1.10,
            high_carb_mult: 1.15,
            low_strain: 8.0,
            low_calorie_mult: 0.95,
        }
    }
}

/// Recovery threshold
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecoveryRuleConfig {
    /// Recovery below this is poor (percent): 40
    pub low_recovery: f64,
    /// Protein multiplier on poor recovery: 1.05
    pub protein_mult: f64,
    /// Calorie multiplier on poor recovery: 0.95
    pub calorie_mult: f64,
}

impl Default for RecoveryRuleConfig {
    fn default() -> Self {
        Self {
            low_recovery: 40.0,
            protein_mult: 1.05,
            calorie_mult: 0.95,
        }
    }
}

/// Sleep threshold
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SleepRuleConfig {
    /// Sleep below this is short (hours): 6
    pub short_sleep_hours: f64,
    /// Fat multiplier on short sleep: 1.1
    pub fat_mult: f64,
    /// Carb multiplier on short sleep: 0.9
    pub carb_mult: f64,
}

impl Default for SleepRuleConfig {
    fn default() -> Self {
        Self {
            short_sleep_hours: 6.0,
            fat_mult: 1.1,
            carb_mult: 0.9,
        }
    }
}
