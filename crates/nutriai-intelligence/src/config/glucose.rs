// ABOUTME: Glucose analysis and insulin-resistance screening configuration
// ABOUTME: Target range, spike and low thresholds, and fasting/post-meal risk cut-offs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// CGM series analysis thresholds
///
/// Reference: Battelino, T., et al. (2019). International Consensus on Time in Range.
/// *Diabetes Care*, 42(8), 1593-1603. DOI: 10.2337/dci19-0028
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlucoseAnalysisConfig {
    /// Lower bound of the target range, inclusive (mg/dL): 70
    pub range_low_mg_dl: u32,
    /// Upper bound of the target range, inclusive (mg/dL): 180
    pub range_high_mg_dl: u32,
    /// Rise between consecutive readings counted as a spike (mg/dL): 30
    pub spike_rise_mg_dl: u32,
    /// Readings below this are lows (mg/dL): 70
    pub low_threshold_mg_dl: u32,
}

impl Default for GlucoseAnalysisConfig {
    fn default() -> Self {
        Self {
            range_low_mg_dl: 70,
            range_high_mg_dl: 180,
            spike_rise_mg_dl: 30,
            low_threshold_mg_dl: 70,
        }
    }
}

/// Insulin-resistance screening cut-offs (inclusive)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsulinResistanceConfig {
    /// Average fasting glucose for the high-likelihood tier (mg/dL): 100
    pub high_fasting_mg_dl: f64,
    /// Average post-meal glucose for the high-likelihood tier (mg/dL): 140
    pub high_postmeal_mg_dl: f64,
    /// Average fasting glucose for the early-risk tier (mg/dL): 95
    pub early_fasting_mg_dl: f64,
    /// Average post-meal glucose for the early-risk tier (mg/dL): 135
    pub early_postmeal_mg_dl: f64,
    /// Shortest monitoring window (days): 3
    pub min_monitor_days: usize,
    /// Longest monitoring window (days): 14
    pub max_monitor_days: usize,
}

impl Default for InsulinResistanceConfig {
    fn default() -> Self {
        Self {
            high_fasting_mg_dl: 100.0,
            high_postmeal_mg_dl: 140.0,
            early_fasting_mg_dl: 95.0,
            early_postmeal_mg_dl: 135.0,
            min_monitor_days: 3,
            max_monitor_days: 14,
        }
    }
}
