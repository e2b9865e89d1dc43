// ABOUTME: Insulin-resistance screening from daily fasting and post-meal glucose averages
// ABOUTME: Classifies a monitoring window into normal, early-risk, or high-likelihood tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Insulin-resistance screening
//!
//! A coarse screen, not a diagnosis. Both series are cut to the monitoring
//! window, averaged, and compared against inclusive cut-offs: high likelihood
//! needs both averages elevated, early risk needs either.

use crate::config::InsulinResistanceConfig;
use nutriai_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Screening outcome
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsulinResistanceRisk {
    /// Averages within normal range
    Normal,
    /// Either average at or above the early cut-off
    Early,
    /// Both averages at or above the high cut-offs
    High,
}

impl fmt::Display for InsulinResistanceRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("Glucose levels are within normal range."),
            Self::Early => f.write_str("Early insulin resistance risk. Monitor your diet."),
            Self::High => f.write_str("High likelihood of insulin resistance."),
        }
    }
}

/// Screening result for a monitoring window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsulinResistanceAssessment {
    /// Days actually evaluated
    pub days: usize,
    /// Average fasting glucose (mg/dL)
    pub avg_fasting: f64,
    /// Average post-meal glucose (mg/dL)
    pub avg_postmeal: f64,
    /// Risk tier
    pub risk: InsulinResistanceRisk,
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[u32]) -> f64 {
    let sum: u64 = values.iter().map(|&value| u64::from(value)).sum();
    sum as f64 / values.len() as f64
}

/// Screen daily fasting and post-meal readings for insulin resistance
///
/// # Errors
///
/// - `VALUE_OUT_OF_RANGE` if `monitor_days` is outside the configured window
/// - `EMPTY_INPUT` if either series is empty
/// - `INVALID_INPUT` if the windowed series differ in length
#[allow(clippy::cast_precision_loss)]
pub fn assess_insulin_resistance(
    fasting: &[u32],
    postmeal: &[u32],
    monitor_days: usize,
    config: &InsulinResistanceConfig,
) -> AppResult<InsulinResistanceAssessment> {
    if !(config.min_monitor_days..=config.max_monitor_days).contains(&monitor_days) {
        return Err(AppError::value_out_of_range(
            "monitor_days",
            monitor_days as f64,
            config.min_monitor_days as f64,
            config.max_monitor_days as f64,
        ));
    }

    let fasting = &fasting[..fasting.len().min(monitor_days)];
    let postmeal = &postmeal[..postmeal.len().min(monitor_days)];

    if fasting.is_empty() || postmeal.is_empty() {
        return Err(AppError::empty_input(
            "Fasting and post-meal series must both contain readings",
        ));
    }
    if fasting.len() != postmeal.len() {
        return Err(AppError::invalid_input(format!(
            "Fasting ({}) and post-meal ({}) series must be the same length",
            fasting.len(),
            postmeal.len()
        )));
    }

    let avg_fasting = mean(fasting);
    let avg_postmeal = mean(postmeal);

    let risk = if avg_fasting >= config.high_fasting_mg_dl
        && avg_postmeal >= config.high_postmeal_mg_dl
    {
        InsulinResistanceRisk::High
    } else if avg_fasting >= config.early_fasting_mg_dl
        || avg_postmeal >= config.early_postmeal_mg_dl
    {
        InsulinResistanceRisk::Early
    } else {
        InsulinResistanceRisk::Normal
    };

    Ok(InsulinResistanceAssessment {
        days: fasting.len(),
        avg_fasting,
        avg_postmeal,
        risk,
    })
}
