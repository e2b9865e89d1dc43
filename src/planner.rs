// ABOUTME: Explicit per-user daily context and the adaptive nutrition planner
// ABOUTME: Resolves wearable biometrics with fallback and runs baseline plus adjustment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily planning
//!
//! A [`DailyContext`] carries everything the engine needs for one user and one
//! day: the profile, the baseline derived from it, and the day's biometrics.
//! It is passed explicitly; nothing is cached between calls.

use crate::constants::service_names;
use crate::errors::AppResult;
use crate::models::{
    AdjustedMacros, AnthropometricProfile, BaselineMacros, BiometricSnapshot, GlucoseSeries,
};
use crate::providers::BiometricSource;
use nutriai_intelligence::adaptive::{adjust_for_snapshot, AdjustmentRule, MacroMultipliers};
use nutriai_intelligence::baseline::compute_baseline_with_config;
use nutriai_intelligence::glucose::{analyze_series, GlucoseAnalysis, GlucoseStats};
use nutriai_intelligence::insulin::{assess_insulin_resistance, InsulinResistanceAssessment};
use nutriai_intelligence::IntelligenceConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Where the day's biometrics came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BiometricOrigin {
    /// Read from a wearable vendor
    Wearable,
    /// Entered by hand
    Manual,
    /// Source failed; configured defaults used instead
    Fallback,
}

/// Biometrics plus their origin
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ResolvedBiometrics {
    /// Snapshot handed to the engine
    pub snapshot: BiometricSnapshot,
    /// Provenance
    pub origin: BiometricOrigin,
}

/// Fetch biometrics from a source, falling back to `defaults` on any error
#[instrument(skip_all, fields(source = source.name()))]
pub async fn resolve_biometrics(
    source: &dyn BiometricSource,
    defaults: BiometricSnapshot,
) -> ResolvedBiometrics {
    match source.fetch_snapshot().await {
        Ok(snapshot) => ResolvedBiometrics {
            snapshot,
            origin: if source.name() == service_names::MANUAL {
                BiometricOrigin::Manual
            } else {
                BiometricOrigin::Wearable
            },
        },
        Err(error) => {
            warn!(error = %error, "Biometric source failed, using defaults");
            ResolvedBiometrics {
                snapshot: defaults,
                origin: BiometricOrigin::Fallback,
            }
        }
    }
}

/// One user's inputs for one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyContext {
    /// Body metrics and preferences
    pub profile: AnthropometricProfile,
    /// Baseline derived from the profile
    pub baseline: BaselineMacros,
    /// Today's strain, recovery and sleep
    pub biometrics: BiometricSnapshot,
}

/// Outcome of planning a day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyPlan {
    /// Unadjusted targets
    pub baseline: BaselineMacros,
    /// Targets after glucose and wearable adjustment
    pub adjusted: AdjustedMacros,
    /// Final multipliers
    pub multipliers: MacroMultipliers,
    /// Rules that fired, in evaluation order
    pub fired_rules: Vec<AdjustmentRule>,
    /// Glucose statistics, absent when no readings were given
    pub glucose_stats: Option<GlucoseStats>,
}

/// Runs the intelligence algorithms against a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct NutritionPlanner {
    config: IntelligenceConfig<true>,
}

impl NutritionPlanner {
    /// Create a planner with the given configuration
    #[must_use]
    pub const fn new(config: IntelligenceConfig<true>) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig<true> {
        &self.config
    }

    /// Derive the baseline for a profile and bundle it with today's biometrics
    #[must_use]
    pub fn context_for(
        &self,
        profile: AnthropometricProfile,
        biometrics: BiometricSnapshot,
    ) -> DailyContext {
        let baseline = compute_baseline_with_config(&profile, &self.config.nutrition);
        DailyContext {
            profile,
            baseline,
            biometrics,
        }
    }

    /// Adjust the context's baseline for a day of glucose readings
    #[instrument(skip_all, fields(readings = glucose_values.len()))]
    pub fn plan_day(&self, context: &DailyContext, glucose_values: &[u32]) -> DailyPlan {
        let adjustment = adjust_for_snapshot(
            glucose_values,
            &context.biometrics,
            &context.baseline,
            &self.config.adaptive,
        );

        info!(
            calories = adjustment.macros.calories,
            protein_g = adjustment.macros.protein_g,
            carbs_g = adjustment.macros.carbs_g,
            fat_g = adjustment.macros.fat_g,
            rules = adjustment.fired_rules.len(),
            "Planned daily targets"
        );

        DailyPlan {
            baseline: context.baseline,
            adjusted: adjustment.macros,
            multipliers: adjustment.multipliers,
            fired_rules: adjustment.fired_rules,
            glucose_stats: adjustment.glucose_stats,
        }
    }

    /// Analyze a timestamped CGM day
    ///
    /// # Errors
    ///
    /// Returns `EMPTY_INPUT` when the series holds no readings
    pub fn analyze(&self, series: &GlucoseSeries) -> AppResult<GlucoseAnalysis> {
        analyze_series(series, &self.config.glucose_analysis)
    }

    /// Screen fasting and post-meal readings for insulin resistance
    ///
    /// # Errors
    ///
    /// See [`assess_insulin_resistance`]
    pub fn screen_insulin_resistance(
        &self,
        fasting: &[u32],
        postmeal: &[u32],
        monitor_days: usize,
    ) -> AppResult<InsulinResistanceAssessment> {
        assess_insulin_resistance(
            fasting,
            postmeal,
            monitor_days,
            &self.config.insulin_resistance,
        )
    }
}
