// ABOUTME: Intelligence configuration for baseline, adaptive, glucose, and insulin algorithms
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Provides typed, validated configuration for all nutrition algorithms.
//!
//! # Module Structure
//!
//! - `nutrition` - Baseline BMR/TDEE coefficients and macro multipliers
//! - `adaptive` - Glucose and wearable adjustment rules
//! - `glucose` - CGM series analysis and insulin-resistance screening

pub mod adaptive;
pub mod error;
pub mod glucose;
pub mod nutrition;

pub use adaptive::{
    AdaptiveConfig, GlucoseRuleConfig, RecoveryRuleConfig, SleepRuleConfig, StrainRuleConfig,
    VariabilityRuleConfig,
};
pub use error::ConfigError;
pub use glucose::{GlucoseAnalysisConfig, InsulinResistanceConfig};
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, DietCarbsConfig, GoalAdjustmentConfig, NutritionConfig,
    ProteinConfig,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::marker::PhantomData;
use std::str::FromStr;

/// Main intelligence configuration container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelligenceConfig<const VALIDATED: bool = false> {
    /// Baseline calorie and macro calculation
    pub nutrition: NutritionConfig,
    /// Adaptive glucose and wearable adjustment rules
    pub adaptive: AdaptiveConfig,
    /// CGM series analysis thresholds
    pub glucose_analysis: GlucoseAnalysisConfig,
    /// Insulin-resistance screening cut-offs
    pub insulin_resistance: InsulinResistanceConfig,
    #[serde(skip)]
    _phantom: PhantomData<()>,
}

impl IntelligenceConfig<true> {
    /// Load configuration from environment overrides on top of defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if thresholds are misordered or a multiplier is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_nutrition()?;
        self.validate_adaptive()?;
        self.validate_glucose()
    }

    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;
        let factors = &nutr.activity_factors;
        let ordered = [
            factors.sedentary,
            factors.lightly_active,
            factors.moderately_active,
            factors.very_active,
            factors.extra_active,
        ];
        if ordered[0] < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Sedentary activity factor must be at least 1.0",
            ));
        }
        if ordered.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let goals = &nutr.goal_adjustments;
        if goals.cut_factor <= 0.0 || goals.cut_factor >= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Cut factor must be between 0 and 1 (exclusive)",
            ));
        }
        if goals.gain_factor <= 1.0 {
            return Err(ConfigError::ValueOutOfRange("Gain factor must exceed 1.0"));
        }

        if nutr.protein.g_per_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Protein g/kg must be positive",
            ));
        }

        let carbs = &nutr.diet_carbs;
        if [
            carbs.keto_g_per_kg,
            carbs.low_carb_g_per_kg,
            carbs.standard_g_per_kg,
            carbs.high_carb_g_per_kg,
        ]
        .iter()
        .any(|value| *value < 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Diet carbohydrate g/kg must not be negative",
            ));
        }

        Ok(())
    }

    fn validate_adaptive(&self) -> Result<(), ConfigError> {
        let adaptive = &self.adaptive;
        if adaptive.glucose.low_avg_mg_dl >= adaptive.glucose.high_avg_mg_dl {
            return Err(ConfigError::InvalidRange(
                "low_avg_mg_dl must be < high_avg_mg_dl",
            ));
        }
        if adaptive.strain.low_strain >= adaptive.strain.high_strain {
            return Err(ConfigError::InvalidRange("low_strain must be < high_strain"));
        }

        let multipliers = [
            adaptive.glucose.high_carb_mult,
            adaptive.glucose.high_fat_mult,
            adaptive.glucose.low_carb_mult,
            adaptive.variability.calorie_mult,
            adaptive.variability.carb_mult,
            adaptive.strain.high_calorie_mult,
            adaptive.strain.high_carb_mult,
            adaptive.strain.low_calorie_mult,
            adaptive.recovery.protein_mult,
            adaptive.recovery.calorie_mult,
            adaptive.sleep.fat_mult,
            adaptive.sleep.carb_mult,
        ];
        if multipliers.iter().any(|mult| *mult <= 0.0) {
            return Err(ConfigError::InvalidWeights(
                "Adjustment multipliers must be positive",
            ));
        }

        Ok(())
    }

    fn validate_glucose(&self) -> Result<(), ConfigError> {
        let analysis = &self.glucose_analysis;
        if analysis.range_low_mg_dl >= analysis.range_high_mg_dl {
            return Err(ConfigError::InvalidRange(
                "range_low_mg_dl must be < range_high_mg_dl",
            ));
        }
        if analysis.spike_rise_mg_dl == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "spike_rise_mg_dl must be at least 1",
            ));
        }

        let insulin = &self.insulin_resistance;
        if insulin.early_fasting_mg_dl > insulin.high_fasting_mg_dl
            || insulin.early_postmeal_mg_dl > insulin.high_postmeal_mg_dl
        {
            return Err(ConfigError::InvalidRange(
                "Early insulin-resistance cut-offs must not exceed high cut-offs",
            ));
        }
        if insulin.min_monitor_days == 0 || insulin.min_monitor_days > insulin.max_monitor_days {
            return Err(ConfigError::InvalidRange(
                "min_monitor_days must be >= 1 and <= max_monitor_days",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Baseline overrides
        Self::apply_env_var(
            "NUTRIAI_PROTEIN_G_PER_KG",
            &mut self.nutrition.protein.g_per_kg,
        )?;
        Self::apply_env_var(
            "NUTRIAI_CUT_FACTOR",
            &mut self.nutrition.goal_adjustments.cut_factor,
        )?;
        Self::apply_env_var(
            "NUTRIAI_GAIN_FACTOR",
            &mut self.nutrition.goal_adjustments.gain_factor,
        )?;

        // Adaptive rule thresholds
        Self::apply_env_var(
            "NUTRIAI_GLUCOSE_HIGH_AVG",
            &mut self.adaptive.glucose.high_avg_mg_dl,
        )?;
        Self::apply_env_var(
            "NUTRIAI_GLUCOSE_LOW_AVG",
            &mut self.adaptive.glucose.low_avg_mg_dl,
        )?;
        Self::apply_env_var(
            "NUTRIAI_GLUCOSE_MAX_RANGE",
            &mut self.adaptive.variability.max_range_mg_dl,
        )?;
        Self::apply_env_var("NUTRIAI_STRAIN_HIGH", &mut self.adaptive.strain.high_strain)?;
        Self::apply_env_var("NUTRIAI_STRAIN_LOW", &mut self.adaptive.strain.low_strain)?;
        Self::apply_env_var(
            "NUTRIAI_RECOVERY_LOW",
            &mut self.adaptive.recovery.low_recovery,
        )?;
        Self::apply_env_var(
            "NUTRIAI_SLEEP_SHORT_HOURS",
            &mut self.adaptive.sleep.short_sleep_hours,
        )?;

        // CGM analysis overrides
        Self::apply_env_var(
            "NUTRIAI_RANGE_LOW",
            &mut self.glucose_analysis.range_low_mg_dl,
        )?;
        Self::apply_env_var(
            "NUTRIAI_RANGE_HIGH",
            &mut self.glucose_analysis.range_high_mg_dl,
        )?;
        Self::apply_env_var(
            "NUTRIAI_SPIKE_RISE",
            &mut self.glucose_analysis.spike_rise_mg_dl,
        )?;
        Self::apply_env_var(
            "NUTRIAI_LOW_THRESHOLD",
            &mut self.glucose_analysis.low_threshold_mg_dl,
        )?;

        Ok(self)
    }
}

impl Default for IntelligenceConfig<true> {
    fn default() -> Self {
        Self {
            nutrition: NutritionConfig::default(),
            adaptive: AdaptiveConfig::default(),
            glucose_analysis: GlucoseAnalysisConfig::default(),
            insulin_resistance: InsulinResistanceConfig::default(),
            _phantom: PhantomData,
        }
    }
}
