// ABOUTME: Baseline calorie and macronutrient targets from anthropometric inputs
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE, goal factor, and diet-driven macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Baseline Macro Calculator
//!
//! Derives daily calorie, protein, carbohydrate and fat targets from an
//! [`AnthropometricProfile`]:
//!
//! 1. BMR via Mifflin-St Jeor
//! 2. TDEE = BMR x activity factor
//! 3. Calories = TDEE x goal factor (cut 0.85, gain 1.15, maintain 1.0)
//! 4. Protein = 2.2 g/kg
//! 5. Carbohydrate = diet-specific g/kg (Carnivore is always zero)
//! 6. Fat = remaining calories / 9, with no floor
//!
//! Gram targets use round-half-to-even. Fat is never clamped, so a light body
//! weight on a High Carb surplus can produce a negative fat target.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{
    ActivityFactorsConfig, BmrConfig, DietCarbsConfig, GoalAdjustmentConfig, NutritionConfig,
    ProteinConfig,
};
use nutriai_core::constants::energy::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use nutriai_core::models::{
    ActivityLevel, AnthropometricProfile, BaselineMacros, DietType, Goal, Sex,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Baseline targets together with the intermediate energy figures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BaselineReport {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Goal-adjusted targets
    pub macros: BaselineMacros,
    /// Activity tier used
    pub activity_level: ActivityLevel,
    /// Goal used
    pub goal: Goal,
    /// Diet type used
    pub diet_type: DietType,
    /// Calculation method
    pub method: String,
}

/// Round to nearest, ties to even
#[allow(clippy::cast_possible_truncation)]
fn round_grams(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Male: +5
/// - Female: -161
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    config.msj_weight_coef * weight_kg
        + config.msj_height_coef * height_cm
        + config.msj_age_coef * f64::from(age)
        + sex_constant
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
/// - Sedentary: 1.2
/// - Lightly active: 1.375
/// - Moderately active: 1.55
/// - Very active: 1.725
/// - Extra active: 1.9
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::LightlyActive => config.lightly_active,
        ActivityLevel::ModeratelyActive => config.moderately_active,
        ActivityLevel::VeryActive => config.very_active,
        ActivityLevel::ExtraActive => config.extra_active,
    };

    bmr * activity_factor
}

/// Apply the goal's calorie factor to TDEE
#[must_use]
pub fn apply_goal(tdee: f64, goal: Goal, config: &GoalAdjustmentConfig) -> f64 {
    match goal {
        Goal::Cut => tdee * config.cut_factor,
        Goal::Gain => tdee * config.gain_factor,
        Goal::Maintain => tdee,
    }
}

/// Daily protein target in grams
#[must_use]
pub fn calculate_protein_g(weight_kg: f64, config: &ProteinConfig) -> i64 {
    round_grams(config.g_per_kg * weight_kg)
}

/// Daily carbohydrate target in grams for a diet type
#[must_use]
pub fn calculate_carbs_g(weight_kg: f64, diet_type: DietType, config: &DietCarbsConfig) -> i64 {
    let g_per_kg = match diet_type {
        DietType::Carnivore => return 0,
        DietType::Keto => config.keto_g_per_kg,
        DietType::LowCarb => config.low_carb_g_per_kg,
        DietType::HighCarb => config.high_carb_g_per_kg,
        DietType::Balanced
        | DietType::Vegetarian
        | DietType::Vegan
        | DietType::Paleo
        | DietType::Mediterranean => config.standard_g_per_kg,
    };

    round_grams(g_per_kg * weight_kg)
}

/// Daily fat target in grams: whatever energy protein and carbohydrate leave over
///
/// Negative when protein and carbohydrate calories exceed `calories`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn calculate_fat_g(calories: f64, protein_g: i64, carbs_g: i64) -> i64 {
    let protein_kcal = protein_g as f64 * PROTEIN_KCAL_PER_G;
    let carbs_kcal = carbs_g as f64 * CARBS_KCAL_PER_G;
    let fat_kcal = calories - (protein_kcal + carbs_kcal);
    round_grams(fat_kcal / FAT_KCAL_PER_G)
}

/// Calculate baseline targets with the intermediate BMR and TDEE
#[must_use]
pub fn compute_baseline_report(
    profile: &AnthropometricProfile,
    config: &NutritionConfig,
) -> BaselineReport {
    let bmr = calculate_mifflin_st_jeor(
        profile.weight_kg(),
        profile.height_cm(),
        profile.age(),
        profile.sex(),
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level(), &config.activity_factors);
    let calories = apply_goal(tdee, profile.goal(), &config.goal_adjustments);

    let protein_g = calculate_protein_g(profile.weight_kg(), &config.protein);
    let carbs_g = calculate_carbs_g(profile.weight_kg(), profile.diet_type(), &config.diet_carbs);
    let fat_g = calculate_fat_g(calories, protein_g, carbs_g);

    if fat_g < 0 {
        debug!(
            calories,
            protein_g, carbs_g, fat_g, "Protein and carbohydrate exceed the calorie budget"
        );
    }

    BaselineReport {
        bmr,
        tdee,
        macros: BaselineMacros::new(calories, protein_g, carbs_g, fat_g),
        activity_level: profile.activity_level(),
        goal: profile.goal(),
        diet_type: profile.diet_type(),
        method: "Mifflin-St Jeor + Activity Factor".to_owned(),
    }
}

/// Calculate baseline targets using the given configuration
#[must_use]
pub fn compute_baseline_with_config(
    profile: &AnthropometricProfile,
    config: &NutritionConfig,
) -> BaselineMacros {
    compute_baseline_report(profile, config).macros
}

/// Calculate baseline targets with the default constants
#[must_use]
pub fn compute_baseline(profile: &AnthropometricProfile) -> BaselineMacros {
    compute_baseline_with_config(profile, &NutritionConfig::default())
}
