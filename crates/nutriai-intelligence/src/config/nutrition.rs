// ABOUTME: Nutrition configuration for baseline calorie and macronutrient targets
// ABOUTME: Configures Mifflin-St Jeor coefficients, activity factors, goal and diet multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Baseline Nutrition Configuration
//!
//! Defaults reproduce the fixed constants of the baseline calculator exactly.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use serde::{Deserialize, Serialize};

/// Baseline nutrition configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie multipliers per goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Protein target per kilogram of body weight
    pub protein: ProteinConfig,
    /// Carbohydrate target per kilogram by diet type
    pub diet_carbs: DietCarbsConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (athlete or 2x/day): 1.9
    pub extra_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

/// Calorie multipliers applied to TDEE per goal (maintenance is always 1.0)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalAdjustmentConfig {
    /// Fat-loss deficit factor: 0.85
    pub cut_factor: f64,
    /// Muscle-gain surplus factor: 1.15
    pub gain_factor: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            cut_factor: 0.85,
            gain_factor: 1.15,
        }
    }
}

/// Protein target configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProteinConfig {
    /// Protein grams per kilogram body weight: 2.2
    pub g_per_kg: f64,
}

impl Default for ProteinConfig {
    fn default() -> Self {
        Self { g_per_kg: 2.2 }
    }
}

/// Carbohydrate grams per kilogram by diet type
///
/// Carnivore is not configurable: its carbohydrate target is always zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietCarbsConfig {
    /// Keto: 0.5 g/kg
    pub keto_g_per_kg: f64,
    /// Low Carb: 1.0 g/kg
    pub low_carb_g_per_kg: f64,
    /// High Carb: 3.0 g/kg
    pub high_carb_g_per_kg: f64,
    /// Balanced, Vegetarian, Vegan, Paleo, Mediterranean: 2.0 g/kg
    pub standard_g_per_kg: f64,
}

impl Default for DietCarbsConfig {
    fn default() -> Self {
        Self {
            keto_g_per_kg: 0.5,
            low_carb_g_per_kg: 1.0,
            high_carb_g_per_kg: 3.0,
            standard_g_per_kg: 2.0,
        }
    }
}
