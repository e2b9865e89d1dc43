// ABOUTME: Daily calorie and macronutrient target value object
// ABOUTME: Shared shape for baseline targets and engine-adjusted targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::default_baseline;
use crate::constants::energy::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use serde::{Deserialize, Serialize};

/// Daily calorie and macronutrient targets
///
/// Gram fields are signed: fat is the balancing term of the baseline energy
/// budget and goes negative when protein and carbohydrate calories alone
/// exceed the calorie target. Nothing in the core clamps it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroTargets {
    /// Energy target (kcal/day)
    pub calories: f64,
    /// Protein (g/day)
    pub protein_g: i64,
    /// Carbohydrates (g/day)
    pub carbs_g: i64,
    /// Fat (g/day), may be negative
    pub fat_g: i64,
}

impl Default for MacroTargets {
    /// Targets assumed before any profile has been entered
    fn default() -> Self {
        Self::new(
            default_baseline::CALORIES,
            default_baseline::PROTEIN_G,
            default_baseline::CARBS_G,
            default_baseline::FAT_G,
        )
    }
}

/// Baseline targets derived from an anthropometric profile
pub type BaselineMacros = MacroTargets;

/// Targets produced by the adaptive adjustment engine
pub type AdjustedMacros = MacroTargets;

impl MacroTargets {
    /// Create targets from explicit values
    #[must_use]
    pub const fn new(calories: f64, protein_g: i64, carbs_g: i64, fat_g: i64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Energy carried by the gram targets (kcal/day)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn macro_kcal(&self) -> f64 {
        (self.fat_g as f64).mul_add(
            FAT_KCAL_PER_G,
            (self.protein_g as f64).mul_add(PROTEIN_KCAL_PER_G, self.carbs_g as f64 * CARBS_KCAL_PER_G),
        )
    }

    /// Calorie target rounded to a whole kcal for display
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rounded_calories(&self) -> i64 {
        self.calories.round() as i64
    }

    /// Whether the fat target went negative
    #[must_use]
    pub const fn has_negative_fat(&self) -> bool {
        self.fat_g < 0
    }
}
