// ABOUTME: Anthropometric profile model with closed-set enums for sex, activity, goal, and diet
// ABOUTME: Validates form ranges at construction and parses enum selections from form labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::profile_limits::{
    MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercase a form selection, drop any parenthetical hint and unify separators.
///
/// `"Moderately active (3-5 days/week)"` becomes `"moderately active"`.
fn normalize_selection(raw: &str) -> String {
    let head = raw.split('(').next().unwrap_or(raw);
    head.replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Biological sex for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Male (+5 kcal Mifflin-St Jeor constant)
    Male,
    /// Female (-161 kcal Mifflin-St Jeor constant)
    Female,
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match normalize_selection(s).as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(AppError::invalid_input(format!("Unknown sex: {s}"))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("Male"),
            Self::Female => f.write_str("Female"),
        }
    }
}

/// Activity level tier for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (athlete or 2x/day)
    ExtraActive,
}

impl ActivityLevel {
    /// All tiers in ascending order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// Form label shown to users
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary (little/no exercise)",
            Self::LightlyActive => "Lightly active (1-3 days/week)",
            Self::ModeratelyActive => "Moderately active (3-5 days/week)",
            Self::VeryActive => "Very active (6-7 days/week)",
            Self::ExtraActive => "Extra active (athlete or 2x/day)",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match normalize_selection(s).as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly active" | "lightlyactive" => Ok(Self::LightlyActive),
            "moderately active" | "moderatelyactive" => Ok(Self::ModeratelyActive),
            "very active" | "veryactive" => Ok(Self::VeryActive),
            "extra active" | "extraactive" => Ok(Self::ExtraActive),
            _ => Err(AppError::invalid_input(format!("Unknown activity level: {s}"))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body composition goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Goal {
    /// Fat loss (caloric deficit)
    Cut,
    /// Maintenance (caloric balance)
    Maintain,
    /// Muscle gain (caloric surplus)
    Gain,
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match normalize_selection(s).as_str() {
            "cut" => Ok(Self::Cut),
            "maintain" | "maintenance" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            _ => Err(AppError::invalid_input(format!("Unknown goal: {s}"))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cut => f.write_str("Cut (fat loss)"),
            Self::Maintain => f.write_str("Maintain"),
            Self::Gain => f.write_str("Gain (muscle gain)"),
        }
    }
}

/// Diet style selecting the carbohydrate target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DietType {
    /// Balanced mixed diet
    Balanced,
    /// Reduced carbohydrate
    LowCarb,
    /// Ketogenic
    Keto,
    /// Carbohydrate-forward
    HighCarb,
    /// Animal foods only, zero carbohydrate target
    Carnivore,
    /// Vegetarian
    Vegetarian,
    /// Vegan
    Vegan,
    /// Paleo
    Paleo,
    /// Mediterranean
    Mediterranean,
}

impl DietType {
    /// All diet types in form order
    pub const ALL: [Self; 9] = [
        Self::Balanced,
        Self::LowCarb,
        Self::Keto,
        Self::HighCarb,
        Self::Carnivore,
        Self::Vegetarian,
        Self::Vegan,
        Self::Paleo,
        Self::Mediterranean,
    ];

    /// Form label shown to users
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::LowCarb => "Low Carb",
            Self::Keto => "Keto",
            Self::HighCarb => "High Carb",
            Self::Carnivore => "Carnivore",
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::Paleo => "Paleo",
            Self::Mediterranean => "Mediterranean",
        }
    }
}

impl FromStr for DietType {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match normalize_selection(s).as_str() {
            "balanced" => Ok(Self::Balanced),
            "low carb" | "lowcarb" => Ok(Self::LowCarb),
            "keto" | "ketogenic" => Ok(Self::Keto),
            "high carb" | "highcarb" => Ok(Self::HighCarb),
            "carnivore" => Ok(Self::Carnivore),
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            "paleo" => Ok(Self::Paleo),
            "mediterranean" => Ok(Self::Mediterranean),
            _ => Err(AppError::invalid_input(format!("Unknown diet type: {s}"))),
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Anthropometric and lifestyle inputs for the baseline calculator
///
/// Immutable once built; fields are read through accessors. Deserialization
/// goes through the same range checks as [`AnthropometricProfile::new`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "ProfileRecord")]
pub struct AnthropometricProfile {
    sex: Sex,
    age: u32,
    height_cm: f64,
    weight_kg: f64,
    activity_level: ActivityLevel,
    goal: Goal,
    diet_type: DietType,
}

/// Unchecked wire shape of a profile
#[derive(Deserialize)]
struct ProfileRecord {
    sex: Sex,
    age: u32,
    height_cm: f64,
    weight_kg: f64,
    activity_level: ActivityLevel,
    goal: Goal,
    diet_type: DietType,
}

impl TryFrom<ProfileRecord> for AnthropometricProfile {
    type Error = AppError;

    fn try_from(record: ProfileRecord) -> AppResult<Self> {
        Self::new(
            record.sex,
            record.age,
            record.height_cm,
            record.weight_kg,
            record.activity_level,
            record.goal,
            record.diet_type,
        )
    }
}

impl AnthropometricProfile {
    /// Build a profile, enforcing the form ranges
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` if age is outside 10-100 years, height outside
    /// 120-250 cm, or weight outside 30-200 kg
    pub fn new(
        sex: Sex,
        age: u32,
        height_cm: f64,
        weight_kg: f64,
        activity_level: ActivityLevel,
        goal: Goal,
        diet_type: DietType,
    ) -> AppResult<Self> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(AppError::value_out_of_range(
                "age",
                f64::from(age),
                f64::from(MIN_AGE),
                f64::from(MAX_AGE),
            ));
        }
        if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height_cm) {
            return Err(AppError::value_out_of_range(
                "height_cm",
                height_cm,
                MIN_HEIGHT_CM,
                MAX_HEIGHT_CM,
            ));
        }
        if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg) {
            return Err(AppError::value_out_of_range(
                "weight_kg",
                weight_kg,
                MIN_WEIGHT_KG,
                MAX_WEIGHT_KG,
            ));
        }

        Ok(Self {
            sex,
            age,
            height_cm,
            weight_kg,
            activity_level,
            goal,
            diet_type,
        })
    }

    /// Build a profile from raw form selections
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` if any selection is outside its closed set, or
    /// `VALUE_OUT_OF_RANGE` if a numeric field is outside the form range
    #[allow(clippy::too_many_arguments)]
    pub fn from_form(
        sex: &str,
        age: u32,
        height_cm: f64,
        weight_kg: f64,
        activity_level: &str,
        goal: &str,
        diet_type: &str,
    ) -> AppResult<Self> {
        Self::new(
            sex.parse()?,
            age,
            height_cm,
            weight_kg,
            activity_level.parse()?,
            goal.parse()?,
            diet_type.parse()?,
        )
    }

    /// Biological sex
    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.sex
    }

    /// Age in years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Activity tier
    #[must_use]
    pub const fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    /// Body composition goal
    #[must_use]
    pub const fn goal(&self) -> Goal {
        self.goal
    }

    /// Diet type
    #[must_use]
    pub const fn diet_type(&self) -> DietType {
        self.diet_type
    }
}
