// ABOUTME: Application constants for nutrition energy math and biometric defaults
// ABOUTME: Shared numeric values referenced by the calculator, engine, and providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application-wide constants organized by domain.

/// Energy density of macronutrients (Atwater factors)
pub mod energy {
    /// Protein energy density (kcal per gram)
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate energy density (kcal per gram)
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat energy density (kcal per gram)
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Default wearable values used when no device data is available
pub mod biometrics {
    /// Default day strain on the 0-21 scale
    pub const DEFAULT_STRAIN: f64 = 12.0;
    /// Default recovery percentage
    pub const DEFAULT_RECOVERY: f64 = 65.0;
    /// Default sleep duration in hours
    pub const DEFAULT_SLEEP_HOURS: f64 = 7.5;

    /// Maximum strain on the wearable scale
    pub const MAX_STRAIN: f64 = 21.0;
    /// Maximum recovery percentage
    pub const MAX_RECOVERY: f64 = 100.0;
    /// Maximum accepted sleep duration in hours
    pub const MAX_SLEEP_HOURS: f64 = 12.0;
}

/// Accepted ranges for anthropometric form input
pub mod profile_limits {
    /// Minimum age in years
    pub const MIN_AGE: u32 = 10;
    /// Maximum age in years
    pub const MAX_AGE: u32 = 100;
    /// Minimum height in centimeters
    pub const MIN_HEIGHT_CM: f64 = 120.0;
    /// Maximum height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Minimum weight in kilograms
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Maximum weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 200.0;
}

/// Service identifiers used in logs and collaborator names
pub mod service_names {
    /// Main service name
    pub const NUTRIAI: &str = "nutriai";
    /// WHOOP wearable provider name
    pub const WHOOP: &str = "whoop";
    /// Manually entered biometrics
    pub const MANUAL: &str = "manual";
}

/// Targets assumed when no profile has been entered yet
pub mod default_baseline {
    /// Calories (kcal/day)
    pub const CALORIES: f64 = 2200.0;
    /// Protein (g/day)
    pub const PROTEIN_G: i64 = 150;
    /// Carbohydrates (g/day)
    pub const CARBS_G: i64 = 180;
    /// Fat (g/day)
    pub const FAT_G: i64 = 60;
}
