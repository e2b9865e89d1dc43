// ABOUTME: Core data models for the NutriAI nutrition platform
// ABOUTME: Re-exports profile, macro, glucose, and biometric value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain value objects. All of them are immutable after construction and
//! carry no back-references or shared state.

mod biometrics;
mod glucose;
mod macros;
mod profile;

pub use biometrics::BiometricSnapshot;
pub use glucose::{GlucoseReading, GlucoseSeries, ReadingTime};
pub use macros::{AdjustedMacros, BaselineMacros, MacroTargets};
pub use profile::{ActivityLevel, AnthropometricProfile, DietType, Goal, Sex};
