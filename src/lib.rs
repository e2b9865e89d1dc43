// ABOUTME: Main library entry point for the NutriAI adaptive nutrition planner
// ABOUTME: Wires configuration, logging, input parsing, daily planning, and meal-plan prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriAI`
//!
//! Adaptive daily nutrition targets. A user's body metrics give a baseline of
//! calories, protein, carbohydrate and fat; a day of continuous glucose readings
//! plus wearable strain, recovery and sleep then scale that baseline up or down.
//!
//! ## Architecture
//!
//! - **`nutriai-core`**: error taxonomy and domain value objects
//! - **`nutriai-intelligence`**: the pure algorithms (baseline, glucose, adaptive, insulin)
//! - **`nutriai-providers`**: wearable sources (manual entry, WHOOP)
//! - **this crate**: configuration, logging, input parsing, the planner, meal-plan
//!   prompts, the glucose assistant, and the `nutriai-cli` binary
//!
//! ## Example
//!
//! ```rust
//! use nutriai::models::{ActivityLevel, AnthropometricProfile, DietType, Goal, Sex};
//! use nutriai::intelligence::{adjust_macros, compute_baseline};
//!
//! let profile = AnthropometricProfile::new(
//!     Sex::Male, 30, 175.0, 75.0,
//!     ActivityLevel::ModeratelyActive, Goal::Maintain, DietType::Balanced,
//! )?;
//! let baseline = compute_baseline(&profile);
//! let adjusted = adjust_macros(&[100, 110, 120], 12.0, 65.0, 7.5, &baseline);
//! assert_eq!(adjusted.protein_g, baseline.protein_g);
//! # Ok::<(), nutriai::errors::AppError>(())
//! ```

// Re-export foundation crates so callers need a single dependency
pub use nutriai_core::constants;
pub use nutriai_core::errors;
pub use nutriai_core::models;
pub use nutriai_intelligence as intelligence;
pub use nutriai_providers as providers;

/// Environment-driven application configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Free-text glucose input parsing
pub mod input;

/// Daily context and adaptive planning
pub mod planner;

/// Meal-plan prompt construction and chat-completion boundary
pub mod meal_plan;

/// Keyword glucose assistant and chat transcripts
pub mod assistant;
