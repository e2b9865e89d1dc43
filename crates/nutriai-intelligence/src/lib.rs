// ABOUTME: Nutrition intelligence algorithms for baseline targets and adaptive adjustment
// ABOUTME: Pure, synchronous functions with typed configuration and no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriAI` Intelligence
//!
//! Deterministic nutrition algorithms. Every function here is pure: identical
//! arguments give identical results, nothing blocks, and no state is shared, so
//! callers may invoke them concurrently without coordination.
//!
//! ## Modules
//!
//! - **baseline**: Mifflin-St Jeor BMR, TDEE, and macro targets from a profile
//! - **glucose**: Glucose series statistics and CGM day analysis
//! - **adaptive**: Glucose + wearable driven macro adjustment engine
//! - **insulin**: Fasting/post-meal insulin-resistance screening
//! - **config**: Typed, validated thresholds with environment overrides

/// Algorithm configuration
pub mod config;

/// Baseline macro calculator
pub mod baseline;

/// Biometric aggregator and CGM analysis
pub mod glucose;

/// Adaptive macro adjustment engine
pub mod adaptive;

/// Insulin-resistance screening
pub mod insulin;

pub use adaptive::{
    adjust_for_snapshot, adjust_macros, adjust_macros_with_config, AdjustmentRule,
    MacroAdjustment, MacroMultipliers,
};
pub use baseline::{compute_baseline, compute_baseline_report, compute_baseline_with_config, BaselineReport};
pub use config::IntelligenceConfig;
pub use glucose::{analyze_series, summarize, GlucoseAnalysis, GlucoseLow, GlucoseSpike, GlucoseStats};
pub use insulin::{assess_insulin_resistance, InsulinResistanceAssessment, InsulinResistanceRisk};
