// ABOUTME: Core types and constants for the NutriAI adaptive nutrition platform
// ABOUTME: Foundation crate with error handling, domain value objects, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriAI` Core
//!
//! Foundation crate providing shared types and constants for the `NutriAI`
//! adaptive nutrition platform. Everything here is an immutable value object
//! with no I/O, so the crate changes rarely and compiles once for the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy densities and biometric defaults
//! - **models**: Anthropometric profile, macro targets, glucose series, biometric snapshot

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profile, macros, glucose readings, biometrics)
pub mod models;
