// ABOUTME: Wearable biometric source implementations for manual entry and WHOOP
// ABOUTME: Core source trait plus payload mapping onto the strain/recovery/sleep snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Wearable biometric sources.
//!
//! This crate is the boundary between wearable vendors and the adaptive engine.
//! Everything a vendor returns is reduced to a [`BiometricSnapshot`]; callers
//! decide what to do when a source fails.

pub use nutriai_core::constants;
pub use nutriai_core::errors;
pub use nutriai_core::models;

/// Core biometric source trait and the manual-entry source
pub mod source;

/// WHOOP payload mapping for strain, recovery, and sleep
#[cfg(feature = "provider-whoop")]
pub mod whoop;

pub use nutriai_core::models::BiometricSnapshot;
pub use source::{BiometricSource, ManualBiometricSource};
#[cfg(feature = "provider-whoop")]
pub use whoop::{StaticWhoopSource, WhoopBiometrics};
