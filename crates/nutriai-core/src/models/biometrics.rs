// ABOUTME: Wearable-derived biometric snapshot of strain, recovery, and sleep
// ABOUTME: Opaque triple consumed by the adaptive engine, validated at construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::biometrics::{
    DEFAULT_RECOVERY, DEFAULT_SLEEP_HOURS, DEFAULT_STRAIN, MAX_RECOVERY, MAX_SLEEP_HOURS,
    MAX_STRAIN,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Daily strain, recovery, and sleep reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "SnapshotRecord")]
pub struct BiometricSnapshot {
    /// Day strain (0-21)
    pub strain: f64,
    /// Recovery score (0-100 percent)
    pub recovery: f64,
    /// Sleep duration (0-12 hours)
    pub sleep_hours: f64,
}

/// Unchecked wire shape of a snapshot
#[derive(Deserialize)]
struct SnapshotRecord {
    strain: f64,
    recovery: f64,
    sleep_hours: f64,
}

impl TryFrom<SnapshotRecord> for BiometricSnapshot {
    type Error = AppError;

    fn try_from(record: SnapshotRecord) -> AppResult<Self> {
        Self::new(record.strain, record.recovery, record.sleep_hours)
    }
}

impl BiometricSnapshot {
    /// Build a snapshot, enforcing the wearable scales
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` if strain is outside 0-21, recovery outside
    /// 0-100, or sleep outside 0-12 hours
    pub fn new(strain: f64, recovery: f64, sleep_hours: f64) -> AppResult<Self> {
        if !(0.0..=MAX_STRAIN).contains(&strain) {
            return Err(AppError::value_out_of_range("strain", strain, 0.0, MAX_STRAIN));
        }
        if !(0.0..=MAX_RECOVERY).contains(&recovery) {
            return Err(AppError::value_out_of_range(
                "recovery",
                recovery,
                0.0,
                MAX_RECOVERY,
            ));
        }
        if !(0.0..=MAX_SLEEP_HOURS).contains(&sleep_hours) {
            return Err(AppError::value_out_of_range(
                "sleep_hours",
                sleep_hours,
                0.0,
                MAX_SLEEP_HOURS,
            ));
        }
        Ok(Self {
            strain,
            recovery,
            sleep_hours,
        })
    }
}

impl Default for BiometricSnapshot {
    fn default() -> Self {
        Self {
            strain: DEFAULT_STRAIN,
            recovery: DEFAULT_RECOVERY,
            sleep_hours: DEFAULT_SLEEP_HOURS,
        }
    }
}
