// ABOUTME: Biometric source trait shared by every wearable integration
// ABOUTME: Includes the manual source backed by user-entered slider values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::service_names;
use crate::errors::AppResult;
use crate::models::BiometricSnapshot;
use async_trait::async_trait;

/// Anything that can produce today's strain, recovery and sleep
///
/// Implementations must be `Send + Sync` so a planner can hold them behind
/// shared references across async tasks.
#[async_trait]
pub trait BiometricSource: Send + Sync {
    /// Source name (e.g. "whoop", "manual")
    fn name(&self) -> &'static str;

    /// Fetch the latest snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the vendor data is unavailable or malformed
    async fn fetch_snapshot(&self) -> AppResult<BiometricSnapshot>;
}

/// Snapshot entered by hand
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualBiometricSource {
    snapshot: BiometricSnapshot,
}

impl ManualBiometricSource {
    /// Wrap a user-entered snapshot
    #[must_use]
    pub const fn new(snapshot: BiometricSnapshot) -> Self {
        Self { snapshot }
    }

    /// Build from raw slider values
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` if a value is outside its wearable scale
    pub fn from_values(strain: f64, recovery: f64, sleep_hours: f64) -> AppResult<Self> {
        Ok(Self::new(BiometricSnapshot::new(strain, recovery, sleep_hours)?))
    }
}

#[async_trait]
impl BiometricSource for ManualBiometricSource {
    fn name(&self) -> &'static str {
        service_names::MANUAL
    }

    async fn fetch_snapshot(&self) -> AppResult<BiometricSnapshot> {
        Ok(self.snapshot)
    }
}
