// ABOUTME: WHOOP v2 payload mapping onto the biometric snapshot
// ABOUTME: Reads the latest cycle strain, recovery score, and sleep stage summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//
// Clippy allowances for this module:
// - cast_precision_loss: sleep durations in milliseconds fit comfortably in f64
#![allow(clippy::cast_precision_loss)]

use crate::constants::biometrics::{
    DEFAULT_RECOVERY, DEFAULT_SLEEP_HOURS, DEFAULT_STRAIN, MAX_SLEEP_HOURS,
};
use crate::constants::service_names;
use crate::errors::AppResult;
use crate::models::BiometricSnapshot;
use crate::source::BiometricSource;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

// ============================================================================
// WHOOP API Response Structures
// ============================================================================

/// WHOOP pagination wrapper; the first record is the most recent
#[derive(Debug, Deserialize)]
struct WhoopPaginatedResponse<T> {
    /// Array of records
    #[serde(default = "Vec::new")]
    records: Vec<T>,
}

/// WHOOP cycle (daily physiological cycle)
#[derive(Debug, Deserialize)]
struct WhoopCycle {
    score: Option<WhoopCycleScore>,
}

#[derive(Debug, Deserialize)]
struct WhoopCycleScore {
    /// Strain score for the cycle (0-21)
    strain: Option<f64>,
}

/// WHOOP recovery record
#[derive(Debug, Deserialize)]
struct WhoopRecovery {
    score: Option<WhoopRecoveryScore>,
}

#[derive(Debug, Deserialize)]
struct WhoopRecoveryScore {
    /// Recovery score as percentage (0-100)
    recovery_score: Option<f64>,
}

/// WHOOP sleep record
#[derive(Debug, Deserialize)]
struct WhoopSleep {
    score: Option<WhoopSleepScore>,
}

#[derive(Debug, Deserialize)]
struct WhoopSleepScore {
    stage_summary: Option<WhoopStageSummary>,
}

#[derive(Debug, Deserialize)]
struct WhoopStageSummary {
    /// Total time in bed in milliseconds
    total_in_bed_time_milli: Option<i64>,
    /// Total awake time in milliseconds
    total_awake_time_milli: Option<i64>,
}

fn latest_record<T: DeserializeOwned>(payload: &str, kind: &str) -> AppResult<Option<T>> {
    let response: WhoopPaginatedResponse<T> = serde_json::from_str(payload)?;
    let latest = response.records.into_iter().next();
    if latest.is_none() {
        warn!(kind, "WHOOP returned no records, using default");
    }
    Ok(latest)
}

// ============================================================================
// Mapping
// ============================================================================

/// Biometrics extracted from WHOOP API payloads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhoopBiometrics {
    snapshot: BiometricSnapshot,
}

impl WhoopBiometrics {
    /// Map raw WHOOP recovery, cycle and (optionally) sleep payloads
    ///
    /// Strain and recovery are rounded to whole numbers. Sleep is time in bed
    /// minus time awake, capped at the 12 hour sleep scale. Absent records or
    /// scores fall back to 12 / 65 / 7.5.
    ///
    /// # Errors
    ///
    /// Returns `SERIALIZATION_ERROR` if any payload is not valid WHOOP JSON, or
    /// `VALUE_OUT_OF_RANGE` if a score lies outside the strain or recovery scale
    pub fn from_payloads(
        recovery_json: &str,
        cycle_json: &str,
        sleep_json: Option<&str>,
    ) -> AppResult<Self> {
        let recovery = latest_record::<WhoopRecovery>(recovery_json, "recovery")?
            .and_then(|record| record.score)
            .and_then(|score| score.recovery_score)
            .unwrap_or(DEFAULT_RECOVERY)
            .round_ties_even();

        let strain = latest_record::<WhoopCycle>(cycle_json, "cycle")?
            .and_then(|record| record.score)
            .and_then(|score| score.strain)
            .unwrap_or(DEFAULT_STRAIN)
            .round_ties_even();

        let sleep_hours = match sleep_json {
            Some(payload) => latest_record::<WhoopSleep>(payload, "sleep")?
                .and_then(|record| record.score)
                .and_then(|score| score.stage_summary)
                .and_then(|summary| {
                    let in_bed = summary.total_in_bed_time_milli?;
                    let awake = summary.total_awake_time_milli.unwrap_or(0);
                    let asleep = (in_bed - awake).max(0) as f64 / MILLIS_PER_HOUR;
                    Some(asleep.min(MAX_SLEEP_HOURS))
                })
                .unwrap_or(DEFAULT_SLEEP_HOURS),
            None => DEFAULT_SLEEP_HOURS,
        };

        debug!(strain, recovery, sleep_hours, "Mapped WHOOP biometrics");

        let snapshot = BiometricSnapshot::new(strain, recovery, sleep_hours)?;
        Ok(Self { snapshot })
    }

    /// Mapped snapshot
    #[must_use]
    pub const fn snapshot(&self) -> BiometricSnapshot {
        self.snapshot
    }
}

/// WHOOP source over payloads already fetched by the caller
#[derive(Debug, Clone)]
pub struct StaticWhoopSource {
    recovery_json: String,
    cycle_json: String,
    sleep_json: Option<String>,
}

impl StaticWhoopSource {
    /// Capture recovery and cycle payloads
    #[must_use]
    pub fn new(recovery_json: impl Into<String>, cycle_json: impl Into<String>) -> Self {
        Self {
            recovery_json: recovery_json.into(),
            cycle_json: cycle_json.into(),
            sleep_json: None,
        }
    }

    /// Attach a sleep payload
    #[must_use]
    pub fn with_sleep(mut self, sleep_json: impl Into<String>) -> Self {
        self.sleep_json = Some(sleep_json.into());
        self
    }
}

#[async_trait]
impl BiometricSource for StaticWhoopSource {
    fn name(&self) -> &'static str {
        service_names::WHOOP
    }

    async fn fetch_snapshot(&self) -> AppResult<BiometricSnapshot> {
        WhoopBiometrics::from_payloads(
            &self.recovery_json,
            &self.cycle_json,
            self.sleep_json.as_deref(),
        )
        .map(|mapped| mapped.snapshot())
    }
}
