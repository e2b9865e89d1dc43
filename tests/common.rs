// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, profile builders, and WHOOP payload fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutriai`

use nutriai::models::{ActivityLevel, AnthropometricProfile, DietType, Goal, Sex};
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 30-year-old, 175 cm, 75 kg male; moderately active, maintaining, balanced diet
pub fn reference_male() -> AnthropometricProfile {
    AnthropometricProfile::new(
        Sex::Male,
        30,
        175.0,
        75.0,
        ActivityLevel::ModeratelyActive,
        Goal::Maintain,
        DietType::Balanced,
    )
    .unwrap()
}

/// Profile builder with the reference body and custom selections
pub fn profile_with(
    sex: Sex,
    weight_kg: f64,
    activity_level: ActivityLevel,
    goal: Goal,
    diet_type: DietType,
) -> AnthropometricProfile {
    AnthropometricProfile::new(sex, 30, 175.0, weight_kg, activity_level, goal, diet_type)
        .unwrap()
}

/// WHOOP recovery collection with a single scored record
pub fn whoop_recovery_json(recovery_score: f64) -> String {
    format!(
        r#"{{
            "records": [
                {{
                    "cycle_id": 93845,
                    "sleep_id": "ecfc6a15-4661-442f-a9a4-f160dd7afae8",
                    "user_id": 10129,
                    "score_state": "SCORED",
                    "score": {{
                        "user_calibrating": false,
                        "recovery_score": {recovery_score},
                        "resting_heart_rate": 64,
                        "hrv_rmssd_milli": 31.813562
                    }}
                }}
            ],
            "next_token": null
        }}"#
    )
}

/// WHOOP cycle collection with a single scored record
pub fn whoop_cycle_json(strain: f64) -> String {
    format!(
        r#"{{
            "records": [
                {{
                    "id": 93845,
                    "user_id": 10129,
                    "start": "2025-03-10T06:25:14.059Z",
                    "score_state": "SCORED",
                    "score": {{
                        "strain": {strain},
                        "kilojoule": 8288.297,
                        "average_heart_rate": 68,
                        "max_heart_rate": 141
                    }}
                }},
                {{
                    "id": 93844,
                    "user_id": 10129,
                    "start": "2025-03-09T06:10:00.000Z",
                    "score_state": "SCORED",
                    "score": {{ "strain": 3.0 }}
                }}
            ]
        }}"#
    )
}

/// WHOOP sleep collection with a single stage summary
pub fn whoop_sleep_json(in_bed_milli: i64, awake_milli: i64) -> String {
    format!(
        r#"{{
            "records": [
                {{
                    "id": "ecfc6a15-4661-442f-a9a4-f160dd7afae8",
                    "start": "2025-03-09T22:25:14.059Z",
                    "end": "2025-03-10T06:25:14.059Z",
                    "score": {{
                        "stage_summary": {{
                            "total_in_bed_time_milli": {in_bed_milli},
                            "total_awake_time_milli": {awake_milli},
                            "total_light_sleep_time_milli": 14905851,
                            "disturbance_count": 12
                        }},
                        "sleep_performance_percentage": 98
                    }}
                }}
            ]
        }}"#
    )
}
