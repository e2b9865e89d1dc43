// ABOUTME: Parsing of free-text glucose input into values and timestamped series
// ABOUTME: Lenient comma-separated lists and strict "HH:MM,value" reading entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::{GlucoseReading, GlucoseSeries, ReadingTime};
use chrono::NaiveTime;

/// Parse a comma-separated list of glucose values
///
/// Tokens that are not plain non-negative integers are skipped, so the result
/// may be empty.
#[must_use]
pub fn parse_glucose_list(text: &str) -> Vec<u32> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty() && token.bytes().all(|byte| byte.is_ascii_digit()))
        .filter_map(|token| token.parse().ok())
        .collect()
}

fn parse_entry(entry: &str) -> AppResult<GlucoseReading> {
    let malformed = || {
        AppError::invalid_format(format!(
            "Expected \"HH:MM,value\" but found \"{entry}\""
        ))
    };

    let (time, value) = entry.split_once(',').ok_or_else(malformed)?;
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M").map_err(|_| malformed())?;
    let value = value.trim().parse::<u32>().map_err(|_| malformed())?;

    Ok(GlucoseReading::new(ReadingTime::TimeOfDay(time), value))
}

/// Parse whitespace-separated `HH:MM,value` entries into a series
///
/// Entries keep their input order.
///
/// # Errors
///
/// Returns `INVALID_FORMAT` on the first malformed entry
pub fn parse_timed_readings(text: &str) -> AppResult<GlucoseSeries> {
    text.split_whitespace()
        .map(parse_entry)
        .collect::<AppResult<Vec<_>>>()
        .map(GlucoseSeries::new)
}
