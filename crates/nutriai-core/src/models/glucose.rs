// ABOUTME: Continuous glucose monitor reading and ordered series models
// ABOUTME: Readings carry a wall-clock time or sequence index plus an integer mg/dL value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// When a glucose reading was taken
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ReadingTime {
    /// Wall-clock time of day
    TimeOfDay(NaiveTime),
    /// Position in a list entered without timestamps (1-based)
    Sequence(usize),
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimeOfDay(time) => write!(f, "{}", time.format("%H:%M")),
            Self::Sequence(index) => write!(f, "#{index}"),
        }
    }
}

/// Single glucose measurement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlucoseReading {
    /// Reading time
    pub time: ReadingTime,
    /// Blood glucose (mg/dL)
    pub value: u32,
}

impl GlucoseReading {
    /// Create a reading
    #[must_use]
    pub const fn new(time: ReadingTime, value: u32) -> Self {
        Self { time, value }
    }
}

/// Ordered glucose readings in insertion (chronological) order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct GlucoseSeries {
    readings: Vec<GlucoseReading>,
}

impl GlucoseSeries {
    /// Wrap readings, preserving their order
    #[must_use]
    pub const fn new(readings: Vec<GlucoseReading>) -> Self {
        Self { readings }
    }

    /// Build a series from bare values, numbering them from 1
    #[must_use]
    pub fn from_values(values: &[u32]) -> Self {
        Self {
            readings: values
                .iter()
                .enumerate()
                .map(|(index, &value)| GlucoseReading::new(ReadingTime::Sequence(index + 1), value))
                .collect(),
        }
    }

    /// Readings in order
    #[must_use]
    pub fn readings(&self) -> &[GlucoseReading] {
        &self.readings
    }

    /// Bare mg/dL values in order
    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        self.readings.iter().map(|reading| reading.value).collect()
    }

    /// Number of readings
    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the series holds no readings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl From<Vec<GlucoseReading>> for GlucoseSeries {
    fn from(readings: Vec<GlucoseReading>) -> Self {
        Self::new(readings)
    }
}
