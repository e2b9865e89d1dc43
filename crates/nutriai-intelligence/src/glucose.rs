// ABOUTME: Glucose series aggregation into mean and range, plus CGM day analysis
// ABOUTME: Time in range, consecutive-reading spikes, lows, and a textual recommendation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Biometric Aggregator
//!
//! [`summarize`] reduces a glucose series to the statistics the adaptive engine
//! consumes. [`analyze_series`] extends it with order-dependent measures over a
//! timestamped [`GlucoseSeries`].

use crate::config::GlucoseAnalysisConfig;
use nutriai_core::errors::{AppError, AppResult};
use nutriai_core::models::{GlucoseSeries, ReadingTime};
use serde::{Deserialize, Serialize};

/// Summary statistics of a glucose series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GlucoseStats {
    /// Arithmetic mean (mg/dL)
    pub mean: f64,
    /// Max minus min (mg/dL)
    pub range: f64,
    /// Lowest reading (mg/dL)
    pub min: u32,
    /// Highest reading (mg/dL)
    pub max: u32,
    /// Number of readings
    pub count: usize,
}

/// Rise between two consecutive readings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlucoseSpike {
    /// Time of the reading before the rise
    pub from_time: ReadingTime,
    /// Time of the reading after the rise
    pub to_time: ReadingTime,
    /// Glucose before the rise (mg/dL)
    pub from_value: u32,
    /// Glucose after the rise (mg/dL)
    pub to_value: u32,
    /// Size of the rise (mg/dL)
    pub delta: u32,
}

/// Reading below the low threshold
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlucoseLow {
    /// Reading time
    pub time: ReadingTime,
    /// Glucose (mg/dL)
    pub value: u32,
}

/// Day-level analysis of an ordered CGM series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlucoseAnalysis {
    /// Mean, range and extremes
    pub stats: GlucoseStats,
    /// Share of readings inside the target range, one decimal place
    pub time_in_range_percent: f64,
    /// Spikes in chronological order
    pub spikes: Vec<GlucoseSpike>,
    /// Lows in chronological order
    pub lows: Vec<GlucoseLow>,
    /// Short dietary recommendation
    pub recommendation: String,
}

/// Reduce glucose values to mean and range
///
/// # Errors
///
/// Returns `EMPTY_INPUT` when `glucose_values` is empty
#[allow(clippy::cast_precision_loss)]
pub fn summarize(glucose_values: &[u32]) -> AppResult<GlucoseStats> {
    let (Some(&min), Some(&max)) = (glucose_values.iter().min(), glucose_values.iter().max())
    else {
        return Err(AppError::empty_input(
            "Cannot summarize an empty glucose series",
        ));
    };

    let sum: u64 = glucose_values.iter().map(|&value| u64::from(value)).sum();
    let count = glucose_values.len();

    Ok(GlucoseStats {
        mean: sum as f64 / count as f64,
        range: f64::from(max - min),
        min,
        max,
        count,
    })
}

/// Analyze an ordered CGM series
///
/// # Errors
///
/// Returns `EMPTY_INPUT` when the series holds no readings
#[allow(clippy::cast_precision_loss)]
pub fn analyze_series(
    series: &GlucoseSeries,
    config: &GlucoseAnalysisConfig,
) -> AppResult<GlucoseAnalysis> {
    let stats = summarize(&series.values())?;
    let readings = series.readings();

    let in_range = readings
        .iter()
        .filter(|reading| {
            (config.range_low_mg_dl..=config.range_high_mg_dl).contains(&reading.value)
        })
        .count();
    let time_in_range_percent =
        (in_range as f64 / readings.len() as f64 * 1000.0).round() / 10.0;

    let spikes: Vec<GlucoseSpike> = readings
        .windows(2)
        .filter_map(|pair| {
            let delta = pair[1].value.checked_sub(pair[0].value)?;
            (delta >= config.spike_rise_mg_dl).then_some(GlucoseSpike {
                from_time: pair[0].time,
                to_time: pair[1].time,
                from_value: pair[0].value,
                to_value: pair[1].value,
                delta,
            })
        })
        .collect();

    let lows: Vec<GlucoseLow> = readings
        .iter()
        .filter(|reading| reading.value < config.low_threshold_mg_dl)
        .map(|reading| GlucoseLow {
            time: reading.time,
            value: reading.value,
        })
        .collect();

    let recommendation = recommend(&spikes, &lows, time_in_range_percent);

    Ok(GlucoseAnalysis {
        stats,
        time_in_range_percent,
        spikes,
        lows,
        recommendation,
    })
}

fn recommend(spikes: &[GlucoseSpike], lows: &[GlucoseLow], time_in_range_percent: f64) -> String {
    let mut advice = Vec::new();
    if let Some(largest) = spikes.iter().max_by_key(|spike| spike.delta) {
        advice.push(format!(
            "Largest rise was +{} mg/dL ({} to {}); pair carbohydrates with protein and fibre and favour lower-glycemic sources at that meal.",
            largest.delta, largest.from_time, largest.to_time
        ));
    }
    if !lows.is_empty() {
        advice.push(
            "Glucose dipped below range; keep a protein and fat snack available between meals."
                .to_owned(),
        );
    }
    if advice.is_empty() {
        return format!(
            "Glucose stayed steady ({time_in_range_percent:.1}% in range); keep the current carbohydrate distribution."
        );
    }
    advice.join(" ")
}
