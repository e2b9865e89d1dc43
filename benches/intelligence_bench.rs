// ABOUTME: Criterion benchmarks for the nutrition intelligence algorithms
// ABOUTME: Measures baseline calculation, macro adjustment, and CGM day analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for nutrition intelligence algorithms.
//!
//! The adjustment engine runs once per user per day, but CGM exports can hold a
//! reading every five minutes, so the glucose paths are measured at day and
//! fortnight sizes.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutriai::intelligence::config::{AdaptiveConfig, GlucoseAnalysisConfig, NutritionConfig};
use nutriai::intelligence::{
    adjust_macros_with_config, analyze_series, compute_baseline_with_config, summarize,
};
use nutriai::models::{
    ActivityLevel, AnthropometricProfile, DietType, GlucoseSeries, Goal, MacroTargets, Sex,
};

/// One CGM day at five-minute resolution
const DAY_READINGS: usize = 288;

/// Two weeks of CGM readings
const FORTNIGHT_READINGS: usize = DAY_READINGS * 14;

/// Deterministic glucose trace oscillating between roughly 65 and 190 mg/dL
#[allow(clippy::cast_possible_truncation)]
fn synthetic_glucose(count: usize) -> Vec<u32> {
    (0..count)
        .map(|index| {
            let meal_wave = ((index * 37) % 90) as u32;
            let noise = ((index * 13) % 11) as u32;
            65 + meal_wave + noise + if index % 48 < 6 { 25 } else { 0 }
        })
        .collect()
}

fn bench_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("baseline");
    let config = NutritionConfig::default();

    for diet in [DietType::Balanced, DietType::Keto, DietType::Carnivore] {
        let Ok(profile) = AnthropometricProfile::new(
            Sex::Female,
            34,
            168.0,
            64.0,
            ActivityLevel::VeryActive,
            Goal::Cut,
            diet,
        ) else {
            continue;
        };

        group.bench_with_input(
            BenchmarkId::new("compute_baseline", diet.label()),
            &profile,
            |b, profile| {
                b.iter(|| compute_baseline_with_config(black_box(profile), black_box(&config)));
            },
        );
    }

    group.finish();
}

#[allow(clippy::cast_possible_truncation)]
fn bench_adjustment(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjust_macros");
    let baseline = MacroTargets::default();
    let config = AdaptiveConfig::default();

    for count in [3, DAY_READINGS, FORTNIGHT_READINGS] {
        let readings = synthetic_glucose(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("adjust_macros", count),
            &readings,
            |b, readings| {
                b.iter(|| {
                    adjust_macros_with_config(
                        black_box(readings),
                        black_box(17.5), // strain
                        black_box(35.0), // recovery
                        black_box(5.5),  // sleep hours
                        black_box(&baseline),
                        black_box(&config),
                    )
                });
            },
        );
    }

    group.finish();
}

#[allow(clippy::cast_possible_truncation)]
fn bench_glucose_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("glucose");
    let config = GlucoseAnalysisConfig::default();

    for count in [DAY_READINGS, FORTNIGHT_READINGS] {
        let readings = synthetic_glucose(count);
        let series = GlucoseSeries::from_values(&readings);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("summarize", count), &readings, |b, readings| {
            b.iter(|| summarize(black_box(readings)));
        });
        group.bench_with_input(
            BenchmarkId::new("analyze_series", count),
            &series,
            |b, series| {
                b.iter(|| analyze_series(black_box(series), black_box(&config)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_baseline, bench_adjustment, bench_glucose_analysis);
criterion_main!(benches);
