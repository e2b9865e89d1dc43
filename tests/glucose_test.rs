// ABOUTME: Integration tests for glucose aggregation, CGM day analysis, and input parsing
// ABOUTME: Covers mean/range, time in range, spikes, lows, and the keyword assistant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{TimeZone, Utc};
use common::init_test_logging;
use nutriai::assistant::{answer, ChatTranscript};
use nutriai::errors::ErrorCode;
use nutriai::input::{parse_glucose_list, parse_timed_readings};
use nutriai::intelligence::config::GlucoseAnalysisConfig;
use nutriai::intelligence::{analyze_series, summarize};
use nutriai::meal_plan::MessageRole;
use nutriai::models::{GlucoseSeries, MacroTargets, ReadingTime};

#[test]
fn test_summarize_mean_and_range() {
    let stats = summarize(&[110, 115, 120, 108, 95]).unwrap();
    assert!((stats.mean - 109.6).abs() < 1e-9);
    assert!((stats.range - 25.0).abs() < f64::EPSILON);
    assert_eq!((stats.min, stats.max, stats.count), (95, 120, 5));
}

#[test]
fn test_summarize_single_reading_has_zero_range() {
    let stats = summarize(&[142]).unwrap();
    assert!((stats.mean - 142.0).abs() < f64::EPSILON);
    assert!(stats.range.abs() < f64::EPSILON);
}

#[test]
fn test_summarize_empty_is_error() {
    let err = summarize(&[]).unwrap_err();
    assert_eq!(err.code, ErrorCode::EmptyInput);
}

#[test]
fn test_analyze_timed_day() {
    init_test_logging();
    let series =
        parse_timed_readings("07:00,92 08:30,150 10:00,118\n12:00,65 13:00,100 14:00,185").unwrap();
    let analysis = analyze_series(&series, &GlucoseAnalysisConfig::default()).unwrap();

    // 92, 150, 118, 100 are within 70-180
    assert!((analysis.time_in_range_percent - 66.7).abs() < 1e-9);

    assert_eq!(analysis.spikes.len(), 3);
    assert_eq!(analysis.spikes[0].delta, 58);
    assert_eq!(analysis.spikes[1].delta, 35);
    assert_eq!(analysis.spikes[2].delta, 85);
    assert_eq!(analysis.spikes[2].from_time.to_string(), "13:00");
    assert_eq!(analysis.spikes[2].to_time.to_string(), "14:00");

    assert_eq!(analysis.lows.len(), 1);
    assert_eq!(analysis.lows[0].value, 65);
    assert_eq!(analysis.lows[0].time.to_string(), "12:00");

    assert!(analysis.recommendation.contains("+85 mg/dL"));
    assert!(analysis.recommendation.contains("snack"));
}

#[test]
fn test_range_bounds_and_spike_threshold_are_inclusive() {
    let series = GlucoseSeries::from_values(&[180, 150, 70, 100]);
    let analysis = analyze_series(&series, &GlucoseAnalysisConfig::default()).unwrap();

    assert!((analysis.time_in_range_percent - 100.0).abs() < f64::EPSILON);
    assert_eq!(analysis.spikes.len(), 1);
    assert_eq!(analysis.spikes[0].delta, 30);
    assert_eq!(analysis.spikes[0].from_time, ReadingTime::Sequence(3));
    assert!(analysis.lows.is_empty());
}

#[test]
fn test_steady_day_recommendation() {
    let series = GlucoseSeries::from_values(&[100, 105, 110, 104]);
    let analysis = analyze_series(&series, &GlucoseAnalysisConfig::default()).unwrap();
    assert!(analysis.spikes.is_empty());
    assert!(analysis.recommendation.contains("100.0% in range"));
}

#[test]
fn test_analyze_empty_series_is_error() {
    let err = analyze_series(&GlucoseSeries::default(), &GlucoseAnalysisConfig::default())
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::EmptyInput);
}

#[test]
fn test_lenient_list_parsing_feeds_summary() {
    let values = parse_glucose_list("110, 115,n/a,120 ,108,95,");
    assert_eq!(values, vec![110, 115, 120, 108, 95]);
    assert!(summarize(&values).is_ok());
}

#[test]
fn test_timed_parsing_rejects_bad_values() {
    for text in ["07:00,abc", "25:00,100", "07:00", "07:00,-4"] {
        let err = parse_timed_readings(text).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat, "{text}");
    }
    assert!(parse_timed_readings("   ").unwrap().is_empty());
}

#[test]
fn test_assistant_keywords() {
    let series = parse_timed_readings("07:00,90 08:00,130 09:00,60 10:00,100 11:00,140").unwrap();
    let analysis = analyze_series(&series, &GlucoseAnalysisConfig::default()).unwrap();
    let macros = MacroTargets::new(2200.0, 150, 180, 60);

    assert_eq!(
        answer("Any SPIKES today?", &analysis, &macros),
        "You had a glucose spike from 10:00 to 11:00 with a +40 mg/dL increase."
    );
    assert_eq!(
        answer("was I low", &analysis, &macros),
        "You had a low at 09:00 with 60 mg/dL. Try a protein+fat snack."
    );
    assert_eq!(
        answer("my macros?", &analysis, &macros),
        "Today's macros are: Protein 150g, Carbs 180g, Fat 60g."
    );
    assert_eq!(
        answer("recommendation please", &analysis, &macros),
        analysis.recommendation
    );
    assert_eq!(
        answer("hello", &analysis, &macros),
        "Ask about spikes, lows, macros, or recommendation."
    );
}

#[test]
fn test_assistant_without_events() {
    let analysis =
        analyze_series(&GlucoseSeries::from_values(&[100, 110]), &GlucoseAnalysisConfig::default())
            .unwrap();
    let macros = MacroTargets::default();
    assert_eq!(answer("spike?", &analysis, &macros), "No spikes were recorded today.");
    assert_eq!(answer("lows?", &analysis, &macros), "No glucose lows today.");
}

#[test]
fn test_transcript_records_turns() {
    let analysis =
        analyze_series(&GlucoseSeries::from_values(&[100, 110]), &GlucoseAnalysisConfig::default())
            .unwrap();
    let started = Utc.with_ymd_and_hms(2025, 3, 10, 8, 5, 9).unwrap();
    let mut transcript = ChatTranscript::started_at("u42", started);

    let reply = transcript.ask("macros", &analysis, &MacroTargets::default()).to_owned();
    assert!(reply.starts_with("Today's macros"));

    let messages = transcript.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, MessageRole::User);
    assert_eq!(messages[0].content, "macros");
    assert_eq!(messages[1].role, MessageRole::Assistant);
    assert_eq!(messages[1].content, reply);

    let follow_up = transcript.ask("spikes", &analysis, &MacroTargets::default()).to_owned();
    assert_eq!(transcript.messages().len(), 4);
    assert_eq!(transcript.messages()[3].content, follow_up);
    assert_ne!(follow_up, reply);
    assert_eq!(transcript.file_name(), "u42_2025-03-10_08-05-09.json");

    let json: serde_json::Value = serde_json::from_str(&transcript.to_json().unwrap()).unwrap();
    assert_eq!(json[0]["role"], "user");
    assert_eq!(json[1]["content"], reply);
}
