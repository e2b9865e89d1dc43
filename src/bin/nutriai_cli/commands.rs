// ABOUTME: Subcommand implementations for the NutriAI CLI
// ABOUTME: Each command builds domain inputs from flags and renders a JSON document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::{BiometricArgs, ProfileArgs};
use anyhow::Result;
use nutriai::assistant::ChatTranscript;
use nutriai::config::AppConfig;
use nutriai::errors::AppResult;
use nutriai::input::{parse_glucose_list, parse_timed_readings};
use nutriai::intelligence::baseline::compute_baseline_report;
use nutriai::meal_plan::MealPlanPrompt;
use nutriai::models::{AnthropometricProfile, BiometricSnapshot, MacroTargets};
use nutriai::planner::{resolve_biometrics, NutritionPlanner, ResolvedBiometrics};
use nutriai::providers::{BiometricSource, ManualBiometricSource, StaticWhoopSource};
use serde_json::json;
use std::fs;
use std::path::Path;

fn build_profile(args: &ProfileArgs) -> AppResult<AnthropometricProfile> {
    AnthropometricProfile::from_form(
        &args.sex,
        args.age,
        args.height_cm,
        args.weight_kg,
        &args.activity,
        &args.goal,
        &args.diet,
    )
}

fn read_payload(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

async fn biometrics_for(config: &AppConfig, args: &BiometricArgs) -> Result<ResolvedBiometrics> {
    let defaults = config.default_biometrics;

    let source: Box<dyn BiometricSource> = match (&args.whoop_recovery, &args.whoop_cycle) {
        (Some(recovery), Some(cycle)) => {
            let mut whoop = StaticWhoopSource::new(read_payload(recovery)?, read_payload(cycle)?);
            if let Some(sleep) = &args.whoop_sleep {
                whoop = whoop.with_sleep(read_payload(sleep)?);
            }
            Box::new(whoop)
        }
        _ => Box::new(ManualBiometricSource::new(BiometricSnapshot::new(
            args.strain.unwrap_or(defaults.strain),
            args.recovery.unwrap_or(defaults.recovery),
            args.sleep.unwrap_or(defaults.sleep_hours),
        )?)),
    };

    Ok(resolve_biometrics(source.as_ref(), defaults).await)
}

pub fn baseline(planner: &NutritionPlanner, args: &ProfileArgs) -> Result<String> {
    let profile = build_profile(args)?;
    let report = compute_baseline_report(&profile, &planner.config().nutrition);
    Ok(serde_json::to_string_pretty(&report)?)
}

pub async fn adjust(
    planner: &NutritionPlanner,
    config: &AppConfig,
    args: &ProfileArgs,
    glucose: &str,
    biometric_args: &BiometricArgs,
) -> Result<String> {
    let profile = build_profile(args)?;
    let biometrics = biometrics_for(config, biometric_args).await?;
    let context = planner.context_for(profile, biometrics.snapshot);
    let plan = planner.plan_day(&context, &parse_glucose_list(glucose));

    Ok(serde_json::to_string_pretty(&json!({
        "biometrics": biometrics,
        "plan": plan,
    }))?)
}

pub fn analyze(
    planner: &NutritionPlanner,
    readings: &str,
    questions: &[String],
    user_id: &str,
) -> Result<String> {
    let series = parse_timed_readings(readings)?;
    let analysis = planner.analyze(&series)?;

    if questions.is_empty() {
        return Ok(serde_json::to_string_pretty(&analysis)?);
    }

    let macros = MacroTargets::default();
    let mut transcript = ChatTranscript::new(user_id);
    for question in questions {
        transcript.ask(question, &analysis, &macros);
    }

    Ok(serde_json::to_string_pretty(&json!({
        "analysis": analysis,
        "transcript_file": transcript.file_name(),
        "transcript": transcript.messages(),
    }))?)
}

pub fn insulin(
    planner: &NutritionPlanner,
    fasting: &str,
    postmeal: &str,
    days: usize,
) -> Result<String> {
    let assessment = planner.screen_insulin_resistance(
        &parse_glucose_list(fasting),
        &parse_glucose_list(postmeal),
        days,
    )?;

    Ok(serde_json::to_string_pretty(&json!({
        "assessment": assessment,
        "message": assessment.risk.to_string(),
    }))?)
}

pub async fn prompt(
    planner: &NutritionPlanner,
    config: &AppConfig,
    args: &ProfileArgs,
    glucose: Option<&str>,
    biometric_args: &BiometricArgs,
) -> Result<String> {
    let profile = build_profile(args)?;

    let prompt = match glucose {
        Some(glucose) => {
            let biometrics = biometrics_for(config, biometric_args).await?;
            let values = parse_glucose_list(glucose);
            let context = planner.context_for(profile, biometrics.snapshot);
            let plan = planner.plan_day(&context, &values);
            MealPlanPrompt::from_adjusted(&plan, &biometrics.snapshot, &values)
        }
        None => {
            let context = planner.context_for(profile, config.default_biometrics);
            MealPlanPrompt::from_baseline(profile.diet_type(), &context.baseline)
        }
    }
    .with_model(config.chat_model.as_str());

    Ok(serde_json::to_string_pretty(&prompt.to_request())?)
}
