// ABOUTME: NutriAI CLI - command-line front end for baseline, adjustment, and glucose analysis
// ABOUTME: Parses flags, loads environment configuration, and prints JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Baseline targets for a profile
//! nutriai-cli baseline --sex male --age 30 --height-cm 175 --weight-kg 75 \
//!     --activity moderately_active --goal maintain --diet balanced
//!
//! # Adjust for a day of glucose and wearable data
//! nutriai-cli adjust --sex female --age 28 --height-cm 165 --weight-kg 60 \
//!     --activity lightly_active --goal cut --diet low_carb \
//!     --glucose "95,130,160,140" --strain 17.5 --recovery 35 --sleep 5.5
//!
//! # Analyze a timestamped CGM day and ask the assistant about it
//! nutriai-cli analyze --readings "07:00,92 09:00,150 11:00,118 15:00,65" --ask "any spikes?"
//!
//! # Insulin-resistance screen over a week
//! nutriai-cli insulin --fasting "98,101,103,99,102,100,104" \
//!     --postmeal "142,150,139,145,148,141,144" --days 7
//! ```

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use nutriai::config::{AppConfig, LogLevel};
use nutriai::planner::NutritionPlanner;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutriai-cli",
    about = "NutriAI adaptive nutrition planner",
    long_about = "Compute baseline macro targets, adapt them to glucose and wearable data, and analyze CGM days."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Body metrics and preferences shared by several commands
#[derive(Args, Debug)]
struct ProfileArgs {
    /// Biological sex (male, female)
    #[arg(long)]
    sex: String,

    /// Age in years (10-100)
    #[arg(long)]
    age: u32,

    /// Height in centimetres (120-250)
    #[arg(long)]
    height_cm: f64,

    /// Weight in kilograms (30-200)
    #[arg(long)]
    weight_kg: f64,

    /// Activity level (sedentary, lightly_active, moderately_active, very_active, extra_active)
    #[arg(long, default_value = "moderately_active")]
    activity: String,

    /// Goal (cut, maintain, gain)
    #[arg(long, default_value = "maintain")]
    goal: String,

    /// Diet type (balanced, low_carb, keto, high_carb, carnivore, vegetarian, vegan, paleo, mediterranean)
    #[arg(long, default_value = "balanced")]
    diet: String,
}

/// Where today's strain, recovery and sleep come from
#[derive(Args, Debug)]
struct BiometricArgs {
    /// Day strain (0-21); defaults to NUTRIAI_DEFAULT_STRAIN
    #[arg(long)]
    strain: Option<f64>,

    /// Recovery percentage (0-100); defaults to NUTRIAI_DEFAULT_RECOVERY
    #[arg(long)]
    recovery: Option<f64>,

    /// Sleep hours (0-12); defaults to NUTRIAI_DEFAULT_SLEEP_HOURS
    #[arg(long)]
    sleep: Option<f64>,

    /// WHOOP recovery payload (JSON file); overrides the manual values
    #[arg(long, requires = "whoop_cycle")]
    whoop_recovery: Option<PathBuf>,

    /// WHOOP cycle payload (JSON file)
    #[arg(long, requires = "whoop_recovery")]
    whoop_cycle: Option<PathBuf>,

    /// WHOOP sleep payload (JSON file)
    #[arg(long, requires = "whoop_recovery")]
    whoop_sleep: Option<PathBuf>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Baseline calorie and macro targets for a profile
    Baseline {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Baseline adjusted for glucose readings and wearable biometrics
    Adjust {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Comma-separated glucose readings (mg/dL); invalid tokens are skipped
        #[arg(long, default_value = "")]
        glucose: String,

        #[command(flatten)]
        biometrics: BiometricArgs,
    },

    /// Time in range, spikes, and lows for a timestamped CGM day
    Analyze {
        /// Space-separated "HH:MM,value" readings
        #[arg(long)]
        readings: String,

        /// Question for the glucose assistant (repeatable)
        #[arg(long)]
        ask: Vec<String>,

        /// User identifier used to name the chat transcript
        #[arg(long, default_value = "user")]
        user_id: String,
    },

    /// Insulin-resistance screen from fasting and post-meal averages
    Insulin {
        /// Comma-separated daily fasting readings (mg/dL)
        #[arg(long)]
        fasting: String,

        /// Comma-separated daily post-meal readings (mg/dL)
        #[arg(long)]
        postmeal: String,

        /// Monitoring window in days (3-14)
        #[arg(long, default_value = "7")]
        days: usize,
    },

    /// Chat messages for a meal-plan request
    Prompt {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Adjust for these glucose readings first (comma-separated mg/dL)
        #[arg(long)]
        glucose: Option<String>,

        #[command(flatten)]
        biometrics: BiometricArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    let logging = if cli.verbose {
        config.logging.clone().with_level(LogLevel::Debug)
    } else {
        config.logging.clone()
    };
    logging.init()?;
    config.log_summary();

    let planner = NutritionPlanner::new(config.intelligence.clone());

    let output = match cli.command {
        Command::Baseline { profile } => commands::baseline(&planner, &profile)?,
        Command::Adjust {
            profile,
            glucose,
            biometrics,
        } => commands::adjust(&planner, &config, &profile, &glucose, &biometrics).await?,
        Command::Analyze {
            readings,
            ask,
            user_id,
        } => commands::analyze(&planner, &readings, &ask, &user_id)?,
        Command::Insulin {
            fasting,
            postmeal,
            days,
        } => commands::insulin(&planner, &fasting, &postmeal, days)?,
        Command::Prompt {
            profile,
            glucose,
            biometrics,
        } => {
            commands::prompt(&planner, &config, &profile, glucose.as_deref(), &biometrics).await?
        }
    };

    debug!(bytes = output.len(), "Command finished");
    println!("{output}");
    Ok(())
}
