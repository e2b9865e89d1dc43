// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::biometrics::{DEFAULT_RECOVERY, DEFAULT_SLEEP_HOURS, DEFAULT_STRAIN};
use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;
use crate::models::BiometricSnapshot;
use nutriai_intelligence::IntelligenceConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Default chat-completion model for meal plans
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Errors and warnings
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Per-rule engine decisions
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration assembled from the process environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Logging setup
    pub logging: LoggingConfig,
    /// Biometrics used when no wearable data is available
    pub default_biometrics: BiometricSnapshot,
    /// Chat-completion model for meal plans
    pub chat_model: String,
    /// Validated algorithm configuration
    pub intelligence: IntelligenceConfig<true>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            logging: LoggingConfig::default(),
            default_biometrics: BiometricSnapshot::default(),
            chat_model: DEFAULT_CHAT_MODEL.to_owned(),
            intelligence: IntelligenceConfig::<true>::default(),
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            AppError::config(format!("{name} is not a valid value: {raw}"))
        }),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_ERROR` if a variable cannot be parsed or the intelligence
    /// configuration fails validation, and `VALUE_OUT_OF_RANGE` if a default
    /// biometric is outside its wearable scale
    pub fn from_env() -> AppResult<Self> {
        let environment =
            Environment::from_str_or_default(&env::var("ENVIRONMENT").unwrap_or_default());

        let default_biometrics = BiometricSnapshot::new(
            env_or("NUTRIAI_DEFAULT_STRAIN", DEFAULT_STRAIN)?,
            env_or("NUTRIAI_DEFAULT_RECOVERY", DEFAULT_RECOVERY)?,
            env_or("NUTRIAI_DEFAULT_SLEEP_HOURS", DEFAULT_SLEEP_HOURS)?,
        )?;

        let chat_model = env::var("NUTRIAI_CHAT_MODEL")
            .ok()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_owned());

        let intelligence = IntelligenceConfig::<true>::load()?;

        Ok(Self {
            environment,
            logging: LoggingConfig::from_env(),
            default_biometrics,
            chat_model,
            intelligence,
        })
    }

    /// Log a configuration summary
    pub fn log_summary(&self) {
        info!(
            environment = %self.environment,
            chat_model = %self.chat_model,
            default_strain = self.default_biometrics.strain,
            default_recovery = self.default_biometrics.recovery,
            default_sleep_hours = self.default_biometrics.sleep_hours,
            "Application configuration loaded"
        );
    }
}
