// ABOUTME: Configuration module aggregating environment and algorithm settings
// ABOUTME: Re-exports the intelligence configuration alongside application-level config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-driven application configuration
pub mod environment;

pub use environment::{AppConfig, Environment, LogLevel, DEFAULT_CHAT_MODEL};
pub use nutriai_intelligence::config as intelligence;
pub use nutriai_intelligence::IntelligenceConfig;
