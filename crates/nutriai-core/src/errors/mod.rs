// ABOUTME: Unified error handling with standard error codes for the NutriAI platform
// ABOUTME: Defines AppError, ErrorCode, and the AppResult alias used across all crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible public function in the workspace returns [`AppResult`]. The pure
//! nutrition core only ever produces validation codes (`INVALID_INPUT`,
//! `EMPTY_INPUT`, `VALUE_OUT_OF_RANGE`, `INVALID_FORMAT`); the external-service codes
//! belong to the collaborator boundary (wearables, chat completion).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation
    /// A closed-set field (sex, activity level, goal, diet type) did not match
    InvalidInput,
    /// An aggregate was requested over an empty series
    EmptyInput,
    /// A numeric field fell outside its accepted range
    ValueOutOfRange,
    /// Free-text input could not be parsed
    InvalidFormat,

    // Configuration
    /// Configuration failed to load or validate
    ConfigError,

    // External collaborators
    /// An external service answered with an error or unusable payload
    ExternalServiceError,
    /// An external service could not be reached
    ExternalServiceUnavailable,

    // Internal
    /// JSON (de)serialization failed
    SerializationError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::EmptyInput => "The provided series is empty",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::InvalidFormat => "The data format is invalid",
            Self::ConfigError => "Configuration error encountered",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether a caller may reasonably retry the failed operation.
    ///
    /// Only network-facing collaborator failures qualify; retries never
    /// belong inside the deterministic nutrition core.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ExternalServiceError | Self::ExternalServiceUnavailable
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::EmptyInput => "EMPTY_INPUT",
            Self::ValueOutOfRange => "VALUE_OUT_OF_RANGE",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::ConfigError => "CONFIG_ERROR",
            Self::ExternalServiceError => "EXTERNAL_SERVICE_ERROR",
            Self::ExternalServiceUnavailable => "EXTERNAL_SERVICE_UNAVAILABLE",
            Self::SerializationError => "SERIALIZATION_ERROR",
        };
        f.write_str(name)
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured context (offending field, bounds, upstream status)
    pub details: serde_json::Value,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
        }
    }

    /// Attach structured details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Invalid input (closed-set mismatch)
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Empty input series
    #[must_use]
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::EmptyInput, message)
    }

    /// Numeric value outside its accepted range
    #[must_use]
    pub fn value_out_of_range(field: &str, value: f64, min: f64, max: f64) -> Self {
        Self::new(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be between {min} and {max}, got {value}"),
        )
        .with_details(serde_json::json!({
            "field": field,
            "value": value,
            "min": min,
            "max": max,
        }))
    }

    /// Unparseable free-text input
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// External service error
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service could not be reached
    #[must_use]
    pub fn external_unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{}: {}", service.into(), message.into()),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::EmptyInput).unwrap();
        assert_eq!(json, "\"EMPTY_INPUT\"");
        assert_eq!(ErrorCode::ValueOutOfRange.to_string(), "VALUE_OUT_OF_RANGE");
    }

    #[test]
    fn test_only_external_codes_retry() {
        assert!(ErrorCode::ExternalServiceUnavailable.is_retryable());
        assert!(!ErrorCode::InvalidInput.is_retryable());
        assert!(!ErrorCode::EmptyInput.is_retryable());
    }

    #[test]
    fn test_out_of_range_details() {
        let error = AppError::value_out_of_range("age", 7.0, 10.0, 100.0);
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.details["field"], "age");
        assert!(error.to_string().contains("age must be between 10 and 100"));
    }
}
