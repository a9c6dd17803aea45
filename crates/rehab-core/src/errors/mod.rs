// ABOUTME: Error types for observation validation, configuration checks, and enum parsing
// ABOUTME: Provides stable error codes so callers can surface field-level messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Types
//!
//! The engine rejects input in exactly one place: constructing a
//! [`PainObservation`](crate::models::PainObservation). Everything downstream of
//! valid observations degrades to explicit "insufficient data" results instead
//! of failing.
//!
//! - `ValidationError` - construction-time rejection of a pain check-in
//! - `ConfigError` - composition-time rejection of a custom configuration
//! - `ParseEnumError` - unknown string for a closed enumeration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error codes for embedding applications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// A required field is missing or empty
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A string did not match any known enumeration value
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// A numeric value is outside its allowed range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,
    /// A configuration table failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidFormat => "The value is not in a recognised format",
            Self::ValueOutOfRange => "The value is outside the allowed range",
            Self::ConfigInvalid => "The configuration is invalid",
        }
    }
}

/// Rejection of a pain check-in at construction time
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// Pain level outside the inclusive 0-10 scale
    #[error("pain_level must be between 0 and 10, got {value}")]
    PainLevelOutOfRange {
        /// The rejected value as supplied by the caller
        value: i64,
    },

    /// No body area was given for the check-in
    #[error("locations must contain at least one body area")]
    EmptyLocations,
}

impl ValidationError {
    /// Name of the offending field, for field-level messages
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::PainLevelOutOfRange { .. } => "pain_level",
            Self::EmptyLocations => "locations",
        }
    }

    /// Stable error code for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::PainLevelOutOfRange { .. } => ErrorCode::ValueOutOfRange,
            Self::EmptyLocations => ErrorCode::MissingRequiredField,
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., percentage not between 0-100)
    #[error("Invalid range for {field}: {reason}")]
    InvalidRange {
        /// Dotted path of the offending field
        field: String,
        /// What the value must satisfy
        reason: String,
    },

    /// Required configuration field is missing
    #[error("Missing required field: {0}")]
    MissingField(String),
}

impl ConfigError {
    /// Create an invalid range error
    #[must_use]
    pub fn invalid_range(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Stable error code for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        ErrorCode::ConfigInvalid
    }
}

/// Unknown string for one of the closed enumerations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: '{value}'. Valid options: {expected}")]
pub struct ParseEnumError {
    /// Enumeration being parsed (e.g. "rehabilitation phase")
    pub kind: &'static str,
    /// Rejected input
    pub value: String,
    /// Comma-separated list of accepted values
    pub expected: &'static str,
}

impl ParseEnumError {
    /// Create a parse error for the given enumeration
    #[must_use]
    pub fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
            expected,
        }
    }

    /// Stable error code for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        ErrorCode::InvalidFormat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_fields() {
        let err = ValidationError::PainLevelOutOfRange { value: 11 };
        assert_eq!(err.field(), "pain_level");
        assert_eq!(err.code(), ErrorCode::ValueOutOfRange);
        assert_eq!(err.to_string(), "pain_level must be between 0 and 10, got 11");

        let err = ValidationError::EmptyLocations;
        assert_eq!(err.field(), "locations");
        assert_eq!(err.code(), ErrorCode::MissingRequiredField);
    }

    #[test]
    fn test_parse_enum_error_message() {
        let err = ParseEnumError::new("formula", "lander", "epley, brzycki");
        assert_eq!(
            err.to_string(),
            "Unknown formula: 'lander'. Valid options: epley, brzycki"
        );
    }
}
