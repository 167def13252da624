// ABOUTME: Configuration error types for intelligence module validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and out-of-range values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

//! Configuration error types for intelligence module validation.

use sprout_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related values are inconsistent with each other
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable present but not parseable
    #[error("Parse error: {variable}={value}")]
    Parse {
        /// Variable name
        variable: &'static str,
        /// Raw value that failed to parse
        value: String,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
