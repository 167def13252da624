// ABOUTME: Highlight evaluator configuration: thresholds and consultation window
// ABOUTME: Environment-overridable with validation of percentage and day bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use sprout_core::constants::highlights::{
    CELEBRATION_THRESHOLD, DAYS_BEFORE_RANGE_END, DEVELOPMENTAL_CATEGORY,
    DEVELOPMENTAL_CONSULT_THRESHOLD, OTHER_CONSULT_THRESHOLD,
};
use std::env;
use std::str::FromStr;

/// Thresholds that drive celebration and GP-consultation highlights
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Consultation highlights only appear within this many days of the range closing
    pub days_before_range_end: i64,
    /// Category completion percentage that earns a celebration
    pub celebration_threshold: u32,
    /// Developmental category completion below this suggests a GP visit
    pub developmental_consult_threshold: u32,
    /// Completion below this in any other category suggests a GP visit
    pub other_consult_threshold: u32,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            days_before_range_end: DAYS_BEFORE_RANGE_END,
            celebration_threshold: CELEBRATION_THRESHOLD,
            developmental_consult_threshold: DEVELOPMENTAL_CONSULT_THRESHOLD,
            other_consult_threshold: OTHER_CONSULT_THRESHOLD,
        }
    }
}

fn env_override<T: FromStr>(variable: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(variable) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse { variable, value }),
        Err(_) => Ok(default),
    }
}

impl HighlightConfig {
    /// Load highlight configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but unparseable, or the result fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            days_before_range_end: env_override(
                "HIGHLIGHT_DAYS_BEFORE_RANGE_END",
                defaults.days_before_range_end,
            )?,
            celebration_threshold: env_override(
                "HIGHLIGHT_CELEBRATION_THRESHOLD",
                defaults.celebration_threshold,
            )?,
            developmental_consult_threshold: env_override(
                "HIGHLIGHT_DEVELOPMENTAL_CONSULT_THRESHOLD",
                defaults.developmental_consult_threshold,
            )?,
            other_consult_threshold: env_override(
                "HIGHLIGHT_OTHER_CONSULT_THRESHOLD",
                defaults.other_consult_threshold,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a threshold exceeds 100 or the day window is negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.days_before_range_end < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "days_before_range_end must be >= 0",
            ));
        }
        if self.celebration_threshold > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "celebration_threshold must be between 0 and 100",
            ));
        }
        if self.developmental_consult_threshold > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "developmental_consult_threshold must be between 0 and 100",
            ));
        }
        if self.other_consult_threshold > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "other_consult_threshold must be between 0 and 100",
            ));
        }
        Ok(())
    }

    /// Consultation threshold for a category
    #[must_use]
    pub fn consult_threshold_for(&self, category: &str) -> u32 {
        if category == DEVELOPMENTAL_CATEGORY {
            self.developmental_consult_threshold
        } else {
            self.other_consult_threshold
        }
    }

    /// Whether the consultation window is open `days_until_range_ends` before the range closes
    #[must_use]
    pub fn consultation_window_open(&self, days_until_range_ends: i64) -> bool {
        (0..=self.days_before_range_end).contains(&days_until_range_ends)
    }
}
