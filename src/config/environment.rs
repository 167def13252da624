// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Loads deployment mode, logging, and highlight thresholds from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

//! Environment-based configuration

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use sprout_intelligence::config::{ConfigError, HighlightConfig};
use std::env;
use std::fmt;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
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
    pub const fn is_production(self) -> bool {
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

/// Everything a Sprout process reads from its environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log output settings
    pub logging: LoggingConfig,
    /// Highlight thresholds
    pub highlights: HighlightConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a highlight variable is unparseable or out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        );
        Ok(Self {
            environment,
            logging: LoggingConfig::from_env(),
            highlights: HighlightConfig::from_env()?,
        })
    }

    /// Log the loaded configuration; call once logging is initialised
    pub fn log_summary(&self) {
        info!(
            environment = %self.environment,
            celebration_threshold = self.highlights.celebration_threshold,
            days_before_range_end = self.highlights.days_before_range_end,
            "configuration loaded"
        );
    }
}
