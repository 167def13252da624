// ABOUTME: Configuration management module for the Sprout facade and CLI
// ABOUTME: Aggregates environment, logging, and highlight configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

//! Configuration module for Sprout
//!
//! - **Environment**: deployment mode plus the aggregate [`environment::AppConfig`]
//! - **Highlights**: thresholds re-exported from `sprout_intelligence::config`

/// Environment and aggregate configuration
pub mod environment;

pub use environment::{AppConfig, Environment};
pub use sprout_intelligence::config::{ConfigError, HighlightConfig};
