// ABOUTME: Configuration module for sprout-intelligence crate
// ABOUTME: Re-exports highlight configuration and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

/// Configuration error types
pub mod error;

/// Highlight thresholds and consultation window
pub mod highlights;

pub use error::ConfigError;
pub use highlights::HighlightConfig;
