// ABOUTME: Child development intelligence engine for the Sprout platform
// ABOUTME: Corrected age, age-range bucketing, WHO growth percentiles, milestone highlights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

#![deny(unsafe_code)]

//! # Sprout Intelligence
//!
//! Pure, synchronous computation over dates, numbers, and fixed in-memory tables.
//! Nothing here performs I/O or holds mutable state, so every function is safe to
//! call from any number of request handlers concurrently.
//!
//! Data flow:
//!
//! - child record → [`algorithms::age`] → chronological/corrected age
//! - effective age → [`algorithms::age_range`] → developmental window
//! - measurement → [`algorithms::who_percentile`] → percentile
//! - category progress + window countdown → [`highlights`] → highlight list
//!
//! [`development`] composes these steps for a single child.

/// Age, range, and percentile algorithms
pub mod algorithms;

/// Highlight configuration and its errors
pub mod config;

/// Per-child composition of the algorithms
pub mod development;

/// Celebration and GP-consultation highlight evaluation
pub mod highlights;

pub use config::{ConfigError, HighlightConfig};
