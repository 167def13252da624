// ABOUTME: Main library entry point for the Sprout child development platform
// ABOUTME: Re-exports the core models and intelligence engines alongside logging and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

#![deny(unsafe_code)]

//! # Sprout
//!
//! Child development computations for parents of babies and toddlers:
//!
//! - **Age Engine**: chronological and gestation-corrected age
//! - **Age-Range Bucketer**: the developmental window milestones are grouped by
//! - **WHO Percentile Engine**: growth percentiles from the WHO LMS tables
//! - **Highlight Evaluator**: celebration and GP-consultation signals
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sprout::development::assess_development;
//! use sprout::models::{ChildRecord, Gender};
//!
//! let child = ChildRecord {
//!     name: "Maya".into(),
//!     birth_date: NaiveDate::from_ymd_opt(2023, 5, 2).unwrap(),
//!     due_date: None,
//!     gender: Gender::Female,
//! };
//! let snapshot = assess_development(&child, NaiveDate::from_ymd_opt(2024, 10, 20).unwrap());
//! assert_eq!(snapshot.age_range.label, "13-18 months");
//! ```

/// Foundation types shared by every engine
pub use sprout_core::{constants, dates, errors, models, rounding};

/// Age, range, percentile, and highlight engines
pub use sprout_intelligence::{algorithms, development, highlights};

/// Configuration management
pub mod config;

/// Structured logging setup
pub mod logging;
