// ABOUTME: Algorithm modules for age arithmetic, age-range bucketing, and WHO percentiles
// ABOUTME: Each module is a set of pure functions over dates, numbers, and constant tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

//! Algorithm Module
//!
//! Every function takes its inputs explicitly, including "today", so results are
//! reproducible in tests and identical for the API and the UI-facing callers.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sprout_intelligence::algorithms::age::calculate_corrected_age;
//! use sprout_intelligence::algorithms::age_range::get_age_range;
//!
//! let birth = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
//! let due = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 9, 10).unwrap();
//!
//! let age = calculate_corrected_age(birth, Some(due), today);
//! assert!(age.is_premature);
//! let range = get_age_range(age.effective().total_months() as f64);
//! assert_eq!(range.label, "4-6 months");
//! ```

pub mod age;
pub mod age_range;
pub mod who_percentile;
pub mod who_tables;

pub use age::{AgeCalculator, Clock, FixedClock, SystemClock};
pub use who_percentile::PercentileBand;
