// ABOUTME: Age duration models: calendar age triple and corrected-age result
// ABOUTME: AgeResult is always normalised (months 0-11, non-negative fields)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

use crate::constants::age::MONTHS_PER_YEAR;
use serde::{Deserialize, Serialize};

/// Elapsed calendar time as years, months, and days
///
/// # Examples
///
/// ```rust
/// use sprout_core::models::AgeResult;
///
/// let age = AgeResult { years: 1, months: 4, days: 12 };
/// assert_eq!(age.total_months(), 16);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeResult {
    /// Whole years
    pub years: u32,
    /// Whole months beyond `years`, 0-11
    pub months: u32,
    /// Days beyond `months`
    pub days: u32,
}

impl AgeResult {
    /// Create an age triple
    #[must_use]
    pub const fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Whole months, ignoring days
    #[must_use]
    pub fn total_months(&self) -> i64 {
        i64::from(self.years) * MONTHS_PER_YEAR + i64::from(self.months)
    }
}

/// Chronological and gestation-corrected age for one child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectedAgeResult {
    /// Age from the actual birth date
    pub chronological: AgeResult,
    /// Age shifted by the distance between due date and birth date.
    /// Equal to `chronological` whenever `should_use_corrected_age` is false.
    pub corrected: AgeResult,
    /// Absolute distance between due date and birth date, in whole weeks
    pub adjustment_weeks: u32,
    /// Born before the due date
    pub is_premature: bool,
    /// Born after the due date
    pub is_post_mature: bool,
    /// A due date was supplied and the child is younger than 36 months
    pub should_use_corrected_age: bool,
}

impl CorrectedAgeResult {
    /// The age milestone ranges should be matched against
    #[must_use]
    pub const fn effective(&self) -> AgeResult {
        if self.should_use_corrected_age {
            self.corrected
        } else {
            self.chronological
        }
    }
}
