// ABOUTME: Maps an age in months to one of ten fixed developmental windows
// ABOUTME: First-match lookup plus boundary-day overflow into the next window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

use sprout_core::constants::age::DAYS_PER_MONTH;
use sprout_core::constants::age_ranges::{BOUNDARY_MONTHS, BUCKETS};
use sprout_core::models::AgeRangeBucket;

const fn bucket(index: usize) -> AgeRangeBucket {
    let (min, max, label) = BUCKETS[index];
    AgeRangeBucket { min, max, label }
}

/// All developmental windows in ascending order
pub const AGE_RANGES: [AgeRangeBucket; 10] = [
    bucket(0),
    bucket(1),
    bucket(2),
    bucket(3),
    bucket(4),
    bucket(5),
    bucket(6),
    bucket(7),
    bucket(8),
    bucket(9),
];

/// The first window whose upper bound is at least `months`.
///
/// Ages past 60 months (and NaN) fall through to the last window.
#[must_use]
pub fn get_age_range(months: f64) -> AgeRangeBucket {
    AGE_RANGES
        .iter()
        .find(|range| months <= f64::from(range.max))
        .copied()
        .unwrap_or(AGE_RANGES[AGE_RANGES.len() - 1])
}

/// Move a child sitting exactly on a window's closing month into the next window
/// once any extra days have elapsed.
#[must_use]
pub fn get_adjusted_months_for_range(base_months: i64, days: i64) -> i64 {
    if days > 0 && BOUNDARY_MONTHS.contains(&base_months) {
        base_months + 1
    } else {
        base_months
    }
}

/// Days left before the current window closes; negative once it has passed
#[must_use]
pub fn calculate_days_until_range_ends(
    adjusted_age_months: i64,
    adjusted_age_days: i64,
    age_range_max: u32,
) -> i64 {
    let months_left = (i64::from(age_range_max) - adjusted_age_months) as f64;
    (months_left * DAYS_PER_MONTH).floor() as i64 - adjusted_age_days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets_are_contiguous() {
        for pair in AGE_RANGES.windows(2) {
            assert!(pair[1].min <= pair[0].max + 1);
            assert!(pair[1].max > pair[0].max);
        }
        assert_eq!(AGE_RANGES[0].min, 0);
        assert_eq!(AGE_RANGES[9].max, 60);
    }

    #[test]
    fn test_overlapping_month_49_takes_first_match() {
        assert_eq!(get_age_range(49.0).label, "37-49 months");
        assert_eq!(get_age_range(49.5).label, "49-60 months");
    }

    #[test]
    fn test_fractional_months_use_upper_bound() {
        assert_eq!(get_age_range(3.0).label, "0-3 months");
        assert_eq!(get_age_range(3.2).label, "4-6 months");
    }

    #[test]
    fn test_out_of_table_ages_fall_through() {
        assert_eq!(get_age_range(75.0).label, "49-60 months");
        assert_eq!(get_age_range(f64::NAN).label, "49-60 months");
        assert_eq!(get_age_range(-2.0).label, "0-3 months");
    }

    #[test]
    fn test_days_until_range_ends() {
        // 5 months 10 days into the 4-6 window: floor(1 * 30.44) - 10
        assert_eq!(calculate_days_until_range_ends(5, 10, 6), 20);
        assert_eq!(calculate_days_until_range_ends(6, 3, 6), -3);
        assert_eq!(calculate_days_until_range_ends(13, 0, 18), 152);
    }
}
