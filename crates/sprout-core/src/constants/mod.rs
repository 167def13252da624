// ABOUTME: Domain constants for age arithmetic, age-range buckets, and percentile bounds
// ABOUTME: Single source for every magic number the engines share
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

//! Domain constants organized by concern.

/// Age arithmetic constants
pub mod age {
    /// Average number of weeks in a calendar month, used to convert a gestational
    /// adjustment in weeks into months
    pub const WEEKS_PER_MONTH: f64 = 4.345;

    /// Average number of days in a calendar month, used for countdowns and
    /// fractional month ages
    pub const DAYS_PER_MONTH: f64 = 30.44;

    /// Corrected age only applies below this chronological age in months
    pub const CORRECTED_AGE_CUTOFF_MONTHS: i64 = 36;

    /// Days per week
    pub const DAYS_PER_WEEK: f64 = 7.0;

    /// Months per year
    pub const MONTHS_PER_YEAR: i64 = 12;
}

/// Developmental age-range buckets
pub mod age_ranges {
    /// `(min, max, label)` for each of the ten windows, ascending.
    ///
    /// The last two windows both contain month 49; lookups take the first match.
    pub const BUCKETS: [(u32, u32, &str); 10] = [
        (0, 3, "0-3 months"),
        (4, 6, "4-6 months"),
        (7, 9, "7-9 months"),
        (10, 12, "10-12 months"),
        (13, 18, "13-18 months"),
        (19, 24, "19-24 months"),
        (25, 30, "25-30 months"),
        (31, 36, "31-36 months"),
        (37, 49, "37-49 months"),
        (49, 60, "49-60 months"),
    ];

    /// Month values that close a bucket
    pub const BOUNDARY_MONTHS: [i64; 10] = [3, 6, 9, 12, 18, 24, 30, 36, 49, 60];
}

/// WHO growth standard constants
pub mod growth {
    /// Youngest age covered by the reference tables (months)
    pub const MIN_AGE_MONTHS: f64 = 0.0;

    /// Oldest age covered by the reference tables (months)
    pub const MAX_AGE_MONTHS: f64 = 60.0;

    /// Percentiles are never reported below this value
    pub const MIN_PERCENTILE: f64 = 0.1;

    /// Percentiles are never reported above this value
    pub const MAX_PERCENTILE: f64 = 99.9;

    /// Abramowitz-Stegun 26.2.17 normal CDF coefficients
    pub mod normal_cdf {
        /// Scale factor applied to |z| in the `t` substitution
        pub const P: f64 = 0.231_641_9;
        /// Standard normal density coefficient, 1/sqrt(2*pi)
        pub const DENSITY: f64 = 0.398_942_3;
        /// Polynomial coefficient b1
        pub const B1: f64 = 0.319_381_5;
        /// Polynomial coefficient b2
        pub const B2: f64 = -0.356_563_8;
        /// Polynomial coefficient b3
        pub const B3: f64 = 1.781_478;
        /// Polynomial coefficient b4
        pub const B4: f64 = -1.821_256;
        /// Polynomial coefficient b5
        pub const B5: f64 = 1.330_274;
    }

    /// Percentile bands used when reading a WHO chart
    pub mod bands {
        /// Below this percentile a measurement is very low
        pub const VERY_LOW_BELOW: f64 = 3.0;
        /// Below this percentile a measurement is low
        pub const LOW_BELOW: f64 = 15.0;
        /// Up to and including this percentile a measurement is typical
        pub const TYPICAL_UP_TO: f64 = 85.0;
        /// Up to and including this percentile a measurement is high
        pub const HIGH_UP_TO: f64 = 97.0;
    }
}

/// Milestone highlight defaults
pub mod highlights {
    /// Consultation window opens this many days before the age range ends
    pub const DAYS_BEFORE_RANGE_END: i64 = 15;

    /// Category completion percentage that earns a celebration
    pub const CELEBRATION_THRESHOLD: u32 = 75;

    /// Completion below this percentage in the Developmental category suggests a GP visit
    pub const DEVELOPMENTAL_CONSULT_THRESHOLD: u32 = 75;

    /// Completion below this percentage in any other category suggests a GP visit
    pub const OTHER_CONSULT_THRESHOLD: u32 = 90;

    /// Category name that uses the developmental consultation threshold
    pub const DEVELOPMENTAL_CATEGORY: &str = "Developmental";
}
