// ABOUTME: Chronological and gestation-corrected age calculation with an injectable clock
// ABOUTME: Borrow-based calendar difference, 4.345 weeks/month correction, 36-month cutoff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

//! Age Engine
//!
//! Chronological age is a calendar difference with borrowing: a negative day count
//! borrows the length of the month before `today`, a negative month count borrows a
//! year. Corrected age subtracts the gestational offset (due date minus birth date,
//! in weeks) converted at 4.345 weeks per month, and only applies below 36 months.
//!
//! The corrected `days` field is copied from the chronological age rather than
//! recomputed. The offset only moves whole months and years.

use chrono::{Datelike, Local, NaiveDate};
use sprout_core::constants::age::{
    CORRECTED_AGE_CUTOFF_MONTHS, DAYS_PER_MONTH, DAYS_PER_WEEK, MONTHS_PER_YEAR, WEEKS_PER_MONTH,
};
use sprout_core::models::{AgeResult, CorrectedAgeResult};
use sprout_core::rounding::round_half_up;
use tracing::trace;

/// Source of "today" for age calculations
pub trait Clock: Send + Sync {
    /// The current local calendar date
    fn today(&self) -> NaiveDate;
}

/// Reads the system's local date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date; used to pin "today" in tests and replays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Age calculator bound to a clock
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use sprout_intelligence::algorithms::{AgeCalculator, FixedClock};
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// let calculator = AgeCalculator::new(FixedClock(today));
/// let age = calculator.age(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
/// assert_eq!((age.years, age.months, age.days), (1, 2, 26));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AgeCalculator<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> AgeCalculator<C> {
    /// Create a calculator reading dates from `clock`
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// The date this calculator treats as today
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Chronological age as of today
    #[must_use]
    pub fn age(&self, birth_date: NaiveDate) -> AgeResult {
        calculate_age(birth_date, self.today())
    }

    /// Chronological and corrected age as of today
    #[must_use]
    pub fn corrected_age(
        &self,
        birth_date: NaiveDate,
        due_date: Option<NaiveDate>,
    ) -> CorrectedAgeResult {
        calculate_corrected_age(birth_date, due_date, self.today())
    }

    /// Whole months for AI prompt context
    #[must_use]
    pub fn age_in_months_for_ai(&self, birth_date: NaiveDate, due_date: Option<NaiveDate>) -> u32 {
        age_in_months_for_ai(birth_date, due_date, self.today())
    }
}

fn non_negative(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Length of the calendar month preceding `date`'s month
fn days_in_previous_month(date: NaiveDate) -> u32 {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

/// Calendar age between `birth_date` and `today`
///
/// Each field is clamped to zero after borrowing.
#[must_use]
pub fn calculate_age(birth_date: NaiveDate, today: NaiveDate) -> AgeResult {
    let mut years = i64::from(today.year()) - i64::from(birth_date.year());
    let mut months = i64::from(today.month()) - i64::from(birth_date.month());
    let mut days = i64::from(today.day()) - i64::from(birth_date.day());

    if days < 0 {
        months -= 1;
        days += i64::from(days_in_previous_month(today));
    }

    if months < 0 {
        years -= 1;
        months += MONTHS_PER_YEAR;
    }

    AgeResult::new(non_negative(years), non_negative(months), non_negative(days))
}

/// Chronological age plus the gestation-corrected age used for milestone matching
///
/// A positive signed week count (due date after birth) marks the child premature,
/// a negative one post-mature. `adjustment_weeks` reports the magnitude.
#[must_use]
pub fn calculate_corrected_age(
    birth_date: NaiveDate,
    due_date: Option<NaiveDate>,
    today: NaiveDate,
) -> CorrectedAgeResult {
    let chronological = calculate_age(birth_date, today);

    let Some(due_date) = due_date else {
        return CorrectedAgeResult {
            chronological,
            corrected: chronological,
            adjustment_weeks: 0,
            is_premature: false,
            is_post_mature: false,
            should_use_corrected_age: false,
        };
    };

    let offset_days = (due_date - birth_date).num_days();
    let signed_weeks = round_half_up(offset_days as f64 / DAYS_PER_WEEK) as i64;
    let is_premature = signed_weeks > 0;
    let is_post_mature = signed_weeks < 0;

    let chronological_months = chronological.total_months();
    let should_use_corrected_age = chronological_months < CORRECTED_AGE_CUTOFF_MONTHS;

    let corrected = if should_use_corrected_age && signed_weeks != 0 {
        let adjustment_months = signed_weeks as f64 / WEEKS_PER_MONTH;
        let corrected_months = chronological_months as f64 - adjustment_months;
        // `%` keeps the sign of the dividend; negative remainders clamp to zero below
        let years = (corrected_months / MONTHS_PER_YEAR as f64).floor();
        let months = (corrected_months % MONTHS_PER_YEAR as f64).floor();
        trace!(
            signed_weeks,
            chronological_months,
            corrected_months,
            "applied gestational correction"
        );
        AgeResult::new(
            non_negative(years as i64),
            non_negative(months as i64),
            chronological.days,
        )
    } else {
        chronological
    };

    CorrectedAgeResult {
        chronological,
        corrected,
        adjustment_weeks: non_negative(signed_weeks.abs()),
        is_premature,
        is_post_mature,
        should_use_corrected_age,
    }
}

/// Whole months of the age used for milestone matching, for AI prompt context.
///
/// Growth percentiles use [`age_in_months_at`] instead.
#[must_use]
pub fn age_in_months_for_ai(
    birth_date: NaiveDate,
    due_date: Option<NaiveDate>,
    today: NaiveDate,
) -> u32 {
    let age = calculate_corrected_age(birth_date, due_date, today).effective();
    non_negative(age.total_months())
}

/// Fractional chronological age in months on `date`, for WHO table lookups
#[must_use]
pub fn age_in_months_at(birth_date: NaiveDate, date: NaiveDate) -> f64 {
    let age = calculate_age(birth_date, date);
    age.total_months() as f64 + f64::from(age.days) / DAYS_PER_MONTH
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Display form of an age: the two most significant non-zero units
///
/// `"1 year, 3 months"`, `"2 years"`, `"5 months, 1 day"`, `"12 days"`.
#[must_use]
pub fn format_age(age: &AgeResult) -> String {
    if age.years > 0 {
        let years = plural(age.years, "year");
        if age.months > 0 {
            format!("{years}, {}", plural(age.months, "month"))
        } else {
            years
        }
    } else if age.months > 0 {
        let months = plural(age.months, "month");
        if age.days > 0 {
            format!("{months}, {}", plural(age.days, "day"))
        } else {
            months
        }
    } else {
        plural(age.days, "day")
    }
}

/// Label describing the gestational correction, empty when none applies
#[must_use]
pub fn format_adjustment(
    adjustment_weeks: u32,
    is_premature: bool,
    is_post_mature: bool,
) -> String {
    if adjustment_weeks == 0 {
        return String::new();
    }
    let weeks = plural(adjustment_weeks, "week");
    if is_premature {
        format!("Corrected for {weeks} premature")
    } else if is_post_mature {
        format!("Corrected for {weeks} post-term")
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_previous_month() {
        assert_eq!(days_in_previous_month(date(2024, 3, 15)), 29);
        assert_eq!(days_in_previous_month(date(2023, 3, 15)), 28);
        assert_eq!(days_in_previous_month(date(2024, 1, 2)), 31);
        assert_eq!(days_in_previous_month(date(2024, 5, 31)), 30);
    }

    #[test]
    fn test_day_borrow_uses_month_before_today() {
        // 10 Jan -> 5 Mar 2024: borrow February (29 days)
        let age = calculate_age(date(2024, 1, 10), date(2024, 3, 5));
        assert_eq!(age, AgeResult::new(0, 1, 24));
    }

    #[test]
    fn test_month_borrow_from_year() {
        let age = calculate_age(date(2022, 11, 3), date(2024, 2, 3));
        assert_eq!(age, AgeResult::new(1, 3, 0));
    }

    #[test]
    fn test_same_day_is_zero() {
        assert_eq!(calculate_age(date(2024, 6, 1), date(2024, 6, 1)), AgeResult::default());
    }

    #[test]
    fn test_correction_floor_with_negative_remainder_clamps() {
        // 1 month old, 12 weeks premature: 1 - 2.76 months -> 0 years, 0 months
        let birth = date(2024, 1, 1);
        let result = calculate_corrected_age(birth, Some(date(2024, 3, 25)), date(2024, 2, 6));
        assert!(result.is_premature);
        assert_eq!(result.adjustment_weeks, 12);
        assert_eq!(result.corrected, AgeResult::new(0, 0, 5));
    }

    #[test]
    fn test_week_rounding_to_nearest() {
        // 25 days early is 3.57 weeks -> 4; 24 days late is -3.43 weeks -> -3
        let birth = date(2024, 1, 1);
        let today = date(2024, 6, 1);
        let early = calculate_corrected_age(birth, Some(birth + chrono::Days::new(25)), today);
        assert_eq!(early.adjustment_weeks, 4);
        let late = calculate_corrected_age(birth, Some(birth - chrono::Days::new(24)), today);
        assert_eq!(late.adjustment_weeks, 3);
        assert!(late.is_post_mature);
    }

    #[test]
    fn test_format_age_units() {
        assert_eq!(format_age(&AgeResult::new(1, 3, 4)), "1 year, 3 months");
        assert_eq!(format_age(&AgeResult::new(2, 0, 9)), "2 years");
        assert_eq!(format_age(&AgeResult::new(0, 5, 1)), "5 months, 1 day");
        assert_eq!(format_age(&AgeResult::new(0, 1, 0)), "1 month");
        assert_eq!(format_age(&AgeResult::new(0, 0, 12)), "12 days");
        assert_eq!(format_age(&AgeResult::default()), "0 days");
    }

    #[test]
    fn test_format_adjustment() {
        assert_eq!(format_adjustment(0, false, false), "");
        assert_eq!(format_adjustment(6, true, false), "Corrected for 6 weeks premature");
        assert_eq!(format_adjustment(1, false, true), "Corrected for 1 week post-term");
        assert_eq!(format_adjustment(3, false, false), "");
    }
}
