// ABOUTME: Per-child composition of age, age range, highlights, and growth percentile
// ABOUTME: Produces the snapshot a dashboard or AI prompt needs for one child on one date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

use crate::algorithms::age::{
    age_in_months_at, calculate_corrected_age, format_adjustment, format_age,
};
use crate::algorithms::age_range::{
    calculate_days_until_range_ends, get_adjusted_months_for_range, get_age_range,
};
use crate::algorithms::who_percentile::{calculate_percentile, PercentileBand};
use crate::config::HighlightConfig;
use crate::highlights::calculate_highlights;
use chrono::NaiveDate;
use serde::Serialize;
use sprout_core::constants::age::DAYS_PER_MONTH;
use sprout_core::models::{
    AgeRangeBucket, CategoryProgress, ChildRecord, CorrectedAgeResult, Highlight, Measurement,
};
use tracing::debug;

/// Where a child sits developmentally on a given date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DevelopmentSnapshot {
    /// Chronological and corrected age
    pub age: CorrectedAgeResult,
    /// Display form of the age used for ranges
    pub display_age: String,
    /// Gestational correction label, empty when none applies
    pub adjustment_label: String,
    /// Month count used for bucketing, after boundary overflow
    pub months_for_range: i64,
    /// Current developmental window
    pub age_range: AgeRangeBucket,
    /// Days until the window closes; negative once past it
    pub days_until_range_ends: i64,
}

/// Assess a child's developmental position on `today`
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use sprout_core::models::{ChildRecord, Gender};
/// use sprout_intelligence::development::assess_development;
///
/// let child = ChildRecord {
///     name: "Maya".into(),
///     birth_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     due_date: None,
///     gender: Gender::Female,
/// };
/// let snapshot = assess_development(&child, NaiveDate::from_ymd_opt(2024, 7, 20).unwrap());
/// assert_eq!(snapshot.display_age, "6 months, 10 days");
/// assert_eq!(snapshot.age_range.label, "7-9 months");
/// ```
#[must_use]
pub fn assess_development(child: &ChildRecord, today: NaiveDate) -> DevelopmentSnapshot {
    let age = calculate_corrected_age(child.birth_date, child.due_date, today);
    let effective = age.effective();
    let days = i64::from(effective.days);

    let months_for_range = get_adjusted_months_for_range(effective.total_months(), days);
    let age_range = get_age_range(months_for_range as f64);
    let days_until_range_ends =
        calculate_days_until_range_ends(effective.total_months(), days, age_range.max);

    DevelopmentSnapshot {
        display_age: format_age(&effective),
        adjustment_label: format_adjustment(
            age.adjustment_weeks,
            age.is_premature,
            age.is_post_mature,
        ),
        age,
        months_for_range,
        age_range,
        days_until_range_ends,
    }
}

/// Highlights for a snapshot's age range countdown
#[must_use]
pub fn evaluate_highlights(
    snapshot: &DevelopmentSnapshot,
    progress: &[CategoryProgress],
    child_name: &str,
    config: &HighlightConfig,
) -> Vec<Highlight> {
    calculate_highlights(progress, snapshot.days_until_range_ends, child_name, config)
}

/// Percentile reading for a single measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurementAssessment {
    /// Fractional chronological age on the measurement date, negative before birth
    pub age_months: f64,
    /// WHO percentile, `None` when unavailable
    pub percentile: Option<f64>,
    /// Chart band for the percentile
    pub band: Option<PercentileBand>,
}

/// Percentile of `measurement` at the child's chronological age on the measurement date.
///
/// A measurement dated before the birth date has no percentile.
#[must_use]
pub fn assess_measurement(
    child: &ChildRecord,
    measurement: &Measurement,
) -> MeasurementAssessment {
    if measurement.measured_on < child.birth_date {
        let days_before_birth = (child.birth_date - measurement.measured_on).num_days();
        debug!(
            birth_date = %child.birth_date,
            measured_on = %measurement.measured_on,
            "measurement dated before birth"
        );
        return MeasurementAssessment {
            age_months: -(days_before_birth as f64) / DAYS_PER_MONTH,
            percentile: None,
            band: None,
        };
    }

    let age_months = age_in_months_at(child.birth_date, measurement.measured_on);
    let percentile =
        calculate_percentile(measurement.value, age_months, child.gender, measurement.kind);
    MeasurementAssessment {
        age_months,
        percentile,
        band: percentile.map(PercentileBand::from_percentile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_core::models::{Gender, MeasurementType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn child(due_date: Option<NaiveDate>, gender: Gender) -> ChildRecord {
        ChildRecord {
            name: "Ada".into(),
            birth_date: date(2024, 1, 10),
            due_date,
            gender,
        }
    }

    #[test]
    fn test_boundary_month_overflows_into_next_range() {
        // Exactly 6 months: still 4-6; 6 months and 1 day: 7-9
        let on_boundary = assess_development(&child(None, Gender::Male), date(2024, 7, 10));
        assert_eq!(on_boundary.age_range.label, "4-6 months");
        assert_eq!(on_boundary.days_until_range_ends, 0);

        let past = assess_development(&child(None, Gender::Male), date(2024, 7, 11));
        assert_eq!(past.months_for_range, 7);
        assert_eq!(past.age_range.label, "7-9 months");
        assert_eq!(past.days_until_range_ends, 90);
    }

    #[test]
    fn test_premature_child_uses_corrected_age() {
        // 8 weeks premature at 8 months chronological -> 6 months corrected
        let snapshot = assess_development(
            &child(Some(date(2024, 3, 6)), Gender::Female),
            date(2024, 9, 10),
        );
        assert!(snapshot.age.should_use_corrected_age);
        assert_eq!(snapshot.age.corrected.months, 6);
        assert_eq!(snapshot.adjustment_label, "Corrected for 8 weeks premature");
        assert_eq!(snapshot.age_range.label, "4-6 months");
    }

    #[test]
    fn test_evaluate_highlights_uses_snapshot_countdown() {
        let snapshot = assess_development(&child(None, Gender::Male), date(2024, 7, 1));
        let progress = vec![CategoryProgress::new("Developmental", 4, 1)];
        let highlights =
            evaluate_highlights(&snapshot, &progress, "Ada", &HighlightConfig::default());
        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].days_until_range_ends, snapshot.days_until_range_ends);
    }

    #[test]
    fn test_assess_measurement_at_birth() {
        let measurement = Measurement {
            kind: MeasurementType::Weight,
            value: 3.3464,
            measured_on: date(2024, 1, 10),
        };
        let assessment = assess_measurement(&child(None, Gender::Male), &measurement);
        assert_eq!(assessment.percentile, Some(50.0));
        assert_eq!(assessment.band, Some(PercentileBand::Typical));
    }

    #[test]
    fn test_assess_measurement_other_gender_unavailable() {
        let measurement = Measurement {
            kind: MeasurementType::Height,
            value: 70.0,
            measured_on: date(2024, 10, 1),
        };
        let assessment = assess_measurement(&child(None, Gender::Other), &measurement);
        assert_eq!(assessment.percentile, None);
        assert_eq!(assessment.band, None);
    }
}
