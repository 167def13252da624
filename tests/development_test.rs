// ABOUTME: Integration tests for per-child development snapshots and measurement assessment
// ABOUTME: Follows a child from birth date through age range, countdown, highlights, and growth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use sprout::algorithms::PercentileBand;
use sprout::config::HighlightConfig;
use sprout::development::{assess_development, assess_measurement, evaluate_highlights};
use sprout::models::{
    CategoryProgress, ChildRecord, Gender, HighlightKind, Measurement, MeasurementType,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn premature_girl() -> ChildRecord {
    ChildRecord {
        name: "Isla".into(),
        birth_date: date(2024, 1, 10),
        due_date: Some(date(2024, 3, 6)),
        gender: Gender::Female,
    }
}

#[test]
fn test_snapshot_for_premature_child() {
    let snapshot = assess_development(&premature_girl(), date(2024, 9, 10));

    assert_eq!(snapshot.age.adjustment_weeks, 8);
    assert_eq!(snapshot.display_age, "6 months");
    assert_eq!(snapshot.adjustment_label, "Corrected for 8 weeks premature");
    assert_eq!(snapshot.months_for_range, 6);
    assert_eq!(snapshot.age_range.label, "4-6 months");
    assert_eq!(snapshot.days_until_range_ends, 0);
}

#[test]
fn test_snapshot_without_due_date() {
    let child = ChildRecord {
        due_date: None,
        ..premature_girl()
    };
    let snapshot = assess_development(&child, date(2024, 9, 10));

    assert!(!snapshot.age.should_use_corrected_age);
    assert_eq!(snapshot.display_age, "8 months");
    assert_eq!(snapshot.adjustment_label, "");
    assert_eq!(snapshot.age_range.label, "7-9 months");
    // floor(1 * 30.44) - 0
    assert_eq!(snapshot.days_until_range_ends, 30);
}

#[test]
fn test_highlights_follow_snapshot_countdown() {
    let child = premature_girl();
    let snapshot = assess_development(&child, date(2024, 9, 10));
    let progress = vec![
        CategoryProgress::new("Social", 5, 5),
        CategoryProgress::new("Developmental", 5, 3),
    ];

    let highlights =
        evaluate_highlights(&snapshot, &progress, &child.name, &HighlightConfig::default());
    let kinds: Vec<HighlightKind> = highlights.iter().map(|h| h.kind).collect();
    assert_eq!(kinds, [HighlightKind::Celebration, HighlightKind::GpConsultation]);
    assert!(highlights[0].message.contains("Isla"));
}

#[test]
fn test_growth_uses_chronological_age() {
    // Measured at 6 months chronological: the median of the 6-month row
    let measurement = Measurement {
        kind: MeasurementType::Weight,
        value: 7.2970,
        measured_on: date(2024, 7, 10),
    };
    let assessment = assess_measurement(&premature_girl(), &measurement);

    assert!((assessment.age_months - 6.0).abs() < f64::EPSILON);
    assert_eq!(assessment.percentile, Some(50.0));
    assert_eq!(assessment.band, Some(PercentileBand::Typical));
}

#[test]
fn test_growth_beyond_reference_range_is_unavailable() {
    let measurement = Measurement {
        kind: MeasurementType::Height,
        value: 115.0,
        measured_on: date(2029, 3, 1),
    };
    let assessment = assess_measurement(&premature_girl(), &measurement);
    assert!(assessment.age_months > 60.0);
    assert_eq!(assessment.percentile, None);
    assert_eq!(assessment.band, None);
}

#[test]
fn test_measurement_before_birth_is_unavailable() {
    // Nine days before the birth date must not read as an 11-month-old
    let measurement = Measurement {
        kind: MeasurementType::Weight,
        value: 3.3,
        measured_on: date(2024, 1, 1),
    };
    let assessment = assess_measurement(&premature_girl(), &measurement);

    assert!(assessment.age_months < 0.0);
    assert!((assessment.age_months + 9.0 / 30.44).abs() < 1e-12);
    assert_eq!(assessment.percentile, None);
    assert_eq!(assessment.band, None);
}

#[test]
fn test_snapshot_serializes_for_api() {
    let snapshot = assess_development(&premature_girl(), date(2024, 9, 10));
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["age_range"]["label"], "4-6 months");
    assert_eq!(json["age"]["corrected"]["months"], 6);
    assert_eq!(json["age"]["is_premature"], true);
}
