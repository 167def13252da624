// ABOUTME: Benchmark fixtures generating children, measurements, and milestone progress
// ABOUTME: Deterministic data so repeated runs measure the same work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

//! Benchmark fixtures.

use chrono::{Days, NaiveDate};
use sprout::models::{CategoryProgress, ChildRecord, Gender, Measurement, MeasurementType};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum BatchSize {
    /// One child's record set
    Small,
    /// A nursery's worth of children
    Medium,
}

impl BatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 500,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
        }
    }
}

/// Date every fixture treats as today
#[must_use]
pub fn fixture_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap_or_default()
}

/// Children born across the 0-60 month window, a third of them premature
#[must_use]
pub fn generate_children(count: usize) -> Vec<ChildRecord> {
    let today = fixture_today();
    (0..count)
        .map(|index| {
            let age_days = (index as u64 * 37) % 1825;
            let birth_date = today - Days::new(age_days);
            let due_date =
                (index % 3 == 0).then(|| birth_date + Days::new((index as u64 % 10) * 7));
            let gender = if index % 2 == 0 {
                Gender::Male
            } else {
                Gender::Female
            };
            ChildRecord {
                name: format!("Child {index}"),
                birth_date,
                due_date,
                gender,
            }
        })
        .collect()
}

/// One measurement per child, cycling through the measurement types
#[must_use]
pub fn generate_measurements(children: &[ChildRecord]) -> Vec<Measurement> {
    children
        .iter()
        .enumerate()
        .map(|(index, child)| {
            let (kind, value) = match index % 3 {
                0 => (MeasurementType::Weight, 3.0 + (index % 15) as f64),
                1 => (MeasurementType::Height, 50.0 + (index % 60) as f64),
                _ => (MeasurementType::Head, 34.0 + (index % 16) as f64),
            };
            Measurement {
                kind,
                value,
                measured_on: child.birth_date.max(fixture_today() - Days::new(30)),
            }
        })
        .collect()
}

/// Typical milestone progress across the standard categories
#[must_use]
pub fn generate_progress() -> Vec<CategoryProgress> {
    vec![
        CategoryProgress::new("Developmental", 12, 7),
        CategoryProgress::new("Motor", 10, 9),
        CategoryProgress::new("Social", 8, 8),
        CategoryProgress::new("Language", 9, 4),
        CategoryProgress::new("Sensory", 6, 5),
    ]
}
