// ABOUTME: Age and age-range commands for sprout-cli
// ABOUTME: Reports chronological and corrected age, and the developmental window for a month count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;
use sprout::algorithms::age::{format_adjustment, format_age};
use sprout::algorithms::age_range::{get_adjusted_months_for_range, get_age_range};
use sprout::algorithms::{AgeCalculator, FixedClock, SystemClock};
use sprout::errors::{AppError, AppResult};
use sprout::models::{AgeRangeBucket, CorrectedAgeResult};
use tracing::debug;

use crate::helpers::display::print_json;

#[derive(Serialize)]
struct AgeReport {
    today: NaiveDate,
    #[serde(flatten)]
    age: CorrectedAgeResult,
    display_age: String,
    adjustment_label: String,
    age_in_months_for_ai: u32,
}

#[derive(Serialize)]
struct RangeReport {
    months_for_range: i64,
    range: AgeRangeBucket,
}

fn report(birth_date: NaiveDate, due_date: Option<NaiveDate>, today: NaiveDate) -> AgeReport {
    let calculator = AgeCalculator::new(FixedClock(today));
    let age = calculator.corrected_age(birth_date, due_date);
    AgeReport {
        today,
        display_age: format_age(&age.effective()),
        adjustment_label: format_adjustment(
            age.adjustment_weeks,
            age.is_premature,
            age.is_post_mature,
        ),
        age_in_months_for_ai: calculator.age_in_months_for_ai(birth_date, due_date),
        age,
    }
}

/// Resolve `today`, rejecting dates before the child was born
pub fn resolve_today(birth_date: NaiveDate, today: Option<NaiveDate>) -> AppResult<NaiveDate> {
    let today = today.unwrap_or_else(|| AgeCalculator::new(SystemClock).today());
    if today < birth_date {
        return Err(AppError::out_of_range(format!(
            "Date {today} is before the birth date {birth_date}"
        ))
        .with_details(json!({
            "birth_date": birth_date.to_string(),
            "today": today.to_string(),
        })));
    }
    Ok(today)
}

/// Print chronological and corrected age
pub fn age(
    birth_date: NaiveDate,
    due_date: Option<NaiveDate>,
    today: Option<NaiveDate>,
) -> AppResult<()> {
    let today = resolve_today(birth_date, today)?;
    debug!(%birth_date, ?due_date, %today, "calculating age");
    print_json(&report(birth_date, due_date, today))
}

/// Print the developmental window for `months` and `days`
pub fn range(months: i64, days: i64) -> AppResult<()> {
    let months_for_range = get_adjusted_months_for_range(months, days);
    print_json(&RangeReport {
        months_for_range,
        range: get_age_range(months_for_range as f64),
    })
}
