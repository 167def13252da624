// ABOUTME: WHO growth percentile command for sprout-cli
// ABOUTME: Prints the percentile and chart band, or nulls when no percentile applies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

use serde::Serialize;
use sprout::algorithms::who_percentile::calculate_percentile_str;
use sprout::algorithms::PercentileBand;
use sprout::errors::AppResult;
use sprout::models::MeasurementType;
use std::str::FromStr;

use crate::helpers::display::print_json;

#[derive(Serialize)]
struct PercentileReport<'a> {
    value: f64,
    age_months: f64,
    gender: &'a str,
    kind: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<&'static str>,
    percentile: Option<f64>,
    band: Option<PercentileBand>,
}

/// Print the WHO percentile for a measurement
pub fn percentile(value: f64, age_months: f64, gender: &str, kind: &str) -> AppResult<()> {
    let percentile = calculate_percentile_str(value, age_months, gender, kind);
    print_json(&PercentileReport {
        value,
        age_months,
        gender,
        kind,
        unit: MeasurementType::from_str(kind).ok().map(MeasurementType::unit),
        percentile,
        band: percentile.map(PercentileBand::from_percentile),
    })
}
