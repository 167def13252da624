// ABOUTME: Growth measurement models for WHO percentile lookups
// ABOUTME: MeasurementType selects the reference table; Measurement is one recorded value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

use crate::errors::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of growth measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementType {
    /// Body weight in kilograms
    Weight,
    /// Length/height in centimetres
    Height,
    /// Head circumference in centimetres
    Head,
}

impl MeasurementType {
    /// Name used in storage and API payloads
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Height => "height",
            Self::Head => "head",
        }
    }

    /// Unit the value is recorded in
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Weight => "kg",
            Self::Height | Self::Head => "cm",
        }
    }
}

impl fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasurementType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weight" => Ok(Self::Weight),
            "height" => Ok(Self::Height),
            "head" => Ok(Self::Head),
            other => Err(AppError::invalid_input(format!(
                "Unknown measurement type: '{other}'. Valid options: weight, height, head"
            ))),
        }
    }
}

/// One recorded growth measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// What was measured
    #[serde(rename = "type")]
    pub kind: MeasurementType,
    /// Measured value in the unit of `kind`
    pub value: f64,
    /// Date of the measurement
    pub measured_on: NaiveDate,
}
