// ABOUTME: WHO Child Growth Standards LMS reference points for ages 0-60 months
// ABOUTME: Weight, length/height, and head circumference tables for boys and girls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

//! WHO growth reference tables
//!
//! Box-Cox LMS parameters sampled at 0, 3, 6, 9, 12, 18, 24, 36, 48 and 60 months.
//! Values between sampled ages are linearly interpolated by the percentile engine.
//!
//! # References
//!
//! - WHO Multicentre Growth Reference Study Group (2006). *WHO Child Growth
//!   Standards: Length/height-for-age, weight-for-age, weight-for-length,
//!   weight-for-height and body mass index-for-age.* Geneva: World Health Organization.
//! - WHO Multicentre Growth Reference Study Group (2007). *WHO Child Growth
//!   Standards: Head circumference-for-age, arm circumference-for-age, triceps
//!   skinfold-for-age and subscapular skinfold-for-age.* Geneva: World Health Organization.

use serde::Serialize;
use sprout_core::models::MeasurementType;

/// Sex-specific WHO table selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WhoSex {
    /// Boys' tables
    Boys,
    /// Girls' tables
    Girls,
}

/// One tabulated row of Box-Cox LMS parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WhoReferencePoint {
    /// Age in completed months
    pub age_months: f64,
    /// Box-Cox power (skewness)
    pub l: f64,
    /// Median
    pub m: f64,
    /// Coefficient of variation
    pub s: f64,
}

const fn point(age_months: f64, l: f64, m: f64, s: f64) -> WhoReferencePoint {
    WhoReferencePoint { age_months, l, m, s }
}

/// Weight-for-age, boys (kg)
pub static WEIGHT_BOYS: [WhoReferencePoint; 10] = [
    point(0.0, 0.3487, 3.3464, 0.146_02),
    point(3.0, 0.1738, 6.3762, 0.117_27),
    point(6.0, 0.1257, 7.9340, 0.110_80),
    point(9.0, 0.0917, 8.9014, 0.108_81),
    point(12.0, 0.0644, 9.6479, 0.108_96),
    point(18.0, 0.0197, 10.9385, 0.110_17),
    point(24.0, -0.0137, 12.1515, 0.113_13),
    point(36.0, 0.0017, 14.3429, 0.115_76),
    point(48.0, -0.0414, 16.3489, 0.122_21),
    point(60.0, -0.0852, 18.3366, 0.128_63),
];

/// Weight-for-age, girls (kg)
pub static WEIGHT_GIRLS: [WhoReferencePoint; 10] = [
    point(0.0, 0.3809, 3.2322, 0.141_71),
    point(3.0, 0.1714, 5.8458, 0.126_19),
    point(6.0, 0.0962, 7.2970, 0.122_04),
    point(9.0, 0.0442, 8.2254, 0.120_46),
    point(12.0, 0.0023, 8.9481, 0.120_27),
    point(18.0, -0.0657, 10.2315, 0.121_65),
    point(24.0, -0.1136, 11.4775, 0.124_86),
    point(36.0, -0.2035, 13.8503, 0.133_71),
    point(48.0, -0.2685, 16.0697, 0.141_25),
    point(60.0, -0.3112, 18.2193, 0.146_57),
];

/// Length/height-for-age, boys (cm)
pub static HEIGHT_BOYS: [WhoReferencePoint; 10] = [
    point(0.0, 1.0, 49.8842, 0.037_95),
    point(3.0, 1.0, 61.4292, 0.033_28),
    point(6.0, 1.0, 67.6236, 0.031_65),
    point(9.0, 1.0, 72.0036, 0.031_28),
    point(12.0, 1.0, 75.7488, 0.031_37),
    point(18.0, 1.0, 82.2587, 0.032_24),
    point(24.0, 1.0, 87.8161, 0.033_28),
    point(36.0, 1.0, 96.0835, 0.037_40),
    point(48.0, 1.0, 103.3273, 0.039_87),
    point(60.0, 1.0, 109.9638, 0.040_50),
];

/// Length/height-for-age, girls (cm)
pub static HEIGHT_GIRLS: [WhoReferencePoint; 10] = [
    point(0.0, 1.0, 49.1477, 0.037_90),
    point(3.0, 1.0, 59.8029, 0.034_86),
    point(6.0, 1.0, 65.7311, 0.034_48),
    point(9.0, 1.0, 70.1435, 0.034_68),
    point(12.0, 1.0, 74.0150, 0.035_62),
    point(18.0, 1.0, 80.7079, 0.036_99),
    point(24.0, 1.0, 86.4153, 0.037_64),
    point(36.0, 1.0, 95.0515, 0.038_79),
    point(48.0, 1.0, 102.7312, 0.040_59),
    point(60.0, 1.0, 109.4233, 0.042_12),
];

/// Head circumference-for-age, boys (cm)
pub static HEAD_BOYS: [WhoReferencePoint; 10] = [
    point(0.0, 1.0, 34.4618, 0.036_86),
    point(3.0, 1.0, 40.5135, 0.029_97),
    point(6.0, 1.0, 43.3306, 0.028_66),
    point(9.0, 1.0, 44.9998, 0.028_31),
    point(12.0, 1.0, 46.0661, 0.028_32),
    point(18.0, 1.0, 47.3684, 0.028_61),
    point(24.0, 1.0, 48.2477, 0.028_97),
    point(36.0, 1.0, 49.4717, 0.029_53),
    point(48.0, 1.0, 50.2306, 0.029_93),
    point(60.0, 1.0, 50.7916, 0.030_24),
];

/// Head circumference-for-age, girls (cm)
pub static HEAD_GIRLS: [WhoReferencePoint; 10] = [
    point(0.0, 1.0, 33.8787, 0.034_96),
    point(3.0, 1.0, 39.5328, 0.030_31),
    point(6.0, 1.0, 42.1995, 0.029_49),
    point(9.0, 1.0, 43.7543, 0.029_27),
    point(12.0, 1.0, 44.8965, 0.029_27),
    point(18.0, 1.0, 46.2074, 0.029_69),
    point(24.0, 1.0, 47.1782, 0.030_19),
    point(36.0, 1.0, 48.4955, 0.030_93),
    point(48.0, 1.0, 49.4096, 0.031_45),
    point(60.0, 1.0, 50.0741, 0.031_82),
];

/// Reference table for a sex and measurement type
#[must_use]
pub fn reference_table(sex: WhoSex, kind: MeasurementType) -> &'static [WhoReferencePoint] {
    match (sex, kind) {
        (WhoSex::Boys, MeasurementType::Weight) => &WEIGHT_BOYS,
        (WhoSex::Girls, MeasurementType::Weight) => &WEIGHT_GIRLS,
        (WhoSex::Boys, MeasurementType::Height) => &HEIGHT_BOYS,
        (WhoSex::Girls, MeasurementType::Height) => &HEIGHT_GIRLS,
        (WhoSex::Boys, MeasurementType::Head) => &HEAD_BOYS,
        (WhoSex::Girls, MeasurementType::Head) => &HEAD_GIRLS,
    }
}
