// ABOUTME: WHO growth percentile calculation using the Box-Cox LMS method
// ABOUTME: Linear LMS interpolation between tabulated ages and a polynomial normal CDF
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

//! WHO Percentile Engine
//!
//! For a measurement `X` at age `t` with interpolated parameters `L(t)`, `M(t)`,
//! `S(t)`:
//!
//! ```text
//! Z = ((X / M)^L - 1) / (L * S)
//! ```
//!
//! `Z` is converted with the Abramowitz-Stegun 26.2.17 polynomial approximation of
//! the standard normal CDF, scaled to 0-100, rounded to one decimal, and clamped to
//! `[0.1, 99.9]`. Results must match stored percentiles exactly, so the
//! approximation is used even though `erf`-based CDFs are more precise.
//!
//! # Scientific References
//!
//! - Cole, T.J. & Green, P.J. (1992). "Smoothing reference centile curves: the LMS
//!   method and penalized likelihood." *Statistics in Medicine*, 11(10), 1305-1319.
//! - Abramowitz, M. & Stegun, I.A. (1964). *Handbook of Mathematical Functions*,
//!   formula 26.2.17.

use super::who_tables::{reference_table, WhoReferencePoint, WhoSex};
use serde::{Deserialize, Serialize};
use sprout_core::constants::growth::{
    bands, normal_cdf, MAX_AGE_MONTHS, MAX_PERCENTILE, MIN_AGE_MONTHS, MIN_PERCENTILE,
};
use sprout_core::models::{Gender, MeasurementType};
use sprout_core::rounding::round_half_up_to;
use std::str::FromStr;
use tracing::{debug, trace};

/// Where a percentile sits on a WHO chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentileBand {
    /// Below the 3rd percentile
    VeryLow,
    /// 3rd to below the 15th percentile
    Low,
    /// 15th to 85th percentile
    Typical,
    /// Above the 85th up to the 97th percentile
    High,
    /// Above the 97th percentile
    VeryHigh,
}

impl PercentileBand {
    /// Classify a percentile
    #[must_use]
    pub fn from_percentile(percentile: f64) -> Self {
        if percentile < bands::VERY_LOW_BELOW {
            Self::VeryLow
        } else if percentile < bands::LOW_BELOW {
            Self::Low
        } else if percentile <= bands::TYPICAL_UP_TO {
            Self::Typical
        } else if percentile <= bands::HIGH_UP_TO {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    /// Short description for display
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::VeryLow => "below the 3rd percentile",
            Self::Low => "between the 3rd and 15th percentiles",
            Self::Typical => "between the 15th and 85th percentiles",
            Self::High => "between the 85th and 97th percentiles",
            Self::VeryHigh => "above the 97th percentile",
        }
    }
}

const fn who_sex(gender: Gender) -> Option<WhoSex> {
    match gender {
        Gender::Male => Some(WhoSex::Boys),
        Gender::Female => Some(WhoSex::Girls),
        Gender::Other => None,
    }
}

/// LMS parameters at `age_months`, linearly interpolated between the bracketing rows.
///
/// An age that lands on a tabulated row returns that row unchanged. Ages outside the
/// table clamp to its first or last row.
#[must_use]
#[allow(clippy::suboptimal_flops)] // fused multiply-add changes the last bit of stored results
pub fn interpolate_lms(table: &[WhoReferencePoint], age_months: f64) -> Option<WhoReferencePoint> {
    let mut lower = table.first()?;
    let mut upper = table.last()?;

    for point in table {
        if point.age_months <= age_months {
            lower = point;
        }
        if point.age_months >= age_months {
            upper = point;
            break;
        }
    }

    if (upper.age_months - lower.age_months).abs() < f64::EPSILON {
        return Some(*lower);
    }

    let ratio = (age_months - lower.age_months) / (upper.age_months - lower.age_months);
    trace!(
        lower = lower.age_months,
        upper = upper.age_months,
        ratio,
        "interpolating LMS parameters"
    );

    Some(WhoReferencePoint {
        age_months,
        l: lower.l + (upper.l - lower.l) * ratio,
        m: lower.m + (upper.m - lower.m) * ratio,
        s: lower.s + (upper.s - lower.s) * ratio,
    })
}

/// Box-Cox LMS Z-score of `value` against `reference`
#[must_use]
pub fn lms_z_score(value: f64, reference: &WhoReferencePoint) -> f64 {
    let ratio = value / reference.m;
    if reference.l.abs() < f64::EPSILON {
        // Limit of the Box-Cox transform as L -> 0
        ratio.ln() / reference.s
    } else {
        (ratio.powf(reference.l) - 1.0) / (reference.l * reference.s)
    }
}

/// Standard normal CDF, Abramowitz-Stegun 26.2.17 approximation
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn standard_normal_cdf(z: f64) -> f64 {
    let t = 1.0 / (1.0 + normal_cdf::P * z.abs());
    let d = normal_cdf::DENSITY * (-z * z / 2.0).exp();
    let polynomial = t
        * (normal_cdf::B1
            + t * (normal_cdf::B2
                + t * (normal_cdf::B3 + t * (normal_cdf::B4 + t * normal_cdf::B5))));
    let p = d * polynomial;
    if z > 0.0 {
        1.0 - p
    } else {
        p
    }
}

/// WHO Z-score for a measurement, or `None` when outside the reference domain
#[must_use]
pub fn calculate_z_score(
    value: f64,
    age_months: f64,
    gender: Gender,
    kind: MeasurementType,
) -> Option<f64> {
    let Some(sex) = who_sex(gender) else {
        debug!(%gender, "no WHO reference table for gender");
        return None;
    };
    if !(MIN_AGE_MONTHS..=MAX_AGE_MONTHS).contains(&age_months) {
        debug!(age_months, "age outside WHO reference range");
        return None;
    }
    if !value.is_finite() || value <= 0.0 {
        debug!(value, %kind, "measurement value must be positive and finite");
        return None;
    }

    let reference = interpolate_lms(reference_table(sex, kind), age_months)?;
    let z = lms_z_score(value, &reference);
    z.is_finite().then_some(z)
}

/// WHO growth percentile in `[0.1, 99.9]`, rounded to one decimal.
///
/// Returns `None` ("do not display a percentile") when the gender has no reference
/// table, the age is outside 0-60 months, or the value is not a positive number.
///
/// # Example
///
/// ```rust
/// use sprout_core::models::{Gender, MeasurementType};
/// use sprout_intelligence::algorithms::who_percentile::calculate_percentile;
///
/// // Median birth weight for boys
/// let p = calculate_percentile(3.3464, 0.0, Gender::Male, MeasurementType::Weight);
/// assert_eq!(p, Some(50.0));
/// ```
#[must_use]
pub fn calculate_percentile(
    value: f64,
    age_months: f64,
    gender: Gender,
    kind: MeasurementType,
) -> Option<f64> {
    let z = calculate_z_score(value, age_months, gender, kind)?;
    let percentile = round_half_up_to(standard_normal_cdf(z) * 100.0, 1);
    Some(percentile.clamp(MIN_PERCENTILE, MAX_PERCENTILE))
}

/// [`calculate_percentile`] over raw stored strings.
///
/// Gender must be exactly `"male"` or `"female"` and type exactly `"weight"`,
/// `"height"`, or `"head"`; anything else yields `None`.
#[must_use]
pub fn calculate_percentile_str(
    value: f64,
    age_months: f64,
    gender: &str,
    kind: &str,
) -> Option<f64> {
    let gender = Gender::from_str(gender).ok()?;
    let kind = MeasurementType::from_str(kind).ok()?;
    calculate_percentile(value, age_months, gender, kind)
}

#[cfg(test)]
mod tests {
    use super::super::who_tables::{HEIGHT_GIRLS, WEIGHT_BOYS};
    use super::*;

    #[test]
    fn test_cdf_at_zero_is_half() {
        assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_cdf_is_symmetric() {
        for z in [0.5, 1.0, 1.96, 3.0] {
            let sum = standard_normal_cdf(z) + standard_normal_cdf(-z);
            assert!((sum - 1.0).abs() < 1e-9);
        }
        assert!((standard_normal_cdf(1.96) - 0.975).abs() < 1e-3);
    }

    #[test]
    fn test_interpolation_exact_row() {
        let row = interpolate_lms(&WEIGHT_BOYS, 6.0).unwrap();
        assert_eq!(row, WEIGHT_BOYS[2]);
    }

    #[test]
    fn test_interpolation_midpoint() {
        let mid = interpolate_lms(&HEIGHT_GIRLS, 42.0).unwrap();
        let expected_m = (HEIGHT_GIRLS[7].m + HEIGHT_GIRLS[8].m) / 2.0;
        assert!((mid.m - expected_m).abs() < 1e-9);
        assert!((mid.l - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_z_score_of_median_is_zero() {
        for row in &WEIGHT_BOYS {
            assert!(lms_z_score(row.m, row).abs() < 1e-12);
        }
    }

    #[test]
    fn test_z_score_zero_l_uses_log_limit() {
        let reference = WhoReferencePoint {
            age_months: 0.0,
            l: 0.0,
            m: 10.0,
            s: 0.1,
        };
        let z = lms_z_score(10.0 * 1.1_f64.exp().powf(0.1), &reference);
        assert!((z - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_percentile_band_boundaries() {
        assert_eq!(PercentileBand::from_percentile(2.9), PercentileBand::VeryLow);
        assert_eq!(PercentileBand::from_percentile(3.0), PercentileBand::Low);
        assert_eq!(PercentileBand::from_percentile(50.0), PercentileBand::Typical);
        assert_eq!(PercentileBand::from_percentile(85.0), PercentileBand::Typical);
        assert_eq!(PercentileBand::from_percentile(97.0), PercentileBand::High);
        assert_eq!(PercentileBand::from_percentile(99.9), PercentileBand::VeryHigh);
    }
}
