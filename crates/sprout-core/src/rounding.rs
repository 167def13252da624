// ABOUTME: Half-up rounding used wherever a displayed value is rounded
// ABOUTME: Ties round toward positive infinity so -2.5 becomes -2 and 2.5 becomes 3
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

//! `f64::round` rounds ties away from zero. Stored percentiles and week counts
//! were produced with ties toward positive infinity, so every engine rounds
//! through these helpers instead.

/// Round to the nearest integer, ties toward positive infinity
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to `decimals` places, ties toward positive infinity
#[must_use]
pub fn round_half_up_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    round_half_up(value * factor) / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_round_toward_positive_infinity() {
        assert!((round_half_up(2.5) - 3.0).abs() < f64::EPSILON);
        assert!((round_half_up(-2.5) - -2.0).abs() < f64::EPSILON);
        assert!((round_half_up(-2.6) - -3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_to_one_decimal() {
        assert!((round_half_up_to(49.96, 1) - 50.0).abs() < 1e-9);
        assert!((round_half_up_to(12.34, 1) - 12.3).abs() < 1e-9);
    }
}
