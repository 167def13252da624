// ABOUTME: Milestone progress and highlight models
// ABOUTME: CategoryProgress feeds the highlight evaluator, Highlight is what the UI renders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

use crate::rounding::round_half_up;
use serde::{Deserialize, Serialize};

/// Milestone achievement counts for one category within the current age range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProgress {
    /// Category name, e.g. `"Developmental"` or `"Social"`
    pub category: String,
    /// Milestones in this category for the age range
    pub total: u32,
    /// Milestones marked achieved
    pub achieved: u32,
    /// `round(achieved / total * 100)`, 0 when `total` is 0
    pub percentage: u32,
}

impl CategoryProgress {
    /// Build progress from counts, computing the percentage
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sprout_core::models::CategoryProgress;
    ///
    /// let progress = CategoryProgress::new("Motor", 8, 5);
    /// assert_eq!(progress.percentage, 63);
    /// ```
    #[must_use]
    pub fn new(category: impl Into<String>, total: u32, achieved: u32) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            round_half_up(f64::from(achieved) / f64::from(total) * 100.0) as u32
        };
        Self {
            category: category.into(),
            total,
            achieved,
            percentage,
        }
    }
}

/// Kind of highlight shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightKind {
    /// Categories well ahead of the threshold
    Celebration,
    /// Categories behind with the age range about to close
    GpConsultation,
}

/// A dashboard highlight produced fresh on each evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    /// Celebration or GP consultation
    #[serde(rename = "type")]
    pub kind: HighlightKind,
    /// Categories the highlight names
    pub categories: Vec<String>,
    /// Headline
    pub message: String,
    /// Supporting sentence
    pub detail: String,
    /// Days left in the current age range (may be negative)
    pub days_until_range_ends: i64,
    /// Highest qualifying percentage, celebrations only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u32>,
}
