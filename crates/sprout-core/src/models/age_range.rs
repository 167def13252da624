// ABOUTME: Developmental age-range bucket model
// ABOUTME: One of ten fixed month windows used to group milestones for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

use serde::Serialize;

/// A developmental window, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AgeRangeBucket {
    /// First month of the window
    pub min: u32,
    /// Last month of the window
    pub max: u32,
    /// Display label, e.g. `"13-18 months"`
    pub label: &'static str,
}

impl AgeRangeBucket {
    /// Whether `months` falls inside this window
    #[must_use]
    pub fn contains(&self, months: f64) -> bool {
        (f64::from(self.min)..=f64::from(self.max)).contains(&months)
    }
}
