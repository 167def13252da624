// ABOUTME: Celebration and GP-consultation highlights from milestone category progress
// ABOUTME: Celebrations always evaluate; consultations only in the days before a range closes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

use crate::config::HighlightConfig;
use sprout_core::models::{CategoryProgress, Highlight, HighlightKind};
use tracing::debug;

pub use crate::algorithms::age_range::calculate_days_until_range_ends;

/// Join names as `"a"`, `"a and b"`, or `"a, b and c"`
fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_owned(),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

fn celebration(
    progress: &[CategoryProgress],
    days_until_range_ends: i64,
    child_name: &str,
    config: &HighlightConfig,
) -> Option<Highlight> {
    let mut qualifying: Vec<&CategoryProgress> = progress
        .iter()
        .filter(|p| p.total > 0 && p.percentage >= config.celebration_threshold)
        .collect();
    // Stable sort keeps input order among equal percentages
    qualifying.sort_by(|a, b| b.percentage.cmp(&a.percentage));

    let top = qualifying.first()?.percentage;
    let categories: Vec<String> = qualifying.iter().map(|p| p.category.clone()).collect();

    Some(Highlight {
        kind: HighlightKind::Celebration,
        message: format!("{child_name} is doing brilliantly!"),
        detail: format!(
            "{} milestones are up to {top}% complete for this age range.",
            join_names(&categories)
        ),
        categories,
        days_until_range_ends,
        percentage: Some(top),
    })
}

fn gp_consultation(
    progress: &[CategoryProgress],
    days_until_range_ends: i64,
    child_name: &str,
    config: &HighlightConfig,
) -> Option<Highlight> {
    if !config.consultation_window_open(days_until_range_ends) {
        return None;
    }

    let categories: Vec<String> = progress
        .iter()
        .filter(|p| p.total > 0 && p.percentage < config.consult_threshold_for(&p.category))
        .map(|p| p.category.clone())
        .collect();
    if categories.is_empty() {
        return None;
    }

    let lowered: Vec<String> = categories.iter().map(|c| c.to_lowercase()).collect();
    let day_word = if days_until_range_ends == 1 { "day" } else { "days" };

    Some(Highlight {
        kind: HighlightKind::GpConsultation,
        message: "It may be worth a chat with your GP".to_owned(),
        detail: format!(
            "{child_name} has some {} milestones still to reach, with {days_until_range_ends} {day_word} left in this age range.",
            join_names(&lowered)
        ),
        categories,
        days_until_range_ends,
        percentage: None,
    })
}

/// Evaluate highlights for a child's milestone progress in the current age range.
///
/// At most one celebration and one GP-consultation highlight are returned, in that
/// order. Categories with no milestones never qualify for either.
///
/// # Example
///
/// ```rust
/// use sprout_core::models::{CategoryProgress, HighlightKind};
/// use sprout_intelligence::highlights::calculate_highlights;
/// use sprout_intelligence::HighlightConfig;
///
/// let progress = vec![CategoryProgress::new("Developmental", 10, 6)];
/// let highlights = calculate_highlights(&progress, 5, "Maya", &HighlightConfig::default());
/// assert_eq!(highlights.len(), 1);
/// assert_eq!(highlights[0].kind, HighlightKind::GpConsultation);
/// ```
#[must_use]
pub fn calculate_highlights(
    progress: &[CategoryProgress],
    days_until_range_ends: i64,
    child_name: &str,
    config: &HighlightConfig,
) -> Vec<Highlight> {
    let highlights: Vec<Highlight> = [
        celebration(progress, days_until_range_ends, child_name, config),
        gp_consultation(progress, days_until_range_ends, child_name, config),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !highlights.is_empty() {
        debug!(
            count = highlights.len(),
            days_until_range_ends, "emitting milestone highlights"
        );
    }
    highlights
}
