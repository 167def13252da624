// ABOUTME: Milestone highlight command for sprout-cli
// ABOUTME: Evaluates celebration and GP-consultation highlights from a progress file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

use sprout::config::HighlightConfig;
use sprout::errors::AppResult;
use sprout::highlights::calculate_highlights;
use std::path::Path;

use crate::helpers::display::print_json;
use crate::helpers::progress::load_progress;

/// Print highlights for the categories in `progress_path`
pub fn highlights(
    progress_path: &Path,
    days_until_range_ends: i64,
    name: &str,
    config: &HighlightConfig,
) -> AppResult<()> {
    let progress = load_progress(progress_path)?;
    print_json(&calculate_highlights(
        &progress,
        days_until_range_ends,
        name,
        config,
    ))
}
