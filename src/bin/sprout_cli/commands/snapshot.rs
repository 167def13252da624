// ABOUTME: Development snapshot command for sprout-cli
// ABOUTME: Combines age, range countdown, and optional highlights for one child
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

use chrono::NaiveDate;
use serde::Serialize;
use sprout::config::HighlightConfig;
use sprout::development::{assess_development, evaluate_highlights, DevelopmentSnapshot};
use sprout::errors::AppResult;
use sprout::models::{ChildRecord, Highlight};
use std::path::Path;

use crate::commands::age::resolve_today;
use crate::helpers::display::print_json;
use crate::helpers::progress::load_progress;

#[derive(Serialize)]
struct SnapshotReport<'a> {
    name: &'a str,
    today: NaiveDate,
    #[serde(flatten)]
    snapshot: DevelopmentSnapshot,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    highlights: Vec<Highlight>,
}

/// Print the development snapshot for `child`
pub fn snapshot(
    child: &ChildRecord,
    today: Option<NaiveDate>,
    progress_path: Option<&Path>,
    config: &HighlightConfig,
) -> AppResult<()> {
    let today = resolve_today(child.birth_date, today)?;
    let snapshot = assess_development(child, today);

    let highlights = match progress_path {
        Some(path) => evaluate_highlights(&snapshot, &load_progress(path)?, &child.name, config),
        None => Vec::new(),
    };

    print_json(&SnapshotReport {
        name: &child.name,
        today,
        snapshot,
        highlights,
    })
}
