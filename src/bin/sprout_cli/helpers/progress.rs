// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development
// ABOUTME: Loads milestone category counts from a JSON file for sprout-cli
// ABOUTME: Percentages are recomputed from the counts rather than trusted from input

use serde::Deserialize;
use serde_json::json;
use sprout::errors::{AppError, AppResult};
use sprout::models::CategoryProgress;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
struct CategoryCounts {
    category: String,
    total: u32,
    achieved: u32,
}

/// Read a JSON array of `{category, total, achieved}` into category progress
pub fn load_progress(path: &Path) -> AppResult<Vec<CategoryProgress>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read progress file {}", path.display()))
            .with_details(json!({ "path": path.display().to_string() }))
            .with_source(e)
    })?;
    let counts: Vec<CategoryCounts> = serde_json::from_str(&contents).map_err(|e| {
        AppError::invalid_format("Progress file is not a JSON array of category counts")
            .with_source(e)
    })?;

    Ok(counts
        .into_iter()
        .map(|c| CategoryProgress::new(c.category, c.total, c.achieved))
        .collect())
}
