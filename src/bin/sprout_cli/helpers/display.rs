// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development
// ABOUTME: Output formatting helpers for sprout-cli
// ABOUTME: Every command prints one pretty JSON document on stdout

use serde::Serialize;
use sprout::errors::AppResult;

/// Print `value` as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
