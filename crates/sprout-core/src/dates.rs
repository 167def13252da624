// ABOUTME: Calendar date parsing for birth, due, and measurement dates
// ABOUTME: Accepts plain ISO dates or RFC 3339 timestamps and drops the time of day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate};

/// Parse a calendar date.
///
/// Ages are computed between midnights, so a timestamp is reduced to the date it
/// names in its own offset.
///
/// # Errors
///
/// Returns an `InvalidFormat` error when `input` is neither `YYYY-MM-DD` nor RFC 3339.
pub fn parse_date(input: &str) -> AppResult<NaiveDate> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|e| AppError::date_parse(trimmed).with_source(e))
}

/// Parse an optional date, treating a blank string as absent
///
/// # Errors
///
/// Returns an `InvalidFormat` error when a non-blank input fails to parse.
pub fn parse_optional_date(input: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_iso_date() {
        let date = parse_date("2024-02-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_drops_time() {
        let date = parse_date("2024-03-10T23:15:00+02:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn test_parse_invalid_date() {
        let err = parse_date("2023-02-29").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn test_parse_optional_blank_is_none() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("  ")).unwrap(), None);
        assert!(parse_optional_date(Some("2024-01-01")).unwrap().is_some());
    }
}
