// ABOUTME: Child record consumed from the storage layer
// ABOUTME: Birth date, optional due date, gender, and display name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

use crate::errors::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender as recorded on the child profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male: boys' WHO reference tables
    Male,
    /// Female: girls' WHO reference tables
    Female,
    /// Not covered by the WHO reference tables
    Other,
}

impl Gender {
    /// Name used in storage and API payloads
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    /// Exact, case-sensitive match on the stored values
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}'. Valid options: male, female, other"
            ))),
        }
    }
}

/// The subset of a child profile the engines need
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRecord {
    /// Display name used in highlight messages
    pub name: String,
    /// Actual birth date
    pub birth_date: NaiveDate,
    /// Expected due date, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Recorded gender
    pub gender: Gender,
}
