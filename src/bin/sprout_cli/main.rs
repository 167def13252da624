// ABOUTME: Sprout CLI - command-line access to the age, range, percentile, and highlight engines
// ABOUTME: Parses arguments, initialises logging, and prints each result as JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development
//!
//! Usage:
//! ```bash
//! # Chronological and corrected age
//! sprout-cli age --birth-date 2024-01-10 --due-date 2024-03-06
//!
//! # Developmental window for an age
//! sprout-cli range --months 6 --days 3
//!
//! # WHO growth percentile
//! sprout-cli percentile --value 7.9 --age-months 6 --gender male --kind weight
//!
//! # Highlights from a JSON file of {category,total,achieved}
//! sprout-cli highlights --progress progress.json --days-until-range-ends 10 --name Maya
//!
//! # Everything for one child on one date
//! sprout-cli snapshot --birth-date 2024-01-10 --today 2024-09-10
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use sprout::config::AppConfig;
use sprout::dates::parse_date;
use sprout::models::{ChildRecord, Gender};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(
    name = "sprout-cli",
    about = "Sprout child development CLI",
    long_about = "Command-line access to Sprout's corrected age, age-range, WHO percentile, and milestone highlight engines."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Chronological and gestation-corrected age
    Age {
        /// Birth date (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_parser = parse_date)]
        birth_date: NaiveDate,

        /// Expected due date
        #[arg(long, value_parser = parse_date)]
        due_date: Option<NaiveDate>,

        /// Date to treat as today (defaults to the local date)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },

    /// Developmental window for an age in months
    Range {
        /// Whole months of age
        #[arg(long, allow_negative_numbers = true)]
        months: i64,

        /// Days past the whole months
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        days: i64,
    },

    /// WHO growth percentile for a measurement
    Percentile {
        /// Measured value (kg for weight, cm for height and head)
        #[arg(long)]
        value: f64,

        /// Age in months, fractional allowed
        #[arg(long, allow_negative_numbers = true)]
        age_months: f64,

        /// "male" or "female"
        #[arg(long)]
        gender: String,

        /// "weight", "height", or "head"
        #[arg(long)]
        kind: String,
    },

    /// Celebration and GP-consultation highlights
    Highlights {
        /// JSON file holding an array of {category, total, achieved}
        #[arg(long)]
        progress: PathBuf,

        /// Days left in the current age range
        #[arg(long, allow_negative_numbers = true)]
        days_until_range_ends: i64,

        /// Child's display name
        #[arg(long)]
        name: String,
    },

    /// Age, range, and optional highlights for one child
    Snapshot {
        /// Birth date (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_parser = parse_date)]
        birth_date: NaiveDate,

        /// Expected due date
        #[arg(long, value_parser = parse_date)]
        due_date: Option<NaiveDate>,

        /// Date to treat as today (defaults to the local date)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,

        /// Child's display name
        #[arg(long, default_value = "Your child")]
        name: String,

        /// "male", "female", or "other"
        #[arg(long, default_value = "other", value_parser = Gender::from_str)]
        gender: Gender,

        /// Optional JSON progress file to evaluate highlights against
        #[arg(long)]
        progress: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    let log_level = if cli.verbose { "debug" } else { "warn" };
    config.logging.clone().with_level(log_level).init()?;
    config.log_summary();

    match cli.command {
        Command::Age {
            birth_date,
            due_date,
            today,
        } => commands::age::age(birth_date, due_date, today)?,
        Command::Range { months, days } => commands::age::range(months, days)?,
        Command::Percentile {
            value,
            age_months,
            gender,
            kind,
        } => commands::growth::percentile(value, age_months, &gender, &kind)?,
        Command::Highlights {
            progress,
            days_until_range_ends,
            name,
        } => commands::highlights::highlights(
            &progress,
            days_until_range_ends,
            &name,
            &config.highlights,
        )?,
        Command::Snapshot {
            birth_date,
            due_date,
            today,
            name,
            gender,
            progress,
        } => {
            let child = ChildRecord {
                name,
                birth_date,
                due_date,
                gender,
            };
            commands::snapshot::snapshot(&child, today, progress.as_deref(), &config.highlights)?;
        }
    }

    Ok(())
}
