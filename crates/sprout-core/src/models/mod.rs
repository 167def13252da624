// ABOUTME: Core data models for child development tracking
// ABOUTME: Re-exports age, child, growth, age-range, and milestone highlight types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

//! Every type here is a computed value with no persistent identity: it is derived
//! on each call from child and measurement records owned by the storage layer.

mod age;
mod age_range;
mod child;
mod growth;
mod milestone;

pub use age::{AgeResult, CorrectedAgeResult};
pub use age_range::AgeRangeBucket;
pub use child::{ChildRecord, Gender};
pub use growth::{Measurement, MeasurementType};
pub use milestone::{CategoryProgress, Highlight, HighlightKind};
