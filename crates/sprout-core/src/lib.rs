// ABOUTME: Core types and constants for the Sprout child development platform
// ABOUTME: Foundation crate with error handling, domain models, dates, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

#![deny(unsafe_code)]

//! # Sprout Core
//!
//! Foundation crate providing shared types and constants for the Sprout child
//! development platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Age arithmetic constants, age-range table, percentile bounds
//! - **models**: Ages, children, growth measurements, milestone progress, highlights
//! - **dates**: Calendar date parsing at the API boundary
//! - **rounding**: Half-up rounding shared by every engine

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models (ages, children, measurements, highlights)
pub mod models;

/// Calendar date parsing
pub mod dates;

/// Half-up rounding helpers
pub mod rounding;
