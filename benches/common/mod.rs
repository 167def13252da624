// ABOUTME: Common benchmark utilities and test fixtures for performance testing
// ABOUTME: Provides reusable data generators for the Sprout Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

//! Common benchmark utilities and test fixtures.

pub mod fixtures;
