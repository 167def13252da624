// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development
// ABOUTME: Re-exports command modules for sprout-cli
// ABOUTME: Provides access to age, growth, highlight, and snapshot commands

pub mod age;
pub mod growth;
pub mod highlights;
pub mod snapshot;
