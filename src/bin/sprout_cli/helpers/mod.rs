// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development
// ABOUTME: Re-exports helper modules for sprout-cli
// ABOUTME: Provides output formatting and input file loading

pub mod display;
pub mod progress;
