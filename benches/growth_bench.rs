// ABOUTME: Criterion benchmarks for the Sprout age, percentile, and highlight engines
// ABOUTME: Measures per-call cost and batch throughput over deterministic fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Child Development

//! Criterion benchmarks for the Sprout engines.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{
    fixture_today, generate_children, generate_measurements, generate_progress, BatchSize,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sprout::algorithms::age::calculate_corrected_age;
use sprout::algorithms::who_percentile::calculate_percentile;
use sprout::config::HighlightConfig;
use sprout::development::{assess_development, assess_measurement};
use sprout::highlights::calculate_highlights;
use sprout::models::{Gender, MeasurementType};

fn bench_corrected_age(c: &mut Criterion) {
    let mut group = c.benchmark_group("corrected_age");

    for size in [BatchSize::Small, BatchSize::Medium] {
        let children = generate_children(size.count());
        group.throughput(Throughput::Elements(children.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("calculate_corrected_age", size.label()),
            &children,
            |b, children| {
                let today = fixture_today();
                b.iter(|| {
                    for child in children {
                        black_box(calculate_corrected_age(
                            black_box(child.birth_date),
                            black_box(child.due_date),
                            today,
                        ));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_percentile(c: &mut Criterion) {
    let mut group = c.benchmark_group("who_percentile");

    group.bench_function("tabulated_age", |b| {
        b.iter(|| {
            calculate_percentile(
                black_box(9.6),
                black_box(12.0),
                Gender::Male,
                MeasurementType::Weight,
            )
        });
    });

    group.bench_function("interpolated_age", |b| {
        b.iter(|| {
            calculate_percentile(
                black_box(102.4),
                black_box(44.7),
                Gender::Female,
                MeasurementType::Height,
            )
        });
    });

    for size in [BatchSize::Small, BatchSize::Medium] {
        let children = generate_children(size.count());
        let measurements = generate_measurements(&children);
        group.throughput(Throughput::Elements(measurements.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("assess_measurement", size.label()),
            &(children, measurements),
            |b, (children, measurements)| {
                b.iter(|| {
                    children
                        .iter()
                        .zip(measurements)
                        .filter_map(|(child, m)| assess_measurement(child, m).percentile)
                        .count()
                });
            },
        );
    }

    group.finish();
}

fn bench_development_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("development_pipeline");
    let config = HighlightConfig::default();
    let progress = generate_progress();

    let children = generate_children(BatchSize::Medium.count());
    group.throughput(Throughput::Elements(children.len() as u64));
    group.bench_function("snapshot_and_highlights", |b| {
        let today = fixture_today();
        b.iter(|| {
            for child in &children {
                let snapshot = assess_development(black_box(child), today);
                black_box(calculate_highlights(
                    &progress,
                    snapshot.days_until_range_ends,
                    &child.name,
                    &config,
                ));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_corrected_age,
    bench_percentile,
    bench_development_pipeline,
);
criterion_main!(benches);
