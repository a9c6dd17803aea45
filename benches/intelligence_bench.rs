// ABOUTME: Criterion benchmarks for the rehabilitation intelligence engines
// ABOUTME: Measures trend analysis, weekly aggregation and progression over realistic inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the rehabilitation intelligence engines.
//!
//! Measures pain trend analysis, weekly KPI aggregation, single-subject
//! progression and parallel cohort evaluation.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use std::num::NonZeroU32;

use common::fixtures::{
    generate_check_ins, generate_cohort, generate_kpis, generate_lifts, program_start,
    CheckInBatchSize,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rehab_progression_engine::intelligence::{
    estimate_one_rep_max, KpiAggregator, OneRepMaxFormula, PainTrendAnalyzer, ProgressionEngine,
};
use rehab_progression_engine::models::RehabilitationPhase;
use uuid::Uuid;

/// Benchmark pain trend analysis with varying history lengths
fn bench_pain_trend(c: &mut Criterion) {
    let mut group = c.benchmark_group("pain_trend");
    let analyzer = PainTrendAnalyzer::new();
    let subject = Uuid::from_u128(1);

    for size in [
        CheckInBatchSize::Week,
        CheckInBatchSize::Month,
        CheckInBatchSize::Program,
    ] {
        let observations = generate_check_ins(subject, size);
        group.throughput(Throughput::Elements(observations.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("analyze_trend", size.count()),
            &observations,
            |b, observations| b.iter(|| analyzer.analyze_trend(black_box(observations))),
        );
        group.bench_with_input(
            BenchmarkId::new("identify_triggers", size.count()),
            &observations,
            |b, observations| b.iter(|| analyzer.identify_triggers(black_box(observations))),
        );
        group.bench_with_input(
            BenchmarkId::new("find_best_time_of_day", size.count()),
            &observations,
            |b, observations| b.iter(|| analyzer.find_best_time_of_day(black_box(observations))),
        );
    }

    group.finish();
}

/// Benchmark 1RM estimation for both formulas
fn bench_one_rep_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_rep_max");

    for formula in [OneRepMaxFormula::Epley, OneRepMaxFormula::Brzycki] {
        group.bench_function(formula.name(), |b| {
            b.iter(|| {
                estimate_one_rep_max(black_box(Some(100.0)), black_box(Some(8)), formula)
            });
        });
    }

    group.finish();
}

/// Benchmark building one weekly KPI from a week of observations
fn bench_weekly_kpi(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekly_kpi");
    let aggregator = KpiAggregator::new();
    let subject = Uuid::from_u128(2);
    let pain = generate_check_ins(subject, CheckInBatchSize::Week);
    let lifts = generate_lifts(subject, 30);

    group.bench_function("build_weekly_kpi", |b| {
        b.iter(|| {
            aggregator.build_weekly_kpi(
                subject,
                NonZeroU32::MIN,
                program_start(),
                black_box(&pain),
                black_box(&lifts),
                5,
                4,
            )
        });
    });

    group.finish();
}

/// Benchmark single-subject and cohort progression decisions
fn bench_progression(c: &mut Criterion) {
    let mut group = c.benchmark_group("progression");
    let engine = ProgressionEngine::new();

    let kpis = generate_kpis(Uuid::from_u128(3), 12);
    group.bench_function("evaluate_progression", |b| {
        b.iter(|| {
            engine.evaluate_progression_with_baseline(
                black_box(&kpis),
                RehabilitationPhase::Strengthening,
                4,
                Some(140.0),
            )
        });
    });

    for size in [100_usize, 1_000, 10_000] {
        let cohort = generate_cohort(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("evaluate_cohort", size),
            &cohort,
            |b, cohort| b.iter(|| engine.evaluate_cohort(black_box(cohort))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pain_trend,
    bench_one_rep_max,
    bench_weekly_kpi,
    bench_progression
);
criterion_main!(benches);
