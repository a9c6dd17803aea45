// ABOUTME: Benchmark fixtures generating deterministic pain check-ins, lifts and weekly KPIs
// ABOUTME: Same inputs on every run so measurements are reproducible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark test fixtures for generating realistic rehabilitation data.
//!
//! Provides deterministic data generation for reproducible performance measurements.

use std::num::NonZeroU32;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rehab_progression_engine::intelligence::SubjectProgress;
use rehab_progression_engine::models::{
    BiometricObservation, PainObservation, RehabilitationPhase, WeeklyKpi,
};
use uuid::Uuid;

const TRIGGERS: [&str; 6] = ["sitting", "bending", "lifting", "driving", "stress", "gardening"];

const LIFTS: [&str; 3] = ["deadlift", "back_squat", "bench_press"];

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CheckInBatchSize {
    /// One week of three daily check-ins
    Week,
    /// A month of three daily check-ins
    Month,
    /// A full 16-week program
    Program,
}

impl CheckInBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Week => 21,
            Self::Month => 90,
            Self::Program => 336,
        }
    }
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 7, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// First day of the benchmark program
#[must_use]
pub fn program_start() -> NaiveDate {
    base_time().date_naive()
}

/// Check-ins spread over morning, afternoon and evening with a slow downward trend
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn generate_check_ins(subject_id: Uuid, size: CheckInBatchSize) -> Vec<PainObservation> {
    let count = size.count();
    (0..count)
        .filter_map(|index| {
            let day = (index / 3) as i64;
            let hour = [8, 14, 20][index % 3];
            let drift = (index * 6 / count) as i64;
            let level = (7 - drift + ((index * 7) % 3) as i64).clamp(0, 10);
            let triggers = if index % 4 == 0 {
                vec![
                    TRIGGERS[index % TRIGGERS.len()].to_owned(),
                    TRIGGERS[(index / 4) % TRIGGERS.len()].to_owned(),
                ]
            } else {
                Vec::new()
            };
            PainObservation::new(
                subject_id,
                base_time() + Duration::days(day) + Duration::hours(hour),
                level,
                vec!["lower_back".to_owned()],
                triggers,
                index % 5 == 0,
            )
            .ok()
        })
        .collect()
}

/// Strength sets over one week
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn generate_lifts(subject_id: Uuid, count: usize) -> Vec<BiometricObservation> {
    (0..count)
        .map(|index| {
            BiometricObservation::strength(
                subject_id,
                base_time() + Duration::hours((index * 5) as i64 % 168),
                LIFTS[index % LIFTS.len()],
                Some(60.0 + ((index * 13) % 40) as f64),
                Some(3 + (index % 8) as u32),
            )
        })
        .collect()
}

/// Weekly KPI history with gradually improving pain and compliance
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn generate_kpis(subject_id: Uuid, weeks: u32) -> Vec<WeeklyKpi> {
    (1..=weeks)
        .filter_map(NonZeroU32::new)
        .map(|week| {
            let n = week.get();
            WeeklyKpi::new(
                subject_id,
                week,
                program_start() + Duration::weeks(i64::from(n - 1)),
            )
            .with_pain_summary(f64::from(7_u32.saturating_sub(n / 2)), 0, 8)
            .with_sessions(5, (2 + n).min(5))
            .with_pain_free_hours(f64::from((12 + n).min(24)))
            .with_strength(Some(80.0 + f64::from(n) * 5.0), None)
        })
        .collect()
}

/// Cohort of subjects spread across all phases
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn generate_cohort(size: usize) -> Vec<SubjectProgress> {
    (0..size)
        .map(|index| {
            let subject_id = Uuid::from_u128(index as u128 + 1);
            SubjectProgress {
                subject_id,
                recent_kpis: generate_kpis(subject_id, 4 + (index % 8) as u32),
                current_phase: RehabilitationPhase::ALL[index % RehabilitationPhase::ALL.len()],
                weeks_in_phase: (index % 6) as u32,
                baseline_deadlift_kg: (index % 2 == 0).then_some(140.0),
            }
        })
        .collect()
}
