// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and builders for check-ins, strength sets and weekly KPIs
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `rehab_progression_engine`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use std::env;
use std::num::NonZeroU32;
use std::sync::Once;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rehab_progression_engine::models::{BiometricObservation, PainObservation, WeeklyKpi};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        // another test binary thread may have won the race; that is fine
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Monday 2025-07-07, start of program week one
pub fn program_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 7).unwrap()
}

/// Timestamp `day` days after the program start at `hour`:00 UTC
pub fn at(day: i64, hour: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(&program_start().and_hms_opt(hour, 0, 0).unwrap()) + Duration::days(day)
}

/// Valid check-in with a single location and the given triggers
pub fn check_in(
    subject_id: Uuid,
    timestamp: DateTime<Utc>,
    pain_level: i64,
    triggers: &[&str],
) -> PainObservation {
    PainObservation::new(
        subject_id,
        timestamp,
        pain_level,
        vec!["lower_back".to_owned()],
        triggers.iter().map(|t| (*t).to_owned()).collect(),
        false,
    )
    .unwrap()
}

/// One check-in per day at 09:00 with the given pain levels
pub fn daily_series(subject_id: Uuid, levels: &[i64]) -> Vec<PainObservation> {
    levels
        .iter()
        .zip(0_i64..)
        .map(|(level, day)| check_in(subject_id, at(day, 9), *level, &[]))
        .collect()
}

/// Strength set at 10:00 on `day`
pub fn lift(
    subject_id: Uuid,
    day: i64,
    exercise_id: &str,
    weight_kg: f64,
    reps: u32,
) -> BiometricObservation {
    BiometricObservation::strength(
        subject_id,
        at(day, 10),
        exercise_id,
        Some(weight_kg),
        Some(reps),
    )
}

/// Weekly KPI with explicit pain, compliance and pain-free hours
pub fn kpi(
    subject_id: Uuid,
    avg_pain: f64,
    planned: u32,
    completed: u32,
    pain_free_hours: f64,
) -> WeeklyKpi {
    WeeklyKpi::new(subject_id, NonZeroU32::MIN, program_start())
        .with_pain_summary(avg_pain, 0, 0)
        .with_sessions(planned, completed)
        .with_pain_free_hours(pain_free_hours)
}

/// Week that passes every phase row: pain 1, 100% compliance, 23 pain-free hours
pub fn excellent_week(subject_id: Uuid) -> WeeklyKpi {
    kpi(subject_id, 1.0, 10, 10, 23.0)
}
