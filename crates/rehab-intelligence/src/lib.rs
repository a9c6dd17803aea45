// ABOUTME: Rehabilitation intelligence engines for pain trends, weekly KPIs and phase progression
// ABOUTME: Pure, synchronous computations over observations handed in by a repository layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Rehab Intelligence
//!
//! The four engines, evaluated bottom-up:
//!
//! - **algorithms**: 1RM estimation (Epley, Brzycki)
//! - **`pain_trend`**: trend direction, variability, triggers, best time of day
//! - **`kpi_aggregator`**: one program-week of observations into a [`WeeklyKpi`]
//! - **`progression_engine`**: per-phase criteria into a progress / maintain /
//!   modify / complete decision
//!
//! No engine holds mutable state or performs I/O; each call may run on any
//! thread. Static tables live in [`config`].
//!
//! [`WeeklyKpi`]: rehab_core::models::WeeklyKpi

/// Strength estimation algorithms
pub mod algorithms;

/// Fixed clinical and strength-testing constants
pub mod clinical_constants;

/// Parallel evaluation across a cohort of subjects
pub mod cohort;

/// Static clinical lookup tables
pub mod config;

/// Weekly KPI aggregation
pub mod kpi_aggregator;

/// Pain trend, trigger and time-of-day analysis
pub mod pain_trend;

/// Phase progression rules engine
pub mod progression_engine;

/// Descriptive statistics helpers
pub mod statistical_analysis;

pub use algorithms::{estimate_from_observation, estimate_one_rep_max, OneRepMaxFormula};
pub use cohort::{CohortDecision, SubjectProgress};
pub use config::{PhaseTable, ProgressionCriteria, RehabConfig};
pub use kpi_aggregator::{KpiAggregator, WeeklyKpiInput};
pub use pain_trend::{
    PainTrendAnalyzer, PainTrendDirection, TimeOfDay, TrendAnalysis, TrendResult, TriggerResult,
};
pub use progression_engine::{
    weeks_in_phase, CriteriaEvaluation, Decision, ProgressionAction, ProgressionEngine,
};
pub use statistical_analysis::StatisticalAnalyzer;
