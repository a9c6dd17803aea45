// ABOUTME: Domain model module re-exporting observations, weekly KPIs and phase enums
// ABOUTME: Types here are plain data handed in by the repository layer and returned to callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - [`PainObservation`] and [`BiometricObservation`]: raw inputs, immutable once built
//! - [`WeeklyKpi`]: the aggregated weekly record that drives progression decisions
//! - [`RehabilitationPhase`] and [`PainImpact`]: closed enumerations with attached behavior

mod kpi;
mod observation;
mod phase;

pub use kpi::WeeklyKpi;
pub use observation::{BiometricKind, BiometricObservation, BodySide, PainObservation};
pub use phase::{PainImpact, RehabilitationPhase};
