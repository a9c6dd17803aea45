// ABOUTME: Intelligence module re-exports from rehab-intelligence crate
// ABOUTME: Keeps engine import paths stable under the facade crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pain trend analysis, weekly KPI aggregation, 1RM estimation and phase
//! progression decisions. This module re-exports from the
//! `rehab-intelligence` crate.

// Re-export all public items from rehab-intelligence
pub use rehab_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::config::RehabConfig)
pub use rehab_intelligence::{
    algorithms, clinical_constants, cohort, config, kpi_aggregator, pain_trend,
    progression_engine, statistical_analysis,
};
