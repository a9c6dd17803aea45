// ABOUTME: Main library entry point for the rehabilitation progression engine
// ABOUTME: Facade over the core and intelligence crates plus structured logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Rehabilitation Progression Engine
//!
//! A stateless function library that decides, from a subject's pain,
//! compliance and strength history:
//!
//! - what their pain trend and dominant triggers are,
//! - their weekly performance summary (KPI),
//! - whether they should progress, hold or modify within a four-phase
//!   rehabilitation program.
//!
//! ## Architecture
//!
//! - **Models**: Pain and biometric observations, weekly KPIs, phases (`rehab-core`)
//! - **Intelligence**: 1RM estimation, pain trends, KPI aggregation, progression (`rehab-intelligence`)
//! - **Logging**: `tracing` subscriber setup for embedding applications
//!
//! The engine performs no I/O and holds no mutable state. The calling
//! application owns persistence, rendering and subscriber installation.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use rehab_progression_engine::intelligence::{ProgressionEngine, ProgressionAction};
//! use rehab_progression_engine::models::RehabilitationPhase;
//!
//! let engine = ProgressionEngine::new();
//! let decision = engine.evaluate_progression(&[], RehabilitationPhase::Decompression, 0);
//! assert_eq!(decision.action, ProgressionAction::Maintain);
//! ```

/// Domain constants (pain scale, local KPI thresholds, focus labels)
pub use rehab_core::constants;

/// Validation, configuration and parse errors
pub use rehab_core::errors;

/// Core data models (observations, weekly KPIs, phases)
pub use rehab_core::models;

/// Pain trend, KPI aggregation, 1RM estimation and progression engines
pub mod intelligence;

/// Logging configuration and structured audit logging
pub mod logging;
