// ABOUTME: Core types and constants for the rehabilitation progression engine
// ABOUTME: Foundation crate with observations, weekly KPIs, phases, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Rehab Core
//!
//! Foundation crate providing the shared domain types for the rehabilitation
//! progression engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Construction-time validation errors, configuration errors, enum parse errors
//! - **constants**: Pain scale bounds and the local weekly KPI thresholds
//! - **models**: Pain and biometric observations, weekly KPI records, rehabilitation phases

/// Validation, configuration and parse errors with stable error codes
pub mod errors;

/// Domain constants (pain scale, local KPI thresholds, focus labels)
pub mod constants;

/// Core data models (observations, weekly KPIs, phases)
pub mod models;
