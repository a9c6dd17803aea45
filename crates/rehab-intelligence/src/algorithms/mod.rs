// ABOUTME: Strength estimation algorithms for biometric observations
// ABOUTME: Contains OneRepMaxFormula with Epley and Brzycki variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// One-repetition maximum estimation
pub mod one_rep_max;

pub use one_rep_max::{estimate_from_observation, estimate_one_rep_max, OneRepMaxFormula};
