// ABOUTME: Weekly KPI aggregation configuration with exercise and movement identifiers
// ABOUTME: Identifies which strength and ROM observations feed the weekly record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Identifier lists used to route observations into weekly KPI fields
///
/// Matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiConfig {
    /// Exercise ids counted toward `max_deadlift_kg`
    pub deadlift_exercise_ids: Vec<String>,
    /// Exercise ids counted toward `max_squat_kg`
    pub squat_exercise_ids: Vec<String>,
    /// Movement ids counted toward `rom_hip_flexion_deg`
    pub hip_flexion_ids: Vec<String>,
    /// Movement ids counted toward `rom_lumbar_flexion_deg`
    pub lumbar_flexion_ids: Vec<String>,
}

fn owned(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| (*id).to_owned()).collect()
}

impl Default for KpiConfig {
    fn default() -> Self {
        Self {
            deadlift_exercise_ids: owned(&["deadlift", "conventional_deadlift", "trap_bar_deadlift"]),
            squat_exercise_ids: owned(&["squat", "back_squat", "front_squat", "goblet_squat"]),
            hip_flexion_ids: owned(&["hip_flexion"]),
            lumbar_flexion_ids: owned(&["lumbar_flexion", "trunk_flexion"]),
        }
    }
}
