// ABOUTME: Phase progression configuration with the per-phase criteria table and decision texts
// ABOUTME: Also holds the phase-to-exercise table attached to progress decisions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progression Configuration
//!
//! Read-only criteria used by the progression engine. The defaults are
//! conservative: later phases are never looser than earlier ones.

use serde::{Deserialize, Serialize};

use super::PhaseTable;
use crate::clinical_constants::progression::{
    MODIFY_INTENSITY_ADJUSTMENT, PROGRESS_INTENSITY_ADJUSTMENT,
};

/// Thresholds a subject must meet to leave a phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionCriteria {
    /// Highest acceptable weekly average pain (0-10)
    pub max_avg_pain: f64,
    /// Lowest acceptable compliance rate (percent)
    pub min_compliance_rate: f64,
    /// Lowest acceptable pain-free hours per day
    pub min_pain_free_hours: f64,
    /// Completed weeks required in the phase
    pub min_weeks_in_phase: u32,
    /// Current deadlift 1RM as a percentage of pre-injury baseline
    ///
    /// Present only for phases that require a strength check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_deadlift_capacity_percent: Option<f64>,
}

/// Progression engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Criteria for leaving each phase
    pub criteria: PhaseTable<ProgressionCriteria>,
    /// Intensity hint attached to progress decisions
    pub progress_intensity_adjustment: String,
    /// Intensity hint attached to modify decisions
    pub modify_intensity_adjustment: String,
    /// Generic recommendations attached to modify decisions
    pub modify_recommendations: Vec<String>,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            criteria: PhaseTable {
                decompression: ProgressionCriteria {
                    max_avg_pain: 4.0,
                    min_compliance_rate: 75.0,
                    min_pain_free_hours: 16.0,
                    min_weeks_in_phase: 2,
                    min_deadlift_capacity_percent: None,
                },
                stabilization: ProgressionCriteria {
                    max_avg_pain: 3.0,
                    min_compliance_rate: 80.0,
                    min_pain_free_hours: 18.0,
                    min_weeks_in_phase: 3,
                    min_deadlift_capacity_percent: None,
                },
                strengthening: ProgressionCriteria {
                    max_avg_pain: 3.0,
                    min_compliance_rate: 85.0,
                    min_pain_free_hours: 20.0,
                    min_weeks_in_phase: 4,
                    min_deadlift_capacity_percent: Some(70.0),
                },
                return_to_sport: ProgressionCriteria {
                    max_avg_pain: 2.0,
                    min_compliance_rate: 90.0,
                    min_pain_free_hours: 22.0,
                    min_weeks_in_phase: 4,
                    min_deadlift_capacity_percent: Some(90.0),
                },
            },
            progress_intensity_adjustment: PROGRESS_INTENSITY_ADJUSTMENT.to_owned(),
            modify_intensity_adjustment: MODIFY_INTENSITY_ADJUSTMENT.to_owned(),
            modify_recommendations: vec![
                "Reduce training intensity by 20%".to_owned(),
                "Emphasize decompression exercises".to_owned(),
                "Complete daily pain check-ins".to_owned(),
            ],
        }
    }
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

/// Recommended exercises for each phase
#[must_use]
pub fn default_exercise_table() -> PhaseTable<Vec<String>> {
    PhaseTable {
        decompression: owned(&[
            "Passive dead hang",
            "Prone press-up",
            "Cat-camel",
            "Diaphragmatic breathing",
            "Short walks",
        ]),
        stabilization: owned(&[
            "McGill curl-up",
            "Side plank",
            "Bird dog",
            "Glute bridge",
            "Pallof press",
        ]),
        strengthening: owned(&[
            "Trap bar deadlift",
            "Goblet squat",
            "Single-leg Romanian deadlift",
            "Suitcase carry",
            "Split squat",
        ]),
        return_to_sport: owned(&[
            "Conventional deadlift",
            "Box jump",
            "Medicine ball rotational throw",
            "Sprint drills",
            "Sport-specific drills",
        ]),
    }
}
