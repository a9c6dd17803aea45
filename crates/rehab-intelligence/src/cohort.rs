// ABOUTME: Batch progression evaluation across many subjects using rayon
// ABOUTME: Each subject is independent, so decisions run in parallel and keep input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rayon::prelude::*;
use rehab_core::models::{RehabilitationPhase, WeeklyKpi};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::progression_engine::{Decision, ProgressionAction, ProgressionEngine};

/// Progression inputs for one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectProgress {
    /// Subject being evaluated
    pub subject_id: Uuid,
    /// Weekly KPIs, oldest first
    pub recent_kpis: Vec<WeeklyKpi>,
    /// Phase the subject is currently in
    pub current_phase: RehabilitationPhase,
    /// Completed weeks in the current phase
    pub weeks_in_phase: u32,
    /// Pre-injury deadlift 1RM, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_deadlift_kg: Option<f64>,
}

/// Decision for one subject of a cohort
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortDecision {
    /// Subject the decision applies to
    pub subject_id: Uuid,
    /// The progression decision
    pub decision: Decision,
}

impl ProgressionEngine {
    /// Evaluate every subject in parallel
    ///
    /// Output order matches `subjects`.
    #[must_use]
    pub fn evaluate_cohort(&self, subjects: &[SubjectProgress]) -> Vec<CohortDecision> {
        let decisions: Vec<CohortDecision> = subjects
            .par_iter()
            .map(|subject| CohortDecision {
                subject_id: subject.subject_id,
                decision: self.evaluate_progression_with_baseline(
                    &subject.recent_kpis,
                    subject.current_phase,
                    subject.weeks_in_phase,
                    subject.baseline_deadlift_kg,
                ),
            })
            .collect();

        let progressing = decisions
            .iter()
            .filter(|d| {
                matches!(
                    d.decision.action,
                    ProgressionAction::Progress | ProgressionAction::Complete
                )
            })
            .count();
        debug!(
            subjects = decisions.len(),
            progressing, "Cohort progression evaluated"
        );

        decisions
    }
}
