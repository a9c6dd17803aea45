// ABOUTME: Phase progression rules engine deciding progress, maintain, modify or complete
// ABOUTME: Evaluates the latest weekly KPI against the per-phase criteria table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::NaiveDate;
use rehab_core::constants::weekly_kpi::PERCENT;
use rehab_core::models::{RehabilitationPhase, WeeklyKpi};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::clinical_constants::progression::DAYS_PER_PROGRAM_WEEK;
use crate::config::{PhaseTable, ProgressionConfig, ProgressionCriteria, RehabConfig};

/// Reason given when there is no weekly KPI to evaluate
pub const INSUFFICIENT_DATA_REASON: &str = "insufficient data";

/// Note attached when capacity could not be compared against a baseline
pub const NO_BASELINE_NOTE: &str =
    "Deadlift capacity was not compared against a pre-injury baseline (no baseline supplied)";

/// Note attached when the latest week has no deadlift estimate
pub const NO_CURRENT_MAX_NOTE: &str =
    "Deadlift capacity was not evaluated (no deadlift recorded in the latest week)";

/// What the program should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionAction {
    /// Advance one phase
    Progress,
    /// Stay in phase, on track but not yet ready
    Maintain,
    /// Stay in phase and reduce load
    Modify,
    /// Final phase passed, program finished
    Complete,
}

impl ProgressionAction {
    /// Get action name for logging and serialization
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Progress => "progress",
            Self::Maintain => "maintain",
            Self::Modify => "modify",
            Self::Complete => "complete",
        }
    }

    /// Whether the subject stays in the current phase
    #[must_use]
    pub const fn stays_in_phase(self) -> bool {
        matches!(self, Self::Maintain | Self::Modify)
    }
}

impl fmt::Display for ProgressionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of each phase criterion for the latest week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaEvaluation {
    /// Average pain within the phase maximum
    pub avg_pain_ok: bool,
    /// Compliance at or above the phase minimum
    pub compliance_ok: bool,
    /// Pain-free hours at or above the phase minimum
    pub pain_free_ok: bool,
    /// Enough completed weeks in the phase
    pub duration_ok: bool,
    /// Deadlift capacity check; `None` when not applicable or not evaluated
    pub strength_ok: Option<bool>,
}

impl CriteriaEvaluation {
    /// Every evaluated criterion passed
    #[must_use]
    pub fn all_met(&self) -> bool {
        self.avg_pain_ok
            && self.compliance_ok
            && self.pain_free_ok
            && self.duration_ok
            && self.strength_ok.unwrap_or(true)
    }

    /// The two safety criteria passed
    #[must_use]
    pub const fn pain_and_compliance_ok(&self) -> bool {
        self.avg_pain_ok && self.compliance_ok
    }

    /// Keys of the criteria that failed, in evaluation order
    #[must_use]
    pub fn failed_keys(&self) -> Vec<&'static str> {
        [
            ("avg_pain", self.avg_pain_ok),
            ("compliance", self.compliance_ok),
            ("pain_free_hours", self.pain_free_ok),
            ("duration", self.duration_ok),
            ("strength", self.strength_ok.unwrap_or(true)),
        ]
        .into_iter()
        .filter_map(|(key, ok)| (!ok).then_some(key))
        .collect()
    }
}

/// Progression decision for one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// What to do next
    pub action: ProgressionAction,
    /// Phase the subject was evaluated in
    pub current_phase: RehabilitationPhase,
    /// Destination phase for a progress decision
    pub next_phase: Option<RehabilitationPhase>,
    /// Human-readable explanation
    pub reason: String,
    /// Per-criterion outcome; `None` when there was no data
    pub criteria: Option<CriteriaEvaluation>,
    /// What the subject should work on
    pub focus_areas: Vec<String>,
    /// Exercises for the destination phase on progress
    pub recommended_exercises: Vec<String>,
    /// Intensity hint such as `+10%`
    pub intensity_adjustment: Option<String>,
    /// Generic recommendations for a modified program
    pub recommendations: Vec<String>,
    /// Caveats about how the decision was reached
    pub notes: Vec<String>,
}

impl Decision {
    fn stay(
        action: ProgressionAction,
        current_phase: RehabilitationPhase,
        reason: String,
    ) -> Self {
        Self {
            action,
            current_phase,
            next_phase: None,
            reason,
            criteria: None,
            focus_areas: Vec::new(),
            recommended_exercises: Vec::new(),
            intensity_adjustment: None,
            recommendations: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Keys of the phase criteria that failed
    #[must_use]
    pub fn failed_criteria(&self) -> Vec<&'static str> {
        self.criteria
            .as_ref()
            .map_or_else(Vec::new, CriteriaEvaluation::failed_keys)
    }
}

/// Completed program weeks between `phase_start` and `as_of`
///
/// Counts whole 7-day periods: partial weeks never count, gaps in check-ins
/// do not pause the count, and `as_of` before `phase_start` gives 0.
#[must_use]
pub fn weeks_in_phase(phase_start: NaiveDate, as_of: NaiveDate) -> u32 {
    let days = (as_of - phase_start).num_days();
    if days < 0 {
        return 0;
    }
    u32::try_from(days / DAYS_PER_PROGRAM_WEEK).unwrap_or(u32::MAX)
}

/// Phase progression rules engine
///
/// Stateless: the engine never transitions on its own, it answers a decision
/// each time it is invoked.
#[derive(Debug, Clone)]
pub struct ProgressionEngine {
    progression: ProgressionConfig,
    exercises: PhaseTable<Vec<String>>,
}

impl Default for ProgressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressionEngine {
    /// Engine using the global criteria and exercise tables
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RehabConfig::global())
    }

    /// Engine using a composition-time configuration
    #[must_use]
    pub fn with_config(config: &RehabConfig) -> Self {
        Self {
            progression: config.progression.clone(),
            exercises: config.exercises.clone(),
        }
    }

    /// Criteria row for `phase`
    #[must_use]
    pub const fn criteria_for(&self, phase: RehabilitationPhase) -> &ProgressionCriteria {
        self.progression.criteria.get(phase)
    }

    /// Decide from the most recent weekly KPI without a strength baseline
    #[must_use]
    pub fn evaluate_progression(
        &self,
        recent_kpis: &[WeeklyKpi],
        current_phase: RehabilitationPhase,
        weeks_in_phase: u32,
    ) -> Decision {
        self.evaluate_progression_with_baseline(recent_kpis, current_phase, weeks_in_phase, None)
    }

    /// Decide from the most recent weekly KPI
    ///
    /// `recent_kpis` is ordered oldest first; only the last record is
    /// evaluated. `baseline_deadlift_kg` is the pre-injury deadlift 1RM used
    /// for the strength check in strengthening and return-to-sport.
    #[must_use]
    pub fn evaluate_progression_with_baseline(
        &self,
        recent_kpis: &[WeeklyKpi],
        current_phase: RehabilitationPhase,
        weeks_in_phase: u32,
        baseline_deadlift_kg: Option<f64>,
    ) -> Decision {
        let Some(latest) = recent_kpis.last() else {
            warn!(phase = %current_phase, "Progression requested with no weekly KPIs");
            return Decision::stay(
                ProgressionAction::Maintain,
                current_phase,
                INSUFFICIENT_DATA_REASON.to_owned(),
            );
        };

        let criteria = self.criteria_for(current_phase);
        let mut notes = Vec::new();
        let evaluation = CriteriaEvaluation {
            avg_pain_ok: latest.avg_pain_level <= criteria.max_avg_pain,
            compliance_ok: latest.compliance_rate() >= criteria.min_compliance_rate,
            pain_free_ok: latest.pain_free_hours_per_day >= criteria.min_pain_free_hours,
            duration_ok: weeks_in_phase >= criteria.min_weeks_in_phase,
            strength_ok: evaluate_strength(
                current_phase,
                criteria,
                latest.max_deadlift_kg,
                baseline_deadlift_kg,
                &mut notes,
            ),
        };

        let mut decision = if evaluation.all_met() {
            self.advance(current_phase)
        } else if evaluation.pain_and_compliance_ok() {
            let failed = evaluation.failed_keys();
            let mut decision = Decision::stay(
                ProgressionAction::Maintain,
                current_phase,
                format!(
                    "Pain and compliance on track in {current_phase}; still working on {}",
                    failed.join(", ")
                ),
            );
            decision.focus_areas = failed.into_iter().map(str::to_owned).collect();
            decision
        } else {
            let mut decision = Decision::stay(
                ProgressionAction::Modify,
                current_phase,
                format!("Pain or compliance outside {current_phase} targets; modifying program"),
            );
            decision.focus_areas = latest.focus_areas();
            decision.recommendations = self.progression.modify_recommendations.clone();
            decision.intensity_adjustment =
                Some(self.progression.modify_intensity_adjustment.clone());
            decision
        };
        decision.criteria = Some(evaluation);
        decision.notes = notes;

        debug!(
            subject_id = %latest.subject_id,
            phase = %current_phase,
            action = %decision.action,
            failed = ?decision.failed_criteria(),
            "Progression evaluated"
        );

        decision
    }

    fn advance(&self, current_phase: RehabilitationPhase) -> Decision {
        match current_phase.next() {
            Some(next) => Decision {
                next_phase: Some(next),
                recommended_exercises: self.exercises.get(next).clone(),
                intensity_adjustment: Some(self.progression.progress_intensity_adjustment.clone()),
                ..Decision::stay(
                    ProgressionAction::Progress,
                    current_phase,
                    format!("All {current_phase} criteria met; progressing to {next}"),
                )
            },
            None => Decision::stay(
                ProgressionAction::Complete,
                current_phase,
                format!("All {current_phase} criteria met; program complete"),
            ),
        }
    }
}

/// Deadlift capacity as a percentage of baseline against the phase minimum
///
/// Evaluated only when the phase requires it and both a current max and a
/// positive baseline are available; otherwise `None` with an explanatory note.
fn evaluate_strength(
    phase: RehabilitationPhase,
    criteria: &ProgressionCriteria,
    current_max_kg: Option<f64>,
    baseline_kg: Option<f64>,
    notes: &mut Vec<String>,
) -> Option<bool> {
    if !phase.requires_strength_check() {
        return None;
    }
    let min_percent = criteria.min_deadlift_capacity_percent?;

    let Some(current) = current_max_kg else {
        notes.push(NO_CURRENT_MAX_NOTE.to_owned());
        return None;
    };

    let Some(baseline) = baseline_kg.filter(|b| b.is_finite() && *b > 0.0) else {
        if baseline_kg.is_some() {
            warn!(
                baseline = ?baseline_kg,
                "Ignoring non-positive deadlift baseline"
            );
        }
        notes.push(NO_BASELINE_NOTE.to_owned());
        return None;
    };

    let capacity_percent = current / baseline * PERCENT;
    debug!(
        current_kg = current,
        baseline_kg = baseline,
        capacity_percent,
        required_percent = min_percent,
        "Deadlift capacity evaluated"
    );
    Some(capacity_percent >= min_percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;
    use std::slice;
    use uuid::Uuid;

    fn kpi(avg_pain: f64, planned: u32, completed: u32, pain_free: f64) -> WeeklyKpi {
        WeeklyKpi::new(
            Uuid::new_v4(),
            NonZeroU32::MIN,
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        )
        .with_pain_summary(avg_pain, 0, 0)
        .with_sessions(planned, completed)
        .with_pain_free_hours(pain_free)
    }

    #[test]
    fn test_weeks_in_phase_counts_whole_weeks() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let day = |d| NaiveDate::from_ymd_opt(2025, 6, d).unwrap();
        assert_eq!(weeks_in_phase(start, start), 0);
        assert_eq!(weeks_in_phase(start, day(8)), 0);
        assert_eq!(weeks_in_phase(start, day(9)), 1);
        assert_eq!(weeks_in_phase(start, day(23)), 3);
        assert_eq!(weeks_in_phase(day(9), start), 0);
    }

    #[test]
    fn test_empty_history_maintains() {
        let decision =
            ProgressionEngine::new().evaluate_progression(&[], RehabilitationPhase::Stabilization, 5);
        assert_eq!(decision.action, ProgressionAction::Maintain);
        assert_eq!(decision.reason, INSUFFICIENT_DATA_REASON);
        assert!(decision.criteria.is_none());
        assert!(decision.failed_criteria().is_empty());
    }

    #[test]
    fn test_only_latest_week_counts() {
        let history = [kpi(8.0, 10, 2, 4.0), kpi(3.0, 20, 17, 17.0)];
        let decision = ProgressionEngine::new().evaluate_progression(
            &history,
            RehabilitationPhase::Decompression,
            3,
        );
        assert_eq!(decision.action, ProgressionAction::Progress);
    }

    #[test]
    fn test_strength_check_with_baseline() {
        let engine = ProgressionEngine::new();
        let week = kpi(1.0, 10, 10, 23.0).with_strength(Some(120.0), None);

        let pass = engine.evaluate_progression_with_baseline(
            slice::from_ref(&week),
            RehabilitationPhase::Strengthening,
            4,
            Some(160.0),
        );
        assert_eq!(pass.criteria.unwrap().strength_ok, Some(true));
        assert_eq!(pass.action, ProgressionAction::Progress);

        let fail = engine.evaluate_progression_with_baseline(
            slice::from_ref(&week),
            RehabilitationPhase::ReturnToSport,
            4,
            Some(160.0),
        );
        assert_eq!(fail.criteria.unwrap().strength_ok, Some(false));
        assert_eq!(fail.action, ProgressionAction::Maintain);
        assert_eq!(fail.focus_areas, vec!["strength"]);
    }

    #[test]
    fn test_strength_without_baseline_is_advisory() {
        let week = kpi(1.0, 10, 10, 23.0).with_strength(Some(120.0), None);
        let decision = ProgressionEngine::new().evaluate_progression(
            &[week],
            RehabilitationPhase::Strengthening,
            4,
        );
        assert_eq!(decision.criteria.unwrap().strength_ok, None);
        assert_eq!(decision.action, ProgressionAction::Progress);
        assert_eq!(decision.notes, vec![NO_BASELINE_NOTE]);
    }

    #[test]
    fn test_modify_attaches_generic_recommendations() {
        let decision = ProgressionEngine::new().evaluate_progression(
            &[kpi(2.0, 10, 5, 20.0)],
            RehabilitationPhase::Decompression,
            3,
        );
        assert_eq!(decision.action, ProgressionAction::Modify);
        assert!(decision.focus_areas.contains(&"consistency".to_owned()));
        assert_eq!(decision.recommendations.len(), 3);
        assert_eq!(decision.intensity_adjustment.as_deref(), Some("-20%"));
        assert_eq!(decision.next_phase, None);
    }
}
