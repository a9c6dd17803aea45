// ABOUTME: Weekly KPI aggregation from one week of pain, strength and ROM observations
// ABOUTME: Produces the WeeklyKpi record consumed by the progression engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::num::NonZeroU32;

use chrono::NaiveDate;
use rehab_core::constants::weekly_kpi::HOURS_PER_DAY;
use rehab_core::models::{BiometricObservation, PainObservation, WeeklyKpi};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::algorithms::{estimate_from_observation, OneRepMaxFormula};
use crate::config::{KpiConfig, RehabConfig};
use crate::statistical_analysis::StatisticalAnalyzer;

/// Everything the aggregator needs for one program-week
///
/// The repository layer is responsible for filtering observations to the
/// week before handing them in.
#[derive(Debug, Clone, Copy)]
pub struct WeeklyKpiInput<'a> {
    /// Subject the week belongs to
    pub subject_id: Uuid,
    /// One-based program week
    pub week_number: NonZeroU32,
    /// First day of the week
    pub start_date: NaiveDate,
    /// Pain check-ins recorded during the week
    pub pain_observations: &'a [PainObservation],
    /// Strength sets recorded during the week
    pub strength_observations: &'a [BiometricObservation],
    /// Range-of-motion readings recorded during the week
    pub rom_observations: &'a [BiometricObservation],
    /// Sessions planned for the week
    pub planned_sessions: u32,
    /// Sessions completed during the week
    pub completed_sessions: u32,
    /// Pain-free hours per day as reported by the subject
    pub pain_free_hours_per_day: Option<f64>,
}

impl<'a> WeeklyKpiInput<'a> {
    /// Input with no observations and no sessions
    #[must_use]
    pub const fn new(subject_id: Uuid, week_number: NonZeroU32, start_date: NaiveDate) -> Self {
        Self {
            subject_id,
            week_number,
            start_date,
            pain_observations: &[],
            strength_observations: &[],
            rom_observations: &[],
            planned_sessions: 0,
            completed_sessions: 0,
            pain_free_hours_per_day: None,
        }
    }

    /// Attach the week's pain check-ins
    #[must_use]
    pub const fn with_pain(mut self, observations: &'a [PainObservation]) -> Self {
        self.pain_observations = observations;
        self
    }

    /// Attach the week's strength sets
    #[must_use]
    pub const fn with_strength(mut self, observations: &'a [BiometricObservation]) -> Self {
        self.strength_observations = observations;
        self
    }

    /// Attach the week's range-of-motion readings
    #[must_use]
    pub const fn with_rom(mut self, observations: &'a [BiometricObservation]) -> Self {
        self.rom_observations = observations;
        self
    }

    /// Set the session counters
    #[must_use]
    pub const fn with_sessions(mut self, planned: u32, completed: u32) -> Self {
        self.planned_sessions = planned;
        self.completed_sessions = completed;
        self
    }

    /// Set the subject-reported pain-free hours per day
    #[must_use]
    pub const fn with_pain_free_hours(mut self, hours: f64) -> Self {
        self.pain_free_hours_per_day = Some(hours);
        self
    }
}

/// Builds weekly KPI records
#[derive(Debug, Clone)]
pub struct KpiAggregator {
    config: KpiConfig,
}

impl Default for KpiAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl KpiAggregator {
    /// Aggregator using the global exercise and movement identifiers
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RehabConfig::global())
    }

    /// Aggregator using a composition-time configuration
    #[must_use]
    pub fn with_config(config: &RehabConfig) -> Self {
        Self {
            config: config.kpi.clone(),
        }
    }

    /// Build the weekly KPI from pain and strength observations
    ///
    /// Positional form of [`KpiAggregator::aggregate`] without ROM readings
    /// or pain-free hours.
    ///
    /// `pain_free_hours_per_day` is always `0`, so a week built only through
    /// this form fails every phase's pain-free-hours criterion and the engine
    /// answers `Maintain`. Callers that track pain-free hours should build a
    /// [`WeeklyKpiInput`] with [`WeeklyKpiInput::with_pain_free_hours`].
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn build_weekly_kpi(
        &self,
        subject_id: Uuid,
        week_number: NonZeroU32,
        start_date: NaiveDate,
        pain_observations: &[PainObservation],
        strength_observations: &[BiometricObservation],
        planned_sessions: u32,
        completed_sessions: u32,
    ) -> WeeklyKpi {
        self.aggregate(
            &WeeklyKpiInput::new(subject_id, week_number, start_date)
                .with_pain(pain_observations)
                .with_strength(strength_observations)
                .with_sessions(planned_sessions, completed_sessions),
        )
    }

    /// Build the weekly KPI from a full week of input
    ///
    /// - pain summary defaults to zeros when there are no check-ins
    /// - strength maxima use the Epley estimate, falling back to a
    ///   pre-supplied estimate, and stay `None` without a matching set
    /// - pain-free hours are clamped into `[0, 24]` and default to zero when
    ///   not reported
    #[must_use]
    pub fn aggregate(&self, input: &WeeklyKpiInput<'_>) -> WeeklyKpi {
        let (avg_pain, min_pain, max_pain) = pain_summary(input.pain_observations);

        let max_deadlift_kg =
            best_one_rep_max(input.strength_observations, &self.config.deadlift_exercise_ids);
        let max_squat_kg =
            best_one_rep_max(input.strength_observations, &self.config.squat_exercise_ids);

        let hip_flexion = best_rom(input.rom_observations, &self.config.hip_flexion_ids);
        let lumbar_flexion = best_rom(input.rom_observations, &self.config.lumbar_flexion_ids);

        let pain_free_hours = match input.pain_free_hours_per_day {
            Some(hours) if !(0.0..=HOURS_PER_DAY).contains(&hours) => {
                warn!(
                    subject_id = %input.subject_id,
                    week = input.week_number.get(),
                    hours,
                    "Reported pain-free hours outside 0-24, clamping"
                );
                hours
            }
            Some(hours) => hours,
            None => {
                debug!(
                    subject_id = %input.subject_id,
                    week = input.week_number.get(),
                    "No pain-free hours reported, defaulting to 0"
                );
                0.0
            }
        };

        let kpi = WeeklyKpi::new(input.subject_id, input.week_number, input.start_date)
            .with_pain_summary(avg_pain, min_pain, max_pain)
            .with_sessions(input.planned_sessions, input.completed_sessions)
            .with_pain_free_hours(pain_free_hours)
            .with_rom(hip_flexion, lumbar_flexion)
            .with_strength(max_deadlift_kg, max_squat_kg);

        debug!(
            subject_id = %kpi.subject_id,
            week = kpi.week_number.get(),
            avg_pain = kpi.avg_pain_level,
            compliance = kpi.compliance_rate(),
            meets_local_criteria = kpi.meets_progression_criteria(),
            "Weekly KPI aggregated"
        );

        kpi
    }
}

/// Mean, lowest and highest pain rating; all zero without check-ins
fn pain_summary(observations: &[PainObservation]) -> (f64, u8, u8) {
    let levels: Vec<f64> = observations
        .iter()
        .map(|obs| f64::from(obs.pain_level()))
        .collect();
    let min = observations.iter().map(PainObservation::pain_level).min();
    let max = observations.iter().map(PainObservation::pain_level).max();
    (
        StatisticalAnalyzer::mean(&levels),
        min.unwrap_or(0),
        max.unwrap_or(0),
    )
}

fn best_one_rep_max(observations: &[BiometricObservation], ids: &[String]) -> Option<f64> {
    observations
        .iter()
        .filter(|obs| obs.matches_exercise(ids))
        .filter_map(|obs| {
            estimate_from_observation(obs, OneRepMaxFormula::Epley).or_else(|| obs.estimated_1rm())
        })
        .reduce(f64::max)
}

fn best_rom(observations: &[BiometricObservation], ids: &[String]) -> Option<f64> {
    observations
        .iter()
        .filter(|obs| obs.matches_exercise(ids))
        .filter_map(BiometricObservation::rom_degrees)
        .reduce(f64::max)
}
