// ABOUTME: Weekly KPI record aggregated from one program-week of check-ins and sessions
// ABOUTME: Keeps compliance_rate derived from the session counters and exposes the local criteria check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::num::NonZeroU32;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::focus_areas::{CONSISTENCY, DAILY_PAIN_MANAGEMENT, PAIN_REDUCTION};
use crate::constants::weekly_kpi::{
    HOURS_PER_DAY, MAX_AVG_PAIN, MIN_COMPLIANCE_RATE, MIN_PAIN_FREE_HOURS, PERCENT,
};

/// Aggregated record for one program-week
///
/// `compliance_rate` is always derived from `planned_sessions` and
/// `completed_sessions`; the counters are private so the two cannot drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WeeklyKpiRecord")]
pub struct WeeklyKpi {
    /// Subject the week belongs to
    pub subject_id: Uuid,
    /// One-based program week
    pub week_number: NonZeroU32,
    /// First day of the week
    pub start_date: NaiveDate,
    /// Last day of the week, set when the week is closed
    pub end_date: Option<NaiveDate>,
    /// Mean pain rating over the week's check-ins
    pub avg_pain_level: f64,
    /// Highest pain rating of the week
    pub max_pain_level: u8,
    /// Lowest pain rating of the week
    pub min_pain_level: u8,
    /// Caller-reported pain-free hours per day, within `[0, 24]`
    pub pain_free_hours_per_day: f64,
    /// Best hip flexion reading in degrees
    pub rom_hip_flexion_deg: Option<f64>,
    /// Best lumbar flexion reading in degrees
    pub rom_lumbar_flexion_deg: Option<f64>,
    /// Best estimated deadlift 1RM in kilograms
    pub max_deadlift_kg: Option<f64>,
    /// Best estimated squat 1RM in kilograms
    pub max_squat_kg: Option<f64>,
    planned_sessions: u32,
    completed_sessions: u32,
    compliance_rate: f64,
}

impl WeeklyKpi {
    /// Empty record for `week_number` starting on `start_date`
    #[must_use]
    pub const fn new(subject_id: Uuid, week_number: NonZeroU32, start_date: NaiveDate) -> Self {
        Self {
            subject_id,
            week_number,
            start_date,
            end_date: None,
            avg_pain_level: 0.0,
            max_pain_level: 0,
            min_pain_level: 0,
            pain_free_hours_per_day: 0.0,
            rom_hip_flexion_deg: None,
            rom_lumbar_flexion_deg: None,
            max_deadlift_kg: None,
            max_squat_kg: None,
            planned_sessions: 0,
            completed_sessions: 0,
            compliance_rate: 0.0,
        }
    }

    /// Set the pain summary (mean, lowest, highest rating)
    #[must_use]
    pub const fn with_pain_summary(mut self, avg: f64, min: u8, max: u8) -> Self {
        self.avg_pain_level = avg;
        self.min_pain_level = min;
        self.max_pain_level = max;
        self
    }

    /// Set the session counters and derive the compliance rate
    #[must_use]
    pub fn with_sessions(mut self, planned: u32, completed: u32) -> Self {
        self.set_sessions(planned, completed);
        self
    }

    /// Set pain-free hours per day, clamped into `[0, 24]`
    #[must_use]
    pub fn with_pain_free_hours(mut self, hours: f64) -> Self {
        self.pain_free_hours_per_day = clamp_hours(hours);
        self
    }

    /// Set the best range-of-motion readings
    #[must_use]
    pub const fn with_rom(
        mut self,
        hip_flexion_deg: Option<f64>,
        lumbar_flexion_deg: Option<f64>,
    ) -> Self {
        self.rom_hip_flexion_deg = hip_flexion_deg;
        self.rom_lumbar_flexion_deg = lumbar_flexion_deg;
        self
    }

    /// Set the best estimated 1RM values
    #[must_use]
    pub const fn with_strength(
        mut self,
        deadlift_kg: Option<f64>,
        squat_kg: Option<f64>,
    ) -> Self {
        self.max_deadlift_kg = deadlift_kg;
        self.max_squat_kg = squat_kg;
        self
    }

    /// Update the session counters, recomputing `compliance_rate`
    pub fn set_sessions(&mut self, planned: u32, completed: u32) {
        self.planned_sessions = planned;
        self.completed_sessions = completed;
        self.compliance_rate = compliance_rate(planned, completed);
    }

    /// Mark the week as closed on `end_date`
    pub fn close_week(&mut self, end_date: NaiveDate) {
        self.end_date = Some(end_date);
    }

    /// Whether the week has been closed
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.end_date.is_some()
    }

    /// Sessions planned for the week
    #[must_use]
    pub const fn planned_sessions(&self) -> u32 {
        self.planned_sessions
    }

    /// Sessions actually completed
    #[must_use]
    pub const fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    /// Completed over planned sessions, as a percentage in `[0, 100]`
    #[must_use]
    pub const fn compliance_rate(&self) -> f64 {
        self.compliance_rate
    }

    /// Local, phase-independent sanity check
    ///
    /// Separate from the phase-specific criteria rows used for progression
    /// decisions; passing one says nothing about the other.
    #[must_use]
    pub fn meets_progression_criteria(&self) -> bool {
        self.avg_pain_level <= MAX_AVG_PAIN
            && self.compliance_rate >= MIN_COMPLIANCE_RATE
            && self.pain_free_hours_per_day >= MIN_PAIN_FREE_HOURS
    }

    /// Labels for each local threshold this week failed
    #[must_use]
    pub fn focus_areas(&self) -> Vec<String> {
        let mut areas = Vec::new();
        if self.avg_pain_level > MAX_AVG_PAIN {
            areas.push(PAIN_REDUCTION.to_owned());
        }
        if self.compliance_rate < MIN_COMPLIANCE_RATE {
            areas.push(CONSISTENCY.to_owned());
        }
        if self.pain_free_hours_per_day < MIN_PAIN_FREE_HOURS {
            areas.push(DAILY_PAIN_MANAGEMENT.to_owned());
        }
        areas
    }
}

/// `completed / planned * 100`, zero when nothing was planned
///
/// Extra sessions beyond the plan cap the rate at 100.
fn compliance_rate(planned: u32, completed: u32) -> f64 {
    if planned == 0 {
        return 0.0;
    }
    (f64::from(completed) / f64::from(planned) * PERCENT).min(PERCENT)
}

fn clamp_hours(hours: f64) -> f64 {
    if hours.is_finite() {
        hours.clamp(0.0, HOURS_PER_DAY)
    } else {
        0.0
    }
}

/// Stored shape of a weekly KPI; any stored compliance rate is ignored and
/// re-derived from the counters
#[derive(Debug, Deserialize)]
struct WeeklyKpiRecord {
    subject_id: Uuid,
    week_number: NonZeroU32,
    start_date: NaiveDate,
    #[serde(default)]
    end_date: Option<NaiveDate>,
    #[serde(default)]
    avg_pain_level: f64,
    #[serde(default)]
    max_pain_level: u8,
    #[serde(default)]
    min_pain_level: u8,
    #[serde(default)]
    pain_free_hours_per_day: f64,
    #[serde(default)]
    rom_hip_flexion_deg: Option<f64>,
    #[serde(default)]
    rom_lumbar_flexion_deg: Option<f64>,
    #[serde(default)]
    max_deadlift_kg: Option<f64>,
    #[serde(default)]
    max_squat_kg: Option<f64>,
    #[serde(default)]
    planned_sessions: u32,
    #[serde(default)]
    completed_sessions: u32,
}

impl From<WeeklyKpiRecord> for WeeklyKpi {
    fn from(record: WeeklyKpiRecord) -> Self {
        let mut kpi = Self::new(record.subject_id, record.week_number, record.start_date)
            .with_pain_summary(
                record.avg_pain_level,
                record.min_pain_level,
                record.max_pain_level,
            )
            .with_sessions(record.planned_sessions, record.completed_sessions)
            .with_pain_free_hours(record.pain_free_hours_per_day)
            .with_rom(record.rom_hip_flexion_deg, record.rom_lumbar_flexion_deg)
            .with_strength(record.max_deadlift_kg, record.max_squat_kg);
        kpi.end_date = record.end_date;
        kpi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week_one() -> WeeklyKpi {
        WeeklyKpi::new(
            Uuid::new_v4(),
            NonZeroU32::MIN,
            NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
        )
    }

    #[test]
    fn test_compliance_rate_derivation() {
        let kpi = week_one().with_sessions(0, 0);
        assert!(kpi.compliance_rate().abs() < f64::EPSILON);

        let kpi = week_one().with_sessions(10, 8);
        assert!((kpi.compliance_rate() - 80.0).abs() < 1e-9);

        let mut kpi = week_one().with_sessions(4, 1);
        assert!((kpi.compliance_rate() - 25.0).abs() < 1e-9);
        kpi.set_sessions(4, 4);
        assert!((kpi.compliance_rate() - 100.0).abs() < 1e-9);
        assert_eq!(kpi.completed_sessions(), 4);
    }

    #[test]
    fn test_pain_free_hours_clamped() {
        let capped = week_one().with_pain_free_hours(30.0);
        assert!((capped.pain_free_hours_per_day - 24.0).abs() < 1e-9);
        assert!(week_one().with_pain_free_hours(-2.0).pain_free_hours_per_day.abs() < 1e-9);
        assert!(week_one().with_pain_free_hours(f64::NAN).pain_free_hours_per_day.abs() < 1e-9);
    }

    #[test]
    fn test_local_criteria_and_focus_areas() {
        let good = week_one()
            .with_pain_summary(3.0, 1, 5)
            .with_sessions(10, 9)
            .with_pain_free_hours(20.0);
        assert!(good.meets_progression_criteria());
        assert!(good.focus_areas().is_empty());

        let bad = week_one()
            .with_pain_summary(6.0, 4, 8)
            .with_sessions(10, 5)
            .with_pain_free_hours(10.0);
        assert!(!bad.meets_progression_criteria());
        assert_eq!(
            bad.focus_areas(),
            vec![PAIN_REDUCTION, CONSISTENCY, DAILY_PAIN_MANAGEMENT]
        );
    }

    #[test]
    fn test_close_week() {
        let mut kpi = week_one();
        assert!(!kpi.is_closed());
        kpi.close_week(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
        assert!(kpi.is_closed());
    }

    #[test]
    fn test_deserialization_rederives_compliance() {
        let subject = Uuid::new_v4();
        let json = format!(
            r#"{{"subject_id":"{subject}","week_number":2,"start_date":"2025-03-10",
                "avg_pain_level":3.5,"planned_sessions":5,"completed_sessions":4,
                "compliance_rate":12.0}}"#
        );
        let kpi: WeeklyKpi = serde_json::from_str(&json).unwrap();
        assert_eq!(kpi.week_number.get(), 2);
        assert!((kpi.compliance_rate() - 80.0).abs() < 1e-9);

        let zero_week = format!(
            r#"{{"subject_id":"{subject}","week_number":0,"start_date":"2025-03-10"}}"#
        );
        assert!(serde_json::from_str::<WeeklyKpi>(&zero_week).is_err());
    }
}
