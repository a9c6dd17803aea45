// ABOUTME: Configuration module for rehab-intelligence with the static clinical lookup tables
// ABOUTME: Progression criteria, trigger recommendations, phase exercises and KPI identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Rehabilitation Configuration Module
//!
//! Tables are constructed once and never mutated. Embedding applications that
//! want different thresholds build a [`RehabConfig`] at composition time,
//! call [`RehabConfig::validate`], and hand it to the engines'
//! `with_config` constructors. There are no environment overrides for
//! clinical thresholds.
//!
//! # Module Structure
//!
//! - `progression` - Per-phase criteria table, decision hints, phase exercises
//! - `triggers` - Trigger to recommendation table and fallback messages
//! - `kpi` - Exercise and movement identifiers for weekly aggregation

pub mod kpi;
pub mod progression;
pub mod triggers;

pub use kpi::KpiConfig;
pub use progression::{default_exercise_table, ProgressionConfig, ProgressionCriteria};
pub use triggers::{TriggerConfig, TRIGGER_PLACEHOLDER};

use std::sync::OnceLock;

use rehab_core::constants::pain_scale::MAX_PAIN_LEVEL;
use rehab_core::constants::weekly_kpi::{HOURS_PER_DAY, PERCENT};
use rehab_core::errors::ConfigError;
use rehab_core::models::RehabilitationPhase;
use serde::{Deserialize, Serialize};

/// Global configuration singleton
static REHAB_CONFIG: OnceLock<RehabConfig> = OnceLock::new();

/// One value per rehabilitation phase
///
/// Lookups are an exhaustive match, so every phase always has an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTable<T> {
    /// Entry for the decompression phase
    pub decompression: T,
    /// Entry for the stabilization phase
    pub stabilization: T,
    /// Entry for the strengthening phase
    pub strengthening: T,
    /// Entry for the return-to-sport phase
    pub return_to_sport: T,
}

impl<T> PhaseTable<T> {
    /// Entry for `phase`
    #[must_use]
    pub const fn get(&self, phase: RehabilitationPhase) -> &T {
        match phase {
            RehabilitationPhase::Decompression => &self.decompression,
            RehabilitationPhase::Stabilization => &self.stabilization,
            RehabilitationPhase::Strengthening => &self.strengthening,
            RehabilitationPhase::ReturnToSport => &self.return_to_sport,
        }
    }

    /// Entries in program order
    pub fn iter(&self) -> impl Iterator<Item = (RehabilitationPhase, &T)> {
        RehabilitationPhase::ALL
            .into_iter()
            .map(move |phase| (phase, self.get(phase)))
    }
}

/// Main rehabilitation configuration container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RehabConfig {
    /// Phase progression criteria and decision texts
    pub progression: ProgressionConfig,
    /// Recommended exercises attached when progressing into a phase
    pub exercises: PhaseTable<Vec<String>>,
    /// Trigger recommendations
    pub triggers: TriggerConfig,
    /// Weekly KPI identifiers
    pub kpi: KpiConfig,
}

impl Default for RehabConfig {
    fn default() -> Self {
        Self {
            progression: ProgressionConfig::default(),
            exercises: default_exercise_table(),
            triggers: TriggerConfig::default(),
            kpi: KpiConfig::default(),
        }
    }
}

impl RehabConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        REHAB_CONFIG.get_or_init(Self::default)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRange`] when a threshold is outside its
    /// scale or a later phase is looser than an earlier one, and
    /// [`ConfigError::MissingField`] when a required table entry is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_criteria()?;
        self.validate_tables()
    }

    fn validate_criteria(&self) -> Result<(), ConfigError> {
        let max_pain = f64::from(MAX_PAIN_LEVEL);
        let mut previous: Option<&ProgressionCriteria> = None;

        for (phase, criteria) in self.progression.criteria.iter() {
            let field = |name: &str| format!("progression.criteria.{phase}.{name}");

            check_range(field("max_avg_pain"), criteria.max_avg_pain, max_pain)?;
            check_range(
                field("min_compliance_rate"),
                criteria.min_compliance_rate,
                PERCENT,
            )?;
            check_range(
                field("min_pain_free_hours"),
                criteria.min_pain_free_hours,
                HOURS_PER_DAY,
            )?;

            match (
                phase.requires_strength_check(),
                criteria.min_deadlift_capacity_percent,
            ) {
                (true, None) => {
                    return Err(ConfigError::MissingField(field(
                        "min_deadlift_capacity_percent",
                    )));
                }
                (true, Some(percent)) if !(percent.is_finite() && percent > 0.0) => {
                    return Err(ConfigError::invalid_range(
                        field("min_deadlift_capacity_percent"),
                        "must be a positive percentage",
                    ));
                }
                (false, Some(_)) => {
                    return Err(ConfigError::invalid_range(
                        field("min_deadlift_capacity_percent"),
                        "only strengthening and return_to_sport carry a strength check",
                    ));
                }
                _ => {}
            }

            if let Some(prev) = previous {
                if criteria.max_avg_pain > prev.max_avg_pain
                    || criteria.min_compliance_rate < prev.min_compliance_rate
                    || criteria.min_pain_free_hours < prev.min_pain_free_hours
                {
                    return Err(ConfigError::invalid_range(
                        format!("progression.criteria.{phase}"),
                        "must not be looser than the preceding phase",
                    ));
                }
                if let (Some(current), Some(earlier)) = (
                    criteria.min_deadlift_capacity_percent,
                    prev.min_deadlift_capacity_percent,
                ) {
                    if current < earlier {
                        return Err(ConfigError::invalid_range(
                            field("min_deadlift_capacity_percent"),
                            "must not be lower than the preceding phase",
                        ));
                    }
                }
            }
            previous = Some(criteria);
        }
        Ok(())
    }

    fn validate_tables(&self) -> Result<(), ConfigError> {
        for (phase, exercises) in self.exercises.iter() {
            if exercises.is_empty() {
                return Err(ConfigError::MissingField(format!("exercises.{phase}")));
            }
        }

        if self.progression.modify_recommendations.is_empty() {
            return Err(ConfigError::MissingField(
                "progression.modify_recommendations".to_owned(),
            ));
        }

        if !self
            .triggers
            .unknown_trigger_template
            .contains(TRIGGER_PLACEHOLDER)
        {
            return Err(ConfigError::invalid_range(
                "triggers.unknown_trigger_template",
                format!("must contain the {TRIGGER_PLACEHOLDER} placeholder"),
            ));
        }
        if self.triggers.top_count == 0 {
            return Err(ConfigError::invalid_range(
                "triggers.top_count",
                "must be at least 1",
            ));
        }
        if let Some(key) = self
            .triggers
            .recommendations
            .keys()
            .find(|key| key.to_lowercase() != **key)
        {
            return Err(ConfigError::invalid_range(
                format!("triggers.recommendations.{key}"),
                "trigger keys must be lowercase",
            ));
        }

        let id_lists = [
            ("kpi.deadlift_exercise_ids", &self.kpi.deadlift_exercise_ids),
            ("kpi.squat_exercise_ids", &self.kpi.squat_exercise_ids),
            ("kpi.hip_flexion_ids", &self.kpi.hip_flexion_ids),
            ("kpi.lumbar_flexion_ids", &self.kpi.lumbar_flexion_ids),
        ];
        for (name, ids) in id_lists {
            if ids.is_empty() {
                return Err(ConfigError::MissingField(name.to_owned()));
            }
        }
        Ok(())
    }
}

fn check_range(field: String, value: f64, max: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange {
            field,
            reason: format!("must be between 0 and {max}, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RehabConfig::default().validate().is_ok());
        assert_eq!(RehabConfig::global(), &RehabConfig::default());
    }

    #[test]
    fn test_phase_table_lookup_is_total() {
        let config = RehabConfig::default();
        for phase in RehabilitationPhase::ALL {
            let criteria = config.progression.criteria.get(phase);
            assert_eq!(
                criteria.min_deadlift_capacity_percent.is_some(),
                phase.requires_strength_check()
            );
            assert!(!config.exercises.get(phase).is_empty());
        }
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let mut config = RehabConfig::default();
        config.progression.criteria.stabilization.min_compliance_rate = 120.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidRange { ref field, .. }
                if field == "progression.criteria.stabilization.min_compliance_rate"
        ));
    }

    #[test]
    fn test_rejects_looser_later_phase() {
        let mut config = RehabConfig::default();
        config.progression.criteria.strengthening.max_avg_pain = 5.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_missing_strength_threshold() {
        let mut config = RehabConfig::default();
        config
            .progression
            .criteria
            .return_to_sport
            .min_deadlift_capacity_percent = None;
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingField(
                "progression.criteria.return_to_sport.min_deadlift_capacity_percent".to_owned()
            ))
        );
    }

    #[test]
    fn test_rejects_template_without_placeholder() {
        let mut config = RehabConfig::default();
        config.triggers.unknown_trigger_template = "Avoid it".to_owned();
        assert!(config.validate().is_err());
    }
}
