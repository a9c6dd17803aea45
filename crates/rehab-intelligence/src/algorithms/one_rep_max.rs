// ABOUTME: One-repetition maximum estimation from a submaximal strength set
// ABOUTME: Implements Epley and Brzycki formulas; undefined inputs yield None rather than an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use rehab_core::errors::ParseEnumError;
use rehab_core::models::BiometricObservation;
use serde::{Deserialize, Serialize};

use crate::clinical_constants::one_rep_max::{
    BRZYCKI_NUMERATOR, BRZYCKI_REPS_LIMIT, EPLEY_REPS_DIVISOR,
};

/// One-repetition maximum estimation formula
///
/// - `Epley`: `w * (1 + reps/30)`, defined for any positive rep count
/// - `Brzycki`: `w * 36 / (37 - reps)`, undefined from 37 reps upward
///
/// Brzycki returns the lifted weight itself for a single rep; Epley adds
/// one thirtieth.
///
/// # Scientific References
///
/// - Epley, B. (1985). Poundage Chart. Boyd Epley Workout.
/// - Brzycki, M. (1993). "Strength testing: predicting a one-rep max from reps-to-fatigue." *JOPERD*, 64(1), 88-90.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OneRepMaxFormula {
    /// Epley formula: w x (1 + reps / 30)
    ///
    /// Linear in reps, used for weekly KPI aggregation
    #[default]
    Epley,

    /// Brzycki formula: w x 36 / (37 - reps)
    ///
    /// Accurate in the low-rep range, diverges as reps approach 37
    Brzycki,
}

impl OneRepMaxFormula {
    /// Estimate 1RM from a set of `reps` at `weight_kg`
    ///
    /// Returns `None` when either input is missing, `weight_kg` is not a
    /// positive finite number, `reps` is zero, or the formula is undefined for
    /// the rep count (Brzycki at 37 reps or more). A missing estimate is an
    /// expected outcome, not a failure.
    #[must_use]
    pub fn estimate(self, weight_kg: Option<f64>, reps: Option<u32>) -> Option<f64> {
        let weight = weight_kg.filter(|w| w.is_finite() && *w > 0.0)?;
        let reps = reps.filter(|r| *r > 0)?;

        match self {
            Self::Epley => Some(weight * (1.0 + f64::from(reps) / EPLEY_REPS_DIVISOR)),
            Self::Brzycki => {
                if reps >= BRZYCKI_REPS_LIMIT {
                    return None;
                }
                let denominator = f64::from(BRZYCKI_REPS_LIMIT - reps);
                Some(weight * (BRZYCKI_NUMERATOR / denominator))
            }
        }
    }

    /// Get formula name for logging and serialization
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Epley => "epley",
            Self::Brzycki => "brzycki",
        }
    }

    /// Get formula description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Epley => "Epley (1985), linear in reps, suited to moderate rep ranges",
            Self::Brzycki => "Brzycki (1993), accurate below 10 reps, undefined from 37 reps",
        }
    }

    /// Get formula expression
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::Epley => "weight x (1 + reps / 30)",
            Self::Brzycki => "weight x 36 / (37 - reps)",
        }
    }
}

impl fmt::Display for OneRepMaxFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OneRepMaxFormula {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "epley" => Ok(Self::Epley),
            "brzycki" => Ok(Self::Brzycki),
            _ => Err(ParseEnumError::new("1RM formula", s, "epley, brzycki")),
        }
    }
}

/// Estimate 1RM from weight and reps with the given formula
#[must_use]
pub fn estimate_one_rep_max(
    weight_kg: Option<f64>,
    reps: Option<u32>,
    formula: OneRepMaxFormula,
) -> Option<f64> {
    formula.estimate(weight_kg, reps)
}

/// Estimate 1RM from a strength observation
///
/// Only `weight_kg` and `reps` are read; the observation kind and any other
/// fields are ignored.
#[must_use]
pub fn estimate_from_observation(
    observation: &BiometricObservation,
    formula: OneRepMaxFormula,
) -> Option<f64> {
    formula.estimate(observation.weight_kg(), observation.reps())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_epley() {
        let estimate = OneRepMaxFormula::Epley.estimate(Some(100.0), Some(10)).unwrap();
        assert!(close(estimate, 100.0 * (1.0 + 10.0 / 30.0)));
        assert!(close(
            OneRepMaxFormula::Epley.estimate(Some(60.0), Some(60)).unwrap(),
            180.0
        ));
    }

    #[test]
    fn test_brzycki_domain() {
        assert!(close(
            OneRepMaxFormula::Brzycki.estimate(Some(100.0), Some(1)).unwrap(),
            100.0
        ));
        assert!(close(
            OneRepMaxFormula::Brzycki.estimate(Some(100.0), Some(36)).unwrap(),
            3600.0
        ));
        assert_eq!(OneRepMaxFormula::Brzycki.estimate(Some(100.0), Some(37)), None);
        assert_eq!(OneRepMaxFormula::Brzycki.estimate(Some(100.0), Some(50)), None);
    }

    #[test]
    fn test_missing_or_non_positive_inputs() {
        for formula in [OneRepMaxFormula::Epley, OneRepMaxFormula::Brzycki] {
            assert_eq!(formula.estimate(None, Some(5)), None);
            assert_eq!(formula.estimate(Some(100.0), None), None);
            assert_eq!(formula.estimate(Some(0.0), Some(5)), None);
            assert_eq!(formula.estimate(Some(-20.0), Some(5)), None);
            assert_eq!(formula.estimate(Some(100.0), Some(0)), None);
            assert_eq!(formula.estimate(Some(f64::NAN), Some(5)), None);
        }
    }

    #[test]
    fn test_formula_parsing() {
        assert_eq!("Epley".parse::<OneRepMaxFormula>(), Ok(OneRepMaxFormula::Epley));
        assert_eq!(" brzycki ".parse::<OneRepMaxFormula>(), Ok(OneRepMaxFormula::Brzycki));
        assert!("lombardi".parse::<OneRepMaxFormula>().is_err());
        assert_eq!(OneRepMaxFormula::default(), OneRepMaxFormula::Epley);
    }
}
