// ABOUTME: Rehabilitation phase and pain impact enumerations with attached behavior
// ABOUTME: Phase ordering, forward-only transitions, and NRS pain band classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::pain_scale::{MILD_PAIN_UPPER, MODERATE_PAIN_UPPER, NO_PAIN_UPPER};
use crate::errors::ParseEnumError;

/// One of the four ordered stages of a rehabilitation program
///
/// Transitions are strictly forward by one step. After `ReturnToSport` the
/// program is complete, which is represented by [`RehabilitationPhase::next`]
/// returning `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RehabilitationPhase {
    /// Unload the spine, reduce irritability, restore basic mobility
    Decompression,
    /// Build motor control and trunk endurance
    Stabilization,
    /// Progressive loading toward pre-injury capacity
    Strengthening,
    /// Sport-specific power, speed and reactive work
    ReturnToSport,
}

impl RehabilitationPhase {
    /// All phases in program order
    pub const ALL: [Self; 4] = [
        Self::Decompression,
        Self::Stabilization,
        Self::Strengthening,
        Self::ReturnToSport,
    ];

    /// Next phase in the program, `None` once the program is complete
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Decompression => Some(Self::Stabilization),
            Self::Stabilization => Some(Self::Strengthening),
            Self::Strengthening => Some(Self::ReturnToSport),
            Self::ReturnToSport => None,
        }
    }

    /// One-based position of the phase in the program
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Decompression => 1,
            Self::Stabilization => 2,
            Self::Strengthening => 3,
            Self::ReturnToSport => 4,
        }
    }

    /// Whether progression out of this phase also requires a strength check
    #[must_use]
    pub const fn requires_strength_check(self) -> bool {
        matches!(self, Self::Strengthening | Self::ReturnToSport)
    }

    /// Get phase name for logging and serialization
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Decompression => "decompression",
            Self::Stabilization => "stabilization",
            Self::Strengthening => "strengthening",
            Self::ReturnToSport => "return_to_sport",
        }
    }

    /// Short description of the phase goal
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Decompression => "Reduce load on irritated tissue and restore pain-free mobility",
            Self::Stabilization => "Build trunk endurance and motor control under low load",
            Self::Strengthening => "Progressively load toward pre-injury strength",
            Self::ReturnToSport => "Restore sport-specific power, speed and confidence",
        }
    }
}

impl fmt::Display for RehabilitationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RehabilitationPhase {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "decompression" => Ok(Self::Decompression),
            "stabilization" => Ok(Self::Stabilization),
            "strengthening" => Ok(Self::Strengthening),
            "return_to_sport" => Ok(Self::ReturnToSport),
            _ => Err(ParseEnumError::new(
                "rehabilitation phase",
                s,
                "decompression, stabilization, strengthening, return_to_sport",
            )),
        }
    }
}

/// Clinical impact band of a pain rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PainImpact {
    /// Rating below 1
    None,
    /// Rating in `[1, 4)`
    Mild,
    /// Rating in `[4, 7)`
    Moderate,
    /// Rating of 7 or more
    Severe,
}

impl PainImpact {
    /// Classify a (possibly averaged) pain rating
    #[must_use]
    pub fn from_level(level: f64) -> Self {
        if level < NO_PAIN_UPPER {
            Self::None
        } else if level < MILD_PAIN_UPPER {
            Self::Mild
        } else if level < MODERATE_PAIN_UPPER {
            Self::Moderate
        } else {
            Self::Severe
        }
    }

    /// Get band name for logging and serialization
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl fmt::Display for PainImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
