// ABOUTME: Pain check-in and biometric measurement models handed in by the repository layer
// ABOUTME: PainObservation validates at construction, BiometricObservation has one factory per kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::pain_scale::{MAX_PAIN_LEVEL, MIN_PAIN_LEVEL};
use crate::errors::{ParseEnumError, ValidationError};

/// A single pain check-in
///
/// Immutable once constructed. The only way to obtain one is through
/// [`PainObservation::new`] (or deserialization, which routes through the same
/// validation), so every instance satisfies `0 <= pain_level <= 10` and has at
/// least one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PainObservationRecord")]
pub struct PainObservation {
    subject_id: Uuid,
    timestamp: DateTime<Utc>,
    pain_level: u8,
    locations: Vec<String>,
    triggers: Vec<String>,
    medication_taken: bool,
}

impl PainObservation {
    /// Create a validated pain check-in
    ///
    /// Tags are trimmed, blank tags dropped and duplicates removed while keeping
    /// first-seen order, so `locations` and `triggers` behave as ordered sets.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PainLevelOutOfRange`] when `pain_level` is
    /// outside 0-10 and [`ValidationError::EmptyLocations`] when no non-blank
    /// location is given.
    pub fn new(
        subject_id: Uuid,
        timestamp: DateTime<Utc>,
        pain_level: i64,
        locations: Vec<String>,
        triggers: Vec<String>,
        medication_taken: bool,
    ) -> Result<Self, ValidationError> {
        let pain_level = u8::try_from(pain_level)
            .ok()
            .filter(|level| (MIN_PAIN_LEVEL..=MAX_PAIN_LEVEL).contains(level))
            .ok_or(ValidationError::PainLevelOutOfRange { value: pain_level })?;

        let locations = normalize_tags(locations);
        if locations.is_empty() {
            return Err(ValidationError::EmptyLocations);
        }

        Ok(Self {
            subject_id,
            timestamp,
            pain_level,
            locations,
            triggers: normalize_tags(triggers),
            medication_taken,
        })
    }

    /// Subject this check-in belongs to
    #[must_use]
    pub const fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    /// When the check-in was recorded
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Pain rating on the 0-10 scale
    #[must_use]
    pub const fn pain_level(&self) -> u8 {
        self.pain_level
    }

    /// Body areas affected (never empty)
    #[must_use]
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Activities or circumstances associated with the flare-up
    #[must_use]
    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    /// Whether pain medication was taken
    #[must_use]
    pub const fn medication_taken(&self) -> bool {
        self.medication_taken
    }
}

/// Wire shape of a pain check-in, validated into [`PainObservation`]
#[derive(Debug, Deserialize)]
struct PainObservationRecord {
    subject_id: Uuid,
    timestamp: DateTime<Utc>,
    pain_level: i64,
    locations: Vec<String>,
    #[serde(default)]
    triggers: Vec<String>,
    #[serde(default)]
    medication_taken: bool,
}

impl TryFrom<PainObservationRecord> for PainObservation {
    type Error = ValidationError;

    fn try_from(record: PainObservationRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.subject_id,
            record.timestamp,
            record.pain_level,
            record.locations,
            record.triggers,
            record.medication_taken,
        )
    }
}

/// Trim, drop blanks and de-duplicate while keeping first-seen order
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let trimmed = tag.trim();
        if !trimmed.is_empty() && !normalized.iter().any(|t| t == trimmed) {
            normalized.push(trimmed.to_owned());
        }
    }
    normalized
}

/// Kind of biometric measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiometricKind {
    /// Loaded strength set (weight x reps)
    Strength,
    /// Range of motion in degrees
    Rom,
    /// Body fat and related composition values
    BodyComposition,
    /// Resting heart rate and related cardiovascular values
    Cardiovascular,
}

impl BiometricKind {
    /// Get kind name for logging and serialization
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Rom => "rom",
            Self::BodyComposition => "body_composition",
            Self::Cardiovascular => "cardiovascular",
        }
    }
}

impl fmt::Display for BiometricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BiometricKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "rom" | "range_of_motion" => Ok(Self::Rom),
            "body_composition" => Ok(Self::BodyComposition),
            "cardiovascular" => Ok(Self::Cardiovascular),
            _ => Err(ParseEnumError::new(
                "biometric kind",
                s,
                "strength, rom, body_composition, cardiovascular",
            )),
        }
    }
}

/// Side of the body a range-of-motion reading was taken on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySide {
    /// Left side
    Left,
    /// Right side
    Right,
    /// Both sides / midline movement
    Bilateral,
}

/// A single biometric measurement
///
/// Only the fields relevant to `kind` are populated. Use the kind-specific
/// constructors; the strength estimator needs only `weight_kg` and `reps`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricObservation {
    subject_id: Uuid,
    timestamp: DateTime<Utc>,
    kind: BiometricKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exercise_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    estimated_1rm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rom_degrees: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rom_side: Option<BodySide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body_fat_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    resting_heart_rate: Option<u32>,
}

impl BiometricObservation {
    fn empty(subject_id: Uuid, timestamp: DateTime<Utc>, kind: BiometricKind) -> Self {
        Self {
            subject_id,
            timestamp,
            kind,
            exercise_id: None,
            weight_kg: None,
            reps: None,
            estimated_1rm: None,
            rom_degrees: None,
            rom_side: None,
            body_fat_percent: None,
            resting_heart_rate: None,
        }
    }

    /// Strength set: `reps` repetitions of `exercise_id` at `weight_kg`
    #[must_use]
    pub fn strength(
        subject_id: Uuid,
        timestamp: DateTime<Utc>,
        exercise_id: impl Into<String>,
        weight_kg: Option<f64>,
        reps: Option<u32>,
    ) -> Self {
        Self {
            exercise_id: Some(exercise_id.into()),
            weight_kg,
            reps,
            ..Self::empty(subject_id, timestamp, BiometricKind::Strength)
        }
    }

    /// Range-of-motion reading for `movement` (e.g. `hip_flexion`)
    #[must_use]
    pub fn range_of_motion(
        subject_id: Uuid,
        timestamp: DateTime<Utc>,
        movement: impl Into<String>,
        degrees: f64,
        side: BodySide,
    ) -> Self {
        Self {
            exercise_id: Some(movement.into()),
            rom_degrees: Some(degrees),
            rom_side: Some(side),
            ..Self::empty(subject_id, timestamp, BiometricKind::Rom)
        }
    }

    /// Body composition reading
    #[must_use]
    pub fn body_composition(
        subject_id: Uuid,
        timestamp: DateTime<Utc>,
        body_fat_percent: f64,
    ) -> Self {
        Self {
            body_fat_percent: Some(body_fat_percent),
            ..Self::empty(subject_id, timestamp, BiometricKind::BodyComposition)
        }
    }

    /// Cardiovascular reading
    #[must_use]
    pub fn cardiovascular(
        subject_id: Uuid,
        timestamp: DateTime<Utc>,
        resting_heart_rate: u32,
    ) -> Self {
        Self {
            resting_heart_rate: Some(resting_heart_rate),
            ..Self::empty(subject_id, timestamp, BiometricKind::Cardiovascular)
        }
    }

    /// Attach a 1RM estimate computed upstream (e.g. by a device)
    #[must_use]
    pub const fn with_estimated_1rm(mut self, estimated_1rm: f64) -> Self {
        self.estimated_1rm = Some(estimated_1rm);
        self
    }

    /// Subject this measurement belongs to
    #[must_use]
    pub const fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    /// When the measurement was taken
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Kind of measurement
    #[must_use]
    pub const fn kind(&self) -> BiometricKind {
        self.kind
    }

    /// Exercise (strength) or movement (ROM) identifier
    #[must_use]
    pub fn exercise_id(&self) -> Option<&str> {
        self.exercise_id.as_deref()
    }

    /// Load lifted in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> Option<f64> {
        self.weight_kg
    }

    /// Repetitions performed
    #[must_use]
    pub const fn reps(&self) -> Option<u32> {
        self.reps
    }

    /// Pre-supplied 1RM estimate, if any
    #[must_use]
    pub const fn estimated_1rm(&self) -> Option<f64> {
        self.estimated_1rm
    }

    /// Range of motion in degrees
    #[must_use]
    pub const fn rom_degrees(&self) -> Option<f64> {
        self.rom_degrees
    }

    /// Side of the range-of-motion reading
    #[must_use]
    pub const fn rom_side(&self) -> Option<BodySide> {
        self.rom_side
    }

    /// Body fat percentage
    #[must_use]
    pub const fn body_fat_percent(&self) -> Option<f64> {
        self.body_fat_percent
    }

    /// Resting heart rate in bpm
    #[must_use]
    pub const fn resting_heart_rate(&self) -> Option<u32> {
        self.resting_heart_rate
    }

    /// Whether the identifier matches any of `ids` (case-insensitive)
    #[must_use]
    pub fn matches_exercise(&self, ids: &[String]) -> bool {
        self.exercise_id
            .as_deref()
            .is_some_and(|id| ids.iter().any(|candidate| candidate.eq_ignore_ascii_case(id)))
    }
}
