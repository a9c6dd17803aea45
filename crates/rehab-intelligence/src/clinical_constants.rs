// ABOUTME: Clinical and strength-testing constants used across the rehabilitation engines
// ABOUTME: Trend cutoffs, time-of-day windows, 1RM formula coefficients and progression hints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Clinical constants
//!
//! Fixed values the engines compute with. Anything a clinic may reasonably want
//! to tune per deployment lives in [`crate::config`] instead.

/// Pain trend classification over check-in index
pub mod pain_trend {
    /// Slopes strictly below this value are classified as improving
    pub const IMPROVING_SLOPE_THRESHOLD: f64 = -0.3;

    /// Slopes strictly above this value are classified as worsening
    pub const WORSENING_SLOPE_THRESHOLD: f64 = 0.3;

    /// Decimal places for reported slope and variability
    pub const REPORT_PRECISION: u32 = 2;

    /// Number of triggers reported as main triggers
    pub const TOP_TRIGGER_COUNT: usize = 3;
}

/// Hour-of-day windows (local time, half-open `[start, end)`)
pub mod time_of_day {
    /// Morning window start hour
    pub const MORNING_START_HOUR: u32 = 6;
    /// Afternoon window start hour (morning end)
    pub const AFTERNOON_START_HOUR: u32 = 12;
    /// Evening window start hour (afternoon end)
    pub const EVENING_START_HOUR: u32 = 18;
    /// Evening window end hour
    pub const EVENING_END_HOUR: u32 = 24;
}

/// One-repetition maximum estimation
///
/// References:
/// - Epley, B. (1985). Poundage Chart. Boyd Epley Workout.
/// - Brzycki, M. (1993). Strength testing: predicting a one-rep max from reps-to-fatigue.
///   *JOPERD*, 64(1), 88-90.
pub mod one_rep_max {
    /// Epley divisor: `1RM = w * (1 + reps / 30)`
    pub const EPLEY_REPS_DIVISOR: f64 = 30.0;

    /// Brzycki numerator: `1RM = w * 36 / (37 - reps)`
    pub const BRZYCKI_NUMERATOR: f64 = 36.0;

    /// Brzycki denominator base; the formula is undefined at or above this rep count
    pub const BRZYCKI_REPS_LIMIT: u32 = 37;
}

/// Progression decision hints
pub mod progression {
    /// Intensity hint attached to a progress decision
    pub const PROGRESS_INTENSITY_ADJUSTMENT: &str = "+10%";

    /// Intensity hint attached to a modify decision
    pub const MODIFY_INTENSITY_ADJUSTMENT: &str = "-20%";

    /// Length of a program week in days
    pub const DAYS_PER_PROGRAM_WEEK: i64 = 7;
}
