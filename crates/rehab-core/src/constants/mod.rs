// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pain scale bounds, local weekly KPI thresholds and focus-area labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace.

/// Numeric pain rating scale (NRS-11)
pub mod pain_scale {
    /// Lowest valid pain rating (no pain)
    pub const MIN_PAIN_LEVEL: u8 = 0;
    /// Highest valid pain rating (worst imaginable pain)
    pub const MAX_PAIN_LEVEL: u8 = 10;
    /// Upper bound (exclusive) of the "no pain" band
    pub const NO_PAIN_UPPER: f64 = 1.0;
    /// Upper bound (exclusive) of the "mild" band
    pub const MILD_PAIN_UPPER: f64 = 4.0;
    /// Upper bound (exclusive) of the "moderate" band
    pub const MODERATE_PAIN_UPPER: f64 = 7.0;
}

/// Local, phase-independent weekly KPI check
///
/// Looser than every phase-specific criteria row; used as a quick sanity
/// signal and to derive focus areas for modified programs.
pub mod weekly_kpi {
    /// Average pain must not exceed this value
    pub const MAX_AVG_PAIN: f64 = 4.0;
    /// Compliance rate (percent) must reach this value
    pub const MIN_COMPLIANCE_RATE: f64 = 80.0;
    /// Pain-free hours per day must reach this value
    pub const MIN_PAIN_FREE_HOURS: f64 = 18.0;
    /// Hours in a day, upper bound for pain-free hours
    pub const HOURS_PER_DAY: f64 = 24.0;
    /// Percentage scale multiplier
    pub const PERCENT: f64 = 100.0;
}

/// Human-readable focus-area labels
pub mod focus_areas {
    /// Average pain above the local threshold
    pub const PAIN_REDUCTION: &str = "pain reduction";
    /// Compliance below the local threshold
    pub const CONSISTENCY: &str = "consistency";
    /// Pain-free hours below the local threshold
    pub const DAILY_PAIN_MANAGEMENT: &str = "daily pain management";
}
