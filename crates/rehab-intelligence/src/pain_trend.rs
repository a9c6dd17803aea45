// ABOUTME: Pain trend analysis over a subject's check-ins: direction, variability and triggers
// ABOUTME: Also finds the time-of-day window with the lowest average pain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{FixedOffset, Offset, Timelike, Utc};
use rehab_core::models::{PainImpact, PainObservation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::clinical_constants::pain_trend::{
    IMPROVING_SLOPE_THRESHOLD, REPORT_PRECISION, WORSENING_SLOPE_THRESHOLD,
};
use crate::clinical_constants::time_of_day::{
    AFTERNOON_START_HOUR, EVENING_END_HOUR, EVENING_START_HOUR, MORNING_START_HOUR,
};
use crate::config::{RehabConfig, TriggerConfig};
use crate::statistical_analysis::StatisticalAnalyzer;

/// Direction of the pain trend over the analyzed window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PainTrendDirection {
    /// Slope below -0.3 per check-in
    Improving,
    /// Slope within `[-0.3, 0.3]`
    Stable,
    /// Slope above 0.3 per check-in
    Worsening,
}

impl PainTrendDirection {
    /// Classify an unrounded slope; the cutoffs are exact
    #[must_use]
    pub fn from_slope(slope: f64) -> Self {
        if slope < IMPROVING_SLOPE_THRESHOLD {
            Self::Improving
        } else if slope > WORSENING_SLOPE_THRESHOLD {
            Self::Worsening
        } else {
            Self::Stable
        }
    }

    /// Get label for logging and serialization
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Worsening => "worsening",
        }
    }
}

impl fmt::Display for PainTrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of a pain series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Trend label derived from the unrounded slope
    pub trend: PainTrendDirection,
    /// Least-squares slope of pain against check-in index, 2 decimals
    pub slope: f64,
    /// Sample standard deviation of pain levels, 2 decimals
    pub variability: f64,
    /// Mean pain level, 2 decimals
    pub mean_pain: f64,
    /// Lowest pain level
    pub min_pain: u8,
    /// Highest pain level
    pub max_pain: u8,
    /// Number of check-ins analyzed
    pub observation_count: usize,
    /// Pain level of the most recent check-in
    pub latest_pain_level: u8,
    /// Impact band of the mean pain level
    pub mean_impact: PainImpact,
    /// Impact band of the most recent check-in
    pub latest_impact: PainImpact,
    /// Share of check-ins with medication taken (percent, 2 decimals)
    pub medication_rate: f64,
}

/// Result of [`PainTrendAnalyzer::analyze_trend`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrendResult {
    /// No check-ins were supplied; not an error
    InsufficientData {
        /// Human-readable explanation
        message: String,
    },
    /// Trend computed over at least one check-in
    Analyzed(TrendAnalysis),
}

impl TrendResult {
    /// The analysis, if there was data to analyze
    #[must_use]
    pub const fn analysis(&self) -> Option<&TrendAnalysis> {
        match self {
            Self::Analyzed(analysis) => Some(analysis),
            Self::InsufficientData { .. } => None,
        }
    }

    /// Whether the result is the insufficient-data marker
    #[must_use]
    pub const fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}

/// Dominant triggers across a set of check-ins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerResult {
    /// Most frequent triggers, highest first, ties in first-seen order
    pub main_triggers: Vec<String>,
    /// Number of check-ins listing each trigger
    pub frequencies: BTreeMap<String, u32>,
    /// Advice for the single most frequent trigger
    pub recommendation: String,
}

/// Fixed time-of-day window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// `[06:00, 12:00)`
    Morning,
    /// `[12:00, 18:00)`
    Afternoon,
    /// `[18:00, 24:00)`
    Evening,
    /// No check-ins fell into any window
    Unknown,
}

impl TimeOfDay {
    /// Window containing `hour`, `None` for `[00:00, 06:00)`
    #[must_use]
    pub const fn from_hour(hour: u32) -> Option<Self> {
        match hour {
            h if h >= MORNING_START_HOUR && h < AFTERNOON_START_HOUR => Some(Self::Morning),
            h if h >= AFTERNOON_START_HOUR && h < EVENING_START_HOUR => Some(Self::Afternoon),
            h if h >= EVENING_START_HOUR && h < EVENING_END_HOUR => Some(Self::Evening),
            _ => None,
        }
    }

    /// Get label for logging and serialization
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only analyses over one subject's pain check-ins
///
/// Every operation is a pure function of its input; calling it twice on the
/// same slice yields identical results.
#[derive(Debug, Clone)]
pub struct PainTrendAnalyzer {
    triggers: TriggerConfig,
    utc_offset: FixedOffset,
}

impl Default for PainTrendAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PainTrendAnalyzer {
    /// Analyzer using the global configuration and UTC hours
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RehabConfig::global())
    }

    /// Analyzer using a composition-time configuration
    #[must_use]
    pub fn with_config(config: &RehabConfig) -> Self {
        Self {
            triggers: config.triggers.clone(),
            utc_offset: Utc.fix(),
        }
    }

    /// Bucket check-ins by local hour at `offset` instead of UTC
    #[must_use]
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    /// Trend direction, variability and summary statistics
    ///
    /// Check-ins are ordered by timestamp (stable for equal timestamps)
    /// before the slope is fitted against their index.
    #[must_use]
    pub fn analyze_trend(&self, observations: &[PainObservation]) -> TrendResult {
        if observations.is_empty() {
            warn!("Pain trend requested with no check-ins");
            return TrendResult::InsufficientData {
                message: self.triggers.insufficient_data_message.clone(),
            };
        }

        let mut ordered: Vec<&PainObservation> = observations.iter().collect();
        ordered.sort_by_key(|obs| obs.timestamp());

        let levels: Vec<f64> = ordered
            .iter()
            .map(|obs| f64::from(obs.pain_level()))
            .collect();

        let slope = StatisticalAnalyzer::index_slope(&levels);
        let trend = PainTrendDirection::from_slope(slope);
        let variability = StatisticalAnalyzer::sample_std_dev(&levels);
        let mean = StatisticalAnalyzer::mean(&levels);

        let min_pain = ordered.iter().map(|obs| obs.pain_level()).min().unwrap_or(0);
        let max_pain = ordered.iter().map(|obs| obs.pain_level()).max().unwrap_or(0);
        let latest_pain_level = ordered.last().map_or(0, |obs| obs.pain_level());

        let medicated = ordered.iter().filter(|obs| obs.medication_taken()).count();
        let medication_rate = ratio_percent(medicated, ordered.len());

        let analysis = TrendAnalysis {
            trend,
            slope: StatisticalAnalyzer::round_to(slope, REPORT_PRECISION),
            variability: StatisticalAnalyzer::round_to(variability, REPORT_PRECISION),
            mean_pain: StatisticalAnalyzer::round_to(mean, REPORT_PRECISION),
            min_pain,
            max_pain,
            observation_count: ordered.len(),
            latest_pain_level,
            mean_impact: PainImpact::from_level(mean),
            latest_impact: PainImpact::from_level(f64::from(latest_pain_level)),
            medication_rate: StatisticalAnalyzer::round_to(medication_rate, REPORT_PRECISION),
        };

        debug!(
            trend = %analysis.trend,
            slope = analysis.slope,
            variability = analysis.variability,
            observations = analysis.observation_count,
            "Pain trend analyzed"
        );

        TrendResult::Analyzed(analysis)
    }

    /// Most frequent triggers and advice for the top one
    ///
    /// Each check-in counts once per distinct trigger it lists. Ties keep the
    /// order in which triggers first appear in `observations`.
    #[must_use]
    pub fn identify_triggers(&self, observations: &[PainObservation]) -> TriggerResult {
        if observations.is_empty() {
            warn!("Trigger analysis requested with no check-ins");
            return TriggerResult {
                main_triggers: Vec::new(),
                frequencies: BTreeMap::new(),
                recommendation: self.triggers.insufficient_data_message.clone(),
            };
        }

        let mut ranked: Vec<(&str, u32)> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for trigger in observations.iter().flat_map(PainObservation::triggers) {
            if let Some(&idx) = positions.get(trigger.as_str()) {
                ranked[idx].1 += 1;
            } else {
                positions.insert(trigger.as_str(), ranked.len());
                ranked.push((trigger.as_str(), 1));
            }
        }

        // stable: equal counts keep first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let recommendation = ranked.first().map_or_else(
            || self.triggers.no_trigger_message.clone(),
            |(top, _)| self.triggers.recommendation_for(top),
        );

        let main_triggers: Vec<String> = ranked
            .iter()
            .take(self.triggers.top_count)
            .map(|(trigger, _)| (*trigger).to_owned())
            .collect();

        debug!(
            distinct_triggers = ranked.len(),
            main_triggers = ?main_triggers,
            "Pain triggers identified"
        );

        TriggerResult {
            main_triggers,
            frequencies: ranked
                .into_iter()
                .map(|(trigger, count)| (trigger.to_owned(), count))
                .collect(),
            recommendation,
        }
    }

    /// Window with the lowest mean pain
    ///
    /// Check-ins between midnight and 06:00 local time are ignored. Ties go to
    /// the earlier window (morning, then afternoon, then evening).
    #[must_use]
    pub fn find_best_time_of_day(&self, observations: &[PainObservation]) -> TimeOfDay {
        let mut buckets = [
            (TimeOfDay::Morning, 0_u32, 0_u32),
            (TimeOfDay::Afternoon, 0, 0),
            (TimeOfDay::Evening, 0, 0),
        ];

        for obs in observations {
            let hour = obs.timestamp().with_timezone(&self.utc_offset).hour();
            if let Some(window) = TimeOfDay::from_hour(hour) {
                if let Some(bucket) = buckets.iter_mut().find(|(w, _, _)| *w == window) {
                    bucket.1 += u32::from(obs.pain_level());
                    bucket.2 += 1;
                }
            }
        }

        let mut best: Option<(TimeOfDay, f64)> = None;
        for (window, total, count) in buckets {
            if count == 0 {
                continue;
            }
            let mean = f64::from(total) / f64::from(count);
            let lower = match best {
                Some((_, best_mean)) => mean < best_mean,
                None => true,
            };
            if lower {
                best = Some((window, mean));
            }
        }

        best.map_or(TimeOfDay::Unknown, |(window, _)| window)
    }
}

fn ratio_percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
