// ABOUTME: Trigger recommendation table and fallback messages for pain trigger analysis
// ABOUTME: Keys are matched case-insensitively against the most frequent trigger
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::clinical_constants::pain_trend::TOP_TRIGGER_COUNT;

/// Placeholder replaced by the trigger name in [`TriggerConfig::unknown_trigger_template`]
pub const TRIGGER_PLACEHOLDER: &str = "{trigger}";

/// Trigger analysis configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Recommendation per known trigger, keyed by lowercase trigger tag
    pub recommendations: BTreeMap<String, String>,
    /// Recommendation for a trigger missing from the table
    pub unknown_trigger_template: String,
    /// Recommendation when observations exist but list no triggers
    pub no_trigger_message: String,
    /// Message when there are no check-ins at all, shared with trend analysis
    pub insufficient_data_message: String,
    /// Number of triggers reported as main triggers
    pub top_count: usize,
}

impl TriggerConfig {
    /// Recommendation for `trigger`, falling back to the unknown-trigger template
    #[must_use]
    pub fn recommendation_for(&self, trigger: &str) -> String {
        self.recommendations
            .get(&trigger.to_lowercase())
            .cloned()
            .unwrap_or_else(|| {
                self.unknown_trigger_template
                    .replace(TRIGGER_PLACEHOLDER, trigger)
            })
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        let recommendations = [
            (
                "sitting",
                "Take standing breaks every 30 minutes and use lumbar support when seated",
            ),
            (
                "standing",
                "Shift weight regularly and use a footrest to offload the lower back",
            ),
            (
                "bending",
                "Hinge at the hips with a neutral spine instead of bending through the lower back",
            ),
            (
                "lifting",
                "Reduce load, brace the trunk and keep objects close to the body",
            ),
            (
                "walking",
                "Shorten walking bouts and build duration gradually on even ground",
            ),
            (
                "driving",
                "Adjust seat support and break up long drives every 45 minutes",
            ),
            (
                "sleeping",
                "Try side-lying with a pillow between the knees and review mattress support",
            ),
            (
                "stress",
                "Add daily breathing or relaxation practice to reduce muscle guarding",
            ),
            (
                "running",
                "Pause running and substitute low-impact cardio until pain settles",
            ),
        ]
        .into_iter()
        .map(|(trigger, text)| (trigger.to_owned(), text.to_owned()))
        .collect();

        Self {
            recommendations,
            unknown_trigger_template: format!("Avoid {TRIGGER_PLACEHOLDER} until improvement"),
            no_trigger_message: "No clear triggers identified yet, keep monitoring".to_owned(),
            insufficient_data_message:
                "Insufficient data: log pain check-ins to analyze trends and triggers".to_owned(),
            top_count: TOP_TRIGGER_COUNT,
        }
    }
}
