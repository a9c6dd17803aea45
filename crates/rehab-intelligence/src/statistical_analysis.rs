// ABOUTME: Descriptive statistics and index regression for short pain series
// ABOUTME: Mean, sample standard deviation, least-squares slope over index, fixed-precision rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: series lengths are weekly/monthly windows

/// Statistics over small numeric series
///
/// All functions are total: empty or degenerate input yields `0.0` instead of
/// an error, so callers can decide separately whether the data was sufficient.
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Arithmetic mean, `0.0` for an empty series
    #[must_use]
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Sample standard deviation (n - 1 divisor), `0.0` below two values
    #[must_use]
    pub fn sample_std_dev(values: &[f64]) -> f64 {
        if values.len() < 2 {
            return 0.0;
        }
        let mean = Self::mean(values);
        let sum_sq = values
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>();
        (sum_sq / (values.len() - 1) as f64).sqrt()
    }

    /// Ordinary least-squares slope of `values` against their index
    ///
    /// `slope = sum((x - x_mean)(y - y_mean)) / sum((x - x_mean)^2)` with
    /// `x = 0, 1, 2, ...`. A zero denominator (fewer than two values) gives `0.0`.
    #[must_use]
    pub fn index_slope(values: &[f64]) -> f64 {
        let n = values.len();
        if n < 2 {
            return 0.0;
        }
        let mean_x = (n - 1) as f64 / 2.0;
        let mean_y = Self::mean(values);

        let (numerator, denominator) =
            values
                .iter()
                .enumerate()
                .fold((0.0_f64, 0.0_f64), |(num, den), (i, y)| {
                    let dx = i as f64 - mean_x;
                    (dx.mul_add(y - mean_y, num), dx.mul_add(dx, den))
                });

        if denominator.abs() < f64::EPSILON {
            0.0
        } else {
            numerator / denominator
        }
    }

    /// Round to `decimals` places (half away from zero)
    #[must_use]
    pub fn round_to(value: f64, decimals: u32) -> f64 {
        let factor = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
        if !factor.is_finite() {
            return value;
        }
        (value * factor).round() / factor
    }
}
