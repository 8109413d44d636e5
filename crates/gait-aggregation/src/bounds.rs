// ABOUTME: Y-axis bound computation for walking-speed charts
// ABOUTME: Rounds the largest value up to the next multiple of a step with a safe default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use gait_core::constants::chart::{DEFAULT_AXIS_CEILING, DEFAULT_AXIS_STEP};
use gait_core::models::Bucket;
use tracing::warn;

/// Smallest multiple of `step` strictly greater than the largest value.
///
/// Empty, all-zero or non-positive input yields [`DEFAULT_AXIS_CEILING`].
/// A step that is not positive and finite falls back to [`DEFAULT_AXIS_STEP`].
#[must_use]
pub fn compute_max_value(values: &[f64], step: f64) -> f64 {
    compute_max_value_or(values, step, DEFAULT_AXIS_CEILING)
}

/// [`compute_max_value`] with an explicit ceiling for input without positive values
#[must_use]
pub fn compute_max_value_or(values: &[f64], step: f64, default_ceiling: f64) -> f64 {
    let step = if step.is_finite() && step > 0.0 {
        step
    } else {
        warn!(step, "Invalid axis step, using default");
        DEFAULT_AXIS_STEP
    };

    let max = values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);

    if max <= 0.0 {
        return default_ceiling;
    }
    next_multiple_above(max, step)
}

/// Axis ceiling for a bucket series
#[must_use]
pub fn bucket_ceiling(buckets: &[Bucket], step: f64, default_ceiling: f64) -> f64 {
    let values: Vec<f64> = buckets.iter().map(|bucket| bucket.value).collect();
    compute_max_value_or(&values, step, default_ceiling)
}

fn next_multiple_above(max: f64, step: f64) -> f64 {
    let steps = (max / step).floor() + 1.0;
    let ceiling = steps * step;
    // Division can land one step short when max is within rounding of a multiple
    if ceiling <= max {
        (steps + 1.0) * step
    } else {
        ceiling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_up_to_next_step() {
        assert!((compute_max_value(&[0.9, 1.3], 0.25) - 1.5).abs() < f64::EPSILON);
        assert!((compute_max_value(&[0.1], 0.25) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exact_multiple_moves_to_next_step() {
        assert!((compute_max_value(&[1.5], 0.25) - 1.75).abs() < f64::EPSILON);
        assert!(compute_max_value(&[0.3], 0.1) > 0.3);
    }

    #[test]
    fn test_empty_and_zero_input_use_default() {
        assert!((compute_max_value(&[], 0.25) - DEFAULT_AXIS_CEILING).abs() < f64::EPSILON);
        assert!((compute_max_value(&[0.0, 0.0], 0.25) - DEFAULT_AXIS_CEILING).abs() < f64::EPSILON);
        assert!((compute_max_value_or(&[], 0.25, 2.0) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_step_falls_back() {
        assert!((compute_max_value(&[1.3], 0.0) - 1.5).abs() < f64::EPSILON);
        assert!((compute_max_value(&[1.3], f64::NAN) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_finite_values_ignored() {
        assert!((compute_max_value(&[f64::INFINITY, 0.6], 0.25) - 0.75).abs() < f64::EPSILON);
    }
}
