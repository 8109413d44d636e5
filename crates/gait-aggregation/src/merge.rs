// ABOUTME: Same-day deduplication of raw samples under an explicit merge policy
// ABOUTME: Sorts by day, sums or averages duplicates, and drops zero-value days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use gait_core::models::{MergePolicy, Sample};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Deduplicated samples plus the "last updated" marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedSamples {
    /// One sample per day, ascending by `start_date`
    pub samples: Vec<Sample>,
    /// `end_date` of the last merged sample
    pub last_updated: Option<NaiveDate>,
}

/// Collapse samples sharing a `start_date` into one sample per day.
///
/// The caller's slice is left untouched. Days whose merged value is exactly
/// zero carry no data and are dropped; non-finite values are skipped.
#[must_use]
pub fn deduplicate(samples: &[Sample], policy: MergePolicy) -> Vec<Sample> {
    let mut sorted: Vec<Sample> = samples
        .iter()
        .filter(|sample| {
            let finite = sample.value.is_finite();
            if !finite {
                warn!(
                    start_date = %sample.start_date,
                    value = sample.value,
                    "Skipping sample with non-finite value"
                );
            }
            finite
        })
        .copied()
        .collect();
    sorted.sort_by_key(|sample| sample.start_date);

    let mut merged: Vec<Sample> = Vec::with_capacity(sorted.len());
    let mut group = sorted.iter().peekable();

    while let Some(first) = group.next() {
        let mut sum = first.value;
        let mut count = 1_u32;
        let mut end_date = first.end_date;

        while let Some(next) = group.next_if(|next| next.start_date == first.start_date) {
            sum += next.value;
            count += 1;
            end_date = end_date.max(next.end_date);
        }

        let value = match policy {
            MergePolicy::Sum => sum,
            MergePolicy::Mean => sum / f64::from(count),
        };

        if is_no_data(value) {
            continue;
        }
        merged.push(Sample::new(first.start_date, end_date, value));
    }

    debug!(
        input = samples.len(),
        merged = merged.len(),
        policy = %policy,
        "Merged same-day samples"
    );
    merged
}

/// Exact zero means "no data" for the day, not a measured zero
#[allow(clippy::float_cmp)]
fn is_no_data(value: f64) -> bool {
    value == 0.0
}

/// `end_date` of the last sample in a merged sequence
#[must_use]
pub fn last_updated(merged: &[Sample]) -> Option<NaiveDate> {
    merged.last().map(|sample| sample.end_date)
}

/// Deduplicate and expose the "last updated" marker in one step
#[must_use]
pub fn merge_samples(samples: &[Sample], policy: MergePolicy) -> MergedSamples {
    let samples = deduplicate(samples, policy);
    let last_updated = last_updated(&samples);
    MergedSamples {
        samples,
        last_updated,
    }
}
