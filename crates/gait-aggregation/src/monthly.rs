// ABOUTME: Monthly aggregation of daily samples into calendar-month buckets
// ABOUTME: Averages over days present and pads short sequences with placeholder months
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::calendar::{compose_date, next_month, previous_month};
use crate::padding::pad_edges;
use chrono::{Datelike, NaiveDate};
use gait_core::constants::calendar::LAST_DAY_OF_MONTH;
use gait_core::models::{Bucket, Sample};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// First and last day of `(year, month)`
#[must_use]
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    Some((
        compose_date(year, month, 1)?,
        compose_date(year, month, LAST_DAY_OF_MONTH)?,
    ))
}

/// Aggregate daily samples into one bucket per calendar month present.
///
/// The value is the mean over the days that contributed, not over the length
/// of the month. Buckets come out ascending regardless of input order.
/// Sequences of two months or fewer get a placeholder month on each side.
#[must_use]
pub fn aggregate_monthly(samples: &[Sample]) -> Vec<Bucket> {
    // Keyed by (year, month) so iteration is already chronological
    let mut months: BTreeMap<(i32, u32), (f64, usize)> = BTreeMap::new();
    for sample in samples {
        let key = (sample.start_date.year(), sample.start_date.month());
        let entry = months.entry(key).or_insert((0.0, 0));
        entry.0 += sample.value;
        entry.1 += 1;
    }

    let mut buckets: Vec<Bucket> = months
        .into_iter()
        .filter_map(|((year, month), (sum, count))| {
            let bounds = month_bounds(year, month);
            if bounds.is_none() {
                warn!(year, month, "Skipping month that is not representable");
            }
            bounds.map(|(start, end)| Bucket::from_sum(start, end, sum, count))
        })
        .collect();

    pad_edges(&mut buckets, previous_month_placeholder, next_month_placeholder);

    debug!(
        samples = samples.len(),
        buckets = buckets.len(),
        "Aggregated monthly buckets"
    );
    buckets
}

fn previous_month_placeholder(first: &Bucket) -> Option<Bucket> {
    let (year, month) = previous_month(first.start_date.year(), first.start_date.month());
    month_bounds(year, month).map(|(start, end)| Bucket::placeholder(start, end))
}

fn next_month_placeholder(last: &Bucket) -> Option<Bucket> {
    let (year, month) = next_month(last.start_date.year(), last.start_date.month());
    month_bounds(year, month).map(|(start, end)| Bucket::placeholder(start, end))
}
