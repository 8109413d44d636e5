// ABOUTME: Weekly aggregation of daily samples into calendar-week buckets
// ABOUTME: Averages over contributing days and pads short sequences with placeholder weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::calendar::offset_date;
use crate::padding::pad_edges;
use chrono::NaiveDate;
use gait_core::constants::calendar::DAYS_PER_WEEK;
use gait_core::models::{Bucket, Sample, WeekStart};
use tracing::{debug, warn};

/// Running sum for one calendar week
#[derive(Debug, Clone, Copy)]
struct WeekAccumulator {
    start_date: NaiveDate,
    end_date: NaiveDate,
    sum: f64,
    count: usize,
}

impl WeekAccumulator {
    fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn finish(self) -> Bucket {
        Bucket::from_sum(self.start_date, self.end_date, self.sum, self.count)
    }
}

/// First and last day of the calendar week containing `date`
#[must_use]
pub fn week_bounds(date: NaiveDate, week_start: WeekStart) -> Option<(NaiveDate, NaiveDate)> {
    let index = week_start.weekday_index(date);
    let start = offset_date(date, -index)?;
    let end = offset_date(date, DAYS_PER_WEEK - 1 - index)?;
    Some((start, end))
}

/// Aggregate daily samples into one bucket per calendar week touched.
///
/// Input is expected deduplicated and ascending, which makes the lookup of the
/// current week an O(1) check against the most recent bucket; out-of-order
/// input is still bucketed correctly. Each bucket's value is the mean over the
/// days that contributed, not over seven days. Sequences of two weeks or fewer
/// get one placeholder week on each side.
#[must_use]
pub fn aggregate_weekly(samples: &[Sample], week_start: WeekStart) -> Vec<Bucket> {
    let mut weeks: Vec<WeekAccumulator> = Vec::new();

    for sample in samples {
        let day = sample.start_date;
        if let Some(week) = weeks.iter_mut().rev().find(|week| week.contains(day)) {
            week.add(sample.value);
            continue;
        }

        match week_bounds(day, week_start) {
            Some((start_date, end_date)) => weeks.push(WeekAccumulator {
                start_date,
                end_date,
                sum: sample.value,
                count: 1,
            }),
            None => warn!(date = %day, "Skipping sample whose week is not representable"),
        }
    }

    let mut buckets: Vec<Bucket> = weeks.into_iter().map(WeekAccumulator::finish).collect();
    buckets.sort_by_key(|bucket| bucket.start_date);

    pad_edges(&mut buckets, previous_week, following_week);

    debug!(
        samples = samples.len(),
        buckets = buckets.len(),
        week_start = %week_start,
        "Aggregated weekly buckets"
    );
    buckets
}

fn previous_week(first: &Bucket) -> Option<Bucket> {
    let start = offset_date(first.start_date, -DAYS_PER_WEEK)?;
    let end = offset_date(first.start_date, -1)?;
    Some(Bucket::placeholder(start, end))
}

fn following_week(last: &Bucket) -> Option<Bucket> {
    let start = offset_date(last.end_date, 1)?;
    let end = offset_date(last.end_date, DAYS_PER_WEEK)?;
    Some(Bucket::placeholder(start, end))
}
