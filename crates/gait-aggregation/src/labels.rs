// ABOUTME: Human-readable labels for bucket sequences and individual buckets
// ABOUTME: Date-range timestamps, per-bucket axis labels and "last updated" text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Label formatting for chart series.
//!
//! Month names come from a fixed English table so labels never depend on the
//! process locale.

use chrono::{Datelike, NaiveDate};
use gait_core::constants::calendar::MONTH_ABBREVIATIONS;
use gait_core::models::{Bucket, Timeline};

/// Three-letter abbreviation for a month number (1-12); empty when out of range
#[must_use]
pub fn month_abbreviation(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_ABBREVIATIONS.get(index as usize))
        .copied()
        .unwrap_or_default()
}

/// Describe the range covered by the non-placeholder buckets of a sequence.
///
/// Formats as `"Mar 1 - 7, 2021"`, `"Mar 29 - Apr 4, 2021"` or
/// `"Dec 28, 2020 - Jan 3, 2021"`; a single day renders as `"Mar 5, 2021"`.
/// Returns `None` when no bucket has a positive value.
#[must_use]
pub fn range_label(buckets: &[Bucket]) -> Option<String> {
    let first = buckets.iter().find(|bucket| bucket.value > 0.0)?;
    let last = buckets.iter().rev().find(|bucket| bucket.value > 0.0)?;
    Some(format_range(first.start_date, last.end_date))
}

fn format_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        return medium_date(end);
    }

    let same_year = start.year() == end.year();
    let same_month = same_year && start.month() == end.month();

    let head = if same_year {
        format!("{} {}", month_abbreviation(start.month()), start.day())
    } else {
        medium_date(start)
    };
    let tail = if same_month {
        format!("{}, {}", end.day(), end.year())
    } else {
        medium_date(end)
    };
    format!("{head} - {tail}")
}

/// `"Mar 5, 2021"`
fn medium_date(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        month_abbreviation(date.month()),
        date.day(),
        date.year()
    )
}

/// `"M/d"` without zero padding
fn month_day(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

/// Axis label of one bucket for the given timeline.
///
/// Daily buckets read `"3/7"`, weekly buckets `"3/7-3/13"` and monthly buckets
/// `"Mar"`.
#[must_use]
pub fn axis_label(bucket: &Bucket, timeline: Timeline) -> String {
    match timeline {
        Timeline::Daily => month_day(bucket.start_date),
        Timeline::Weekly => format!(
            "{}-{}",
            month_day(bucket.start_date),
            month_day(bucket.end_date)
        ),
        Timeline::Monthly => month_abbreviation(bucket.start_date.month()).to_owned(),
    }
}

/// Axis labels for every bucket of a series
#[must_use]
pub fn axis_labels(buckets: &[Bucket], timeline: Timeline) -> Vec<String> {
    buckets
        .iter()
        .map(|bucket| axis_label(bucket, timeline))
        .collect()
}

/// Chart header text for the most recent data
#[must_use]
pub fn last_updated_label(date: NaiveDate) -> String {
    format!("Last updated on {}", medium_date(date))
}
