// ABOUTME: Timeline selection entry point producing chart-ready series
// ABOUTME: Builds daily, weekly and monthly series with labels and y-axis bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::bounds::bucket_ceiling;
use crate::config::AggregationConfig;
use crate::labels::{axis_labels, last_updated_label, range_label};
use crate::merge::merge_samples;
use crate::monthly::aggregate_monthly;
use crate::weekly::aggregate_weekly;
use chrono::NaiveDate;
use gait_core::models::{Bucket, Sample, Timeline};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One chart-ready series for a single timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSeries {
    /// Grain of the series
    pub timeline: Timeline,
    /// Buckets in ascending order, placeholders included
    pub buckets: Vec<Bucket>,
    /// One axis label per bucket
    pub labels: Vec<String>,
    /// Date range covered by real data
    pub range_label: Option<String>,
    /// Rounded-up y-axis ceiling
    pub y_maximum: f64,
}

impl TimelineSeries {
    /// Bucket values in order
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.buckets.iter().map(|bucket| bucket.value).collect()
    }

    /// Whether the series has no buckets at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Bucket a deduplicated daily sequence at the requested grain.
///
/// Daily buckets mirror the samples one-to-one.
#[must_use]
pub fn aggregate(daily: &[Sample], timeline: Timeline, config: &AggregationConfig) -> Vec<Bucket> {
    match timeline {
        Timeline::Daily => daily.iter().copied().map(Bucket::from).collect(),
        Timeline::Weekly => aggregate_weekly(daily, config.week_start),
        Timeline::Monthly => aggregate_monthly(daily),
    }
}

/// Build the series for the timeline the user selected.
///
/// `daily` must already be deduplicated; see [`build_chart_set`] for the
/// variant that starts from raw samples.
#[must_use]
pub fn select_timeline(
    daily: &[Sample],
    timeline: Timeline,
    config: &AggregationConfig,
) -> TimelineSeries {
    let buckets = aggregate(daily, timeline, config);
    let labels = axis_labels(&buckets, timeline);
    let range_label = range_label(&buckets);
    let y_maximum = bucket_ceiling(&buckets, config.axis_step, config.default_axis_ceiling);

    TimelineSeries {
        timeline,
        buckets,
        labels,
        range_label,
        y_maximum,
    }
}

/// Daily, weekly and monthly series derived from one raw sample sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSet {
    /// One bucket per day with data
    pub daily: TimelineSeries,
    /// One bucket per calendar week
    pub weekly: TimelineSeries,
    /// One bucket per calendar month
    pub monthly: TimelineSeries,
    /// `end_date` of the most recent merged sample
    pub last_updated: Option<NaiveDate>,
}

impl ChartSet {
    /// Series for a timeline
    #[must_use]
    pub const fn series(&self, timeline: Timeline) -> &TimelineSeries {
        match timeline {
            Timeline::Daily => &self.daily,
            Timeline::Weekly => &self.weekly,
            Timeline::Monthly => &self.monthly,
        }
    }

    /// Consume the set, keeping only one timeline
    #[must_use]
    pub fn into_series(self, timeline: Timeline) -> TimelineSeries {
        match timeline {
            Timeline::Daily => self.daily,
            Timeline::Weekly => self.weekly,
            Timeline::Monthly => self.monthly,
        }
    }

    /// Chart header text for the most recent data
    #[must_use]
    pub fn last_updated_label(&self) -> Option<String> {
        self.last_updated.map(last_updated_label)
    }
}

/// Deduplicate raw samples and build all three series.
///
/// Weekly and monthly series without a range label of their own reuse the
/// daily one.
#[must_use]
pub fn build_chart_set(raw: &[Sample], config: &AggregationConfig) -> ChartSet {
    let merged = merge_samples(raw, config.merge_policy);

    let daily = select_timeline(&merged.samples, Timeline::Daily, config);
    let mut weekly = select_timeline(&merged.samples, Timeline::Weekly, config);
    let mut monthly = select_timeline(&merged.samples, Timeline::Monthly, config);

    if weekly.range_label.is_none() {
        weekly.range_label.clone_from(&daily.range_label);
    }
    if monthly.range_label.is_none() {
        monthly.range_label.clone_from(&daily.range_label);
    }

    debug!(
        raw = raw.len(),
        days = daily.buckets.len(),
        weeks = weekly.buckets.len(),
        months = monthly.buckets.len(),
        "Built chart set"
    );

    ChartSet {
        daily,
        weekly,
        monthly,
        last_updated: merged.last_updated,
    }
}
