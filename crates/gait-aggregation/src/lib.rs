// ABOUTME: Date-bucketing aggregation engine for walking-speed samples
// ABOUTME: Converts irregular daily samples into daily, weekly and monthly chart series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Gait Aggregation
//!
//! Pure, synchronous functions that turn a possibly-duplicated sequence of daily
//! walking-speed samples into fixed-grain series:
//!
//! 1. [`merge::deduplicate`] collapses same-day samples under a [`MergePolicy`]
//! 2. [`weekly::aggregate_weekly`] / [`monthly::aggregate_monthly`] bucket the days
//! 3. [`labels`] and [`bounds`] annotate the buckets for a chart
//!
//! Nothing is cached between calls; every result is a function of the input
//! slice and the explicit [`AggregationConfig`].
//!
//! [`MergePolicy`]: gait_core::models::MergePolicy

// Re-export gait-core modules so callers need a single dependency
pub use gait_core::constants;
pub use gait_core::errors;
pub use gait_core::models;

/// Y-axis ceiling computation
pub mod bounds;
/// Gregorian calendar arithmetic
pub mod calendar;
/// Aggregation settings
pub mod config;
/// Range, axis and "last updated" labels
pub mod labels;
/// Same-day deduplication
pub mod merge;
/// Calendar-month buckets
pub mod monthly;
/// Placeholder padding for short sequences
pub mod padding;
/// Timeline selection and chart sets
pub mod timeline;
/// Calendar-week buckets
pub mod weekly;

pub use bounds::compute_max_value;
pub use config::{AggregationConfig, ConfigError};
pub use merge::{deduplicate, merge_samples, MergedSamples};
pub use monthly::aggregate_monthly;
pub use timeline::{build_chart_set, select_timeline, ChartSet, TimelineSeries};
pub use weekly::aggregate_weekly;
