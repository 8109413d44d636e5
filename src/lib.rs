// ABOUTME: Main library entry point for the walking-speed timeline engine
// ABOUTME: Wires sample sources, the aggregation pipeline and structured logging together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Gait Timeline
//!
//! Turns raw walking-speed samples into chart-ready daily, weekly and monthly
//! series. The pure aggregation lives in the `gait-aggregation` crate; this crate
//! adds the pieces around it:
//!
//! - **Sources**: where raw samples come from ([`sources::SampleSource`])
//! - **Loader**: runs a source through the pipeline ([`loader::ChartLoader`])
//! - **Logging**: tracing-subscriber setup shared by the binary and embedders
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use gait_timeline::loader::ChartLoader;
//! use gait_timeline::models::Sample;
//! use gait_timeline::sources::{InMemorySource, QueryWindow};
//!
//! # async fn example() -> gait_timeline::errors::AppResult<()> {
//! let day = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap_or_default();
//! let source = InMemorySource::new(vec![Sample::on_day(day, 1.2)]);
//! let charts = ChartLoader::default().load(&source, &QueryWindow::all()).await?;
//! assert_eq!(charts.daily.buckets.len(), 1);
//! # Ok(())
//! # }
//! ```

/// Loads sources through the aggregation pipeline
pub mod loader;

/// Structured logging setup
pub mod logging;

/// Raw sample sources
pub mod sources;

// Re-export the engine so embedders need a single dependency
pub use gait_aggregation::{
    bounds, calendar, config, constants, errors, labels, merge, models, monthly, padding,
    timeline, weekly,
};
pub use gait_aggregation::{
    build_chart_set, select_timeline, AggregationConfig, ChartSet, TimelineSeries,
};
