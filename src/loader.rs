// ABOUTME: Chart loader tying a sample source to the aggregation pipeline
// ABOUTME: Loads raw samples for a window and builds the daily, weekly and monthly series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logging::AppLogger;
use crate::sources::{QueryWindow, SampleSource};
use gait_aggregation::errors::{AppError, AppResult};
use gait_aggregation::models::Timeline;
use gait_aggregation::{build_chart_set, AggregationConfig, ChartSet, TimelineSeries};
use std::time::Instant;
use tracing::{debug, warn};

/// Loads samples from a source and turns them into chart series
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartLoader {
    config: AggregationConfig,
}

impl ChartLoader {
    /// Create a loader after validating the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: AggregationConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration every load uses
    #[must_use]
    pub const fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Load the raw samples in `window` and build all three series
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to load its samples
    pub async fn load(
        &self,
        source: &dyn SampleSource,
        window: &QueryWindow,
    ) -> AppResult<ChartSet> {
        let started = Instant::now();
        debug!(source = source.name(), ?window, "Loading samples");

        let samples = source.load_samples(window).await.map_err(|e| {
            warn!(source = source.name(), error = %e, "Sample source failed");
            AppError::source_unavailable(source.name(), e.message.clone()).with_source(e)
        })?;

        let chart_set = build_chart_set(&samples, &self.config);
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_chart_load(
            source.name(),
            samples.len(),
            chart_set.daily.buckets.len(),
            duration_ms,
        );
        Ok(chart_set)
    }

    /// Load and keep only the series for `timeline`
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to load its samples
    pub async fn load_timeline(
        &self,
        source: &dyn SampleSource,
        window: &QueryWindow,
        timeline: Timeline,
    ) -> AppResult<TimelineSeries> {
        Ok(self.load(source, window).await?.into_series(timeline))
    }
}
