// ABOUTME: Sample source strategy trait and query windows
// ABOUTME: Decouples how samples are loaded from how they are aggregated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Sample Sources
//!
//! A `SampleSource` is one data-loading policy: it hands back the raw samples
//! for a query window and nothing else. Aggregation never depends on the
//! source; it only receives the loaded slice.
//!
//! ## Implementations
//!
//! - `InMemorySource`: a fixed sequence, filtered by the window
//! - `SyntheticSource`: deterministic generated walking-speed data

/// Fixed in-memory samples
pub mod in_memory;
/// Seeded synthetic walking-speed generator
pub mod synthetic;

pub use in_memory::InMemorySource;
pub use synthetic::{SyntheticConfig, SyntheticSource};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use gait_aggregation::constants::chart::LAST_WEEK_DAYS;
use gait_aggregation::errors::{AppError, AppResult};
use gait_aggregation::models::Sample;
use serde::{Deserialize, Serialize};

/// Inclusive range of days a query covers; an open bound is unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryWindow {
    /// First day included
    pub start: Option<NaiveDate>,
    /// Last day included
    pub end: Option<NaiveDate>,
}

impl QueryWindow {
    /// Window without bounds
    #[must_use]
    pub const fn all() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// The seven days before `today`, plus today
    #[must_use]
    pub fn last_week(today: NaiveDate) -> Self {
        Self {
            start: today.checked_sub_signed(Duration::days(LAST_WEEK_DAYS)),
            end: Some(today),
        }
    }

    /// Window between two days, both included
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is after `end`
    pub fn between(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::invalid_input(format!(
                "Query window start {start} is after end {end}"
            )));
        }
        Ok(Self {
            start: Some(start),
            end: Some(end),
        })
    }

    /// Whether `date` falls inside the window
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.into_iter().all(|start| start <= date)
            && self.end.into_iter().all(|end| date <= end)
    }

    /// Whether a sample's start day falls inside the window
    #[must_use]
    pub fn includes(&self, sample: &Sample) -> bool {
        self.contains(sample.start_date)
    }
}

/// One data-loading policy for raw samples
#[async_trait]
pub trait SampleSource: Send + Sync {
    /// Short name used in logs and errors
    fn name(&self) -> &'static str;

    /// Load the raw samples whose start day lies inside `window`
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot produce samples
    async fn load_samples(&self, window: &QueryWindow) -> AppResult<Vec<Sample>>;
}
