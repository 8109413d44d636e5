// ABOUTME: Benchmark fixtures generating realistic walking-speed histories
// ABOUTME: Deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for walking-speed samples.

use chrono::NaiveDate;
use gait_timeline::models::Sample;
use gait_timeline::sources::{SyntheticConfig, SyntheticSource};

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistoryLength {
    /// One month of data
    Month,
    /// One year of data
    Year,
    /// Five years of data
    FiveYears,
}

impl HistoryLength {
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Month => 30,
            Self::Year => 365,
            Self::FiveYears => 1826,
        }
    }
}

/// Fixed end date so every run sees the same calendar layout
fn bench_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default()
}

/// Generate a history with a quarter of the days duplicated and a tenth missing
#[must_use]
pub fn generate_history(length: HistoryLength) -> Vec<Sample> {
    let config = SyntheticConfig::new(7, bench_end_date(), length.days())
        .with_duplicates(0.25)
        .with_gaps(0.1);
    SyntheticSource::new(config).map_or_else(|_| Vec::new(), |source| source.generate())
}
