// ABOUTME: Sample and Bucket models for daily measurements and aggregated ranges
// ABOUTME: Includes day normalisation of raw instants and placeholder detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// One measurement attributed to a calendar day range.
///
/// Walking speed is expressed in meters per second. `start_date <= end_date`
/// and several samples may share the same `start_date`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// First day covered by the measurement
    pub start_date: NaiveDate,
    /// Last day covered by the measurement
    pub end_date: NaiveDate,
    /// Measured value (non-negative)
    pub value: f64,
}

impl Sample {
    /// Create a sample; the dates are swapped if given in reverse order
    #[must_use]
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, value: f64) -> Self {
        if end_date < start_date {
            Self {
                start_date: end_date,
                end_date: start_date,
                value,
            }
        } else {
            Self {
                start_date,
                end_date,
                value,
            }
        }
    }

    /// Create a sample covering a single day
    #[must_use]
    pub const fn on_day(date: NaiveDate, value: f64) -> Self {
        Self {
            start_date: date,
            end_date: date,
            value,
        }
    }

    /// Create a sample from raw instants, dropping the time of day
    #[must_use]
    pub fn from_timestamps<Tz: TimeZone>(
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
        value: f64,
    ) -> Self {
        Self::new(start.date_naive(), end.date_naive(), value)
    }
}

/// One aggregated record spanning a day, a calendar week or a calendar month.
///
/// `value` is the mean of the contributing samples. A bucket without
/// contributing samples is a placeholder whose value is `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// First day of the range (inclusive)
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive)
    pub end_date: NaiveDate,
    /// Mean of the contributing values
    pub value: f64,
    /// Number of samples that contributed to `value`
    pub sample_count: usize,
}

impl Bucket {
    /// Create a bucket from an accumulated sum and count
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Safe: sample counts stay far below 2^52
    pub fn from_sum(start_date: NaiveDate, end_date: NaiveDate, sum: f64, count: usize) -> Self {
        let value = if count == 0 { 0.0 } else { sum / count as f64 };
        Self {
            start_date,
            end_date,
            value,
            sample_count: count,
        }
    }

    /// Create a zero-value placeholder bucket used for chart padding
    #[must_use]
    pub const fn placeholder(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            value: 0.0,
            sample_count: 0,
        }
    }

    /// Whether this bucket exists only to pad a chart
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.sample_count == 0
    }

    /// Whether `date` falls inside the bucket range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Length of the range in days, both ends included
    #[must_use]
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

impl From<Sample> for Bucket {
    fn from(sample: Sample) -> Self {
        Self {
            start_date: sample.start_date,
            end_date: sample.end_date,
            value: sample.value,
            sample_count: 1,
        }
    }
}
