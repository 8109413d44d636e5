// ABOUTME: Timeline selection and aggregation policy enums
// ABOUTME: Timeline grain, same-day merge policy and first-day-of-week convention
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grain of a chart series.
///
/// The selected timeline is remembered by the presentation layer; it is stored
/// through its display name and handed back to the engine as a plain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeline {
    /// One bucket per day with data
    #[default]
    Daily,
    /// One bucket per calendar week
    Weekly,
    /// One bucket per calendar month
    Monthly,
}

impl Timeline {
    /// Every timeline, in display order
    pub const ALL: [Self; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    /// Display name, also used as the stored representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    /// Restore a previously stored timeline, defaulting to `Daily`
    /// when nothing was stored or the stored name is unknown
    #[must_use]
    pub fn from_stored(stored: Option<&str>) -> Self {
        stored.and_then(|name| name.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeline {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            other => Err(AppError::invalid_input(format!(
                "Unknown timeline: '{other}'. Valid options: daily, weekly, monthly"
            ))),
        }
    }
}

/// Rule for combining several samples recorded on the same day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Add the values of the day together
    #[default]
    Sum,
    /// Average the values of the day
    Mean,
}

impl MergePolicy {
    /// Configuration name of the policy
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Mean => "mean",
        }
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sum" | "total" => Ok(Self::Sum),
            "mean" | "average" | "avg" => Ok(Self::Mean),
            other => Err(AppError::invalid_input(format!(
                "Unknown merge policy: '{other}'. Valid options: sum, mean"
            ))),
        }
    }
}

/// First day of the calendar week used when bucketing by week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    /// Weeks run Sunday through Saturday
    #[default]
    Sunday,
    /// Weeks run Monday through Sunday
    Monday,
}

impl WeekStart {
    /// The weekday that opens a week
    #[must_use]
    pub const fn first_weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }

    /// Position of `date` inside its week, 0 for the first day through 6
    #[must_use]
    #[allow(clippy::cast_possible_wrap)] // Safe: value is in 0..=6
    pub fn weekday_index(self, date: NaiveDate) -> i32 {
        let weekday = date.weekday();
        let index = match self {
            Self::Sunday => weekday.num_days_from_sunday(),
            Self::Monday => weekday.num_days_from_monday(),
        };
        index as i32
    }

    /// Configuration name of the convention
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekStart {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            other => Err(AppError::invalid_input(format!(
                "Unknown week start: '{other}'. Valid options: sunday, monday"
            ))),
        }
    }
}
