// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Calendar tables, chart defaults, environment variable names and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Gregorian calendar tables
pub mod calendar {
    /// Days of each month in a common year; February is adjusted for leap years
    pub const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    /// Three-letter month abbreviations used in chart labels
    pub const MONTH_ABBREVIATIONS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    /// Number of days in a calendar week
    pub const DAYS_PER_WEEK: i32 = 7;

    /// Months in a year
    pub const MONTHS_PER_YEAR: u32 = 12;

    /// Day sentinel meaning "last day of the month" when composing a date
    pub const LAST_DAY_OF_MONTH: i32 = -1;
}

/// Chart presentation defaults
pub mod chart {
    /// Default rounding step for the y-axis ceiling (m/s)
    pub const DEFAULT_AXIS_STEP: f64 = 0.25;

    /// Ceiling used when there is no positive value to bound
    pub const DEFAULT_AXIS_CEILING: f64 = 1.0;

    /// Bucket sequences of this length or shorter get a placeholder on each side
    pub const EDGE_PADDING_MAX_BUCKETS: usize = 2;

    /// Days covered by the "last week" query window, counted back from today
    pub const LAST_WEEK_DAYS: i64 = 7;
}

/// Environment variable names read by the configuration layers
pub mod env_config {
    /// Same-day merge policy (`sum` or `mean`)
    pub const MERGE_POLICY: &str = "GAIT_MERGE_POLICY";
    /// First day of the week (`sunday` or `monday`)
    pub const WEEK_START: &str = "GAIT_WEEK_START";
    /// Y-axis rounding step
    pub const AXIS_STEP: &str = "GAIT_AXIS_STEP";
    /// Y-axis ceiling for empty series
    pub const DEFAULT_AXIS_CEILING: &str = "GAIT_DEFAULT_AXIS_CEILING";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Library/service name
    pub const GAIT_TIMELINE: &str = "gait-timeline";
}
