// ABOUTME: Gregorian calendar arithmetic for day-grained timelines
// ABOUTME: Date decomposition/composition, leap years, month lengths and offset-date rollover
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calendar arithmetic used throughout the aggregation engine.
//!
//! Every function is pure. Unrepresentable dates are reported as `None` so the
//! caller can skip the record; no function here ever yields day 0, day 32 or
//! month 13.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use gait_core::constants::calendar::{DAYS_PER_MONTH, LAST_DAY_OF_MONTH, MONTHS_PER_YEAR};
use gait_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Year, month and day components of a calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarDate {
    /// Gregorian year
    pub year: i32,
    /// Month, 1 through 12
    pub month: u32,
    /// Day of month, 1 through 31
    pub day: u32,
}

impl CalendarDate {
    /// Rebuild the date these components describe
    #[must_use]
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// Extract the calendar components of a date or instant, ignoring the time of day
#[must_use]
pub fn decompose<D: Datelike>(date: &D) -> CalendarDate {
    CalendarDate {
        year: date.year(),
        month: date.month(),
        day: date.day(),
    }
}

/// Extract the calendar components (UTC) of a Unix timestamp in seconds.
///
/// Returns `None` when the timestamp is outside the representable range.
#[must_use]
pub fn decompose_timestamp(unix_seconds: i64) -> Option<CalendarDate> {
    DateTime::from_timestamp(unix_seconds, 0).map(|instant| decompose(&instant))
}

/// Strip the time of day from an instant, keeping its local calendar day
#[must_use]
pub fn simple_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

/// Gregorian leap-year rule
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Number of days in `month` of `year` (28 through 31).
///
/// Returns 0 for a month outside 1..=12.
#[must_use]
pub fn days_in_month(month: u32, year: i32) -> u32 {
    if month == 2 && is_leap_year(year) {
        return 29;
    }
    month
        .checked_sub(1)
        .and_then(|index| DAYS_PER_MONTH.get(index as usize))
        .copied()
        .unwrap_or(0)
}

/// Month following `(year, month)`
#[must_use]
pub const fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= MONTHS_PER_YEAR {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Month preceding `(year, month)`
#[must_use]
pub const fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, MONTHS_PER_YEAR)
    } else {
        (year, month - 1)
    }
}

/// Build the date `year-month-day`.
///
/// `day == LAST_DAY_OF_MONTH` (-1) selects the last day of the month.
#[must_use]
pub fn compose_date(year: i32, month: u32, day: i32) -> Option<NaiveDate> {
    let day = if day == LAST_DAY_OF_MONTH {
        days_in_month(month, year)
    } else {
        u32::try_from(day).ok()?
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Build the date `offset` days away from `year-month-day`.
///
/// The day may start out of range for its month; the result is rolled forward
/// by the length of the month being left, or backward by the length of the
/// month being entered, until it lands on a valid day.
#[must_use]
pub fn compose_offset_date(year: i32, month: u32, day: i32, offset: i32) -> Option<NaiveDate> {
    if !(1..=MONTHS_PER_YEAR).contains(&month) {
        return None;
    }

    let (mut year, mut month) = (year, month);
    let mut day = i64::from(day) + i64::from(offset);

    loop {
        let month_length = i64::from(days_in_month(month, year));
        if day > month_length {
            day -= month_length;
            if month == MONTHS_PER_YEAR {
                year = year.checked_add(1)?;
                month = 1;
            } else {
                month += 1;
            }
        } else if day <= 0 {
            if month == 1 {
                year = year.checked_sub(1)?;
                month = MONTHS_PER_YEAR;
            } else {
                month -= 1;
            }
            day += i64::from(days_in_month(month, year));
        } else {
            break;
        }
    }

    compose_date(year, month, i32::try_from(day).ok()?)
}

/// Shift a date by `offset` days using [`compose_offset_date`]
#[must_use]
pub fn offset_date(date: NaiveDate, offset: i32) -> Option<NaiveDate> {
    let parts = decompose(&date);
    let day = i32::try_from(parts.day).ok()?;
    compose_offset_date(parts.year, parts.month, day, offset)
}

/// First day of the month containing `date`
#[must_use]
pub fn first_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    compose_date(date.year(), date.month(), 1)
}

/// Last day of the month containing `date`
#[must_use]
pub fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    compose_date(date.year(), date.month(), LAST_DAY_OF_MONTH)
}

/// Parse an ISO `YYYY-MM-DD` day
///
/// # Errors
///
/// Returns an error if `raw` is not a valid calendar day
pub fn parse_day(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| AppError::invalid_format(format!("Invalid day '{raw}': {e}")).with_source(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2, 2000), 29);
        assert_eq!(days_in_month(2, 1900), 28);
        assert_eq!(days_in_month(2, 2024), 29);
        assert_eq!(days_in_month(2, 2023), 28);
        assert_eq!(days_in_month(1, 2023), 31);
        assert_eq!(days_in_month(4, 2023), 30);
        assert_eq!(days_in_month(12, 2023), 31);
        assert_eq!(days_in_month(0, 2023), 0);
        assert_eq!(days_in_month(13, 2023), 0);
    }

    #[test]
    fn test_compose_date_last_day_sentinel() {
        assert_eq!(compose_date(2024, 2, LAST_DAY_OF_MONTH), Some(ymd(2024, 2, 29)));
        assert_eq!(compose_date(2023, 2, LAST_DAY_OF_MONTH), Some(ymd(2023, 2, 28)));
        assert_eq!(compose_date(2023, 4, LAST_DAY_OF_MONTH), Some(ymd(2023, 4, 30)));
    }

    #[test]
    fn test_compose_date_rejects_invalid_days() {
        assert_eq!(compose_date(2023, 2, 29), None);
        assert_eq!(compose_date(2023, 1, 0), None);
        assert_eq!(compose_date(2023, 1, -2), None);
        assert_eq!(compose_date(2023, 13, 1), None);
    }

    #[test]
    fn test_offset_rolls_forward_across_month() {
        assert_eq!(compose_offset_date(2024, 1, 31, 1), Some(ymd(2024, 2, 1)));
        assert_eq!(compose_offset_date(2021, 1, 31, 3), Some(ymd(2021, 2, 3)));
        assert_eq!(compose_offset_date(2023, 2, 27, 3), Some(ymd(2023, 3, 2)));
        assert_eq!(compose_offset_date(2024, 2, 27, 3), Some(ymd(2024, 3, 1)));
    }

    #[test]
    fn test_offset_rolls_backward_across_month() {
        assert_eq!(compose_offset_date(2024, 3, 1, -1), Some(ymd(2024, 2, 29)));
        assert_eq!(compose_offset_date(2024, 3, 1, -3), Some(ymd(2024, 2, 27)));
        assert_eq!(compose_offset_date(2023, 3, 1, -1), Some(ymd(2023, 2, 28)));
        assert_eq!(compose_offset_date(2023, 5, 3, -7), Some(ymd(2023, 4, 26)));
    }

    #[test]
    fn test_offset_rolls_across_year() {
        assert_eq!(compose_offset_date(2023, 12, 31, 1), Some(ymd(2024, 1, 1)));
        assert_eq!(compose_offset_date(2023, 12, 28, 7), Some(ymd(2024, 1, 4)));
        assert_eq!(compose_offset_date(2024, 1, 1, -1), Some(ymd(2023, 12, 31)));
        assert_eq!(compose_offset_date(2024, 1, 3, -6), Some(ymd(2023, 12, 28)));
    }

    #[test]
    fn test_offset_accepts_out_of_range_start_day() {
        // Day 0 of March is the last day of February
        assert_eq!(compose_offset_date(2024, 3, 0, 0), Some(ymd(2024, 2, 29)));
        assert_eq!(compose_offset_date(2023, 1, 35, 0), Some(ymd(2023, 2, 4)));
        assert_eq!(compose_offset_date(2023, 1, 10, 60), Some(ymd(2023, 3, 11)));
        assert_eq!(compose_offset_date(2023, 13, 1, 0), None);
    }

    #[test]
    fn test_offset_date_matches_chrono() {
        let start = ymd(2019, 11, 15);
        for offset in -400..400 {
            let expected = start + chrono::Duration::days(i64::from(offset));
            assert_eq!(offset_date(start, offset), Some(expected), "offset {offset}");
        }
    }

    #[test]
    fn test_decompose() {
        let parts = decompose(&ymd(2021, 3, 25));
        assert_eq!(
            parts,
            CalendarDate {
                year: 2021,
                month: 3,
                day: 25
            }
        );
        assert_eq!(parts.to_naive_date(), Some(ymd(2021, 3, 25)));
    }

    #[test]
    fn test_decompose_timestamp() {
        // 2021-03-25T13:45:00Z
        let parts = decompose_timestamp(1_616_679_900).unwrap();
        assert_eq!((parts.year, parts.month, parts.day), (2021, 3, 25));
        assert_eq!(decompose_timestamp(i64::MAX), None);
    }

    #[test]
    fn test_month_neighbours() {
        assert_eq!(next_month(2023, 12), (2024, 1));
        assert_eq!(next_month(2023, 6), (2023, 7));
        assert_eq!(previous_month(2024, 1), (2023, 12));
        assert_eq!(previous_month(2024, 3), (2024, 2));
        assert_eq!(first_day_of_month(ymd(2024, 2, 17)), Some(ymd(2024, 2, 1)));
        assert_eq!(last_day_of_month(ymd(2024, 2, 17)), Some(ymd(2024, 2, 29)));
    }
}
