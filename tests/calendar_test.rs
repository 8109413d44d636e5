// ABOUTME: Integration tests for Gregorian calendar arithmetic
// ABOUTME: Covers leap years, month lengths, offset rollovers and timestamp decomposition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{FixedOffset, TimeZone, Utc};
use common::date;
use gait_timeline::calendar::{
    compose_date, compose_offset_date, days_in_month, decompose_timestamp, first_day_of_month,
    last_day_of_month, parse_day, simple_date, CalendarDate,
};
use gait_timeline::errors::ErrorCode;
use gait_timeline::models::Sample;

#[test]
fn test_february_lengths() {
    assert_eq!(days_in_month(2, 2000), 29);
    assert_eq!(days_in_month(2, 1900), 28);
    assert_eq!(days_in_month(2, 2024), 29);
    assert_eq!(days_in_month(2, 2023), 28);
}

#[test]
fn test_offsets_across_month_ends() {
    assert_eq!(compose_offset_date(2024, 1, 31, 1), Some(date(2024, 2, 1)));
    assert_eq!(compose_offset_date(2024, 3, 1, -1), Some(date(2024, 2, 29)));
    assert_eq!(compose_offset_date(2023, 1, 31, 3), Some(date(2023, 2, 3)));
    assert_eq!(compose_offset_date(2024, 3, 1, -3), Some(date(2024, 2, 27)));
    assert_eq!(compose_offset_date(2023, 3, 1, -3), Some(date(2023, 2, 26)));
}

#[test]
fn test_offsets_across_year_ends() {
    assert_eq!(compose_offset_date(2020, 12, 29, 7), Some(date(2021, 1, 5)));
    assert_eq!(compose_offset_date(2021, 1, 3, -7), Some(date(2020, 12, 27)));
}

#[test]
fn test_last_day_sentinel() {
    assert_eq!(compose_date(2024, 2, -1), Some(date(2024, 2, 29)));
    assert_eq!(compose_date(2023, 4, -1), Some(date(2023, 4, 30)));
    assert_eq!(compose_date(2023, 4, 31), None);
    assert_eq!(first_day_of_month(date(2023, 4, 17)), Some(date(2023, 4, 1)));
    assert_eq!(last_day_of_month(date(2023, 4, 17)), Some(date(2023, 4, 30)));
}

#[test]
fn test_decompose_timestamp_drops_time_of_day() {
    // 2021-03-25 13:45:00 UTC
    assert_eq!(
        decompose_timestamp(1_616_679_900),
        Some(CalendarDate {
            year: 2021,
            month: 3,
            day: 25
        })
    );
    assert_eq!(decompose_timestamp(i64::MAX), None);
}

#[test]
fn test_simple_date_uses_local_calendar_day() {
    let late_evening = FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2021, 3, 25, 23, 30, 0)
        .unwrap();

    assert_eq!(simple_date(&late_evening), date(2021, 3, 25));
    assert_eq!(simple_date(&late_evening.with_timezone(&Utc)), date(2021, 3, 26));
}

#[test]
fn test_sample_from_timestamps() {
    let start = Utc.with_ymd_and_hms(2021, 3, 25, 8, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2021, 3, 25, 20, 0, 0).unwrap();

    let sample = Sample::from_timestamps(&start, &end, 1.25);

    assert_eq!(sample, Sample::on_day(date(2021, 3, 25), 1.25));
}

#[test]
fn test_parse_day() {
    assert_eq!(parse_day("2024-02-29").unwrap(), date(2024, 2, 29));
    assert_eq!(parse_day(" 2021-03-05 ").unwrap(), date(2021, 3, 5));

    let err = parse_day("2023-02-29").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert!(parse_day("03/05/2021").is_err());
}
