// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides date helpers, sample builders and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `gait_timeline`

use chrono::NaiveDate;
use gait_timeline::models::Sample;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Build a date, panicking on invalid input
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// A single-day sample
pub fn day_sample(year: i32, month: u32, day: u32, value: f64) -> Sample {
    Sample::on_day(date(year, month, day), value)
}

/// One sample per day, `days` days starting at `start`, all with `value`
pub fn constant_run(start: NaiveDate, days: u32, value: f64) -> Vec<Sample> {
    start
        .iter_days()
        .take(days as usize)
        .map(|day| Sample::on_day(day, value))
        .collect()
}

/// Float comparison with a tolerance suited to averaged speeds
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
