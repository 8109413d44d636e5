// ABOUTME: Deterministic synthetic walking-speed source for demos, tests and benchmarks
// ABOUTME: Generates seeded daily samples with optional gaps and same-day duplicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Synthetic Walking-Speed Source
//!
//! Produces the same samples for the same seed, which makes it suitable for
//! reproducible tests and benchmarks. Duplicated days exercise the same-day
//! merge step; skipped days exercise sparse weeks.

use super::{QueryWindow, SampleSource};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use gait_aggregation::errors::{AppError, AppResult};
use gait_aggregation::models::Sample;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parameters of the synthetic generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticConfig {
    /// Random seed
    pub seed: u64,
    /// Last generated day
    pub end_date: NaiveDate,
    /// Number of days of history ending at `end_date`
    pub days: u32,
    /// Slowest generated walking speed (m/s)
    pub min_speed: f64,
    /// Fastest generated walking speed (m/s)
    pub max_speed: f64,
    /// Chance that a day gets a second sample
    pub duplicate_probability: f64,
    /// Chance that a day has no sample
    pub gap_probability: f64,
}

impl SyntheticConfig {
    /// Typical adult walking speeds over `days` days ending at `end_date`
    #[must_use]
    pub const fn new(seed: u64, end_date: NaiveDate, days: u32) -> Self {
        Self {
            seed,
            end_date,
            days,
            min_speed: 0.9,
            max_speed: 1.6,
            duplicate_probability: 0.0,
            gap_probability: 0.0,
        }
    }

    /// Set the chance of same-day duplicates
    #[must_use]
    pub const fn with_duplicates(mut self, probability: f64) -> Self {
        self.duplicate_probability = probability;
        self
    }

    /// Set the chance of missing days
    #[must_use]
    pub const fn with_gaps(mut self, probability: f64) -> Self {
        self.gap_probability = probability;
        self
    }

    fn validate(&self) -> AppResult<()> {
        if !(self.min_speed.is_finite() && self.max_speed.is_finite())
            || self.min_speed <= 0.0
            || self.min_speed >= self.max_speed
        {
            return Err(AppError::value_out_of_range(format!(
                "Speed band must satisfy 0 < min < max, got {}..{}",
                self.min_speed, self.max_speed
            )));
        }
        for (name, probability) in [
            ("duplicate_probability", self.duplicate_probability),
            ("gap_probability", self.gap_probability),
        ] {
            if !(0.0..=1.0).contains(&probability) {
                return Err(AppError::value_out_of_range(format!(
                    "{name} must be within 0..=1, got {probability}"
                )));
            }
        }
        Ok(())
    }
}

/// Seeded generator of daily walking-speed samples
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    config: SyntheticConfig,
}

impl SyntheticSource {
    /// Create a source after validating its parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the speed band or a probability is out of range
    pub fn new(config: SyntheticConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generate every sample, oldest day first
    #[must_use]
    pub fn generate(&self) -> Vec<Sample> {
        let config = &self.config;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut samples = Vec::with_capacity(config.days as usize);

        for days_ago in (0..i64::from(config.days)).rev() {
            let Some(day) = config.end_date.checked_sub_signed(Duration::days(days_ago)) else {
                continue;
            };
            if rng.gen_bool(config.gap_probability) {
                continue;
            }
            samples.push(Sample::on_day(day, self.speed(&mut rng)));
            if rng.gen_bool(config.duplicate_probability) {
                samples.push(Sample::on_day(day, self.speed(&mut rng)));
            }
        }
        samples
    }

    /// Random speed inside the band, rounded to centimeters per second
    fn speed(&self, rng: &mut StdRng) -> f64 {
        let raw = rng.gen_range(self.config.min_speed..self.config.max_speed);
        (raw * 100.0).round() / 100.0
    }
}

#[async_trait]
impl SampleSource for SyntheticSource {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn load_samples(&self, window: &QueryWindow) -> AppResult<Vec<Sample>> {
        Ok(self
            .generate()
            .into_iter()
            .filter(|sample| window.includes(sample))
            .collect())
    }
}
