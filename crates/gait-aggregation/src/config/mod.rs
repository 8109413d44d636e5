// ABOUTME: Aggregation configuration with environment overrides and validation
// ABOUTME: Merge policy, week-start convention and y-axis rounding settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Aggregation configuration.
//!
//! The configuration is a plain value handed to every entry point; nothing is
//! cached between calls.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use gait_core::constants::chart::{DEFAULT_AXIS_CEILING, DEFAULT_AXIS_STEP};
use gait_core::constants::env_config;
use gait_core::models::{MergePolicy, WeekStart};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Settings that shape every aggregation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// How same-day duplicates are combined
    pub merge_policy: MergePolicy,
    /// First day of the calendar week
    pub week_start: WeekStart,
    /// Rounding step for the y-axis ceiling
    pub axis_step: f64,
    /// Y-axis ceiling when a series has no positive value
    pub default_axis_ceiling: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            merge_policy: MergePolicy::default(),
            week_start: WeekStart::default(),
            axis_step: DEFAULT_AXIS_STEP,
            default_axis_ceiling: DEFAULT_AXIS_CEILING,
        }
    }
}

impl AggregationConfig {
    /// Load configuration from environment variables, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            merge_policy: parse_env(env_config::MERGE_POLICY)?.unwrap_or(defaults.merge_policy),
            week_start: parse_env(env_config::WEEK_START)?.unwrap_or(defaults.week_start),
            axis_step: parse_env(env_config::AXIS_STEP)?.unwrap_or(defaults.axis_step),
            default_axis_ceiling: parse_env(env_config::DEFAULT_AXIS_CEILING)?
                .unwrap_or(defaults.default_axis_ceiling),
        };

        config.validate()?;
        Ok(config)
    }

    /// Override the merge policy
    #[must_use]
    pub const fn with_merge_policy(mut self, merge_policy: MergePolicy) -> Self {
        self.merge_policy = merge_policy;
        self
    }

    /// Override the week-start convention
    #[must_use]
    pub const fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Override the y-axis step
    #[must_use]
    pub const fn with_axis_step(mut self, axis_step: f64) -> Self {
        self.axis_step = axis_step;
        self
    }

    /// Validate numeric settings
    ///
    /// # Errors
    ///
    /// Returns an error if the axis step or default ceiling is not a positive finite number
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.axis_step.is_finite() || self.axis_step <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "axis_step must be a positive finite number",
            ));
        }
        if !self.default_axis_ceiling.is_finite() || self.default_axis_ceiling <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "default_axis_ceiling must be a positive finite number",
            ));
        }
        Ok(())
    }
}

/// Read and parse an optional environment variable
fn parse_env<T>(name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("{name}='{raw}': {e}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
