// ABOUTME: Core data models for walking-speed timeline aggregation
// ABOUTME: Re-exports Sample, Bucket, Timeline, MergePolicy and WeekStart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The engine consumes `Sample`s (one measurement attributed to a calendar day)
//! and produces `Bucket`s (one aggregated value per day, week or month).
//!
//! ## Design Principles
//!
//! - **Source Agnostic**: samples carry only dates and a value, no identity
//! - **Serializable**: every model round-trips through serde so the outer layer can persist it
//! - **Explicit Policies**: merge and week-start conventions are values, never globals

mod sample;
mod timeline;

pub use sample::{Bucket, Sample};
pub use timeline::{MergePolicy, Timeline, WeekStart};
