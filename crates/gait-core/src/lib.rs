// ABOUTME: Core types and constants for the gait timeline aggregation engine
// ABOUTME: Foundation crate with error handling, calendar/chart constants, and sample models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Gait Core
//!
//! Foundation crate providing shared types and constants for walking-speed
//! timeline aggregation. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Calendar, chart and environment constants
//! - **models**: `Sample`, `Bucket`, `Timeline`, `MergePolicy`, `WeekStart`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (samples, buckets, timeline selection)
pub mod models;
