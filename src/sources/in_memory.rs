// ABOUTME: In-memory sample source backed by a fixed sample sequence
// ABOUTME: Used by tests and by callers that already hold their samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{QueryWindow, SampleSource};
use async_trait::async_trait;
use gait_aggregation::errors::AppResult;
use gait_aggregation::models::Sample;

/// Source that serves a fixed sequence of samples
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    samples: Vec<Sample>,
}

impl InMemorySource {
    /// Create a source over the given samples
    #[must_use]
    pub const fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Number of samples held, regardless of window
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the source holds no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl From<Vec<Sample>> for InMemorySource {
    fn from(samples: Vec<Sample>) -> Self {
        Self::new(samples)
    }
}

#[async_trait]
impl SampleSource for InMemorySource {
    fn name(&self) -> &'static str {
        "in_memory"
    }

    async fn load_samples(&self, window: &QueryWindow) -> AppResult<Vec<Sample>> {
        Ok(self
            .samples
            .iter()
            .filter(|sample| window.includes(sample))
            .copied()
            .collect())
    }
}
