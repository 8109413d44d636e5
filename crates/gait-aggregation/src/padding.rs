// ABOUTME: Placeholder padding that keeps sparse charts visually anchored
// ABOUTME: Adds a zero-value bucket before and after short bucket sequences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use gait_core::constants::chart::EDGE_PADDING_MAX_BUCKETS;
use gait_core::models::Bucket;
use tracing::warn;

/// Whether a sequence of `len` real buckets receives edge placeholders
#[must_use]
pub const fn needs_edge_padding(len: usize) -> bool {
    len > 0 && len <= EDGE_PADDING_MAX_BUCKETS
}

/// Surround a short, ascending bucket sequence with placeholders.
///
/// `before` and `after` build the neighbouring range of the first and last
/// bucket; a neighbour that cannot be represented is left out. Placeholders
/// never alter the values of real buckets.
pub(crate) fn pad_edges<B, A>(buckets: &mut Vec<Bucket>, before: B, after: A)
where
    B: FnOnce(&Bucket) -> Option<Bucket>,
    A: FnOnce(&Bucket) -> Option<Bucket>,
{
    if !needs_edge_padding(buckets.len()) {
        return;
    }

    let leading = buckets.first().and_then(before);
    let trailing = buckets.last().and_then(after);

    match leading {
        Some(placeholder) => buckets.insert(0, placeholder),
        None => warn!("Leading placeholder bucket is not representable"),
    }
    match trailing {
        Some(placeholder) => buckets.push(placeholder),
        None => warn!("Trailing placeholder bucket is not representable"),
    }
}

/// Buckets that carry real data, skipping placeholders
pub fn real_buckets(buckets: &[Bucket]) -> impl Iterator<Item = &Bucket> {
    buckets.iter().filter(|bucket| !bucket.is_placeholder())
}
