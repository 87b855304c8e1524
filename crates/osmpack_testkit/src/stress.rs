//! Stress helpers for large tag lists.

use crate::fixtures::build_tag_list;
use osmpack_core::CoreResult;
use std::time::{Duration, Instant};

/// Result of a round-trip stress run.
#[derive(Debug, Clone)]
pub struct RoundtripResult {
    /// Number of tags written.
    pub tags: usize,
    /// Size of the buffer after the write.
    pub buffer_bytes: usize,
    /// Whether every tag came back unchanged and in order.
    pub matched: bool,
    /// Time spent writing and reading.
    pub duration: Duration,
}

/// Generates `count` distinct tags covering every non-NUL byte value.
///
/// Tag `i` has key `k{i}` followed by a rotating run of bytes, and a value
/// made of bytes `1..=255` shifted by `i`.
pub fn generate_tags(count: usize) -> Vec<(Vec<u8>, Vec<u8>)> {
    (0..count)
        .map(|i| {
            let mut key = format!("k{i}").into_bytes();
            key.extend((0..8).map(|j| byte_at(i + j)));
            let value = (0..255).map(|j| byte_at(i + j)).collect();
            (key, value)
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn byte_at(n: usize) -> u8 {
    (n % 255) as u8 + 1
}

/// Writes `pairs` as one tag list and reads it back.
///
/// # Errors
///
/// Returns an error if a pair is rejected by the builder.
pub fn roundtrip_tags(pairs: &[(Vec<u8>, Vec<u8>)]) -> CoreResult<RoundtripResult> {
    let start = Instant::now();
    let fixture = build_tag_list(pairs.iter().map(|(k, v)| (k, v)))?;
    let tags = fixture.tags();

    let mut read = 0usize;
    let mut matched = true;
    for (tag, (key, value)) in tags.iter().zip(pairs) {
        matched &= tag.key() == key.as_slice() && tag.value() == value.as_slice();
        read += 1;
    }
    matched &= read == pairs.len() && tags.size() == pairs.len();

    let result = RoundtripResult {
        tags: pairs.len(),
        buffer_bytes: fixture.buffer.len(),
        matched,
        duration: start.elapsed(),
    };
    tracing::debug!(
        tags = result.tags,
        bytes = result.buffer_bytes,
        matched = result.matched,
        elapsed_us = u64::try_from(result.duration.as_micros()).unwrap_or(u64::MAX),
        "tag round-trip finished"
    );
    Ok(result)
}
