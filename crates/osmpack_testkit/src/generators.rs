//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random test data
//! that maintains required invariants.

use osmpack_core::{Location, UndirectedSegment};
use proptest::prelude::*;

/// Strategy for a single byte that is valid inside a tag string.
pub fn tag_byte_strategy() -> impl Strategy<Value = u8> {
    1u8..=255
}

/// Strategy for tag keys: short, possibly empty, any non-NUL byte.
pub fn tag_key_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(tag_byte_strategy(), 0..16)
}

/// Strategy for tag values: possibly empty, any non-NUL byte.
pub fn tag_value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(tag_byte_strategy(), 0..64)
}

/// Strategy for realistic ASCII keys drawn from a small vocabulary.
///
/// Small vocabularies make duplicate keys likely, which exercises
/// first-match lookups.
pub fn common_key_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "highway", "name", "building", "oneway", "surface", "amenity", "addr:street",
    ])
    .prop_map(String::from)
}

/// Strategy for an ordered list of tag pairs.
pub fn tag_pairs_strategy(max_len: usize) -> impl Strategy<Value = Vec<(Vec<u8>, Vec<u8>)>> {
    prop::collection::vec((tag_key_strategy(), tag_value_strategy()), 0..=max_len)
}

/// Strategy for valid locations.
pub fn location_strategy() -> impl Strategy<Value = Location> {
    (-1_800_000_000i32..=1_800_000_000, -900_000_000i32..=900_000_000)
        .prop_map(|(x, y)| Location::new(x, y))
}

/// Strategy for locations on a small grid, so equal coordinates are common.
pub fn grid_location_strategy() -> impl Strategy<Value = Location> {
    (-3i32..=3, -3i32..=3).prop_map(|(x, y)| Location::new(x, y))
}

/// Strategy for undirected segments on a small grid.
pub fn segment_strategy() -> impl Strategy<Value = UndirectedSegment> {
    (grid_location_strategy(), grid_location_strategy())
        .prop_map(|(a, b)| UndirectedSegment::new(a, b))
}
