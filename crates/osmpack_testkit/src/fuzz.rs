//! Fuzz testing harnesses for osmpack.
//!
//! This module provides fuzz targets that can be used with cargo-fuzz
//! or other fuzzing frameworks.

use osmpack_buffer::RecordBuffer;
use osmpack_core::{tag_lists, TagListBuilder};

/// Fuzz target for adopting raw buffer bytes.
///
/// Arbitrary bytes must either be rejected by validation or yield tag
/// lists that can be fully scanned (no panics).
pub fn fuzz_record_buffer(data: &[u8]) {
    let Ok(buffer) = RecordBuffer::from_bytes(data.to_vec()) else {
        return;
    };
    for list in tag_lists(&buffer).flatten() {
        let counted = list.size();
        let iterated = list.iter().count();
        assert_eq!(counted, iterated, "size disagrees with iteration");
    }
}

/// Fuzz target for the tag list builder.
///
/// Splits `data` into alternating keys and values on `0xff` and checks
/// that every accepted tag reads back unchanged.
pub fn fuzz_tag_builder(data: &[u8]) {
    let parts: Vec<&[u8]> = data.split(|&b| b == 0xff).collect();
    let mut buffer = RecordBuffer::new();
    let mut builder = TagListBuilder::new(&mut buffer);
    let mut accepted = Vec::new();

    for pair in parts.chunks_exact(2) {
        if builder.add_tag(pair[0], pair[1]).is_ok() {
            accepted.push((pair[0], pair[1]));
        }
    }
    let Ok(offset) = builder.commit() else {
        return;
    };

    let list = osmpack_core::TagList::at(&buffer, offset).expect("builder output is valid");
    let read: Vec<_> = list.iter().map(|tag| tag.as_pair()).collect();
    assert_eq!(read, accepted, "builder roundtrip mismatch");
}
