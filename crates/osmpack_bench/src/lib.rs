//! Benchmark utilities.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use osmpack_buffer::{RecordBuffer, RecordOffset};
use osmpack_core::{CoreResult, Location, TagListBuilder, UndirectedSegment};
use rand::Rng;

/// Keys found on typical ways.
pub const COMMON_KEYS: [&str; 8] = [
    "highway", "name", "oneway", "surface", "lanes", "maxspeed", "ref", "lit",
];

/// Generate `count` tags with keys cycling through [`COMMON_KEYS`] plus a suffix.
pub fn generate_pairs(count: usize) -> Vec<(String, String)> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let key = format!("{}:{}", COMMON_KEYS[i % COMMON_KEYS.len()], i);
            let value: String = (0..rng.gen_range(1..24))
                .map(|_| rng.gen_range(b'a'..=b'z') as char)
                .collect();
            (key, value)
        })
        .collect()
}

/// Write `lists` tag lists of `tags_per_list` tags each.
pub fn populate_buffer(lists: usize, tags_per_list: usize) -> CoreResult<(RecordBuffer, Vec<RecordOffset>)> {
    let mut buffer = RecordBuffer::new();
    let mut offsets = Vec::with_capacity(lists);
    let pairs = generate_pairs(tags_per_list);
    for _ in 0..lists {
        let mut builder = TagListBuilder::new(&mut buffer);
        builder.add_tags(pairs.iter().map(|(k, v)| (k, v)))?;
        offsets.push(builder.commit()?);
    }
    Ok((buffer, offsets))
}

/// Generate random segments inside a `size` x `size` grid.
pub fn generate_segments(count: usize, size: i32) -> Vec<UndirectedSegment> {
    let mut rng = rand::thread_rng();
    let mut location = || Location::new(rng.gen_range(0..size), rng.gen_range(0..size));
    (0..count)
        .map(|_| {
            let a = location();
            let b = location();
            UndirectedSegment::new(a, b)
        })
        .collect()
}
