//! Tag and tag list behavior through the public API.

use osmpack_buffer::{BufferConfig, RecordBuffer, RecordKind, RecordOffset, ALIGN_BYTES};
use osmpack_core::{tag_lists, CoreError, Tag, TagList, TagListBuilder};
use osmpack_testkit::prelude::*;
use proptest::prelude::*;
use std::cmp::Ordering;

#[test]
fn sample_list_lookups() {
    init_test_tracing();
    let fixture = sample_tag_list();
    let tags = fixture.tags();

    assert_eq!(tags.size(), 3);
    assert_eq!(tags.get("a"), Some(&b"1"[..]));
    assert_eq!(
        tags.get_value_by_key("c", Some(b"dflt".as_slice())),
        Some(&b"dflt"[..])
    );
    assert!(tags.has_tag("a", "3"));
    assert!(!tags.has_tag("a", "9"));

    let expected = vec![("a", "1"), ("b", "2"), ("a", "3")];
    let first: Vec<_> = tags
        .iter()
        .map(|t| (t.key_str().unwrap(), t.value_str().unwrap()))
        .collect();
    let second: Vec<_> = tags
        .iter()
        .map(|t| (t.key_str().unwrap(), t.value_str().unwrap()))
        .collect();
    assert_eq!(first, expected);
    assert_eq!(second, expected);
}

#[test]
fn street_list_display() {
    let fixture = street_tag_list();
    assert_eq!(
        fixture.tags().to_string(),
        "highway=residential,name=Main Street,oneway=yes,surface=asphalt"
    );
}

#[test]
fn many_lists_in_one_buffer() {
    let (buffer, offsets) = build_tag_lists(&[
        vec![("highway", "primary")],
        vec![],
        vec![("building", "yes"), ("height", "12")],
    ])
    .unwrap();

    assert_eq!(buffer.len() % ALIGN_BYTES, 0);
    assert_eq!(buffer.record_count(), 3);

    let sizes: Vec<_> = tag_lists(&buffer).map(|l| l.unwrap().size()).collect();
    assert_eq!(sizes, vec![1, 0, 2]);

    let third = TagList::at(&buffer, offsets[2]).unwrap();
    assert_eq!(third.get_str("height"), Some("12"));
    for offset in offsets {
        assert_eq!(offset.as_usize() % ALIGN_BYTES, 0);
    }
}

#[test]
fn adopted_bytes_read_back() {
    let fixture = street_tag_list();
    let bytes = fixture.buffer.as_bytes().to_vec();

    let adopted = RecordBuffer::from_bytes(bytes).unwrap();
    let tags = TagList::at(&adopted, fixture.offset).unwrap();
    assert_eq!(tags.get_str("name"), Some("Main Street"));
}

#[test]
fn malformed_body_is_rejected_not_scanned() {
    let mut buffer = RecordBuffer::new();
    let offset = buffer.append(RecordKind::TAG_LIST, b"key-without-end").unwrap();

    let err = TagList::at(&buffer, offset).unwrap_err();
    assert!(matches!(err, CoreError::MalformedTagList { .. }));
    assert!(tag_lists(&buffer).next().unwrap().is_err());
}

#[test]
fn interior_offset_is_not_a_tag_list() {
    // An opaque record whose body happens to look like a tag list record
    let mut body = Vec::new();
    body.extend_from_slice(&12u32.to_le_bytes());
    body.extend_from_slice(&RecordKind::TAG_LIST.as_u16().to_le_bytes());
    body.extend_from_slice(&[0, 0]);
    body.extend_from_slice(b"k\0v\0");

    let mut buffer = RecordBuffer::new();
    buffer.append(RecordKind::new(9), &body).unwrap();

    let err = TagList::at(&buffer, RecordOffset::new(8)).unwrap_err();
    assert_eq!(
        err,
        CoreError::RecordNotFound {
            offset: RecordOffset::new(8)
        }
    );
    assert_eq!(tag_lists(&buffer).count(), 0);
}

#[test]
fn capacity_limit_stops_builder() {
    let mut buffer = RecordBuffer::with_config(BufferConfig::new().max_capacity(64));
    let mut committed = 0;
    loop {
        let mut builder = TagListBuilder::new(&mut buffer);
        builder.add_tag("amenity", "bench").unwrap();
        match builder.commit() {
            Ok(_) => committed += 1,
            Err(CoreError::Buffer(_)) => break,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    // 8-byte header + 14-byte body padded to 24 bytes
    assert_eq!(committed, 2);
    assert_eq!(buffer.len(), 48);
    assert_eq!(tag_lists(&buffer).count(), 2);
}

#[test]
fn readers_share_buffer_across_threads() {
    let fixture = street_tag_list();
    let buffer = &fixture.buffer;
    let offset = fixture.offset;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    let tags = TagList::at(buffer, offset).unwrap();
                    tags.get_str("highway").map(str::to_owned)
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().as_deref(), Some("residential"));
        }
    });
}

#[test]
fn stress_roundtrip_sizes() {
    init_test_tracing();
    for count in [0, 1, 2, 50, 1_000, 10_000] {
        let pairs = generate_tags(count);
        let result = roundtrip_tags(&pairs).unwrap();
        assert!(result.matched, "roundtrip of {count} tags failed");
        assert_eq!(result.tags, count);
        assert_eq!(result.buffer_bytes % ALIGN_BYTES, 0);
    }
}

#[test]
fn fuzz_harnesses_accept_samples() {
    fuzz_record_buffer(&[]);
    fuzz_record_buffer(&[1, 2, 3]);
    fuzz_record_buffer(street_tag_list().buffer.as_bytes());
    fuzz_tag_builder(b"key\xffvalue\xffk\0\xffv\xff\xff");
}

fn collect_tags(list: &TagList<'_>) -> Vec<(Vec<u8>, Vec<u8>)> {
    list.iter()
        .map(|t| (t.key().to_vec(), t.value().to_vec()))
        .collect()
}

proptest! {
    #[test]
    fn roundtrip_preserves_order(pairs in tag_pairs_strategy(40)) {
        let fixture = build_tag_list(pairs.iter().map(|(k, v)| (k, v))).unwrap();
        let tags = fixture.tags();

        prop_assert_eq!(tags.size(), pairs.len());
        prop_assert_eq!(collect_tags(&tags), pairs.clone());
        prop_assert_eq!(tags.padded_size() % ALIGN_BYTES, 0);
    }

    #[test]
    fn lookup_returns_first_match(
        pairs in prop::collection::vec((common_key_strategy(), "[a-z]{0,6}"), 0..12),
        probe in common_key_strategy(),
    ) {
        let fixture = build_tag_list(pairs.iter().map(|(k, v)| (k, v))).unwrap();
        let tags = fixture.tags();

        let expected = pairs.iter().find(|(k, _)| *k == probe).map(|(_, v)| v.as_bytes());
        prop_assert_eq!(tags.get(&probe), expected);
        prop_assert_eq!(tags.has_key(&probe), expected.is_some());
        for (key, value) in &pairs {
            prop_assert!(tags.has_tag(key, value));
        }
    }

    #[test]
    fn tag_equality_and_order_match_pairs(pairs in tag_pairs_strategy(8)) {
        let fixture = build_tag_list(pairs.iter().map(|(k, v)| (k, v))).unwrap();
        let list = fixture.tags();
        let tags: Vec<Tag<'_>> = list.iter().collect();

        for (a, pa) in tags.iter().zip(&pairs) {
            for (b, pb) in tags.iter().zip(&pairs) {
                prop_assert_eq!(a == b, pa == pb);
                prop_assert_eq!(a.cmp(b), pa.cmp(pb));
                // antisymmetry
                prop_assert_eq!(a.cmp(b), b.cmp(a).reverse());
            }
        }

        for a in &tags {
            for b in &tags {
                for c in &tags {
                    if a < b && b < c {
                        prop_assert!(a < c);
                    }
                }
            }
        }
    }

    #[test]
    fn tag_less_than_definition(
        k1 in tag_key_strategy(), v1 in tag_value_strategy(),
        k2 in tag_key_strategy(), v2 in tag_value_strategy(),
    ) {
        let fixture = build_tag_list([(&k1, &v1), (&k2, &v2)]).unwrap();
        let list = fixture.tags();
        let mut iter = list.iter();
        let (a, b) = (iter.next().unwrap(), iter.next().unwrap());

        let expected = (k1 == k2 && v1 < v2) || k1 < k2;
        prop_assert_eq!(a < b, expected);
        prop_assert_eq!(a.cmp(&b) == Ordering::Equal, k1 == k2 && v1 == v2);
    }
}
