//! Ordering laws of undirected segments.

use osmpack_core::{Location, UndirectedSegment};
use osmpack_testkit::prelude::*;
use proptest::prelude::*;
use std::cmp::Ordering;

proptest! {
    #[test]
    fn endpoint_order_does_not_matter(p in location_strategy(), q in location_strategy()) {
        let forward = UndirectedSegment::new(p, q);
        let backward = UndirectedSegment::new(q, p);
        prop_assert_eq!(forward, backward);
        prop_assert!(forward.first() <= forward.second());
        prop_assert_eq!(forward.first(), p.min(q));
        prop_assert_eq!(forward.second(), p.max(q));
    }

    #[test]
    fn construction_is_idempotent(p in grid_location_strategy(), q in grid_location_strategy()) {
        let segment = UndirectedSegment::new(p, q);
        prop_assert_eq!(UndirectedSegment::new(segment.first(), segment.second()), segment);
        prop_assert_eq!(UndirectedSegment::new(segment.second(), segment.first()), segment);
    }

    #[test]
    fn exactly_one_relation_holds(a in segment_strategy(), b in segment_strategy()) {
        let relations = [a < b, b < a, a == b];
        prop_assert_eq!(relations.iter().filter(|&&r| r).count(), 1);

        prop_assert_eq!(a <= b, !(b < a));
        prop_assert_eq!(a >= b, !(a < b));
        prop_assert_eq!(a > b, b < a);
    }

    #[test]
    fn order_is_lexicographic_on_endpoints(a in segment_strategy(), b in segment_strategy()) {
        let expected = (a.first(), a.second()).cmp(&(b.first(), b.second()));
        prop_assert_eq!(a.cmp(&b), expected);
        prop_assert_eq!(a == b, expected == Ordering::Equal);
    }

    #[test]
    fn order_is_transitive(
        a in segment_strategy(),
        b in segment_strategy(),
        c in segment_strategy(),
    ) {
        if a < b && b < c {
            prop_assert!(a < c);
        }
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }
}

#[test]
fn sorting_deduplicates_reversed_segments() {
    let ring = [
        Location::new(0, 0),
        Location::new(10, 0),
        Location::new(10, 10),
        Location::new(0, 10),
        Location::new(0, 0),
    ];

    // The same ring walked in both directions.
    let mut segments: Vec<_> = ring
        .windows(2)
        .map(|w| UndirectedSegment::new(w[0], w[1]))
        .chain(ring.windows(2).map(|w| UndirectedSegment::new(w[1], w[0])))
        .collect();
    segments.sort();
    segments.dedup();

    assert_eq!(segments.len(), 4);
    assert!(segments.windows(2).all(|w| w[0] < w[1]));
}
