//! Counters reported by area assembly.
//!
//! An assembler fills one [`AreaStats`] per object and the caller sums them
//! up. The all-zero default is the identity for addition. Counters wrap on
//! overflow.
//!
//! # Usage
//!
//! ```rust
//! use osmpack_core::AreaStats;
//!
//! let mut total = AreaStats::default();
//! for _ in 0..3 {
//!     let mut run = AreaStats::default();
//!     run.from_ways = 1;
//!     run.outer_rings = 1;
//!     total += run;
//! }
//! assert_eq!(total.from_ways, 3);
//! assert!(total.to_string().contains("outer_rings=3"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

macro_rules! area_stats {
    ($($(#[$doc:meta])* $field:ident,)+) => {
        /// Outcome counters of an area assembly run.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct AreaStats {
            $($(#[$doc])* pub $field: u64,)+
        }

        impl AreaStats {
            /// Number of counters.
            pub const COUNTERS: usize = [$(stringify!($field),)+].len();

            /// Returns every counter with its name, in declaration order.
            #[must_use]
            pub fn counters(&self) -> [(&'static str, u64); Self::COUNTERS] {
                [$((stringify!($field), self.$field),)+]
            }
        }

        impl AddAssign<&AreaStats> for AreaStats {
            fn add_assign(&mut self, other: &AreaStats) {
                $(self.$field = self.$field.wrapping_add(other.$field);)+
            }
        }
    };
}

area_stats! {
    /// Most difficult case with rings touching in multiple points.
    area_really_complex_case,
    /// Simple case, no touching rings.
    area_simple_case,
    /// More difficult case with touching rings.
    area_touching_rings_case,
    /// Consecutive identical nodes or consecutive nodes with the same location.
    duplicate_nodes,
    /// Segments duplicated (going back and forth).
    duplicate_segments,
    /// Area created from a multipolygon relation.
    from_relations,
    /// Area created from a way.
    from_ways,
    /// Number of inner rings.
    inner_rings,
    /// Number of inner ways with the same tags as the area.
    inner_with_same_tags,
    /// Number of intersections between segments.
    intersections,
    /// Number of ways in the area.
    member_ways,
    /// No tags on relation (old-style multipolygon with tags on outer ways).
    no_tags_on_relation,
    /// Multipolygon relation with no way members.
    no_way_in_mp_relation,
    /// Number of nodes in the area.
    nodes,
    /// Number of open rings in the area.
    open_rings,
    /// Number of outer rings in the area.
    outer_rings,
    /// Number of ways with less than two nodes.
    short_ways,
    /// Multipolygon relation containing a single way.
    single_way_in_mp_relation,
    /// Rings touching in a node.
    touching_rings,
    /// Different segments of a way ended up in different rings.
    ways_in_multiple_rings,
    /// Member has a wrong role (not "outer", "inner", or empty).
    wrong_role,
}

impl AreaStats {
    /// Creates an all-zero instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether every counter is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.counters().iter().all(|&(_, value)| value == 0)
    }
}

impl AddAssign for AreaStats {
    fn add_assign(&mut self, other: AreaStats) {
        *self += &other;
    }
}

impl Add for AreaStats {
    type Output = AreaStats;

    fn add(mut self, other: AreaStats) -> AreaStats {
        self += &other;
        self
    }
}

impl Sum for AreaStats {
    fn sum<I: Iterator<Item = AreaStats>>(iter: I) -> Self {
        iter.fold(AreaStats::default(), Add::add)
    }
}

impl<'a> Sum<&'a AreaStats> for AreaStats {
    fn sum<I: Iterator<Item = &'a AreaStats>>(iter: I) -> Self {
        iter.fold(AreaStats::default(), |mut acc, stats| {
            acc += stats;
            acc
        })
    }
}

impl fmt::Display for AreaStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.counters().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}
