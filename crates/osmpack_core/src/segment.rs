//! Directed and undirected segments between two locations.

use crate::location::Location;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed segment from `first` to `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Segment {
    first: Location,
    second: Location,
}

impl Segment {
    /// Creates a segment from `first` to `second`.
    #[must_use]
    pub const fn new(first: Location, second: Location) -> Self {
        Self { first, second }
    }

    /// Returns the start location.
    #[must_use]
    pub const fn first(&self) -> Location {
        self.first
    }

    /// Returns the end location.
    #[must_use]
    pub const fn second(&self) -> Location {
        self.second
    }

    /// Reverses the direction of the segment.
    pub fn swap_locations(&mut self) {
        std::mem::swap(&mut self.first, &mut self.second);
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}--{}", self.first, self.second)
    }
}

/// A segment whose endpoints are stored in canonical order.
///
/// The constructor swaps the endpoints if needed so that
/// `first() <= second()`. Two undirected segments built from the same
/// endpoints in either order are therefore equal, which lets ring builders
/// sort and de-duplicate connections without caring about direction.
///
/// Segments order lexicographically: by `first`, then by `second`.
/// Degenerate segments with equal endpoints are allowed.
///
/// # Example
///
/// ```rust
/// use osmpack_core::{Location, UndirectedSegment};
///
/// let a = Location::new(10, 20);
/// let b = Location::new(5, 30);
/// let segment = UndirectedSegment::new(a, b);
/// assert_eq!(segment.first(), b);
/// assert_eq!(segment, UndirectedSegment::new(b, a));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "Segment", into = "Segment")]
pub struct UndirectedSegment {
    // Field order defines the derived ordering.
    first: Location,
    second: Location,
}

impl UndirectedSegment {
    /// Creates a segment, normalizing the endpoint order.
    #[must_use]
    pub fn new(location1: Location, location2: Location) -> Self {
        if location2 < location1 {
            Self {
                first: location2,
                second: location1,
            }
        } else {
            Self {
                first: location1,
                second: location2,
            }
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    pub const fn first(&self) -> Location {
        self.first
    }

    /// Returns the larger endpoint.
    #[must_use]
    pub const fn second(&self) -> Location {
        self.second
    }

    /// Returns whether both endpoints are the same location.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.first == self.second
    }

    /// Returns the segment directed from `first` to `second`.
    #[must_use]
    pub const fn as_segment(&self) -> Segment {
        Segment::new(self.first, self.second)
    }
}

impl From<Segment> for UndirectedSegment {
    fn from(segment: Segment) -> Self {
        Self::new(segment.first(), segment.second())
    }
}

impl From<UndirectedSegment> for Segment {
    fn from(segment: UndirectedSegment) -> Self {
        segment.as_segment()
    }
}

impl fmt::Display for UndirectedSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}--{}", self.first, self.second)
    }
}
