//! # osmpack Core
//!
//! Packed OSM tag lists and undirected segments.
//!
//! This crate provides:
//! - [`Tag`] and [`TagList`] views over tag list records in a
//!   [`RecordBuffer`](osmpack_buffer::RecordBuffer)
//! - [`TagListBuilder`] for appending tag lists
//! - [`Location`], [`Segment`] and [`UndirectedSegment`] for ring building
//! - [`AreaStats`] counters reported by area assembly
//!
//! ## Usage
//!
//! ```
//! use osmpack_buffer::RecordBuffer;
//! use osmpack_core::{tag_lists, TagListBuilder};
//!
//! let mut buffer = RecordBuffer::new();
//! let mut builder = TagListBuilder::new(&mut buffer);
//! builder.add_tags([("building", "yes"), ("building:levels", "3")]).unwrap();
//! builder.commit().unwrap();
//!
//! for tags in tag_lists(&buffer) {
//!     let tags = tags.unwrap();
//!     assert!(tags.has_tag("building", "yes"));
//!     assert_eq!(tags.get_str("building:levels"), Some("3"));
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod location;
mod segment;
mod stats;
mod tag;

pub use error::{CoreError, CoreResult, TagField};
pub use location::{Location, COORDINATE_PRECISION, UNDEFINED_COORDINATE};
pub use segment::{Segment, UndirectedSegment};
pub use stats::AreaStats;
pub use tag::{tag_lists, Tag, TagList, TagListBuilder, Tags, MAX_TAG_STRING_LENGTH};
