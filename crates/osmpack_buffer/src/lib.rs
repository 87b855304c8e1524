//! # osmpack Buffer
//!
//! Aligned, append-only record buffer for osmpack.
//!
//! This crate provides the lowest-level memory layout used by osmpack.
//! A [`RecordBuffer`] is an **opaque record arena** - it knows how long each
//! record is and what kind it is, but does not interpret record bodies.
//!
//! ## Record Layout
//!
//! Every record starts on an [`ALIGN_BYTES`] boundary with an 8-byte header:
//!
//! | offset | size | field                                 |
//! |--------|------|---------------------------------------|
//! | 0      | 4    | record size, header included (LE)     |
//! | 4      | 2    | record kind (LE)                      |
//! | 6      | 2    | reserved, zero                        |
//!
//! The body follows the header and is zero-padded up to the next alignment
//! boundary, so the next record can be found without parsing the body.
//!
//! ## Design Principles
//!
//! - Records are appended whole, never partially
//! - Offsets stay valid until [`RecordBuffer::clear`]
//! - Views borrow the buffer, so no append can happen while one is alive
//!
//! ## Example
//!
//! ```rust
//! use osmpack_buffer::{RecordBuffer, RecordKind};
//!
//! let mut buffer = RecordBuffer::new();
//! let offset = buffer.append(RecordKind::TAG_LIST, b"highway\0primary\0").unwrap();
//! let record = buffer.get(offset).unwrap();
//! assert_eq!(record.kind(), RecordKind::TAG_LIST);
//! assert_eq!(record.body(), b"highway\0primary\0");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod error;
mod layout;
mod record;

pub use buffer::RecordBuffer;
pub use config::BufferConfig;
pub use error::{BufferError, BufferResult};
pub use layout::{padded_length, ALIGN_BYTES, MAX_RECORD_SIZE, RECORD_HEADER_SIZE};
pub use record::{RecordIter, RecordKind, RecordOffset, RecordRef};
