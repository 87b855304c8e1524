//! Error types for osmpack core.

use osmpack_buffer::{BufferError, RecordKind, RecordOffset};
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Which half of a tag an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    /// The tag key.
    Key,
    /// The tag value.
    Value,
}

impl std::fmt::Display for TagField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key => f.write_str("key"),
            Self::Value => f.write_str("value"),
        }
    }
}

/// Errors that can occur in osmpack core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Record buffer error.
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// A tag key or value contains a NUL byte.
    #[error("tag {field} contains a NUL byte at position {position}")]
    EmbeddedNul {
        /// The offending half of the tag.
        field: TagField,
        /// Byte position of the first NUL.
        position: usize,
    },

    /// A tag key or value is longer than allowed.
    #[error("tag {field} is too long: {len} bytes, maximum is {max}")]
    StringTooLong {
        /// The offending half of the tag.
        field: TagField,
        /// Actual length in bytes.
        len: usize,
        /// Maximum length in bytes.
        max: usize,
    },

    /// No record starts at the given offset.
    #[error("no record at offset {offset}")]
    RecordNotFound {
        /// The requested offset.
        offset: RecordOffset,
    },

    /// The record has a different kind than expected.
    #[error("record at offset {offset} is {actual}, expected {expected}")]
    WrongRecordKind {
        /// Offset of the record.
        offset: RecordOffset,
        /// Kind the caller asked for.
        expected: RecordKind,
        /// Kind found in the header.
        actual: RecordKind,
    },

    /// A tag list body is not a sequence of `key\0value\0` pairs.
    #[error("malformed tag list at offset {offset}: {message}")]
    MalformedTagList {
        /// Offset of the record.
        offset: RecordOffset,
        /// Description of the problem.
        message: String,
    },

    /// Coordinates requested from an undefined or out-of-range location.
    #[error("invalid location ({x}, {y})")]
    InvalidLocation {
        /// Fixed-point x coordinate.
        x: i32,
        /// Fixed-point y coordinate.
        y: i32,
    },
}

impl CoreError {
    /// Create a malformed tag list error.
    pub fn malformed_tag_list(offset: RecordOffset, message: impl Into<String>) -> Self {
        Self::MalformedTagList {
            offset,
            message: message.into(),
        }
    }
}
