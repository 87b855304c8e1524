//! Error types for buffer operations.

use thiserror::Error;

/// Result type for buffer operations.
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur while writing or adopting a record buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Appending the record would exceed the configured capacity limit.
    #[error("capacity exceeded: record needs {requested} bytes, {available} of {limit} left")]
    CapacityExceeded {
        /// Padded size of the refused record.
        requested: usize,
        /// Bytes still free under the limit.
        available: usize,
        /// The configured capacity limit.
        limit: usize,
    },

    /// The record does not fit in the 32-bit size field.
    #[error("record too large: {len} bytes")]
    RecordTooLarge {
        /// Total record length that was requested.
        len: usize,
    },

    /// Buffer bytes do not end on an alignment boundary.
    #[error("misaligned buffer: length {len} is not a multiple of the alignment")]
    Misaligned {
        /// Length of the adopted bytes.
        len: usize,
    },

    /// A record header points past the end of the buffer.
    #[error("truncated record at offset {offset}: needs {needed} bytes, {available} available")]
    Truncated {
        /// Offset of the truncated record.
        offset: usize,
        /// Padded size claimed by the record header.
        needed: usize,
        /// Bytes remaining from the record offset to the buffer end.
        available: usize,
    },

    /// A record header is malformed.
    #[error("invalid record header at offset {offset}: {message}")]
    InvalidHeader {
        /// Offset of the record.
        offset: usize,
        /// Description of the problem.
        message: String,
    },
}

impl BufferError {
    /// Create an invalid header error.
    pub fn invalid_header(offset: usize, message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            offset,
            message: message.into(),
        }
    }
}
