//! The append-only record buffer.

use crate::config::BufferConfig;
use crate::error::{BufferError, BufferResult};
use crate::layout::{padded_length, RecordHeader, ALIGN_BYTES, MAX_RECORD_SIZE, RECORD_HEADER_SIZE};
use crate::record::{RecordIter, RecordKind, RecordOffset, RecordRef};

/// An append-only arena of aligned, self-describing records.
///
/// Records are written whole by [`append`](Self::append) and read back as
/// borrowed [`RecordRef`] views. Offsets returned by `append` stay valid
/// until [`clear`](Self::clear), even when the backing `Vec` reallocates.
/// The buffer remembers where each record starts, so an offset that points
/// into the middle of a record is never mistaken for a record.
///
/// # Thread Safety
///
/// The buffer has no internal locking. Build it on one thread, then share
/// `&RecordBuffer` with as many readers as needed.
///
/// # Example
///
/// ```rust
/// use osmpack_buffer::{RecordBuffer, RecordKind};
///
/// let mut buffer = RecordBuffer::new();
/// buffer.append(RecordKind::TAG_LIST, b"name\0Main Street\0").unwrap();
/// buffer.append(RecordKind::TAG_LIST, b"").unwrap();
/// assert_eq!(buffer.record_count(), 2);
/// assert_eq!(buffer.len(), 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordBuffer {
    data: Vec<u8>,
    /// Record start offsets, ascending.
    starts: Vec<usize>,
    max_capacity: Option<usize>,
}

impl Default for RecordBuffer {
    fn default() -> Self {
        Self::with_config(BufferConfig::default())
    }
}

impl RecordBuffer {
    /// Creates an empty, unbounded buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with the given configuration.
    #[must_use]
    pub fn with_config(config: BufferConfig) -> Self {
        let reserve = match config.max_capacity {
            Some(limit) => config.initial_capacity.min(limit),
            None => config.initial_capacity,
        };
        Self {
            data: Vec::with_capacity(reserve),
            starts: Vec::new(),
            max_capacity: config.max_capacity,
        }
    }

    /// Adopts bytes produced elsewhere, validating every record header.
    ///
    /// The result is unbounded; bodies are not interpreted.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the length is not a multiple of [`ALIGN_BYTES`]
    /// - a header is shorter than [`RECORD_HEADER_SIZE`] or has reserved bits set
    /// - a record extends past the end of the bytes
    /// - padding after a record body is not zero
    pub fn from_bytes(data: Vec<u8>) -> BufferResult<Self> {
        if data.len() % ALIGN_BYTES != 0 {
            return Err(BufferError::Misaligned { len: data.len() });
        }

        let mut offset = 0;
        let mut starts = Vec::new();
        while offset < data.len() {
            let rest = &data[offset..];
            let header = RecordHeader::decode(rest).ok_or(BufferError::Truncated {
                offset,
                needed: RECORD_HEADER_SIZE,
                available: rest.len(),
            })?;

            let size = header.size as usize;
            if size < RECORD_HEADER_SIZE {
                return Err(BufferError::invalid_header(
                    offset,
                    format!("size {size} is smaller than the header"),
                ));
            }
            if header.reserved != 0 {
                return Err(BufferError::invalid_header(offset, "reserved bits are set"));
            }

            let padded = header.padded_size();
            if padded > rest.len() {
                return Err(BufferError::Truncated {
                    offset,
                    needed: padded,
                    available: rest.len(),
                });
            }
            if rest[size..padded].iter().any(|&b| b != 0) {
                return Err(BufferError::invalid_header(offset, "non-zero padding"));
            }

            starts.push(offset);
            offset += padded;
        }

        tracing::debug!(bytes = data.len(), records = starts.len(), "adopted record buffer");
        Ok(Self {
            data,
            starts,
            max_capacity: None,
        })
    }

    /// Appends one record and returns its offset.
    ///
    /// The header, body and zero padding are written in one step; on error
    /// the buffer is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the record is larger than [`MAX_RECORD_SIZE`]
    /// - the padded record would exceed the configured capacity limit
    pub fn append(&mut self, kind: RecordKind, body: &[u8]) -> BufferResult<RecordOffset> {
        let size = RECORD_HEADER_SIZE + body.len();
        if size > MAX_RECORD_SIZE {
            return Err(BufferError::RecordTooLarge { len: size });
        }
        let padded = padded_length(size);

        if let Some(limit) = self.max_capacity {
            let available = limit.saturating_sub(self.data.len());
            if padded > available {
                tracing::warn!(
                    requested = padded,
                    available,
                    limit,
                    "record buffer capacity exceeded"
                );
                return Err(BufferError::CapacityExceeded {
                    requested: padded,
                    available,
                    limit,
                });
            }
        }

        let offset = self.data.len();
        let header = RecordHeader {
            size: size as u32,
            kind: kind.as_u16(),
            reserved: 0,
        };
        self.data.reserve(padded);
        self.data.extend_from_slice(&header.encode());
        self.data.extend_from_slice(body);
        self.data.resize(offset + padded, 0);
        self.starts.push(offset);

        tracing::trace!(offset, size, %kind, "appended record");
        Ok(RecordOffset::new(offset))
    }

    /// Returns the record starting at `offset`.
    ///
    /// Returns `None` if `offset` is not the start of a record in this
    /// buffer: misaligned, past the end, or inside another record.
    #[must_use]
    pub fn get(&self, offset: RecordOffset) -> Option<RecordRef<'_>> {
        let pos = offset.as_usize();
        if pos % ALIGN_BYTES != 0 || self.starts.binary_search(&pos).is_err() {
            return None;
        }
        RecordRef::parse(&self.data, pos)
    }

    /// Iterates over all records from the start of the buffer.
    ///
    /// Each call starts a fresh pass.
    #[must_use]
    pub fn records(&self) -> RecordIter<'_> {
        RecordIter::new(&self.data)
    }

    /// Iterates over the records of one kind.
    pub fn records_of_kind(&self, kind: RecordKind) -> impl Iterator<Item = RecordRef<'_>> {
        self.records().filter(move |record| record.kind() == kind)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.starts.len()
    }

    /// Returns the number of committed bytes (always aligned).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the buffer holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the configured capacity limit, if any.
    #[must_use]
    pub fn capacity_limit(&self) -> Option<usize> {
        self.max_capacity
    }

    /// Returns the committed bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer and returns its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Removes all records.
    ///
    /// Offsets handed out before the clear no longer refer to anything.
    pub fn clear(&mut self) {
        tracing::debug!(bytes = self.data.len(), "clearing record buffer");
        self.data.clear();
        self.starts.clear();
    }
}
