//! Record views and iteration.

use crate::layout::{padded_length, RecordHeader, RECORD_HEADER_SIZE};
use std::fmt;
use std::iter::FusedIterator;

/// Kind tag stored in every record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RecordKind(u16);

impl RecordKind {
    /// Kind of a record whose type is not known.
    pub const UNDEFINED: Self = Self(0x0000);
    /// An ordered list of key/value tags.
    pub const TAG_LIST: Self = Self(0x0001);

    /// Creates a kind from its raw value.
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UNDEFINED => f.write_str("undefined"),
            Self::TAG_LIST => f.write_str("tag_list"),
            Self(raw) => write!(f, "kind({raw:#06x})"),
        }
    }
}

/// Byte offset of a record inside its buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordOffset(usize);

impl RecordOffset {
    /// Creates an offset from a raw byte position.
    #[must_use]
    pub const fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// Returns the raw byte position.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for RecordOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A borrowed view of one record.
///
/// The view borrows the buffer it came from, so the buffer cannot be
/// appended to or cleared while the view is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordRef<'a> {
    offset: RecordOffset,
    kind: RecordKind,
    /// Header and body, without trailing padding.
    bytes: &'a [u8],
}

impl<'a> RecordRef<'a> {
    /// Reads the record at `offset` of `data`.
    ///
    /// Returns `None` if the header is missing or claims more bytes than
    /// `data` holds.
    pub(crate) fn parse(data: &'a [u8], offset: usize) -> Option<Self> {
        let rest = data.get(offset..)?;
        let header = RecordHeader::decode(rest)?;
        let size = header.size as usize;
        if size < RECORD_HEADER_SIZE || header.padded_size() > rest.len() {
            return None;
        }
        Some(Self {
            offset: RecordOffset(offset),
            kind: RecordKind(header.kind),
            bytes: &rest[..size],
        })
    }

    /// Returns the offset of this record in its buffer.
    #[must_use]
    pub fn offset(&self) -> RecordOffset {
        self.offset
    }

    /// Returns the record kind.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Returns the record body (header and padding excluded).
    #[must_use]
    pub fn body(&self) -> &'a [u8] {
        &self.bytes[RECORD_HEADER_SIZE..]
    }

    /// Returns the unpadded record size, header included.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the record size rounded up to the alignment unit.
    #[must_use]
    pub fn padded_size(&self) -> usize {
        padded_length(self.bytes.len())
    }
}

/// Forward iterator over the records of a buffer.
///
/// Each step advances by the padded size of the current record.
#[derive(Debug, Clone)]
pub struct RecordIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> RecordIter<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = RecordRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }
        match RecordRef::parse(self.data, self.pos) {
            Some(record) => {
                self.pos += record.padded_size();
                Some(record)
            }
            None => {
                // Headers are validated on append and adoption.
                tracing::error!(offset = self.pos, "corrupt record header, stopping iteration");
                self.pos = self.data.len();
                None
            }
        }
    }
}

impl FusedIterator for RecordIter<'_> {}
