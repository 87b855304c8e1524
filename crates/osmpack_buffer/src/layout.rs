//! Record header layout and alignment arithmetic.

/// Every record starts at a multiple of this many bytes.
pub const ALIGN_BYTES: usize = 8;

/// Header size: size (4) + kind (2) + reserved (2) = 8
pub const RECORD_HEADER_SIZE: usize = 8;

/// Largest record size the 32-bit size field can describe.
pub const MAX_RECORD_SIZE: usize = u32::MAX as usize;

const _: () = assert!(
    RECORD_HEADER_SIZE % ALIGN_BYTES == 0,
    "record header has wrong size to be aligned properly"
);

/// Rounds `len` up to the next multiple of [`ALIGN_BYTES`].
///
/// ```rust
/// use osmpack_buffer::padded_length;
///
/// assert_eq!(padded_length(0), 0);
/// assert_eq!(padded_length(1), 8);
/// assert_eq!(padded_length(16), 16);
/// ```
#[inline]
#[must_use]
pub const fn padded_length(len: usize) -> usize {
    (len + ALIGN_BYTES - 1) & !(ALIGN_BYTES - 1)
}

/// Raw header fields as stored in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RecordHeader {
    pub size: u32,
    pub kind: u16,
    pub reserved: u16,
}

impl RecordHeader {
    pub(crate) fn encode(&self) -> [u8; RECORD_HEADER_SIZE] {
        let mut out = [0u8; RECORD_HEADER_SIZE];
        out[0..4].copy_from_slice(&self.size.to_le_bytes());
        out[4..6].copy_from_slice(&self.kind.to_le_bytes());
        out[6..8].copy_from_slice(&self.reserved.to_le_bytes());
        out
    }

    /// Reads a header from the start of `data`, or `None` if too short.
    pub(crate) fn decode(data: &[u8]) -> Option<Self> {
        let raw = data.get(..RECORD_HEADER_SIZE)?;
        Some(Self {
            size: u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]),
            kind: u16::from_le_bytes([raw[4], raw[5]]),
            reserved: u16::from_le_bytes([raw[6], raw[7]]),
        })
    }

    pub(crate) fn padded_size(&self) -> usize {
        padded_length(self.size as usize)
    }
}
