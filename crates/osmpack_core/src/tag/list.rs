//! Read-only tag list views.

use super::Tag;
use crate::error::{CoreError, CoreResult};
use osmpack_buffer::{
    padded_length, RecordBuffer, RecordKind, RecordOffset, RecordRef, RECORD_HEADER_SIZE,
};
use std::fmt;
use std::iter::FusedIterator;

/// An ordered list of tags stored in one record.
///
/// Iteration order is insertion order. Duplicate keys are kept; lookups
/// return the first match.
///
/// The list holds no count of its own: [`size`](Self::size) scans the
/// record, which is fine for the handful of tags a typical object carries.
pub struct TagList<'a> {
    offset: RecordOffset,
    body: &'a [u8],
}

impl<'a> TagList<'a> {
    /// Creates a view over a tag list record.
    ///
    /// The body is checked once here so that later scans never run past
    /// the end of the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is not a tag list, or its body is
    /// not a whole number of `key\0value\0` pairs.
    pub fn from_record(record: RecordRef<'a>) -> CoreResult<Self> {
        if record.kind() != RecordKind::TAG_LIST {
            return Err(CoreError::WrongRecordKind {
                offset: record.offset(),
                expected: RecordKind::TAG_LIST,
                actual: record.kind(),
            });
        }

        let body = record.body();
        if let Some(&last) = body.last() {
            if last != 0 {
                return Err(CoreError::malformed_tag_list(
                    record.offset(),
                    "body does not end with a terminator",
                ));
            }
            let terminators = body.iter().filter(|&&b| b == 0).count();
            if terminators % 2 != 0 {
                return Err(CoreError::malformed_tag_list(
                    record.offset(),
                    format!("key without value ({terminators} terminators)"),
                ));
            }
        }

        Ok(Self {
            offset: record.offset(),
            body,
        })
    }

    /// Looks up the tag list stored at `offset` in `buffer`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no record at `offset`, or it is not a
    /// well-formed tag list.
    pub fn at(buffer: &'a RecordBuffer, offset: RecordOffset) -> CoreResult<Self> {
        let record = buffer
            .get(offset)
            .ok_or(CoreError::RecordNotFound { offset })?;
        Self::from_record(record)
    }

    /// Returns the offset of the underlying record.
    #[must_use]
    pub fn offset(&self) -> RecordOffset {
        self.offset
    }

    /// Returns the number of tags. O(n) in the body length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Returns whether the list has no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub(crate) fn body(&self) -> &'a [u8] {
        self.body
    }

    /// Returns the body length in bytes.
    #[must_use]
    pub fn byte_size(&self) -> usize {
        self.body.len()
    }

    /// Returns the full record size (header included) rounded up to the
    /// buffer alignment.
    #[must_use]
    pub fn padded_size(&self) -> usize {
        padded_length(RECORD_HEADER_SIZE + self.body.len())
    }

    /// Returns an iterator over the tags in insertion order.
    ///
    /// Every call starts a fresh pass.
    #[must_use]
    pub fn iter(&self) -> Tags<'a> {
        Tags { rest: self.body }
    }

    fn find_key(&self, key: &[u8]) -> Option<Tag<'a>> {
        self.iter().find(|tag| tag.key() == key)
    }

    /// Returns the value of the first tag with `key`, or `default`.
    #[must_use]
    pub fn get_value_by_key<'b>(
        &self,
        key: impl AsRef<[u8]>,
        default: Option<&'b [u8]>,
    ) -> Option<&'b [u8]>
    where
        'a: 'b,
    {
        match self.find_key(key.as_ref()) {
            Some(tag) => Some(tag.value()),
            None => default,
        }
    }

    /// Returns the value of the first tag with `key`.
    #[must_use]
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&'a [u8]> {
        self.find_key(key.as_ref()).map(|tag| tag.value())
    }

    /// Returns the value of the first tag with `key` as UTF-8.
    ///
    /// `None` if the key is missing or the value is not valid UTF-8.
    #[must_use]
    pub fn get_str(&self, key: impl AsRef<[u8]>) -> Option<&'a str> {
        self.find_key(key.as_ref()).and_then(|tag| tag.value_str())
    }

    /// Returns whether any tag has `key`.
    #[must_use]
    pub fn has_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.find_key(key.as_ref()).is_some()
    }

    /// Returns whether any tag has exactly `key` and `value`.
    ///
    /// All tags with a matching key are considered, not just the first.
    #[must_use]
    pub fn has_tag(&self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> bool {
        let (key, value) = (key.as_ref(), value.as_ref());
        self.iter()
            .any(|tag| tag.key() == key && tag.value() == value)
    }
}

impl<'a, 'l> IntoIterator for &'l TagList<'a> {
    type Item = Tag<'a>;
    type IntoIter = Tags<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for TagList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for TagList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

/// Iterator over the tags of a [`TagList`].
#[derive(Debug, Clone)]
pub struct Tags<'a> {
    rest: &'a [u8],
}

impl<'a> Tags<'a> {
    /// Splits off the string before the next terminator.
    fn take_string(&mut self) -> Option<&'a [u8]> {
        let end = self.rest.iter().position(|&b| b == 0)?;
        let (string, tail) = self.rest.split_at(end);
        self.rest = &tail[1..];
        Some(string)
    }
}

impl<'a> Iterator for Tags<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let key = self.take_string()?;
        let value = self.take_string()?;
        Some(Tag::new(key, value))
    }
}

impl FusedIterator for Tags<'_> {}

/// Iterates over every tag list in `buffer`, skipping records of other kinds.
pub fn tag_lists(buffer: &RecordBuffer) -> impl Iterator<Item = CoreResult<TagList<'_>>> {
    buffer
        .records_of_kind(RecordKind::TAG_LIST)
        .map(TagList::from_record)
}
