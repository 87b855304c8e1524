//! Writing tag lists into a record buffer.

use super::TagList;
use crate::error::{CoreError, CoreResult, TagField};
use osmpack_buffer::{RecordBuffer, RecordKind, RecordOffset};

/// Maximum length of a tag key or value in bytes.
pub const MAX_TAG_STRING_LENGTH: usize = 256 * 4;

/// Stages tags and appends them to a buffer as one tag list record.
///
/// Nothing reaches the buffer until [`commit`](Self::commit), so a builder
/// that is dropped early (or that hit an error) leaves no partial record.
///
/// # Example
///
/// ```rust
/// use osmpack_buffer::RecordBuffer;
/// use osmpack_core::{TagList, TagListBuilder};
///
/// let mut buffer = RecordBuffer::new();
/// let mut builder = TagListBuilder::new(&mut buffer);
/// builder.add_tag("highway", "primary").unwrap();
/// builder.add_tag("name", "Main Street").unwrap();
/// let offset = builder.commit().unwrap();
///
/// let tags = TagList::at(&buffer, offset).unwrap();
/// assert_eq!(tags.get_str("name"), Some("Main Street"));
/// ```
#[derive(Debug)]
pub struct TagListBuilder<'b> {
    buffer: &'b mut RecordBuffer,
    body: Vec<u8>,
    count: usize,
}

impl<'b> TagListBuilder<'b> {
    /// Creates a builder that will append to `buffer`.
    pub fn new(buffer: &'b mut RecordBuffer) -> Self {
        Self {
            buffer,
            body: Vec::new(),
            count: 0,
        }
    }

    fn check(field: TagField, bytes: &[u8]) -> CoreResult<()> {
        if bytes.len() > MAX_TAG_STRING_LENGTH {
            return Err(CoreError::StringTooLong {
                field,
                len: bytes.len(),
                max: MAX_TAG_STRING_LENGTH,
            });
        }
        if let Some(position) = bytes.iter().position(|&b| b == 0) {
            return Err(CoreError::EmbeddedNul { field, position });
        }
        Ok(())
    }

    /// Stages one tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the key or value contains a NUL byte or is
    /// longer than [`MAX_TAG_STRING_LENGTH`]. The builder is unchanged.
    pub fn add_tag(&mut self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> CoreResult<()> {
        let (key, value) = (key.as_ref(), value.as_ref());
        Self::check(TagField::Key, key)?;
        Self::check(TagField::Value, value)?;

        self.body.reserve(key.len() + value.len() + 2);
        self.body.extend_from_slice(key);
        self.body.push(0);
        self.body.extend_from_slice(value);
        self.body.push(0);
        self.count += 1;
        Ok(())
    }

    /// Stages every pair from `tags`, stopping at the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns the first validation error; tags before it stay staged.
    pub fn add_tags<I, K, V>(&mut self, tags: I) -> CoreResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<[u8]>,
        V: AsRef<[u8]>,
    {
        for (key, value) in tags {
            self.add_tag(key, value)?;
        }
        Ok(())
    }

    /// Stages a copy of every tag in `tags`.
    ///
    /// # Errors
    ///
    /// Returns an error if any key or value is longer than
    /// [`MAX_TAG_STRING_LENGTH`], as can happen for lists adopted through
    /// [`RecordBuffer::from_bytes`]. Nothing is staged in that case.
    pub fn add_tag_list(&mut self, tags: &TagList<'_>) -> CoreResult<()> {
        let mut count = 0;
        for tag in tags {
            Self::check(TagField::Key, tag.key())?;
            Self::check(TagField::Value, tag.value())?;
            count += 1;
        }
        self.body.extend_from_slice(tags.body());
        self.count += count;
        Ok(())
    }

    /// Returns the number of staged tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns whether no tags are staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Appends the staged tags as one record and returns its offset.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer refuses the record (capacity limit).
    pub fn commit(self) -> CoreResult<RecordOffset> {
        let offset = self.buffer.append(RecordKind::TAG_LIST, &self.body)?;
        tracing::debug!(
            %offset,
            tags = self.count,
            bytes = self.body.len(),
            "committed tag list"
        );
        Ok(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use osmpack_buffer::BufferConfig;

    #[test]
    fn builds_record_layout() {
        let mut buffer = RecordBuffer::new();
        let mut builder = TagListBuilder::new(&mut buffer);
        builder.add_tag("a", "1").unwrap();
        builder.add_tag(b"bb".as_slice(), b"22".as_slice()).unwrap();
        assert_eq!(builder.len(), 2);
        let offset = builder.commit().unwrap();

        let record = buffer.get(offset).unwrap();
        assert_eq!(record.kind(), RecordKind::TAG_LIST);
        assert_eq!(record.body(), b"a\x001\0bb\x0022\0");
    }

    #[test]
    fn empty_commit() {
        let mut buffer = RecordBuffer::new();
        let builder = TagListBuilder::new(&mut buffer);
        assert!(builder.is_empty());
        let offset = builder.commit().unwrap();

        let tags = TagList::at(&buffer, offset).unwrap();
        assert!(tags.is_empty());
    }

    #[test]
    fn rejects_embedded_nul() {
        let mut buffer = RecordBuffer::new();
        let mut builder = TagListBuilder::new(&mut buffer);

        let err = builder.add_tag("ke\0y", "v").unwrap_err();
        assert_eq!(
            err,
            CoreError::EmbeddedNul {
                field: TagField::Key,
                position: 2,
            }
        );

        let err = builder.add_tag("k", "\0").unwrap_err();
        assert_eq!(
            err,
            CoreError::EmbeddedNul {
                field: TagField::Value,
                position: 0,
            }
        );
        assert!(builder.is_empty());
    }

    #[test]
    fn rejects_long_strings() {
        let mut buffer = RecordBuffer::new();
        let mut builder = TagListBuilder::new(&mut buffer);

        let long = "x".repeat(MAX_TAG_STRING_LENGTH + 1);
        let err = builder.add_tag(&long, "v").unwrap_err();
        assert!(matches!(
            err,
            CoreError::StringTooLong {
                field: TagField::Key,
                ..
            }
        ));

        let limit = "y".repeat(MAX_TAG_STRING_LENGTH);
        builder.add_tag("k", &limit).unwrap();
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn add_tags_stops_at_first_error() {
        let mut buffer = RecordBuffer::new();
        let mut builder = TagListBuilder::new(&mut buffer);
        let result = builder.add_tags([("a", "1"), ("b\0", "2"), ("c", "3")]);
        assert!(result.is_err());
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn dropped_builder_writes_nothing() {
        let mut buffer = RecordBuffer::new();
        {
            let mut builder = TagListBuilder::new(&mut buffer);
            builder.add_tag("a", "1").unwrap();
        }
        assert!(buffer.is_empty());
    }

    #[test]
    fn copies_tag_list_from_other_buffer() {
        let mut source = RecordBuffer::new();
        let mut builder = TagListBuilder::new(&mut source);
        builder.add_tags([("a", "1"), ("b", "2")]).unwrap();
        let source_offset = builder.commit().unwrap();
        let source_tags = TagList::at(&source, source_offset).unwrap();

        let mut target = RecordBuffer::new();
        let mut builder = TagListBuilder::new(&mut target);
        builder.add_tag_list(&source_tags).unwrap();
        builder.add_tag("c", "3").unwrap();
        assert_eq!(builder.len(), 3);
        let offset = builder.commit().unwrap();

        let copied = TagList::at(&target, offset).unwrap();
        assert_eq!(copied.to_string(), "a=1,b=2,c=3");
    }

    #[test]
    fn copy_rejects_adopted_long_key() {
        let long = vec![b'k'; MAX_TAG_STRING_LENGTH + 500];
        let mut body = long.clone();
        body.extend_from_slice(b"\0v\0");

        let mut raw = RecordBuffer::new();
        raw.append(RecordKind::TAG_LIST, &body).unwrap();
        let adopted = RecordBuffer::from_bytes(raw.into_bytes()).unwrap();
        let source = TagList::at(&adopted, RecordOffset::new(0)).unwrap();
        assert_eq!(source.size(), 1);

        let mut target = RecordBuffer::new();
        let mut builder = TagListBuilder::new(&mut target);
        builder.add_tag("a", "1").unwrap();
        let err = builder.add_tag_list(&source).unwrap_err();
        assert_eq!(
            err,
            CoreError::StringTooLong {
                field: TagField::Key,
                len: long.len(),
                max: MAX_TAG_STRING_LENGTH,
            }
        );
        assert_eq!(builder.len(), 1);
        let offset = builder.commit().unwrap();

        let written = TagList::at(&target, offset).unwrap();
        assert_eq!(written.to_string(), "a=1");
    }

    #[test]
    fn commit_reports_capacity_error() {
        let mut buffer = RecordBuffer::with_config(BufferConfig::new().max_capacity(16));
        let mut builder = TagListBuilder::new(&mut buffer);
        builder.add_tag("highway", "motorway").unwrap();

        let err = builder.commit().unwrap_err();
        assert!(matches!(
            err,
            CoreError::Buffer(osmpack_buffer::BufferError::CapacityExceeded { .. })
        ));
        assert!(buffer.is_empty());
    }
}
