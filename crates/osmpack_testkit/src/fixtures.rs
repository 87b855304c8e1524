//! Tag list fixtures.
//!
//! Provides helpers that build tag lists in a fresh buffer and keep the
//! buffer alive next to the offset.

use osmpack_buffer::{RecordBuffer, RecordOffset};
use osmpack_core::{CoreResult, TagList, TagListBuilder};

/// A buffer holding one tag list.
#[derive(Debug)]
pub struct TagListFixture {
    /// The buffer the tag list was written to.
    pub buffer: RecordBuffer,
    /// Offset of the tag list record.
    pub offset: RecordOffset,
}

impl TagListFixture {
    /// Returns a view of the tag list.
    pub fn tags(&self) -> TagList<'_> {
        TagList::at(&self.buffer, self.offset).expect("fixture holds a valid tag list")
    }
}

/// Builds one tag list from `pairs` in a new buffer.
///
/// # Errors
///
/// Returns the builder error for the first invalid pair.
pub fn build_tag_list<I, K, V>(pairs: I) -> CoreResult<TagListFixture>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<[u8]>,
    V: AsRef<[u8]>,
{
    let mut buffer = RecordBuffer::new();
    let mut builder = TagListBuilder::new(&mut buffer);
    builder.add_tags(pairs)?;
    let offset = builder.commit()?;
    Ok(TagListFixture { buffer, offset })
}

/// The `[(a,1),(b,2),(a,3)]` list: one duplicate key, insertion order kept.
pub fn sample_tag_list() -> TagListFixture {
    build_tag_list([("a", "1"), ("b", "2"), ("a", "3")]).expect("sample tags are valid")
}

/// A typical way's tags.
pub fn street_tag_list() -> TagListFixture {
    build_tag_list([
        ("highway", "residential"),
        ("name", "Main Street"),
        ("oneway", "yes"),
        ("surface", "asphalt"),
    ])
    .expect("street tags are valid")
}

/// Writes `lists` into one buffer and returns it with the offsets.
///
/// # Errors
///
/// Returns the builder error for the first invalid pair.
pub fn build_tag_lists(lists: &[Vec<(&str, &str)>]) -> CoreResult<(RecordBuffer, Vec<RecordOffset>)> {
    let mut buffer = RecordBuffer::new();
    let mut offsets = Vec::with_capacity(lists.len());
    for pairs in lists {
        let mut builder = TagListBuilder::new(&mut buffer);
        builder.add_tags(pairs.iter().copied())?;
        offsets.push(builder.commit()?);
    }
    Ok((buffer, offsets))
}
