//! Tags and tag lists stored in a record buffer.
//!
//! A tag list is one [`TAG_LIST`](osmpack_buffer::RecordKind::TAG_LIST) record whose body is the
//! concatenation of its tags, each written as `key\0value\0`:
//!
//! ```text
//! h i g h w a y \0 p r i m a r y \0 n a m e \0 M a i n \0
//! |---- key ---|   |--- value --|   |- key -|  |value|
//! ```
//!
//! Tags carry no length prefix; a reader finds the end of each string by
//! scanning for its terminator. Bodies are checked once when a
//! [`TagList`] view is created, after which scanning cannot run off the end.
//!
//! Tag lists are written with a [`TagListBuilder`] and read back through
//! borrowed [`TagList`] and [`Tag`] views.

mod builder;
mod list;

pub use builder::{TagListBuilder, MAX_TAG_STRING_LENGTH};
pub use list::{tag_lists, TagList, Tags};

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One key/value pair inside a tag list.
///
/// A `Tag` is a view into the record buffer: it borrows the bytes of its
/// tag list and is only handed out by iterating a [`TagList`]. It is not
/// `Clone`; to keep a tag beyond the buffer's lifetime, copy its bytes.
///
/// Tags compare byte-wise, key first and value second.
pub struct Tag<'a> {
    key: &'a [u8],
    value: &'a [u8],
}

impl<'a> Tag<'a> {
    pub(crate) fn new(key: &'a [u8], value: &'a [u8]) -> Self {
        Self { key, value }
    }

    /// Returns the key bytes, without the terminator.
    #[must_use]
    pub fn key(&self) -> &'a [u8] {
        self.key
    }

    /// Returns the value bytes, without the terminator.
    #[must_use]
    pub fn value(&self) -> &'a [u8] {
        self.value
    }

    /// Returns the key as UTF-8, if it is valid UTF-8.
    #[must_use]
    pub fn key_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.key).ok()
    }

    /// Returns the value as UTF-8, if it is valid UTF-8.
    #[must_use]
    pub fn value_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.value).ok()
    }

    /// Returns the key and value as a pair of byte slices.
    #[must_use]
    pub fn as_pair(&self) -> (&'a [u8], &'a [u8]) {
        (self.key, self.value)
    }

    fn lossy(bytes: &[u8]) -> Cow<'_, str> {
        String::from_utf8_lossy(bytes)
    }
}

impl PartialEq for Tag<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl Eq for Tag<'_> {}

impl PartialOrd for Tag<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(other.key)
            .then_with(|| self.value.cmp(other.value))
    }
}

impl Hash for Tag<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.value.hash(state);
    }
}

impl fmt::Debug for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("key", &Self::lossy(self.key))
            .field("value", &Self::lossy(self.value))
            .finish()
    }
}

impl fmt::Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", Self::lossy(self.key), Self::lossy(self.value))
    }
}
