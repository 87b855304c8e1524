//! Buffer configuration.

/// Configuration for a [`crate::RecordBuffer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferConfig {
    /// Bytes reserved when the buffer is created.
    pub initial_capacity: usize,

    /// Hard limit on committed bytes (`None` = unbounded).
    pub max_capacity: Option<usize>,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 4 * 1024, // 4 KB
            max_capacity: None,
        }
    }
}

impl BufferConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of bytes reserved up front.
    #[must_use]
    pub const fn initial_capacity(mut self, bytes: usize) -> Self {
        self.initial_capacity = bytes;
        self
    }

    /// Sets a hard limit on committed bytes.
    #[must_use]
    pub const fn max_capacity(mut self, bytes: usize) -> Self {
        self.max_capacity = Some(bytes);
        self
    }

    /// Removes the capacity limit.
    #[must_use]
    pub const fn unbounded(mut self) -> Self {
        self.max_capacity = None;
        self
    }
}
