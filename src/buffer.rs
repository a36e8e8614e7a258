//! Growable byte store for unconsumed connection input.
use bytes::BytesMut;

use crate::log;

/// Initial capacity of [`StreamBuffer::new`].
///
/// Kept small so even short request heads go through the growth path.
pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

/// Bytes received from a connection but not yet consumed by the parser.
///
/// Capacity doubles whenever an [`append`][StreamBuffer::append] would overflow it and never
/// shrinks. [`consume`][StreamBuffer::consume] relocates the remaining bytes to the front.
pub struct StreamBuffer {
    bytes: BytesMut,
    capacity: usize,
}

impl StreamBuffer {
    /// Create new buffer with [`DEFAULT_INITIAL_CAPACITY`].
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Create new buffer with given initial capacity.
    ///
    /// Zero capacity is bumped to one, doubling requires a non zero start.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            bytes: BytesMut::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the number of unconsumed bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if there is no unconsumed bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the allocated size.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the unconsumed region.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Write `bytes` after the unconsumed region, growing if required.
    pub fn append(&mut self, bytes: &[u8]) {
        let required = self.bytes.len() + bytes.len();
        if required > self.capacity {
            let mut capacity = self.capacity;
            while capacity < required {
                capacity = capacity.saturating_mul(2);
            }
            self.grow(capacity);
        }
        self.bytes.extend_from_slice(bytes);
    }

    fn grow(&mut self, capacity: usize) {
        log::debug!("stream buffer grow: {} -> {capacity}", self.capacity);

        let mut grown = BytesMut::with_capacity(capacity);
        grown.extend_from_slice(&self.bytes);
        self.bytes = grown;
        self.capacity = capacity;
    }

    /// Drop the first `n` bytes, shifting the rest to the front.
    ///
    /// # Panics
    ///
    /// Panics if `n` is greater than [`len`][StreamBuffer::len].
    pub fn consume(&mut self, n: usize) {
        let len = self.bytes.len();
        assert!(n <= len, "consume out of bounds: {n} > {len}");

        if n == 0 {
            return;
        }
        self.bytes.copy_within(n..len, 0);
        self.bytes.truncate(len - n);
    }
}

impl Default for StreamBuffer {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StreamBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("StreamBuffer")
            .field("len", &self.bytes.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
