use bytes::BytesMut;

/// HTTP Header Value.
///
/// Bytes are kept as received, obs-text and other non-ASCII bytes included.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeaderValue {
    bytes: BytesMut,
}

impl HeaderValue {
    pub(crate) fn copy_from_slice(bytes: &[u8]) -> Self {
        Self {
            bytes: BytesMut::from(bytes),
        }
    }

    /// Join another field value with `", "`.
    pub(crate) fn merge(&mut self, bytes: &[u8]) {
        self.bytes.reserve(2 + bytes.len());
        self.bytes.extend_from_slice(b", ");
        self.bytes.extend_from_slice(bytes);
    }

    /// Returns the raw bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the value as string slice.
    ///
    /// # Errors
    ///
    /// Returns error if the value is not valid UTF-8.
    #[inline]
    pub fn to_str(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.bytes)
    }

    /// Returns the number of bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for HeaderValue {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq<[u8]> for HeaderValue {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl PartialEq<str> for HeaderValue {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for HeaderValue {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl std::fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}

impl std::fmt::Debug for HeaderValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.to_str() {
            Ok(value) => std::fmt::Debug::fmt(value, f),
            Err(_) => std::fmt::Debug::fmt(&self.bytes, f),
        }
    }
}
