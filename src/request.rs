//! Completed HTTP request head.
use std::borrow::Cow;

use crate::h1::parser::RequestLine;
use crate::headers::{HeaderMap, HeaderValue};
use crate::http::{Method, Version};

/// HTTP request head.
///
/// Produced by [`RequestParser::finish`] once the header block is terminated, immutable from
/// then on.
///
/// [`RequestParser::finish`]: crate::h1::RequestParser::finish
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    line: RequestLine,
    headers: HeaderMap,
}

impl Request {
    pub(crate) fn new(line: RequestLine, headers: HeaderMap) -> Self {
        Self { line, headers }
    }

    /// Returns the request method.
    #[inline]
    pub fn method(&self) -> Method {
        self.line.method
    }

    /// Returns the request target as string, e.g: `/search?q=test`.
    ///
    /// Invalid UTF-8 is replaced with `U+FFFD`, use [`target_bytes`][Request::target_bytes] for
    /// the target as received.
    #[inline]
    pub fn target(&self) -> Cow<'_, str> {
        self.line.target_lossy()
    }

    /// Returns the request target as received.
    #[inline]
    pub fn target_bytes(&self) -> &[u8] {
        &self.line.target
    }

    /// Returns the request version.
    #[inline]
    pub fn version(&self) -> Version {
        self.line.version
    }

    /// Returns the parsed request line.
    #[inline]
    pub fn request_line(&self) -> &RequestLine {
        &self.line
    }

    /// Returns the header fields, repeated names merged.
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns header value with given name, case-insensitively.
    #[inline]
    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.get(name)
    }

    /// Returns header value with given name as string slice, see [`HeaderMap::get_str`].
    #[inline]
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get_str(name)
    }

    /// Consumes the request, returning its parts.
    #[inline]
    pub fn into_parts(self) -> (RequestLine, HeaderMap) {
        (self.line, self.headers)
    }
}
