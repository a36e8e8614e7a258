use bytes::Bytes;
use std::borrow::Cow;

use super::CRLF_LEN;
use super::error::{ParseError, lossy};
use crate::common::ParseResult;
use crate::http::{Method, Version};
use crate::matches;

/// HTTP request line.
///
/// The target is opaque, kept as received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    pub target: Bytes,
    pub version: Version,
}

impl RequestLine {
    /// Returns the target as string, invalid UTF-8 is replaced with `U+FFFD`.
    #[inline]
    pub fn target_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.target)
    }

    /// Parse request line from the start of `bytes`.
    ///
    /// Returns the request line and the number of bytes it occupies including the crlf.
    ///
    /// This function performs a chunked parsing, see [module level documentation] for more
    /// details.
    ///
    /// [module level documentation]: crate::h1::parser
    #[inline]
    pub fn parse_chunk(bytes: &[u8]) -> ParseResult<(RequestLine, usize), ParseError> {
        parse_chunk_reqline(bytes)
    }
}

// ===== Request Line =====

fn parse_chunk_reqline(bytes: &[u8]) -> ParseResult<(RequestLine, usize), ParseError> {
    use ParseResult as Result;

    let Some(end) = matches::find_crlf(bytes) else {
        return Result::Pending;
    };
    let line = &bytes[..end];

    let mut parts = line.split(|b| *b == b' ');
    let Some(method) = parts.next() else {
        return Result::Pending;
    };
    let (target, version) = match (parts.next(), parts.next(), parts.next()) {
        // no separator at all, the line may not be fully arrived
        (None, _, _) => return Result::Pending,
        (Some(target), Some(version), None) => (target, version),
        _ => return Result::Err(ParseError::MalformedRequestLine(lossy(line))),
    };

    let Some(version) = Version::from_bytes(version) else {
        return Result::Err(ParseError::UnsupportedVersion(lossy(version)));
    };

    let Some(method) = Method::from_bytes(method) else {
        return Result::Err(ParseError::UnsupportedMethod(lossy(method)));
    };

    Result::Ok((
        RequestLine {
            method,
            target: Bytes::copy_from_slice(target),
            version,
        },
        end + CRLF_LEN,
    ))
}
