use bytes::Bytes;

use super::CRLF_LEN;
use super::error::{ParseError, lossy};
use crate::common::ParseResult;
use crate::headers::HeaderMap;
use crate::matches;

/// Single parsed header field.
///
/// The name is normalized to lowercase, the value is kept as received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: Bytes,
}

impl Header {
    /// Parse a header line from the start of `bytes`.
    ///
    /// Returns `ParseResult::Ok(None)` when `bytes` starts with the empty line terminating the
    /// header block. Otherwise returns the header and the number of bytes it occupies including
    /// the crlf.
    ///
    /// This function performs a chunked parsing, see [module level documentation] for more
    /// details.
    ///
    /// [module level documentation]: crate::h1::parser
    #[inline]
    pub fn parse_chunk(bytes: &[u8]) -> ParseResult<Option<(Header, usize)>, ParseError> {
        parse_chunk_header(bytes)
    }
}

fn parse_chunk_header(bytes: &[u8]) -> ParseResult<Option<(Header, usize)>, ParseError> {
    use ParseResult as Result;

    if bytes.starts_with(b"\r\n") {
        return Result::Ok(None);
    }

    let Some(end) = matches::find_crlf(bytes) else {
        return Result::Pending;
    };
    let raw = &bytes[..end];
    let line = matches::trim_space(raw);

    let colon = match line.iter().position(|b| *b == b':') {
        Some(0) | None => return Result::Err(ParseError::MalformedHeaderLine(lossy(raw))),
        Some(colon) => colon,
    };
    let (name, value) = (&line[..colon], &line[colon + 1..]);

    if !name.iter().all(|b| matches::is_token(*b)) {
        return Result::Err(ParseError::MalformedHeaderName(lossy(raw)));
    }

    // token is ASCII
    let name = name.iter().map(|b| b.to_ascii_lowercase() as char).collect();
    let value = Bytes::copy_from_slice(matches::trim_ows_start(value));

    Result::Ok(Some((Header { name, value }, end + CRLF_LEN)))
}

// ===== Header Block =====

/// Progress of a [`HeaderBlock::parse_chunk`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderBlock {
    /// Bytes consumed, including the terminator if `complete`.
    pub consumed: usize,
    /// Whether the empty line terminating the header block is consumed.
    pub complete: bool,
}

impl HeaderBlock {
    /// Parse every complete header line available in `bytes` into `map`.
    ///
    /// Stops at the block terminator, or at the first incomplete line.
    pub fn parse_chunk(bytes: &[u8], map: &mut HeaderMap) -> Result<HeaderBlock, ParseError> {
        let mut consumed = 0;

        loop {
            match parse_chunk_header(&bytes[consumed..]) {
                ParseResult::Ok(Some((header, len))) => {
                    map.append(&header.name, &header.value);
                    consumed += len;
                }
                ParseResult::Ok(None) => {
                    return Ok(HeaderBlock {
                        consumed: consumed + CRLF_LEN,
                        complete: true,
                    });
                }
                ParseResult::Pending => {
                    return Ok(HeaderBlock {
                        consumed,
                        complete: false,
                    });
                }
                ParseResult::Err(err) => return Err(err),
            }
        }
    }
}
