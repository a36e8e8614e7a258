//! HTTP/1.1 Parser.
//!
//! [`RequestLine::parse_chunk`] works on chunked bytes, given any length of bytes, the parser
//! will find the next crlf and parse the line before it. If crlf is not found, then the parser
//! returns [`ParseResult::Pending`], where more bytes is required to complete parsing. Nothing
//! is consumed in that case, the caller keeps the bytes and retries with more appended.
//!
//! [`Header::parse_chunk`] works the same way. Additionally, if the parser encounter an empty
//! line, it returns [`ParseResult::Ok(None)`] denoting that its the end of header fields.
//!
//! [`HeaderBlock::parse_chunk`] repeats [`Header::parse_chunk`] over every complete line
//! available, merging them into a [`HeaderMap`].
//!
//! [`ParseResult::Pending`]: crate::ParseResult::Pending
//! [`ParseResult::Ok(None)`]: crate::ParseResult::Ok
//! [`HeaderMap`]: crate::headers::HeaderMap
mod error;
mod header;
mod request;

pub use error::ParseError;
pub use header::{Header, HeaderBlock};
pub use request::RequestLine;

const CRLF_LEN: usize = b"\r\n".len();
