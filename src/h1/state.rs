//! Per connection request head state machine.
use super::parser::{HeaderBlock, ParseError, RequestLine};
use crate::common::ParseResult;
use crate::headers::HeaderMap;
use crate::log;
use crate::request::Request;

/// Parse phase of a [`RequestParser`].
///
/// Transitions only move forward, [`Complete`][ParserState::Complete] is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParserState {
    #[default]
    AwaitingRequestLine,
    ParsingHeaders,
    Complete,
}

/// Incremental request head parser.
///
/// One instance serves exactly one request head of one connection. Bytes are given with
/// [`feed`][RequestParser::feed], which reports how many of them are consumed. Unconsumed bytes
/// must be given again, with more appended, in the next call.
///
/// Any error is terminal, subsequent [`feed`][RequestParser::feed] returns
/// [`ParseError::InvalidStateTransition`].
#[derive(Debug, Default)]
pub struct RequestParser {
    state: ParserState,
    line: Option<RequestLine>,
    headers: HeaderMap,
    poisoned: bool,
}

impl RequestParser {
    /// Create new parser awaiting a request line.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns current parse phase.
    #[inline]
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Returns `true` if the header block terminator has been consumed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state == ParserState::Complete
    }

    /// Returns the request line, if already parsed.
    #[inline]
    pub fn request_line(&self) -> Option<&RequestLine> {
        self.line.as_ref()
    }

    /// Returns headers parsed so far.
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Parse as much of `bytes` as possible.
    ///
    /// Returns the number of bytes consumed from the start of `bytes`. Returning less than
    /// `bytes.len()` without reaching [`ParserState::Complete`] means more bytes is required.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidStateTransition`] without any mutation if the parser is
    /// already complete or failed, otherwise returns error of the failing request line or
    /// header line.
    pub fn feed(&mut self, bytes: &[u8]) -> Result<usize, ParseError> {
        if self.poisoned || self.state == ParserState::Complete {
            return Err(ParseError::InvalidStateTransition);
        }

        match self.parse(bytes) {
            Ok(read) => Ok(read),
            Err(err) => {
                self.poisoned = true;
                Err(err)
            }
        }
    }

    fn parse(&mut self, bytes: &[u8]) -> Result<usize, ParseError> {
        let mut read = 0;

        loop {
            let rest = &bytes[read..];

            match self.state {
                ParserState::AwaitingRequestLine => match RequestLine::parse_chunk(rest) {
                    ParseResult::Ok((line, len)) => {
                        log::debug!(
                            "request line: {} {} {}",
                            line.method,
                            line.target_lossy(),
                            line.version
                        );
                        self.line = Some(line);
                        self.state = ParserState::ParsingHeaders;
                        read += len;
                    }
                    ParseResult::Pending => break,
                    ParseResult::Err(err) => return Err(err),
                },
                ParserState::ParsingHeaders => {
                    let block = HeaderBlock::parse_chunk(rest, &mut self.headers)?;
                    read += block.consumed;

                    if !block.complete {
                        break;
                    }

                    log::debug!("header block complete: {} fields", self.headers.len());
                    self.state = ParserState::Complete;
                }
                ParserState::Complete => break,
            }
        }

        Ok(read)
    }

    /// Consumes the parser, returning the completed [`Request`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::TruncatedRequest`] if the parser is not complete.
    pub fn finish(self) -> Result<Request, ParseError> {
        match (self.state, self.line) {
            (ParserState::Complete, Some(line)) => Ok(Request::new(line, self.headers)),
            _ => Err(ParseError::TruncatedRequest),
        }
    }
}
