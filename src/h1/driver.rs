//! Read a request head from an async byte source.
use std::io;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};

use super::parser::ParseError;
use super::state::RequestParser;
use crate::buffer::{DEFAULT_INITIAL_CAPACITY, StreamBuffer};
use crate::log;
use crate::request::Request;

const DEFAULT_READ_CHUNK: usize = 1024;
const MAX_HEAD_LEN: usize = 8 * 1024;
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_HEAD_TIMEOUT: Duration = Duration::from_secs(60);

/// [`RequestReader`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    initial_capacity: usize,
    read_chunk: usize,
    max_head_len: usize,
    read_timeout: Option<Duration>,
    head_timeout: Option<Duration>,
}

impl Config {
    /// Create default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial [`StreamBuffer`] capacity, defaults to 8 bytes.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Maximum bytes requested per read, defaults to 1KB.
    ///
    /// Zero is bumped to one.
    pub fn read_chunk(mut self, len: usize) -> Self {
        self.read_chunk = len.max(1);
        self
    }

    /// Maximum request head size, defaults to 8KB.
    ///
    /// Counts every byte of the head received so far, parsed lines included.
    pub fn max_head_len(mut self, len: usize) -> Self {
        self.max_head_len = len;
        self
    }

    /// Maximum duration of a single read, defaults to 30 seconds.
    ///
    /// `None` waits forever.
    pub fn read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Maximum duration of reading the whole request head, defaults to 60 seconds.
    ///
    /// `None` waits forever.
    pub fn head_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.head_timeout = timeout;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            read_chunk: DEFAULT_READ_CHUNK,
            max_head_len: MAX_HEAD_LEN,
            read_timeout: Some(DEFAULT_READ_TIMEOUT),
            head_timeout: Some(DEFAULT_HEAD_TIMEOUT),
        }
    }
}

// ===== Error =====

/// An error that can occur when reading a request head.
#[derive(Debug)]
pub enum ReadError {
    /// Request head is invalid or truncated.
    Parse(ParseError),
    /// Byte source failed.
    Io(io::Error),
    /// Single read exceeds [`Config::read_timeout`], or the whole head exceeds
    /// [`Config::head_timeout`].
    Timeout,
    /// Request head exceeds [`Config::max_head_len`].
    TooLarge,
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Timeout | Self::TooLarge => None,
        }
    }
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Parse(err) => std::fmt::Display::fmt(err, f),
            Self::Io(err) => std::fmt::Display::fmt(err, f),
            Self::Timeout => f.write_str("read timed out"),
            Self::TooLarge => f.write_str("excessive request head size"),
        }
    }
}

impl From<ParseError> for ReadError {
    #[inline]
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<io::Error> for ReadError {
    #[inline]
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

// ===== Reader =====

/// Read a request head from `io` with default [`Config`].
pub async fn read_request<IO>(io: IO) -> Result<Request, ReadError>
where
    IO: AsyncRead + Unpin,
{
    RequestReader::new(io).read_request().await
}

/// Drives a [`RequestParser`] over a byte source.
///
/// Each read is appended to a [`StreamBuffer`], the unconsumed region is fed to the parser and
/// the consumed bytes are dropped from the buffer.
pub struct RequestReader<IO> {
    io: IO,
    buffer: StreamBuffer,
    chunk: Box<[u8]>,
    config: Config,
}

impl<IO> RequestReader<IO> {
    /// Create new reader with default [`Config`].
    #[inline]
    pub fn new(io: IO) -> Self {
        Self::with_config(io, Config::default())
    }

    /// Create new reader with given [`Config`].
    pub fn with_config(io: IO, config: Config) -> Self {
        Self {
            io,
            buffer: StreamBuffer::with_capacity(config.initial_capacity),
            chunk: vec![0; config.read_chunk].into_boxed_slice(),
            config,
        }
    }

    /// Returns bytes received after the request head, left for a body reader.
    #[inline]
    pub fn remaining(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    /// Returns the underlying buffer.
    #[inline]
    pub fn buffer(&self) -> &StreamBuffer {
        &self.buffer
    }

    /// Consumes the reader, returning the byte source and the buffer.
    #[inline]
    pub fn into_parts(self) -> (IO, StreamBuffer) {
        (self.io, self.buffer)
    }

    fn feed(&mut self, parser: &mut RequestParser) -> Result<usize, ParseError> {
        let read = match parser.feed(self.buffer.as_slice()) {
            Ok(read) => read,
            Err(err) => {
                log::error!("failed to parse request head: {err}");
                return Err(err);
            }
        };
        log::trace!("consumed {read} of {} buffered bytes", self.buffer.len());
        self.buffer.consume(read);
        Ok(read)
    }
}

impl<IO> RequestReader<IO>
where
    IO: AsyncRead + Unpin,
{
    /// Read until a complete request head is parsed.
    ///
    /// Bytes already buffered from a previous call are parsed first.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::TruncatedRequest`] if the byte source ends before the head is
    /// complete, including when it ends before sending any byte.
    pub async fn read_request(&mut self) -> Result<Request, ReadError> {
        let mut parser = RequestParser::new();

        match self.config.head_timeout {
            Some(duration) => {
                let result = tokio::time::timeout(duration, self.read_head(&mut parser)).await;
                match result {
                    Ok(result) => result?,
                    Err(_) => {
                        log::warning!(
                            "request head not complete after {duration:?}, state: {:?}",
                            parser.state()
                        );
                        return Err(ReadError::Timeout);
                    }
                }
            }
            None => self.read_head(&mut parser).await?,
        }

        let request = parser.finish()?;
        log::info!(
            "{} {} {}",
            request.method(),
            request.target(),
            request.version()
        );
        Ok(request)
    }

    async fn read_head(&mut self, parser: &mut RequestParser) -> Result<(), ReadError> {
        // head bytes already parsed and dropped from the buffer
        let mut parsed = 0;

        if !self.buffer.is_empty() {
            parsed += self.feed(parser)?;
        }

        while !parser.is_complete() {
            let read = self.read_chunk().await?;
            if read == 0 {
                log::warning!(
                    "byte source ended with {} unparsed bytes, state: {:?}",
                    self.buffer.len(),
                    parser.state()
                );
                return Err(ParseError::TruncatedRequest.into());
            }

            self.buffer.append(&self.chunk[..read]);
            parsed += self.feed(parser)?;

            if !parser.is_complete() && parsed + self.buffer.len() > self.config.max_head_len {
                log::error!("request head exceeds {} bytes", self.config.max_head_len);
                return Err(ReadError::TooLarge);
            }
        }

        Ok(())
    }

    async fn read_chunk(&mut self) -> Result<usize, ReadError> {
        let read = self.io.read(&mut self.chunk[..]);

        match self.config.read_timeout {
            Some(duration) => match tokio::time::timeout(duration, read).await {
                Ok(result) => Ok(result?),
                Err(_) => {
                    log::warning!("read timed out after {duration:?}");
                    Err(ReadError::Timeout)
                }
            },
            None => Ok(read.await?),
        }
    }
}

impl<IO> std::fmt::Debug for RequestReader<IO> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("RequestReader")
            .field("buffer", &self.buffer)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
