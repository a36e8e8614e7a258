//! Incremental HTTP/1.1 Request Head Parser
//!
//! Bytes from a connection may arrive in any chunk size. [`StreamBuffer`] keeps the bytes not
//! yet consumed, and [`RequestParser`] consumes as much of them as it can on every
//! [`feed`][RequestParser::feed], until the header block is terminated. [`RequestReader`] runs
//! that loop over a tokio [`AsyncRead`][tokio::io::AsyncRead].
//!
//! ```no_run
//! # async fn app(stream: tokio::net::TcpStream) -> Result<(), h1parse::ReadError> {
//! let request = h1parse::read_request(stream).await?;
//! println!("{} {}", request.method(), request.target());
//! # Ok(())
//! # }
//! ```
#![warn(missing_debug_implementations)]

mod log;
mod common;
mod matches;

pub mod buffer;
pub mod http;
pub mod headers;
pub mod h1;
pub mod request;

pub use common::ParseResult;
pub use buffer::StreamBuffer;
pub use h1::{Config, ParseError, ParserState, ReadError, RequestParser, RequestReader, read_request};
pub use request::Request;
