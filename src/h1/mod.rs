//! HTTP/1.1 Protocol.
//!
//! - [`parser`] contains request line and header block parsers.
//! - [`state`] contains the per connection state machine driving the parsers.
//! - [`driver`] contains the integration of all the components above with an async byte source.

pub mod parser;
pub mod state;
pub mod driver;

pub use driver::{Config, ReadError, RequestReader, read_request};
pub use parser::{ParseError, RequestLine};
pub use state::{ParserState, RequestParser};
