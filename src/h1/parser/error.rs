/// HTTP request head parsing error.
///
/// Every variant is terminal for the request, the [`RequestParser`] that returned it must be
/// discarded.
///
/// [`RequestParser`]: crate::h1::RequestParser
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Request line does not consist of exactly three space separated parts.
    MalformedRequestLine(String),
    /// Version other than `HTTP/1.1`.
    UnsupportedVersion(String),
    /// Method other than `GET` or `POST`.
    UnsupportedMethod(String),
    /// Header line without colon, or with empty name.
    MalformedHeaderLine(String),
    /// Header name contains character outside the token grammar.
    MalformedHeaderName(String),
    /// Byte source ended before the header block terminator.
    TruncatedRequest,
    /// Parser fed after completion or after a previous error.
    InvalidStateTransition,
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MalformedRequestLine(line) => write!(f, "malformed request line: {line:?}"),
            Self::UnsupportedVersion(version) => write!(f, "unsupported version: {version:?}"),
            Self::UnsupportedMethod(method) => write!(f, "unsupported method: {method:?}"),
            Self::MalformedHeaderLine(line) => write!(f, "malformed header line: {line:?}"),
            Self::MalformedHeaderName(line) => {
                write!(f, "invalid character in header name: {line:?}")
            }
            Self::TruncatedRequest => f.write_str("request head not terminated"),
            Self::InvalidStateTransition => f.write_str("parser already finished"),
        }
    }
}

pub(crate) fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
