/// HTTP Version.
///
/// [httpwg](https://httpwg.org/specs/rfc9112.html#http.version)
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Version {
    /// `HTTP/1.1`
    #[default]
    Http11,
}

impl Version {
    /// Parse the full version token, e.g: `HTTP/1.1`.
    #[inline]
    pub const fn from_bytes(bytes: &[u8]) -> Option<Version> {
        match bytes {
            b"HTTP/1.1" => Some(Version::Http11),
            _ => None,
        }
    }

    /// Returns the version number without the `HTTP/` prefix, e.g: `1.1`
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Version::Http11 => "1.1",
        }
    }

    /// Returns the full version token, e.g: `HTTP/1.1`
    #[inline]
    pub const fn as_token(&self) -> &'static str {
        match self {
            Version::Http11 => "HTTP/1.1",
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}

impl std::fmt::Debug for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl PartialEq<str> for Version {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Version {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
