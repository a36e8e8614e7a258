/// HTTP Method.
///
/// Only the methods served by this crate are representable, any other method token is rejected
/// at parse time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// The [GET] method requests transfer of a current representation of the target resource.
    ///
    /// [GET]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-get>
    Get,
    /// The [POST] method requests that the target resource process the enclosed representation.
    ///
    /// [POST]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-post>
    Post,
}

impl Method {
    /// Parse method from bytes, the match is case sensitive.
    #[inline]
    pub const fn from_bytes(bytes: &[u8]) -> Option<Method> {
        match bytes {
            b"GET" => Some(Method::Get),
            b"POST" => Some(Method::Post),
            _ => None,
        }
    }

    /// Returns string representation of the method, e.g: `GET`
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for Method {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Method {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
