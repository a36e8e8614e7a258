use std::borrow::Cow;
use std::collections::HashMap;
use std::collections::hash_map;

use super::HeaderValue;

/// HTTP Headers.
///
/// Field names are stored in ASCII lowercase, lookups are case-insensitive. Appending a name that
/// already exists joins the values with `", "` in arrival order instead of replacing it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    fields: HashMap<String, HeaderValue>,
}

impl HeaderMap {
    /// Create new empty [`HeaderMap`].
    ///
    /// This function does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create new empty [`HeaderMap`] with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of distinct field names.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if there is no header field.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if the map contains a header with given name, case-insensitively.
    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.contains_key(lowercase(name).as_ref())
    }

    /// Returns the merged value for given name, case-insensitively.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.fields.get(lowercase(name).as_ref())
    }

    /// Returns the merged value for given name as string slice.
    ///
    /// Returns `None` if the header is missing or its value is not valid UTF-8.
    #[inline]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|value| value.to_str().ok())
    }

    /// Append a header field.
    ///
    /// If the name already exists, `value` is joined to the stored value with `", "`.
    pub fn append(&mut self, name: &str, value: &[u8]) {
        match self.fields.entry(lowercase(name).into_owned()) {
            hash_map::Entry::Occupied(mut entry) => entry.get_mut().merge(value),
            hash_map::Entry::Vacant(entry) => {
                entry.insert(HeaderValue::copy_from_slice(value));
            }
        }
    }

    /// Returns an iterator over the name and merged value, in arbitrary order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.fields.iter(),
        }
    }
}

fn lowercase(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

impl std::fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// ===== Iter =====

/// Iterator returned by [`HeaderMap::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    iter: hash_map::Iter<'a, String, HeaderValue>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a HeaderValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a str, &'a HeaderValue);

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
