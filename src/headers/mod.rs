//! HTTP Headers.
mod map;
mod value;

pub use map::{HeaderMap, Iter};
pub use value::HeaderValue;

#[cfg(test)]
mod test;
