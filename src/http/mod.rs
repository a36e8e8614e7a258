//! HTTP protocol types.
mod method;
mod version;

pub use method::Method;
pub use version::Version;
