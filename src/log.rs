//! Logging macros, no-op unless the `log` feature is enabled.
#![allow(unused, reason = "logger")]

macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::log!(target: "h1parse", ::log::Level::Trace, $($tt)*);
    };
}

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::log!(target: "h1parse", ::log::Level::Debug, $($tt)*);
    };
}

macro_rules! info {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::log!(target: "h1parse", ::log::Level::Info, $($tt)*);
    };
}

macro_rules! warning {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::log!(target: "h1parse", ::log::Level::Warn, $($tt)*);
    };
}

macro_rules! error {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::log!(target: "h1parse", ::log::Level::Error, $($tt)*);
    };
}

pub(crate) use {trace, debug, info, warning, error};
