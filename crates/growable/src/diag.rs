// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Storage event logging, compiled out unless the `log` feature is enabled.

#[cfg(feature = "log")]
macro_rules! storage_trace {
    ($($arg:tt)*) => {
        ::log::trace!(target: "growable", $($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! storage_trace {
    ($($arg:tt)*) => {
        if false {
            let _ = format_args!($($arg)*);
        }
    };
}

#[cfg(feature = "log")]
macro_rules! storage_debug {
    ($($arg:tt)*) => {
        ::log::debug!(target: "growable", $($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! storage_debug {
    ($($arg:tt)*) => {
        if false {
            let _ = format_args!($($arg)*);
        }
    };
}

pub(crate) use storage_debug;
pub(crate) use storage_trace;
