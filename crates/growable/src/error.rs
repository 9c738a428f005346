// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for growable.

use core::alloc::Layout;

use thiserror::Error;

/// Errors raised while acquiring storage for a [`GrowVec`](crate::GrowVec).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum GrowError {
    /// The requested slot count does not fit in a valid allocation layout.
    ///
    /// Raised before the allocation strategy is consulted, when
    /// `capacity * size_of::<T>()` would exceed `isize::MAX` or when the
    /// doubling step itself overflows `usize`.
    #[error("capacity overflow: requested slot count exceeds isize::MAX bytes")]
    CapacityOverflow,

    /// The allocation strategy could not supply a block for `layout`.
    #[error("allocation failed: {} bytes, align {}", .layout.size(), .layout.align())]
    AllocFailed {
        /// Layout that was requested from the strategy.
        layout: Layout,
    },
}

impl GrowError {
    /// Creates an `AllocFailed` error for `layout`.
    pub fn alloc_failed(layout: Layout) -> Self {
        Self::AllocFailed { layout }
    }
}

/// Diverges on a storage error from an infallible entry point.
///
/// `AllocFailed` goes through the global allocation error handler, the same
/// way `alloc::vec::Vec` reports out-of-memory.
#[cold]
#[inline(never)]
pub(crate) fn grow_failed(error: GrowError) -> ! {
    match error {
        GrowError::CapacityOverflow => panic!("{}", error),
        GrowError::AllocFailed { layout } => alloc::alloc::handle_alloc_error(layout),
    }
}
