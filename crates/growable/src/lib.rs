// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous buffer with an injected allocation strategy.
//!
//! `GrowVec<T, S>` decouples logical length from allocated capacity and
//! amortizes appends by doubling capacity on overflow. Raw memory acquisition,
//! release, and in-place element construction/destruction all go through an
//! [`AllocStrategy`], so the container can be composed into stacks, priority
//! queues or hash tables that need their own allocation policy.
//!
//! # Core Guarantees
//!
//! - **Split storage**: slots `[0, len)` hold live elements, slots
//!   `[len, capacity)` are raw memory that is never read.
//! - **Doubling growth**: `push_back` on a full buffer reserves `1` when
//!   capacity is `0` and `2 * capacity` otherwise.
//! - **Strong growth guarantee**: a failed reservation leaves the vector
//!   untouched; the old buffer is only released once the new one is populated.
//! - **Tight copies**: a clone's capacity equals the source's length.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use growable::GrowVec;
//!
//! let mut vec = GrowVec::new();
//! for i in 1..=3 {
//!     vec.push_back(i);
//! }
//!
//! assert_eq!(vec.len(), 3);
//! assert_eq!(vec.capacity(), 4);
//! assert_eq!(vec[0], 1);
//!
//! vec.shrink_to_fit();
//! assert_eq!(vec.capacity(), 3);
//! ```
//!
//! # Example: Fallible Growth
//!
//! ```rust
//! use growable::{GrowError, GrowVec};
//!
//! fn example() -> Result<(), GrowError> {
//!     let mut vec = GrowVec::<u64>::new();
//!     vec.try_reserve(8)?;
//!     vec.try_push_back(42)?;
//!
//!     assert_eq!(vec.capacity(), 8);
//!     assert_eq!(vec.try_reserve(usize::MAX), Err(GrowError::CapacityOverflow));
//!     assert_eq!(vec.capacity(), 8);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Cursors
//!
//! [`GrowVec::begin`] and [`GrowVec::end`] hand out [`Cursor`]s bounding the
//! live region. A cursor is a raw position: it is invalidated by anything that
//! replaces the buffer, and dereferencing it is `unsafe`. [`GrowVec::iter`]
//! walks the same pair safely.
//!
//! # Features
//!
//! - `log`: emits storage events (acquire, release, relocate) under the
//!   `growable` target.
//! - `test-utils`: exposes `GrowVec::raw_parts` for inspecting storage from
//!   integration tests.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod cursor;
mod diag;
mod error;
mod grow_vec;
mod strategy;

#[cfg(test)]
mod tests;

pub use cursor::{Cursor, Iter, IterMut};
pub use error::GrowError;
pub use grow_vec::GrowVec;
pub use strategy::{AllocStrategy, Global};

#[cfg(any(test, feature = "test-utils"))]
pub use grow_vec::RawParts;

/// Creates a [`GrowVec`] on the global heap.
///
/// - `growvec![a, b, c]` moves the listed values in; capacity equals the count.
/// - `growvec![value; n]` holds `n` clones of `value`.
///
/// ```rust
/// use growable::growvec;
///
/// let mut vec = growvec![1, 2, 3, 4];
/// vec.pop_back();
/// vec.pop_back();
/// assert_eq!(vec.as_slice(), [1, 2]);
///
/// let sevens = growvec![7; 3];
/// assert_eq!(sevens.as_slice(), [7, 7, 7]);
/// ```
#[macro_export]
macro_rules! growvec {
    () => {
        $crate::GrowVec::new()
    };
    ($value:expr; $len:expr) => {
        $crate::GrowVec::from_elem($len, &$value)
    };
    ($($value:expr),+ $(,)?) => {
        <$crate::GrowVec<_> as ::core::convert::From<_>>::from([$($value),+])
    };
}
