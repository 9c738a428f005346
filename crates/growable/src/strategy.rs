// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::{self, NonNull};

use crate::error::GrowError;

/// Injected policy for raw storage and in-place element lifecycle.
///
/// A [`GrowVec`](crate::GrowVec) never touches the global allocator directly:
/// every block it owns comes from [`allocate`](Self::allocate), goes back
/// through [`deallocate`](Self::deallocate), and every element it constructs or
/// destroys passes through [`construct`](Self::construct) and
/// [`destroy`](Self::destroy).
///
/// The container only ever asks for non-zero-sized layouts. Zero-sized element
/// types are served from a dangling pointer and never reach the strategy.
///
/// Clones of a strategy must be able to release each other's blocks; the
/// container clones its strategy when it copies itself.
pub trait AllocStrategy {
    /// Acquires an uninitialised block for `layout`.
    ///
    /// `layout.size()` is never zero.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, GrowError>;

    /// Releases a block previously returned by [`allocate`](Self::allocate).
    ///
    /// # Safety
    ///
    /// `ptr` must come from `allocate` on this strategy (or a clone of it)
    /// with the same `layout`, and must not be used afterwards.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Constructs `value` in the raw slot `slot`.
    ///
    /// # Safety
    ///
    /// `slot` must be valid for writes, properly aligned, and must not hold a
    /// live value (it would be overwritten without being dropped).
    #[inline]
    unsafe fn construct<T>(&self, slot: *mut T, value: T) {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller
        unsafe { ptr::write(slot, value) }
    }

    /// Destroys the live value in `slot`, leaving raw memory behind.
    ///
    /// # Safety
    ///
    /// `slot` must hold a live, properly aligned value that is not used again
    /// until something is constructed in its place.
    #[inline]
    unsafe fn destroy<T>(&self, slot: *mut T) {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller
        unsafe { ptr::drop_in_place(slot) }
    }
}

impl<S: AllocStrategy + ?Sized> AllocStrategy for &S {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, GrowError> {
        (**self).allocate(layout)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller
        unsafe { (**self).deallocate(ptr, layout) }
    }

    #[inline]
    unsafe fn construct<T>(&self, slot: *mut T, value: T) {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller
        unsafe { (**self).construct(slot, value) }
    }

    #[inline]
    unsafe fn destroy<T>(&self, slot: *mut T) {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller
        unsafe { (**self).destroy(slot) }
    }
}

/// The global heap, via `alloc::alloc`.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Global;

impl AllocStrategy for Global {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, GrowError> {
        debug_assert!(layout.size() != 0);

        // SAFETY (PRECONDITIONS ARE MET): the container never requests a zero-sized layout
        let ptr = unsafe { alloc::alloc::alloc(layout) };
        NonNull::new(ptr).ok_or(GrowError::alloc_failed(layout))
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY (PRECONDITIONS ARE MET): ptr was returned by `allocate` with this layout
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}
