// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Position cursor and the borrowing iterators built on it.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem;
use core::ptr;

/// A bidirectional position inside a [`GrowVec`](crate::GrowVec) buffer.
///
/// A cursor is a bare position: it owns nothing, borrows nothing, and performs
/// no bounds checking. Moving it is always allowed; dereferencing it is only
/// sound while it points at a live element of a buffer that has not been
/// reallocated or dropped since the cursor was issued.
///
/// Any operation that replaces the buffer (growth, `shrink_to_fit`, a
/// reallocating `clone_from`, `assign_from`, drop) invalidates every cursor
/// issued before it.
///
/// # Example
///
/// ```rust
/// use growable::growvec;
///
/// let vec = growvec![1, 2, 3];
/// let mut it = vec.begin();
/// let mut sum = 0;
///
/// while it != vec.end() {
///     // SAFETY: `it` stays within [begin, end) and `vec` is not mutated
///     sum += unsafe { *it.get() };
///     it.inc();
/// }
///
/// assert_eq!(sum, 6);
/// ```
pub struct Cursor<T> {
    ptr: *const T,
}

impl<T> Cursor<T> {
    /// Distance in bytes between two adjacent slots.
    ///
    /// Zero-sized types step by their alignment so that distinct slots stay
    /// distinct positions.
    const STRIDE: usize = if mem::size_of::<T>() == 0 {
        mem::align_of::<T>()
    } else {
        mem::size_of::<T>()
    };

    /// Creates a cursor at the null position.
    #[inline]
    pub const fn null() -> Self {
        Self { ptr: ptr::null() }
    }

    /// Creates a cursor at a raw position.
    #[inline]
    pub const fn from_ptr(ptr: *mut T) -> Self {
        Self {
            ptr: ptr.cast_const(),
        }
    }

    #[inline]
    pub(crate) fn at_offset(base: *mut T, index: usize) -> Self {
        Self {
            ptr: base
                .cast_const()
                .wrapping_byte_add(index.wrapping_mul(Self::STRIDE)),
        }
    }

    /// Returns the raw position.
    #[inline]
    pub const fn as_ptr(&self) -> *mut T {
        self.ptr.cast_mut()
    }

    /// Returns `true` if this is the null position.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Moves one slot forward (prefix increment).
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        self.ptr = self.ptr.wrapping_byte_add(Self::STRIDE);
        self
    }

    /// Moves one slot backward (prefix decrement).
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        self.ptr = self.ptr.wrapping_byte_sub(Self::STRIDE);
        self
    }

    /// Moves one slot forward, returning the position before the move.
    #[inline]
    pub fn post_inc(&mut self) -> Self {
        let before = *self;
        self.inc();
        before
    }

    /// Moves one slot backward, returning the position before the move.
    #[inline]
    pub fn post_dec(&mut self) -> Self {
        let before = *self;
        self.dec();
        before
    }

    /// Number of slots from `origin` to `self` (negative if `self` is before).
    ///
    /// Only meaningful for two cursors into the same buffer.
    #[inline]
    pub fn offset_from(&self, origin: &Self) -> isize {
        let bytes = self.ptr.addr().wrapping_sub(origin.ptr.addr()) as isize;
        bytes / Self::STRIDE as isize
    }

    /// Reads the element under the cursor.
    ///
    /// # Safety
    ///
    /// The cursor must point at a live element of a buffer that has not been
    /// reallocated or dropped since it was issued, and no mutable reference to
    /// that element may exist for the chosen lifetime `'a`.
    #[inline]
    pub unsafe fn get<'a>(&self) -> &'a T {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller
        unsafe { &*self.ptr }
    }

    /// Mutably accesses the element under the cursor.
    ///
    /// # Safety
    ///
    /// Same as [`get`](Self::get), and additionally no other reference to the
    /// element may exist for the chosen lifetime `'a`.
    #[inline]
    pub unsafe fn get_mut<'a>(&self) -> &'a mut T {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller
        unsafe { &mut *self.ptr.cast_mut() }
    }
}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<T> {}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.ptr, other.ptr)
    }
}

impl<T> Eq for Cursor<T> {}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.ptr).finish()
    }
}

/// Shared iterator over the live region of a [`GrowVec`](crate::GrowVec).
///
/// Walks a `[begin, end)` cursor pair from both ends.
pub struct Iter<'a, T> {
    front: Cursor<T>,
    back: Cursor<T>,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    /// # Safety
    ///
    /// `[front, back)` must be live elements borrowed shared for `'a`.
    #[inline]
    pub(crate) unsafe fn new(front: Cursor<T>, back: Cursor<T>) -> Self {
        Self {
            front,
            back,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }

        // SAFETY (PRECONDITIONS ARE MET): front < back, so it is a live slot borrowed for 'a
        let item = unsafe { self.front.post_inc().get() };
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.offset_from(&self.front) as usize;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }

        // SAFETY (PRECONDITIONS ARE MET): back - 1 >= front, so it is a live slot borrowed for 'a
        let item = unsafe { self.back.dec().get() };
        Some(item)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
            _marker: PhantomData,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Mutable iterator over the live region of a [`GrowVec`](crate::GrowVec).
pub struct IterMut<'a, T> {
    front: Cursor<T>,
    back: Cursor<T>,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    /// # Safety
    ///
    /// `[front, back)` must be live elements borrowed exclusively for `'a`.
    #[inline]
    pub(crate) unsafe fn new(front: Cursor<T>, back: Cursor<T>) -> Self {
        Self {
            front,
            back,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.front == self.back {
            return None;
        }

        // SAFETY (PRECONDITIONS ARE MET): each slot is yielded once, exclusively borrowed for 'a
        let item = unsafe { self.front.post_inc().get_mut() };
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.offset_from(&self.front) as usize;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.front == self.back {
            return None;
        }

        // SAFETY (PRECONDITIONS ARE MET): each slot is yielded once, exclusively borrowed for 'a
        let item = unsafe { self.back.dec().get_mut() };
        Some(item)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.len())
            .finish()
    }
}

// SAFETY: Iter<'a, T> behaves like &'a [T]
unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

// SAFETY: IterMut<'a, T> behaves like &'a mut [T]
unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}
