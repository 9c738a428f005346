// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::cmp;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem;
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};
use core::slice;

use crate::cursor::{Cursor, Iter, IterMut};
use crate::diag::{storage_debug, storage_trace};
use crate::error::{GrowError, grow_failed};
use crate::strategy::{AllocStrategy, Global};

/// A growable, contiguous buffer of `T` backed by an injected [`AllocStrategy`].
///
/// Three quantities describe the container at all times:
///
/// - `capacity`: slots currently allocated.
/// - `size`: slots at the front of the buffer holding live elements.
/// - the buffer itself, absent if and only if `capacity == 0`.
///
/// Slots `[0, size)` are live; slots `[size, capacity)` are raw memory and are
/// never read. Appending past capacity doubles it (`0 → 1 → 2 → 4 → ...`).
///
/// # Example
///
/// ```rust
/// use growable::GrowVec;
///
/// let mut vec = GrowVec::new();
/// vec.push_back(1);
/// vec.push_back(2);
/// vec.push_back(3);
///
/// assert_eq!(vec.len(), 3);
/// assert_eq!(vec.capacity(), 4);
/// assert_eq!(vec[2], 3);
/// ```
pub struct GrowVec<T, S: AllocStrategy = Global> {
    data: Option<NonNull<T>>,
    capacity: usize,
    size: usize,
    strategy: S,
    _marker: PhantomData<T>,
}

/// Snapshot of the storage fields of a [`GrowVec`].
///
/// Only available with the `test-utils` feature.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawParts {
    /// Start of the buffer, `None` when nothing is allocated.
    pub data: Option<NonNull<u8>>,
    /// Live element count.
    pub size: usize,
    /// Allocated slot count.
    pub capacity: usize,
}

// SAFETY: GrowVec owns its elements and its strategy exclusively
unsafe impl<T: Send, S: AllocStrategy + Send> Send for GrowVec<T, S> {}
unsafe impl<T: Sync, S: AllocStrategy + Sync> Sync for GrowVec<T, S> {}

#[cold]
#[inline(never)]
fn empty_access(operation: &str) -> ! {
    panic!("{} called on a GrowVec with no live elements", operation);
}

impl<T> GrowVec<T> {
    /// Creates an empty vector on the global heap. Does not allocate.
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    /// Creates an empty vector with exactly `capacity` slots reserved.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Global)
    }

    /// Creates a vector of `len` default-constructed elements.
    ///
    /// `size()` and `capacity()` are both `len`.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self::with_len_in(len, Global)
    }

    /// Creates a vector of `len` clones of `value`.
    ///
    /// ```rust
    /// use growable::GrowVec;
    ///
    /// let vec = GrowVec::from_elem(3, &7);
    /// assert_eq!(vec.as_slice(), [7, 7, 7]);
    /// assert_eq!(vec.capacity(), 3);
    /// ```
    pub fn from_elem(len: usize, value: &T) -> Self
    where
        T: Clone,
    {
        Self::from_elem_in(len, value, Global)
    }

    /// Creates a vector holding clones of `values`, in order.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_slice_in(values, Global)
    }
}

impl<T, S: AllocStrategy> GrowVec<T, S> {
    /// Creates an empty vector using `strategy`. Does not allocate.
    pub const fn new_in(strategy: S) -> Self {
        Self {
            data: None,
            capacity: 0,
            size: 0,
            strategy,
            _marker: PhantomData,
        }
    }

    /// Creates an empty vector with exactly `capacity` slots from `strategy`.
    pub fn with_capacity_in(capacity: usize, strategy: S) -> Self {
        match Self::try_with_capacity_in(capacity, strategy) {
            Ok(vec) => vec,
            Err(e) => grow_failed(e),
        }
    }

    /// Fallible [`with_capacity_in`](Self::with_capacity_in).
    pub fn try_with_capacity_in(capacity: usize, strategy: S) -> Result<Self, GrowError> {
        let mut vec = Self::new_in(strategy);
        vec.try_reserve(capacity)?;
        Ok(vec)
    }

    /// Creates a vector of `len` default-constructed elements using `strategy`.
    pub fn with_len_in(len: usize, strategy: S) -> Self
    where
        T: Default,
    {
        let mut vec = Self::with_capacity_in(len, strategy);
        vec.fill_to(len, T::default);
        vec
    }

    /// Creates a vector of `len` clones of `value` using `strategy`.
    pub fn from_elem_in(len: usize, value: &T, strategy: S) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity_in(len, strategy);
        vec.fill_to(len, || value.clone());
        vec
    }

    /// Creates a vector holding clones of `values` using `strategy`.
    pub fn from_slice_in(values: &[T], strategy: S) -> Self
    where
        T: Clone,
    {
        match Self::try_from_slice_in(values, strategy) {
            Ok(vec) => vec,
            Err(e) => grow_failed(e),
        }
    }

    /// Fallible [`from_slice_in`](Self::from_slice_in).
    pub fn try_from_slice_in(values: &[T], strategy: S) -> Result<Self, GrowError>
    where
        T: Clone,
    {
        let mut vec = Self::try_with_capacity_in(values.len(), strategy)?;
        // SAFETY (PRECONDITIONS ARE MET): capacity was reserved for exactly values.len()
        unsafe { vec.clone_into_raw(values) };
        Ok(vec)
    }

    // =========================================================================
    // Status
    // =========================================================================

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Alias of [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` when no storage is allocated.
    ///
    /// This tracks `capacity() == 0`, not `len() == 0`: a vector that was
    /// cleared but still owns its buffer is not empty.
    ///
    /// ```rust
    /// use growable::growvec;
    ///
    /// let mut vec = growvec![1, 2];
    /// vec.clear();
    ///
    /// assert_eq!(vec.len(), 0);
    /// assert!(!vec.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Returns the allocation strategy.
    #[inline]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Returns the storage fields.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn raw_parts(&self) -> RawParts {
        RawParts {
            data: self.data.map(NonNull::cast),
            size: self.size,
            capacity: self.capacity,
        }
    }

    // =========================================================================
    // Raw storage
    // =========================================================================

    #[inline]
    fn base_ptr(&self) -> *mut T {
        self.data.map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    /// # Safety
    ///
    /// `index <= capacity` and a buffer must be present.
    #[inline]
    unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(index <= self.capacity);
        // SAFETY (PRECONDITIONS ARE MET): index is within the allocation
        unsafe { self.base_ptr().add(index) }
    }

    fn layout_for(capacity: usize) -> Result<Layout, GrowError> {
        Layout::array::<T>(capacity).map_err(|_| GrowError::CapacityOverflow)
    }

    fn acquire(&self, capacity: usize) -> Result<NonNull<T>, GrowError> {
        debug_assert!(capacity > 0);

        let layout = Self::layout_for(capacity)?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        match self.strategy.allocate(layout) {
            Ok(block) => {
                storage_trace!("acquired {} slots ({} bytes)", capacity, layout.size());
                Ok(block.cast())
            }
            Err(e) => {
                storage_debug!("failed to acquire {} slots: {}", capacity, e);
                Err(e)
            }
        }
    }

    /// # Safety
    ///
    /// `data` must come from [`acquire`](Self::acquire) with `capacity`, and
    /// every live element in it must already be destroyed or moved out.
    unsafe fn release(&self, data: NonNull<T>, capacity: usize) {
        let layout = match Self::layout_for(capacity) {
            Ok(layout) if layout.size() != 0 => layout,
            _ => return,
        };

        storage_trace!("released {} slots ({} bytes)", capacity, layout.size());
        // SAFETY (PRECONDITIONS ARE MET): block and layout match the original acquisition
        unsafe { self.strategy.deallocate(data.cast(), layout) }
    }

    /// Moves the live region into a fresh block of exactly `new_capacity`
    /// slots and releases the old one.
    ///
    /// The old block is left untouched if acquisition fails.
    fn relocate(&mut self, new_capacity: usize) -> Result<(), GrowError> {
        debug_assert!(new_capacity >= self.size);

        let fresh = self.acquire(new_capacity)?;

        if let Some(old) = self.data {
            // SAFETY (PRECONDITIONS ARE MET): old holds `size` live elements,
            // fresh has room for new_capacity >= size, blocks are distinct.
            // After the bitwise move the originals are moved-from and need no destroy.
            unsafe {
                ptr::copy_nonoverlapping(old.as_ptr(), fresh.as_ptr(), self.size);
                self.release(old, self.capacity);
            }
        }

        storage_trace!("relocated: capacity {} -> {}", self.capacity, new_capacity);
        self.data = Some(fresh);
        self.capacity = new_capacity;

        Ok(())
    }

    /// Destroys every live element and releases the buffer.
    fn release_all(&mut self) {
        self.truncate(0);

        if let Some(old) = self.data.take() {
            // SAFETY (PRECONDITIONS ARE MET): all elements were destroyed by truncate(0)
            unsafe { self.release(old, self.capacity) };
        }

        self.capacity = 0;
    }

    /// Constructs values produced by `make` until `size == new_size`.
    ///
    /// `size` advances after each construction, so a panicking `make` leaves
    /// exactly the constructed elements live.
    fn fill_to(&mut self, new_size: usize, mut make: impl FnMut() -> T) {
        assert!(new_size <= self.capacity);

        while self.size < new_size {
            let value = make();
            // SAFETY (PRECONDITIONS ARE MET): size < new_size <= capacity, slot is raw
            unsafe { self.strategy.construct(self.slot(self.size), value) };
            self.size += 1;
        }
    }

    /// Clones `values` into the raw region.
    ///
    /// # Safety
    ///
    /// `capacity - size >= values.len()`.
    unsafe fn clone_into_raw(&mut self, values: &[T])
    where
        T: Clone,
    {
        debug_assert!(self.capacity - self.size >= values.len());

        for value in values {
            let value = value.clone();
            // SAFETY (PRECONDITIONS ARE MET): caller guarantees room, slot is raw
            unsafe { self.strategy.construct(self.slot(self.size), value) };
            self.size += 1;
        }
    }

    /// Destroys elements `[new_size, size)`. Does nothing if `new_size >= size`.
    fn truncate(&mut self, new_size: usize) {
        if new_size >= self.size {
            return;
        }

        let old_size = self.size;
        self.size = new_size;

        for index in new_size..old_size {
            // SAFETY (PRECONDITIONS ARE MET): index was live and is now outside [0, size)
            unsafe { self.strategy.destroy(self.slot(index)) };
        }
    }

    // =========================================================================
    // Storage management
    // =========================================================================

    /// Ensures at least `new_capacity` slots are allocated.
    ///
    /// Does nothing if `new_capacity <= capacity()`. Otherwise allocates
    /// exactly `new_capacity` slots and moves the live elements over; their
    /// order and values are preserved, their addresses are not.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow and aborts through the allocation error
    /// handler if the strategy cannot supply memory. See
    /// [`try_reserve`](Self::try_reserve).
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(e) = self.try_reserve(new_capacity) {
            grow_failed(e);
        }
    }

    /// Fallible [`reserve`](Self::reserve). On error the vector is unchanged.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), GrowError> {
        if new_capacity <= self.capacity {
            return Ok(());
        }

        self.relocate(new_capacity)
    }

    /// Reduces capacity to `len()`.
    ///
    /// A vector with no live elements releases its buffer entirely.
    pub fn shrink_to_fit(&mut self) {
        if let Err(e) = self.try_shrink_to_fit() {
            grow_failed(e);
        }
    }

    /// Fallible [`shrink_to_fit`](Self::shrink_to_fit). On error the vector is unchanged.
    pub fn try_shrink_to_fit(&mut self) -> Result<(), GrowError> {
        if self.size == self.capacity {
            return Ok(());
        }

        if self.size == 0 {
            self.release_all();
            return Ok(());
        }

        self.relocate(self.size)
    }

    #[cold]
    #[inline(never)]
    fn grow_for_push(&mut self) -> Result<(), GrowError> {
        let target = if self.capacity == 0 {
            1
        } else {
            self.capacity
                .checked_mul(2)
                .ok_or(GrowError::CapacityOverflow)?
        };

        self.try_reserve(target)
    }

    #[inline(always)]
    fn maybe_grow_for_push(&mut self) -> Result<(), GrowError> {
        if self.size < self.capacity {
            return Ok(());
        }

        self.grow_for_push()
    }

    // =========================================================================
    // Element lifecycle
    // =========================================================================

    /// Appends `value`, doubling capacity if the buffer is full.
    ///
    /// # Panics
    ///
    /// See [`reserve`](Self::reserve).
    pub fn push_back(&mut self, value: T) {
        if let Err(e) = self.try_push_back(value) {
            grow_failed(e);
        }
    }

    /// Fallible [`push_back`](Self::push_back).
    ///
    /// On error the vector is unchanged and `value` is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<(), GrowError> {
        self.maybe_grow_for_push()?;

        // SAFETY (PRECONDITIONS ARE MET): size < capacity after growth, slot is raw
        unsafe { self.strategy.construct(self.slot(self.size), value) };
        self.size += 1;

        Ok(())
    }

    /// Appends a clone of `value`.
    pub fn push_back_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push_back(value.clone());
    }

    /// Destroys the last element. Does nothing if there are no live elements.
    pub fn pop_back(&mut self) {
        if self.size == 0 {
            return;
        }

        self.size -= 1;
        // SAFETY (PRECONDITIONS ARE MET): slot `size` was the last live element
        unsafe { self.strategy.destroy(self.slot(self.size)) };
    }

    /// Destroys all live elements. Capacity and buffer are kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes to `new_size`, filling new slots with values from `make`.
    ///
    /// Shrinking destroys the tail and keeps capacity. Growing reserves exactly
    /// `new_size` slots first if the buffer is too small.
    pub fn resize_with<F>(&mut self, new_size: usize, make: F)
    where
        F: FnMut() -> T,
    {
        if new_size <= self.size {
            self.truncate(new_size);
            return;
        }

        self.reserve(new_size);
        self.fill_to(new_size, make);
    }

    /// Resizes to `new_size`, filling new slots with clones of `value`.
    ///
    /// ```rust
    /// use growable::growvec;
    ///
    /// let mut vec = growvec![1, 2];
    /// vec.resize(4, &9);
    /// assert_eq!(vec.as_slice(), [1, 2, 9, 9]);
    ///
    /// vec.resize(1, &0);
    /// assert_eq!(vec.as_slice(), [1]);
    /// assert_eq!(vec.capacity(), 4);
    /// ```
    pub fn resize(&mut self, new_size: usize, value: &T)
    where
        T: Clone,
    {
        self.resize_with(new_size, || value.clone());
    }

    /// Resizes to `new_size`, filling new slots with `T::default()`.
    pub fn resize_default(&mut self, new_size: usize)
    where
        T: Default,
    {
        self.resize_with(new_size, T::default);
    }

    // =========================================================================
    // Transfer
    // =========================================================================

    /// Moves the contents out, leaving `self` empty with no buffer.
    ///
    /// No element is constructed or destroyed; the buffer changes owner.
    pub fn take(&mut self) -> Self
    where
        S: Clone,
    {
        let empty = Self::new_in(self.strategy.clone());
        mem::replace(self, empty)
    }

    /// Drops the current contents and adopts everything `rhs` owns, strategy
    /// included. `rhs` is left empty with no buffer.
    ///
    /// ```rust
    /// use growable::growvec;
    ///
    /// let mut dst = growvec![1, 2, 3];
    /// let mut src = growvec![4, 5];
    /// dst.assign_from(&mut src);
    ///
    /// assert_eq!(dst.as_slice(), [4, 5]);
    /// assert_eq!(src.capacity(), 0);
    /// ```
    pub fn assign_from(&mut self, rhs: &mut Self) {
        self.release_all();
        mem::swap(self, rhs);
    }

    /// Exchanges contents with `other` in O(1).
    ///
    /// Buffers, sizes and capacities trade places together with the
    /// strategies that own them.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Fallible clone. The copy's capacity is the source's `len()`.
    pub fn try_clone(&self) -> Result<Self, GrowError>
    where
        T: Clone,
        S: Clone,
    {
        Self::try_from_slice_in(self.as_slice(), self.strategy.clone())
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns the live region as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self.data {
            // SAFETY (PRECONDITIONS ARE MET): [0, size) are live elements
            Some(data) => unsafe { slice::from_raw_parts(data.as_ptr(), self.size) },
            None => &[],
        }
    }

    /// Returns the live region as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self.data {
            // SAFETY (PRECONDITIONS ARE MET): [0, size) are live elements, borrowed exclusively
            Some(data) => unsafe { slice::from_raw_parts_mut(data.as_ptr(), self.size) },
            None => &mut [],
        }
    }

    /// Returns a pointer to the buffer, or null when none is allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.base_ptr()
    }

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index < len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY (PRECONDITIONS ARE MET): caller guarantees index is live
        unsafe { &*self.slot(index) }
    }

    /// Mutable [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    ///
    /// `index < len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY (PRECONDITIONS ARE MET): caller guarantees index is live
        unsafe { &mut *self.slot(index) }
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if there are no live elements.
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(value) => value,
            None => empty_access("front"),
        }
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if there are no live elements.
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(value) => value,
            None => empty_access("front_mut"),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if there are no live elements.
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(value) => value,
            None => empty_access("back"),
        }
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if there are no live elements.
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(value) => value,
            None => empty_access("back_mut"),
        }
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Cursor at the first live slot (null when no buffer is allocated).
    #[inline]
    pub fn begin(&self) -> Cursor<T> {
        Cursor::from_ptr(self.base_ptr())
    }

    /// Cursor one past the last live slot.
    #[inline]
    pub fn end(&self) -> Cursor<T> {
        Cursor::at_offset(self.base_ptr(), self.size)
    }

    /// Cursor at slot `index`. No bounds checking is performed.
    #[inline]
    pub fn cursor_at(&self, index: usize) -> Cursor<T> {
        Cursor::at_offset(self.base_ptr(), index)
    }

    /// Iterates over the live elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        // SAFETY (PRECONDITIONS ARE MET): [begin, end) is the live region, borrowed shared
        unsafe { Iter::new(self.begin(), self.end()) }
    }

    /// Iterates mutably over the live elements.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        // SAFETY (PRECONDITIONS ARE MET): [begin, end) is the live region, borrowed exclusively
        unsafe { IterMut::new(self.begin(), self.end()) }
    }
}

impl<T, S: AllocStrategy> Drop for GrowVec<T, S> {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<T: Clone, S: AllocStrategy + Clone> Clone for GrowVec<T, S> {
    /// Copies the live elements into a buffer sized to `len()`.
    ///
    /// Unused headroom is never carried over.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(vec) => vec,
            Err(e) => grow_failed(e),
        }
    }

    /// Copy-assigns from `source`, reusing the current buffer when it is big
    /// enough.
    ///
    /// With enough capacity, overlapping elements are clone-assigned in place,
    /// missing ones are cloned into raw slots and surplus ones are destroyed;
    /// capacity is unchanged. Otherwise a buffer of exactly `source.len()`
    /// slots is populated first and only then is the old one dropped.
    fn clone_from(&mut self, source: &Self) {
        if source.size > self.capacity {
            let mut fresh = Self::with_capacity_in(source.size, self.strategy.clone());
            // SAFETY (PRECONDITIONS ARE MET): fresh has exactly source.size raw slots
            unsafe { fresh.clone_into_raw(source.as_slice()) };

            // The old buffer leaves with `fresh` and its original strategy.
            mem::swap(self, &mut fresh);
            return;
        }

        let common = cmp::min(self.size, source.size);
        self.as_mut_slice()[..common].clone_from_slice(&source.as_slice()[..common]);

        if source.size > self.size {
            // SAFETY (PRECONDITIONS ARE MET): source.size <= capacity
            unsafe { self.clone_into_raw(&source.as_slice()[common..]) };
        } else {
            self.truncate(source.size);
        }
    }
}

impl<T, S: AllocStrategy + Default> Default for GrowVec<T, S> {
    fn default() -> Self {
        Self::new_in(S::default())
    }
}

impl<T, S: AllocStrategy> Deref for GrowVec<T, S> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, S: AllocStrategy> DerefMut for GrowVec<T, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug, S: AllocStrategy> fmt::Debug for GrowVec<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U, S1, S2> PartialEq<GrowVec<U, S2>> for GrowVec<T, S1>
where
    T: PartialEq<U>,
    S1: AllocStrategy,
    S2: AllocStrategy,
{
    fn eq(&self, other: &GrowVec<U, S2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, S: AllocStrategy> Eq for GrowVec<T, S> {}

impl<T: Hash, S: AllocStrategy> Hash for GrowVec<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, S: AllocStrategy> Extend<T> for GrowVec<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a, S: AllocStrategy> Extend<&'a T> for GrowVec<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(*value);
        }
    }
}

impl<T, S: AllocStrategy + Default> FromIterator<T> for GrowVec<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::default();
        vec.extend(iter);
        vec
    }
}

impl<T, S: AllocStrategy + Default, const N: usize> From<[T; N]> for GrowVec<T, S> {
    /// Moves the array in; capacity is exactly `N`.
    fn from(values: [T; N]) -> Self {
        let mut vec = Self::with_capacity_in(N, S::default());
        vec.extend(values);
        vec
    }
}

impl<T: Clone, S: AllocStrategy + Default> From<&[T]> for GrowVec<T, S> {
    fn from(values: &[T]) -> Self {
        Self::from_slice_in(values, S::default())
    }
}

impl<'a, T, S: AllocStrategy> IntoIterator for &'a GrowVec<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, S: AllocStrategy> IntoIterator for &'a mut GrowVec<T, S> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
