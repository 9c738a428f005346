// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::alloc::Layout;
use std::cell::Cell;
use std::ptr::NonNull;
use std::rc::Rc;

use crate::tests::utils::DropCounter;
use crate::{AllocStrategy, GrowError, GrowVec, Global};

// =============================================================================
// Global
// =============================================================================

#[test]
fn test_global_allocate_and_deallocate() {
    let layout = Layout::array::<u32>(8).expect("Failed to build layout");
    let block = Global.allocate(layout).expect("Failed to allocate()");

    assert_eq!(block.as_ptr() as usize % layout.align(), 0);

    // SAFETY: block was returned by allocate with this layout
    unsafe { Global.deallocate(block, layout) };
}

#[test]
fn test_default_construct_and_destroy() {
    let drops = Rc::new(Cell::new(0));
    let layout = Layout::new::<DropCounter>();
    let block = Global.allocate(layout).expect("Failed to allocate()");
    let slot = block.cast::<DropCounter>().as_ptr();

    // SAFETY: slot is raw, aligned storage for one DropCounter
    unsafe {
        Global.construct(slot, DropCounter::new(42, &drops));
        assert_eq!((*slot).id, 42);
        Global.destroy(slot);
        Global.deallocate(block, layout);
    }

    assert_eq!(drops.get(), 1);
}

// =============================================================================
// Borrowed strategies
// =============================================================================

/// Strategy that refuses every request.
struct Exhausted;

impl AllocStrategy for Exhausted {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, GrowError> {
        Err(GrowError::alloc_failed(layout))
    }

    unsafe fn deallocate(&self, _ptr: NonNull<u8>, _layout: Layout) {
        unreachable!("Exhausted never hands out blocks");
    }
}

#[test]
fn test_borrowed_strategy_is_a_strategy() {
    let strategy = Global;
    let mut vec = GrowVec::new_in(&strategy);

    vec.push_back(1u8);
    vec.push_back(2u8);

    assert_eq!(vec.as_slice(), [1, 2]);
}

#[test]
fn test_exhausted_strategy_fails_without_mutation() {
    let mut vec: GrowVec<u32, Exhausted> = GrowVec::new_in(Exhausted);

    let result = vec.try_push_back(1);

    assert!(matches!(result, Err(GrowError::AllocFailed { .. })));
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), 0);
    assert!(vec.raw_parts().data.is_none());
}

#[test]
fn test_exhausted_strategy_still_serves_zero_sized() {
    let mut vec: GrowVec<(), Exhausted> = GrowVec::new_in(Exhausted);

    vec.push_back(());
    vec.push_back(());

    assert_eq!(vec.len(), 2);
    assert_eq!(vec.capacity(), 2);
}
