// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::alloc::Layout;
use std::cell::Cell;
use std::ptr::{self, NonNull};
use std::rc::Rc;

use growable::{AllocStrategy, GrowError, Global};

/// Failure injection for [`CountingStrategy`].
///
/// The behaviour is sticky - once set, it remains active until changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every `allocate()` call fails with `AllocFailed`.
    FailAtAllocate,
    /// The next `n` `allocate()` calls succeed, every later one fails.
    FailAfter(usize),
}

#[derive(Debug, Default)]
struct Counters {
    allocations: Cell<usize>,
    deallocations: Cell<usize>,
    failed_allocations: Cell<usize>,
    constructions: Cell<usize>,
    destructions: Cell<usize>,
    live_bytes: Cell<usize>,
    behaviour: Cell<StrategyBehaviour>,
}

fn bump(cell: &Cell<usize>) {
    cell.set(cell.get() + 1);
}

/// Allocation strategy that records every call it receives.
///
/// Clones share the same counters, so a test can keep a handle while the
/// container owns another.
///
/// # Example
///
/// ```rust
/// use growable::GrowVec;
/// use growable_test_utils::CountingStrategy;
///
/// let strategy = CountingStrategy::new();
/// let mut vec = GrowVec::new_in(strategy.clone());
/// vec.push_back(1u32);
/// vec.push_back(2u32);
///
/// assert_eq!(strategy.allocations(), 2);
/// assert_eq!(strategy.constructions(), 2);
///
/// drop(vec);
/// assert_eq!(strategy.live_blocks(), 0);
/// assert_eq!(strategy.destructions(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CountingStrategy {
    counters: Rc<Counters>,
}

impl CountingStrategy {
    /// Creates a strategy with zeroed counters and no injected failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes the failure injection behaviour.
    pub fn change_behaviour(&self, behaviour: StrategyBehaviour) {
        self.counters.behaviour.set(behaviour);
    }

    /// Successful `allocate()` calls.
    pub fn allocations(&self) -> usize {
        self.counters.allocations.get()
    }

    /// `deallocate()` calls.
    pub fn deallocations(&self) -> usize {
        self.counters.deallocations.get()
    }

    /// `allocate()` calls rejected by the injected behaviour.
    pub fn failed_allocations(&self) -> usize {
        self.counters.failed_allocations.get()
    }

    /// Blocks acquired and not yet released.
    pub fn live_blocks(&self) -> usize {
        self.allocations() - self.deallocations()
    }

    /// Bytes acquired and not yet released.
    pub fn live_bytes(&self) -> usize {
        self.counters.live_bytes.get()
    }

    /// `construct()` calls.
    pub fn constructions(&self) -> usize {
        self.counters.constructions.get()
    }

    /// `destroy()` calls.
    pub fn destructions(&self) -> usize {
        self.counters.destructions.get()
    }

    /// Constructions minus destructions.
    pub fn live_elements(&self) -> usize {
        self.constructions() - self.destructions()
    }

    fn should_fail(&self) -> bool {
        match self.counters.behaviour.get() {
            StrategyBehaviour::None => false,
            StrategyBehaviour::FailAtAllocate => true,
            StrategyBehaviour::FailAfter(0) => true,
            StrategyBehaviour::FailAfter(n) => {
                self.counters
                    .behaviour
                    .set(StrategyBehaviour::FailAfter(n - 1));
                false
            }
        }
    }
}

impl AllocStrategy for CountingStrategy {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, GrowError> {
        if self.should_fail() {
            bump(&self.counters.failed_allocations);
            return Err(GrowError::alloc_failed(layout));
        }

        let block = Global.allocate(layout)?;
        bump(&self.counters.allocations);
        self.counters
            .live_bytes
            .set(self.counters.live_bytes.get() + layout.size());

        Ok(block)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        bump(&self.counters.deallocations);
        self.counters
            .live_bytes
            .set(self.counters.live_bytes.get() - layout.size());

        // SAFETY (PRECONDITIONS ARE MET): blocks come from Global.allocate with this layout
        unsafe { Global.deallocate(ptr, layout) }
    }

    unsafe fn construct<T>(&self, slot: *mut T, value: T) {
        bump(&self.counters.constructions);
        // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller
        unsafe { ptr::write(slot, value) }
    }

    unsafe fn destroy<T>(&self, slot: *mut T) {
        bump(&self.counters.destructions);
        // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller
        unsafe { ptr::drop_in_place(slot) }
    }
}
