// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::rc::Rc;

use crate::{AllocStrategy, GrowVec};

/// Element that bumps a shared counter when dropped.
#[derive(Debug)]
pub(crate) struct DropCounter {
    pub(crate) id: usize,
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub(crate) fn new(id: usize, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            id,
            drops: Rc::clone(drops),
        }
    }
}

impl Clone for DropCounter {
    fn clone(&self) -> Self {
        Self::new(self.id, &self.drops)
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Checks the storage invariants that must hold after every public operation.
pub(crate) fn assert_invariants<T, S: AllocStrategy>(vec: &GrowVec<T, S>) {
    let parts = vec.raw_parts();

    assert!(parts.size <= parts.capacity);
    assert_eq!(parts.data.is_none(), parts.capacity == 0);
    assert_eq!(vec.as_slice().len(), parts.size);
}
