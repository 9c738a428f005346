// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Ledger {
    clones: Cell<usize>,
    drops: Cell<usize>,
    panic_at_clone: Cell<Option<usize>>,
}

/// Shared record of the clones and drops of [`Tracked`] values.
#[derive(Debug, Clone, Default)]
pub struct DropLedger {
    inner: Rc<Ledger>,
}

impl DropLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `Tracked::clone` calls that completed.
    pub fn clones(&self) -> usize {
        self.inner.clones.get()
    }

    /// Number of `Tracked` values dropped.
    pub fn drops(&self) -> usize {
        self.inner.drops.get()
    }

    /// Makes the clone that would bring `clones()` to `n` panic instead.
    pub fn panic_at_clone(&self, n: usize) {
        self.inner.panic_at_clone.set(Some(n));
    }
}

/// Element type that reports clones and drops to a [`DropLedger`].
pub struct Tracked {
    value: u32,
    ledger: DropLedger,
}

impl Tracked {
    /// Creates a value reporting to `ledger`.
    pub fn new(value: u32, ledger: &DropLedger) -> Self {
        Self {
            value,
            ledger: ledger.clone(),
        }
    }

    /// Returns the payload.
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        let ledger = &self.ledger.inner;
        let next = ledger.clones.get() + 1;

        if ledger.panic_at_clone.get() == Some(next) {
            panic!("Tracked: injected panic at clone #{}", next);
        }

        ledger.clones.set(next);
        Self {
            value: self.value,
            ledger: self.ledger.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        let drops = &self.ledger.inner.drops;
        drops.set(drops.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}
