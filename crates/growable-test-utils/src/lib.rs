// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for growable.
//!
//! - [`CountingStrategy`]: an [`AllocStrategy`](growable::AllocStrategy) that
//!   counts every acquisition, release, construction and destruction, and can
//!   be told to fail acquisitions.
//! - [`Tracked`]: an element type that reports its clones and drops to a
//!   shared [`DropLedger`].
//!
//! ## License
//!
//! GPL-3.0-only

mod counting_strategy;
mod tracked;

pub use counting_strategy::{CountingStrategy, StrategyBehaviour};
pub use tracked::{DropLedger, Tracked};
