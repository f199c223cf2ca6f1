// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drop accounting for unit tests.
//!
//! A [`Ledger`] counts how many [`Tracked`] values are alive and how many
//! have been dropped. A value dropped twice drives `live` negative, one that
//! leaks keeps it above zero.

// Core imports
use core::cell::Cell;

#[derive(Debug, Default)]
pub(crate) struct Ledger {
    live: Cell<isize>,
    drops: Cell<usize>,
    clones_left: Cell<Option<usize>>,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn track(&self, value: i32) -> Tracked<'_> {
        self.live.set(self.live.get() + 1);
        Tracked {
            value,
            ledger: self,
        }
    }

    pub(crate) fn live(&self) -> isize {
        self.live.get()
    }

    pub(crate) fn drops(&self) -> usize {
        self.drops.get()
    }

    /// Makes the `n+1`-th subsequent `clone` panic.
    pub(crate) fn fail_clone_after(&self, n: usize) {
        self.clones_left.set(Some(n));
    }
}

#[derive(Debug)]
pub(crate) struct Tracked<'a> {
    pub(crate) value: i32,
    ledger: &'a Ledger,
}

impl Clone for Tracked<'_> {
    fn clone(&self) -> Self {
        if let Some(left) = self.ledger.clones_left.get() {
            if left == 0 {
                panic!("clone budget exhausted");
            }
            self.ledger.clones_left.set(Some(left - 1));
        }
        self.ledger.track(self.value)
    }
}

impl PartialEq for Tracked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Tracked<'_> {
    fn drop(&mut self) {
        self.ledger.live.set(self.ledger.live.get() - 1);
        self.ledger.drops.set(self.ledger.drops.get() + 1);
    }
}
