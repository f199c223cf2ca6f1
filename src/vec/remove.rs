// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowVec};

// Core imports
use core::ptr;

impl<T> GrowVec<T> {
    /// Removes and returns the last element, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was the last live slot and is now outside the
        // live range, so reading it out transfers ownership exactly once.
        Some(unsafe { ptr::read(self.buf.slot(self.len)) })
    }

    /// Removes and returns the element at `index`, shifting
    /// `[index + 1, len)` one slot toward the front.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index (is {index}) should be < len (is {len})"
        );
        let hole = self.buf.slot(index);
        // SAFETY: `index < len`, so the value is live. The tail shift is an
        // overlapping move within `[index, len)`; afterwards slot `len - 1`
        // holds stale bits and is excluded from the live range.
        unsafe {
            let out = ptr::read(hole);
            ptr::copy(hole.add(1), hole, len - index - 1);
            self.len = len - 1;
            out
        }
    }

    /// Drops the element at `index` and closes the gap.
    ///
    /// Returns `index`, which now refers to the former successor (or equals
    /// `len` if the last element was erased).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Fallible form of [`remove`](GrowVec::remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len;
        if index >= len {
            return Err(Error::OutOfBounds { index, len });
        }
        Ok(self.remove(index))
    }

    /// Removes the element at `index` by moving the last element into its
    /// place. Does not preserve order; O(1).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn swap_remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "swap_remove index (is {index}) should be < len (is {len})"
        );
        self.len = len - 1;
        // SAFETY: both `index` and `len - 1` were live. The removed value is
        // read out, then the last value is moved into the hole (a no-op copy
        // when they are the same slot).
        unsafe {
            let hole = self.buf.slot(index);
            let out = ptr::read(hole);
            ptr::copy(self.buf.slot(len - 1), hole, 1);
            out
        }
    }
}
