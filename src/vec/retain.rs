// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::GrowVec;

// Core imports
use core::ptr;

/// Closes the gap left by rejected elements and restores the length, on the
/// normal path and during unwinding alike.
///
/// While it is alive, `[0, write)` holds kept values, `[write, read)` is
/// uninitialized, and `[read, original_len)` is not yet visited.
struct Compactor<'a, T> {
    v: &'a mut GrowVec<T>,
    read: usize,
    write: usize,
    original_len: usize,
}

impl<T> Drop for Compactor<'_, T> {
    fn drop(&mut self) {
        let unvisited = self.original_len - self.read;
        if unvisited > 0 && self.read != self.write {
            // SAFETY: `[read, original_len)` are live and move down into the
            // uninitialized gap starting at `write`; the ranges may overlap.
            unsafe {
                ptr::copy(
                    self.v.buf.slot(self.read),
                    self.v.buf.slot(self.write),
                    unvisited,
                )
            };
        }
        self.v.len = self.write + unvisited;
    }
}

impl<T> GrowVec<T> {
    /// Retains only the elements for which `f` returns `true`, preserving order.
    ///
    /// Each element is visited exactly once. If `f` or a destructor panics,
    /// the unvisited elements are kept and nothing is dropped twice.
    #[inline]
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        self.retain_mut(|x| f(x));
    }

    /// Like [`retain`](GrowVec::retain), but `f` may mutate the elements.
    pub fn retain_mut<F: FnMut(&mut T) -> bool>(&mut self, mut f: F) {
        let original_len = self.len;
        // Nothing is observable through `self` until the compactor restores it.
        self.len = 0;
        let mut c = Compactor {
            v: self,
            read: 0,
            write: 0,
            original_len,
        };

        while c.read < c.original_len {
            let cur = c.v.buf.slot(c.read);
            // SAFETY: `read < original_len`, so `cur` is live.
            if f(unsafe { &mut *cur }) {
                if c.read != c.write {
                    // SAFETY: slot `write` is in the uninitialized gap.
                    unsafe { ptr::copy_nonoverlapping(cur, c.v.buf.slot(c.write), 1) };
                }
                c.write += 1;
                c.read += 1;
            } else {
                // Advance first so a panicking destructor is not retried.
                c.read += 1;
                // SAFETY: `cur` is live and now outside every tracked range.
                unsafe { ptr::drop_in_place(cur) };
            }
        }
    }
}
