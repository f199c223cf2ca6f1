// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

impl<T: Clone> Clone for GrowVec<T> {
    /// Allocates exactly `len` slots and clones each element into them.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len);
        for item in self.iter() {
            // SAFETY: `out` has `self.len` slots and receives at most that many.
            unsafe { out.push_unchecked(item.clone()) };
        }
        out
    }

    /// Makes `self` an element-wise copy of `source`.
    ///
    /// If `source` does not fit in the current block, a full clone is built
    /// first and then swapped in, so a panicking `clone` leaves `self`
    /// untouched. Otherwise the overlapping prefix is assigned in place with
    /// `clone_from`, and the tail is either dropped or cloned into spare
    /// slots. No element is dropped and rebuilt when it could be assigned.
    fn clone_from(&mut self, source: &Self) {
        if source.len > self.capacity() {
            let mut fresh = source.clone();
            self.swap_with(&mut fresh);
            return;
        }

        let common = self.len.min(source.len);
        for (dst, src) in self.iter_mut().zip(&source[..common]) {
            dst.clone_from(src);
        }
        if self.len > source.len {
            self.truncate(source.len);
        } else {
            for item in &source[common..] {
                // SAFETY: `source.len <= capacity`, so every tail slot exists.
                unsafe { self.push_unchecked(item.clone()) };
            }
        }
    }
}
