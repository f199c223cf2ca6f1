// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::ptr;

impl<T> GrowVec<T> {
    /// Drops the elements past `new_len`. No-op if `new_len >= len`.
    ///
    /// Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        let Some(count) = self.len.checked_sub(new_len) else {
            return;
        };
        let tail = ptr::slice_from_raw_parts_mut(self.buf.slot(new_len), count);
        // The length shrinks before any destructor runs, so a panicking
        // destructor can never lead to a second drop of the same slot.
        self.len = new_len;
        // SAFETY: `[new_len, old_len)` were live and are now outside the live
        // range; they are dropped exactly once here.
        unsafe { ptr::drop_in_place(tail) }
    }

    /// Drops every element. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    ///
    /// Shrinking drops the trailing elements and keeps the capacity.
    /// Growing reserves exactly `new_len` slots if the block is too small.
    #[inline]
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes to `new_len`, filling new slots with values from `f`.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, f: F) {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        self.reserve(new_len);
        self.fill_with(new_len, f);
    }

    /// Constructs values with `f` into slots `[len, new_len)`.
    ///
    /// The length follows each write, so a panic in `f` leaves exactly the
    /// constructed values live.
    pub(crate) fn fill_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        debug_assert!(new_len <= self.capacity());
        while self.len < new_len {
            let value = f();
            // SAFETY: `len < new_len <= capacity`, so slot `len` is spare.
            unsafe { self.push_unchecked(value) };
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::testing::Ledger;
    use crate::vec::GrowVec;
    use alloc::{string::String, vec::Vec};
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_truncate_and_clear() {
        let mut v: GrowVec<String> = ["a", "b", "c"].map(String::from).into();
        v.truncate(5);
        assert_eq!(v.len(), 3);
        v.truncate(1);
        assert_eq!(v.as_slice(), &["a"]);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn test_resize_shrink_keeps_prefix_and_capacity() {
        let ledger = Ledger::new();
        let mut v: GrowVec<_> = (0..6).map(|i| ledger.track(i)).collect();
        let cap = v.capacity();
        v.resize_with(2, || unreachable!());
        assert_eq!(ledger.drops(), 4);
        assert_eq!(v.iter().map(|t| t.value).collect::<Vec<_>>(), [0, 1]);
        assert_eq!(v.capacity(), cap);
    }

    #[test]
    fn test_resize_grow_value_initializes() {
        let mut v: GrowVec<i32> = [1, 2].into();
        v.resize(5);
        assert_eq!(v, [1, 2, 0, 0, 0]);
        assert_eq!(v.capacity(), 5);
        v.resize(5);
        assert_eq!(v.len(), 5);
    }

    #[test]
    fn test_resize_within_capacity_does_not_reallocate() {
        let mut v: GrowVec<u8> = GrowVec::with_capacity(10);
        let ptr = v.as_ptr();
        v.resize(10);
        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(v.capacity(), 10);
    }

    #[test]
    fn test_resize_with_panicking_fill_keeps_constructed() {
        let ledger = Ledger::new();
        let mut v = GrowVec::new();
        v.push(ledger.track(0));
        let mut n = 0;
        let res = panic::catch_unwind(AssertUnwindSafe(|| {
            v.resize_with(6, || {
                n += 1;
                if n == 3 {
                    panic!("fill failed");
                }
                ledger.track(n)
            });
        }));
        assert!(res.is_err());
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 6);
        assert_eq!(ledger.live(), 3);
        drop(v);
        assert_eq!(ledger.live(), 0);
    }
}
