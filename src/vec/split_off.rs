// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{reserve::relocate, GrowVec};

impl<T> GrowVec<T> {
    /// Splits the vector into two at index `at`.
    ///
    /// `self` keeps `[0, at)` and its capacity; the returned vector owns the
    /// relocated tail `[at, len)` in a block of exactly that size.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    pub fn split_off(&mut self, at: usize) -> Self {
        let len = self.len;
        assert!(at <= len, "split index (is {at}) should be <= len (is {len})");

        let tail_len = len - at;
        let mut other = Self::with_capacity(tail_len);
        // SAFETY: `[at, len)` are live, `other` has `tail_len` uninitialized
        // slots in a separate block. The length update removes the moved
        // values from `self` before anything can observe them twice.
        unsafe { relocate(self.buf.slot(at), tail_len, other.buf.slot(0)) };
        self.len = at;
        other.len = tail_len;
        other
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::GrowVec;
    use alloc::string::String;

    #[test]
    fn test_split_off_middle() {
        let mut v: GrowVec<String> = ["a", "b", "c", "d"].map(String::from).into();
        let tail = v.split_off(1);
        assert_eq!(v.as_slice(), &["a"]);
        assert_eq!(v.capacity(), 4);
        assert_eq!(tail.as_slice(), &["b", "c", "d"]);
        assert_eq!(tail.capacity(), 3);
    }

    #[test]
    fn test_split_off_ends() {
        let mut v: GrowVec<i32> = [1, 2].into();
        let empty = v.split_off(2);
        assert!(empty.is_empty());
        let all = v.split_off(0);
        assert!(v.is_empty());
        assert_eq!(all, [1, 2]);
    }

    #[test]
    #[should_panic(expected = "split index (is 3) should be <= len (is 2)")]
    fn test_split_off_past_end_panics() {
        let mut v: GrowVec<i32> = [1, 2].into();
        let _ = v.split_off(3);
    }
}
