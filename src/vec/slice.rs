// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::slice;

impl<T> GrowVec<T> {
    /// Views the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` are live, `len <= capacity`, and the base pointer
        // is non-null and aligned even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Views the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, plus `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Returns a raw pointer to the start of the block.
    ///
    /// Only the first `len` slots hold values. The pointer is dangling when
    /// the capacity is 0.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a mutable raw pointer to the start of the block.
    ///
    /// Writing past `len` does not change `len`; such values are never
    /// observed or dropped by the vector.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Returns the element at `index` without a bounds check in release
    /// builds.
    ///
    /// Only `usize` positions are accepted. For unchecked range access use
    /// `as_slice().get_unchecked(range)`.
    ///
    /// # Safety
    ///
    /// `index` must be `< len`. Debug builds assert it.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index {index} out of bounds for length {}", self.len);
        // SAFETY: the caller guarantees `index < len`.
        unsafe { &*self.buf.slot(index) }
    }

    /// Mutable counterpart of [`get_unchecked`](GrowVec::get_unchecked).
    ///
    /// # Safety
    ///
    /// `index` must be `< len`. Debug builds assert it.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "index {index} out of bounds for length {}", self.len);
        // SAFETY: the caller guarantees `index < len`; `&mut self` is exclusive.
        unsafe { &mut *self.buf.slot(index) }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::GrowVec;

    #[test]
    fn test_as_ptr_and_as_mut_ptr() {
        let mut v: GrowVec<u16> = [10, 20].into();
        assert_eq!(v.as_ptr(), v.as_slice().as_ptr());
        let p_mut = v.as_mut_ptr();
        assert_eq!(p_mut, v.as_mut_slice().as_mut_ptr());
        v.as_mut_slice()[1] = 21;
        assert_eq!(v, [10, 21]);
    }

    #[test]
    fn test_empty_slices() {
        let mut v: GrowVec<u64> = GrowVec::new();
        assert!(v.as_slice().is_empty());
        assert!(v.as_mut_slice().is_empty());
    }

    #[test]
    fn test_get_unchecked() {
        let mut v: GrowVec<i32> = [1, 2, 3].into();
        // SAFETY: indices are below len.
        unsafe {
            assert_eq!(*v.get_unchecked(2), 3);
            *v.get_unchecked_mut(0) = 9;
        }
        assert_eq!(v, [9, 2, 3]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of bounds")]
    fn test_get_unchecked_asserts_in_debug() {
        let v: GrowVec<i32> = GrowVec::with_capacity(4);
        // SAFETY: deliberately violated; caught by the debug assertion.
        let _ = unsafe { v.get_unchecked(0) };
    }
}
