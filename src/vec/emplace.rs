// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    raw::RawStorage,
    vec::{reserve::relocate, GrowVec},
};

// Core imports
use core::ptr;

impl<T> GrowVec<T> {
    /// Constructs a value with `make` and inserts it at `index`, shifting
    /// `[index, len)` one slot toward the end.
    ///
    /// Three paths, chosen by the state at the moment of the call:
    ///
    /// - `index == len` with spare capacity: the value is written straight
    ///   into slot `len`.
    /// - `index < len` with spare capacity: the tail is shifted in place and
    ///   the value written into the gap.
    /// - `len == capacity`: a block of twice the capacity (1 if empty) is
    ///   allocated, the value is written at its final offset there, then the
    ///   prefix and suffix are relocated around it and the block swapped in.
    ///
    /// `make` runs before any slot is touched. If it panics, the vector is
    /// unchanged and no slot is dropped.
    ///
    /// Returns a reference to the new element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, or on capacity overflow.
    pub fn emplace<F: FnOnce() -> T>(&mut self, index: usize, make: F) -> &mut T {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        if len == self.capacity() {
            let fresh = RawStorage::with_capacity(self.next_capacity());
            self.emplace_realloc(index, make, fresh)
        } else {
            self.emplace_in_place(index, make)
        }
    }

    /// Like [`emplace`](GrowVec::emplace) at `index == len`.
    #[inline]
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, make: F) -> &mut T {
        self.emplace(self.len, make)
    }

    /// Inserts `value` at `index`, shifting later elements toward the end.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, or on capacity overflow.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.emplace(index, || value)
    }

    /// Appends `value`, doubling the capacity first if the block is full.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.emplace(self.len, || value);
    }

    /// Fallible form of [`insert`](GrowVec::insert).
    ///
    /// Returns [`Error::OutOfBounds`] if `index > len`, and
    /// [`Error::CapacityOverflow`] / [`Error::AllocFailed`] if growing
    /// fails. On error the vector is unchanged and `value` is dropped.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, Error> {
        let len = self.len;
        if index > len {
            return Err(Error::OutOfBounds { index, len });
        }
        if len == self.capacity() {
            let fresh = RawStorage::try_with_capacity(self.grown_capacity()?)?;
            Ok(self.emplace_realloc(index, || value, fresh))
        } else {
            Ok(self.emplace_in_place(index, || value))
        }
    }

    /// Fallible form of [`push`](GrowVec::push).
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), Error> {
        self.try_insert(self.len, value).map(|_| ())
    }

    /// Writes `value` into slot `len` and bumps the length.
    ///
    /// # Safety
    ///
    /// `len < capacity` must hold.
    #[inline]
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        // SAFETY: the caller guarantees slot `len` exists and is uninitialized.
        unsafe { ptr::write(self.buf.slot(self.len), value) };
        self.len += 1;
    }

    fn emplace_in_place<F: FnOnce() -> T>(&mut self, index: usize, make: F) -> &mut T {
        debug_assert!(self.len < self.capacity());
        let value = make();
        let len = self.len;
        let hole = self.buf.slot(index);
        if index == len {
            // SAFETY: slot `len` is spare and uninitialized.
            unsafe { ptr::write(hole, value) };
        } else {
            // SAFETY: `[index, len)` are live and slot `len` is spare, so the
            // overlapping shift stays in bounds. After it, slot `index` holds
            // stale bits that are overwritten without being dropped.
            unsafe {
                ptr::copy(hole, hole.add(1), len - index);
                ptr::write(hole, value);
            }
        }
        self.len = len + 1;
        // SAFETY: slot `index` was just initialized and `index < len`.
        unsafe { &mut *hole }
    }

    fn emplace_realloc<F: FnOnce() -> T>(
        &mut self,
        index: usize,
        make: F,
        mut fresh: RawStorage<T>,
    ) -> &mut T {
        let len = self.len;
        debug_assert!(fresh.capacity() > len);
        // If `make` panics here, `fresh` is released and `self` is untouched.
        let value = make();
        // SAFETY: `fresh` has room for `len + 1` values and is a distinct
        // allocation. The new value goes to its final offset first, then the
        // prefix `[0, index)` and the suffix `[index, len)` are relocated
        // around it. None of these steps can fail.
        unsafe {
            ptr::write(fresh.slot(index), value);
            relocate(self.buf.slot(0), index, fresh.slot(0));
            relocate(self.buf.slot(index), len - index, fresh.slot(index + 1));
        }
        self.buf.swap(&mut fresh);
        self.len = len + 1;
        // SAFETY: slot `index` of the active block was initialized above.
        unsafe { &mut *self.buf.slot(index) }
    }
}
