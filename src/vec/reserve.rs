// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    raw::{capacity_overflow, RawStorage},
    vec::GrowVec,
};

// Core imports
use core::ptr;

/// Relocates `count` live values from `src` to `dst`.
///
/// Rust moves are bitwise and cannot fail, so relocation never needs the
/// copying fallback: the values are memcpy'd and the source slots become
/// logically uninitialized.
///
/// # Safety
///
/// `src[..count]` must be live, `dst[..count]` must be writable and
/// uninitialized, and the two ranges must not overlap. The caller must treat
/// `src[..count]` as uninitialized afterwards.
#[inline]
pub(crate) unsafe fn relocate<T>(src: *const T, count: usize, dst: *mut T) {
    // SAFETY: forwarded from the caller.
    unsafe { ptr::copy_nonoverlapping(src, dst, count) }
}

impl<T> GrowVec<T> {
    /// Ensures the block has at least `new_capacity` slots.
    ///
    /// A no-op when `new_capacity <= capacity`: no element moves and the
    /// block address is unchanged. Otherwise allocates exactly
    /// `new_capacity` slots, relocates the live elements and releases the
    /// old block.
    ///
    /// Unlike `Vec::reserve`, the argument is the target capacity, not an
    /// additional count.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity() {
            return;
        }
        self.install(RawStorage::with_capacity(new_capacity));
    }

    /// Fallible form of [`reserve`](GrowVec::reserve).
    ///
    /// On error the vector is left unchanged.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        self.install(RawStorage::try_with_capacity(new_capacity)?);
        Ok(())
    }

    /// Moves every live element into `fresh` and makes it the active block.
    fn install(&mut self, mut fresh: RawStorage<T>) {
        debug_assert!(fresh.capacity() >= self.len);
        // SAFETY: `[0, len)` are live in the old block, `fresh` has room for
        // `len` values, and distinct allocations never overlap.
        unsafe { relocate(self.buf.slot(0), self.len, fresh.slot(0)) };
        self.buf.swap(&mut fresh);
        // `fresh` now holds the old block whose slots were all moved out;
        // dropping it only releases memory.
    }

    /// Makes room for `additional` more elements with amortized growth.
    ///
    /// When the block is too small, grows to the larger of the exact need
    /// and the doubled capacity, so repeated small bulk appends stay `O(1)`
    /// amortized per element.
    pub(crate) fn grow_for(&mut self, additional: usize) {
        let wanted = self
            .len
            .checked_add(additional)
            .unwrap_or_else(|| capacity_overflow());
        if wanted <= self.capacity() {
            return;
        }
        let target = match self.grown_capacity() {
            Ok(doubled) => doubled.max(wanted),
            Err(_) => wanted,
        };
        self.reserve(target);
    }

    /// Capacity to grow to when an insertion finds the block full.
    #[inline]
    pub(crate) fn grown_capacity(&self) -> Result<usize, Error> {
        match self.capacity() {
            0 => Ok(1),
            cap => cap.checked_mul(2).ok_or(Error::CapacityOverflow),
        }
    }

    /// Panicking form of [`grown_capacity`](GrowVec::grown_capacity).
    #[inline]
    pub(crate) fn next_capacity(&self) -> usize {
        self.grown_capacity().unwrap_or_else(|_| capacity_overflow())
    }
}
