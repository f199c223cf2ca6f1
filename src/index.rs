// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`GrowVec`](crate::GrowVec).
//!
//! `Index` and `IndexMut` accept anything a slice accepts (`usize` and every
//! range form) and mirror slice behavior: views cover only the live prefix
//! `[0, len)` and out-of-bounds access panics. For access without a bounds
//! check in release builds, see
//! [`get_unchecked`](crate::GrowVec::get_unchecked).

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for GrowVec<T> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for GrowVec<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}
