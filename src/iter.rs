// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`GrowVec`](crate::GrowVec).
//!
//! - `&GrowVec` and `&mut GrowVec` iterate the live range as slices.
//! - `IntoIter<T>` takes ownership of the block and yields by value. It
//!   supports `DoubleEndedIterator`, `ExactSizeIterator` and
//!   `FusedIterator`, and drops whatever was not consumed.

// Crate imports
use crate::{raw::RawStorage, vec::GrowVec};

// Core imports
use core::{fmt, iter::FusedIterator, marker::PhantomData, mem::ManuallyDrop, ptr, slice};

/// Owned iterator returned by `GrowVec::into_iter()`.
///
/// Slots `[front, back)` of `buf` are live; everything else has been moved
/// out or was never initialized.
pub struct IntoIter<T> {
    buf: RawStorage<T>,
    front: usize,
    back: usize, // exclusive
    _owns: PhantomData<T>,
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` are live.
        unsafe { slice::from_raw_parts(self.buf.slot(self.front), self.back - self.front) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` was live and has just left the live range.
            Some(unsafe { ptr::read(self.buf.slot(i)) })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: slot `back` was live and has just left the live range.
            Some(unsafe { ptr::read(self.buf.slot(self.back)) })
        } else {
            None
        }
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let rest = ptr::slice_from_raw_parts_mut(self.buf.slot(self.front), self.back - self.front);
        self.front = self.back;
        // SAFETY: the unconsumed values are live and dropped exactly once.
        unsafe { ptr::drop_in_place(rest) }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        // The vector's destructor must not run: ownership of the live values
        // and the block passes to the iterator.
        let mut v = ManuallyDrop::new(self);
        IntoIter {
            buf: v.buf.take(),
            front: 0,
            back: v.len,
            _owns: PhantomData,
        }
    }
}
