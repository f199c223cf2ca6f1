// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GrowVec` type and its inherent API.
//!
//! `GrowVec<T>` pairs one [`RawStorage<T>`](crate::RawStorage) with a live
//! length. Every operation is written against the same invariant: slots
//! `[0, len)` hold live values, slots `[len, capacity)` are uninitialized.
//!
//! Operations live in one file per concern under `vec/`.

mod clone;
mod emplace;
mod extend;
mod new;
mod remove;
mod reserve;
mod resize;
mod retain;
mod slice;
mod split_off;

// Crate imports
use crate::raw::RawStorage;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem,
    ops::{Deref, DerefMut},
    ptr,
};

/// A growable, heap-allocated vector built on explicit raw storage.
///
/// `GrowVec<T>` owns a single [`RawStorage<T>`] block and tracks how many of
/// its leading slots hold live values. Capacity grows by doubling (starting
/// at 1) when an insertion finds the block full, so `n` pushes cost `O(n)`
/// in total.
///
/// # Layout and invariants
///
/// - `0 <= len <= capacity` always holds.
/// - Slots `buf[..len]` are live `T` values.
/// - Slots `buf[len..capacity]` are uninitialized and never read as `T`.
/// - The invariant holds whenever user code runs (constructors, `Clone`,
///   `Default`, predicates, destructors), so a panic from user code unwinds
///   through a consistent vector: nothing is dropped twice and no live
///   value is dropped from an uninitialized slot.
///
/// # Relocation
///
/// Moving a value in Rust is a bitwise copy that cannot fail. When the
/// vector reallocates, live elements are relocated with
/// `ptr::copy_nonoverlapping` and the old block is released without running
/// destructors. No `Clone` bound is needed to grow.
///
/// # Examples
///
/// ```rust
/// use grow_vec::GrowVec;
///
/// let mut v = GrowVec::new();
/// for x in [10, 20, 30, 40, 50] {
///     v.push(x);
/// }
/// v.insert(2, 99);
/// assert_eq!(v.as_slice(), &[10, 20, 99, 30, 40, 50]);
/// v.erase(0);
/// assert_eq!(v.as_slice(), &[20, 99, 30, 40, 50]);
/// v.resize(2);
/// assert_eq!(v.as_slice(), &[20, 99]);
/// assert_eq!(v.capacity(), 8);
/// ```
pub struct GrowVec<T> {
    pub(crate) buf: RawStorage<T>,
    pub(crate) len: usize,
    pub(crate) _owns: PhantomData<T>,
}

impl<T> GrowVec<T> {
    /// Returns the number of allocated slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the number of pushes that will not reallocate.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.buf.capacity() - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Iterates the live elements front to back.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates the live elements mutably.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Exchanges storage and length with `other` without touching elements.
    ///
    /// Named apart from `swap` so the slice method `v.swap(i, j)` stays
    /// reachable through `Deref`.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out, leaving `self` empty with capacity 0.
    ///
    /// This is the move-construct / move-assign of the container: the
    /// returned vector owns the original block and elements, and `self` no
    /// longer refers to them.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Returns `true` if the vector contains `x`.
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` are live and dropped exactly once here. The block
        // itself is released afterwards by `RawStorage::drop`.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq> PartialEq<[T]> for GrowVec<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for GrowVec<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for GrowVec<T> {}
impl<T: Ord> Ord for GrowVec<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for GrowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for GrowVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for GrowVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for GrowVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for GrowVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
