// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{raw::RawStorage, vec::GrowVec};

// Core imports
use core::marker::PhantomData;

impl<T> GrowVec<T> {
    /// Constructs an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self::from_storage(RawStorage::new())
    }

    /// Constructs an empty vector with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_storage(RawStorage::with_capacity(capacity))
    }

    /// Constructs a vector of `len` elements, each `T::default()`.
    ///
    /// Exactly `len` slots are allocated. If `T::default()` panics, the
    /// values built so far are dropped during unwinding.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut v = Self::with_capacity(len);
        v.fill_with(len, T::default);
        v
    }

    #[inline]
    pub(crate) const fn from_storage(buf: RawStorage<T>) -> Self {
        Self {
            buf,
            len: 0,
            _owns: PhantomData,
        }
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}
