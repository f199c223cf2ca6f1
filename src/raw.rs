// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exclusive owner of an uninitialized heap block.
//!
//! [`RawStorage<T>`] knows how many element slots it has, never how many of
//! them are live. Constructing and dropping values inside the block is the
//! caller's job, and must be finished before the storage itself is dropped.

// Crate imports
use crate::error::Error;

// Core imports
use core::{
    alloc::Layout,
    fmt,
    mem::{self, size_of},
    ptr::NonNull,
};

// Alloc imports
use alloc::alloc::{alloc, dealloc, handle_alloc_error};

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

/// An owned block of raw memory sized for `capacity` values of `T`.
///
/// Invariants:
///
/// - If `capacity == 0` or `T` is zero-sized, nothing is allocated and `ptr`
///   is dangling (but well aligned).
/// - Otherwise `ptr` was returned by the global allocator for
///   `Layout::array::<T>(capacity)`.
/// - No slot is ever assumed to hold a live `T`. Dropping a `RawStorage`
///   releases the block without running any element destructor.
///
/// `RawStorage` is deliberately not `Clone`: duplicating the block would
/// require duplicating values it knows nothing about. Ownership moves with
/// ordinary Rust moves, and [`take`](RawStorage::take) leaves an empty owner
/// behind.
pub struct RawStorage<T> {
    ptr: NonNull<T>,
    capacity: usize,
}

// SAFETY: `RawStorage` owns its block exclusively, like `Box<[MaybeUninit<T>]>`.
unsafe impl<T: Send> Send for RawStorage<T> {}
// SAFETY: shared access only hands out addresses; reads through them are the
// caller's responsibility under `&self` rules.
unsafe impl<T: Sync> Sync for RawStorage<T> {}

impl<T> RawStorage<T> {
    /// Returns an empty owner. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
        }
    }

    /// Allocates a block for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if the block would exceed `isize::MAX`
    /// bytes. Allocator failure is routed to
    /// [`handle_alloc_error`](alloc::alloc::handle_alloc_error).
    pub fn with_capacity(capacity: usize) -> Self {
        let layout = match Layout::array::<T>(capacity) {
            Ok(layout) => layout,
            Err(_) => capacity_overflow(),
        };
        match Self::try_with_capacity(capacity) {
            Ok(storage) => storage,
            Err(Error::CapacityOverflow) => capacity_overflow(),
            Err(_) => handle_alloc_error(layout),
        }
    }

    /// Fallible form of [`with_capacity`](RawStorage::with_capacity).
    ///
    /// Returns [`Error::CapacityOverflow`] when the layout cannot be formed
    /// and [`Error::AllocFailed`] when the allocator returns null.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        let layout = Layout::array::<T>(capacity).map_err(|_| Error::CapacityOverflow)?;
        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
            });
        }

        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc(layout) };
        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => Ok(Self { ptr, capacity }),
            None => Err(Error::AllocFailed {
                size: layout.size(),
                align: layout.align(),
            }),
        }
    }

    /// Number of element slots in the block.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Address of the slot at `offset`.
    ///
    /// `offset == capacity` is allowed and yields the one-past-the-end
    /// address. Larger offsets are a caller bug and trip a debug assertion.
    /// Computing the address is safe; reading or writing through it is not.
    #[inline]
    pub fn slot(&self, offset: usize) -> *mut T {
        debug_assert!(
            offset <= self.capacity,
            "slot offset {offset} past capacity {}",
            self.capacity
        );
        self.ptr.as_ptr().wrapping_add(offset)
    }

    /// Base address of the block.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable base address of the block.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Exchanges blocks with `other` in constant time.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Moves the block out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    #[inline]
    fn is_allocated(&self) -> bool {
        self.capacity != 0 && size_of::<T>() != 0
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        if !self.is_allocated() {
            return;
        }
        // SAFETY: the block was allocated with exactly this layout, which was
        // validated by `Layout::array` at allocation time.
        unsafe {
            let layout = Layout::from_size_align_unchecked(
                size_of::<T>() * self.capacity,
                mem::align_of::<T>(),
            );
            dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
        }
    }
}

impl<T> fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStorage")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}
