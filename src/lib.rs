// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `grow-vec`
//!
//! A `no_std` + `alloc` growable vector built on an explicitly managed block
//! of raw memory.
//!
//! The crate has two layers:
//!
//! - [`RawStorage<T>`]: the exclusive owner of an uninitialized heap block
//!   sized for `capacity` elements. It hands out slot addresses and releases
//!   the block on drop. It has no idea which slots hold values.
//! - [`GrowVec<T>`]: the typed container. It owns one `RawStorage<T>` and a
//!   live length `len`, and constructs, relocates and drops elements in
//!   place.
//!
//! ## High-level semantics
//!
//! - Slots `[0, len)` are live, slots `[len, capacity)` are uninitialized.
//!   This holds at every point where user code (constructors, `Clone`,
//!   `Default`, predicates, destructors) may run, so panics unwind through
//!   a consistent vector.
//! - Insertion into a full block doubles the capacity (starting at 1), so
//!   `n` pushes cost `O(n)` overall. Reallocation happens only when
//!   `len == capacity` at the moment of the insertion.
//! - Relocation during growth is a bitwise move, which cannot fail in Rust;
//!   elements never need `Clone` to be relocated.
//! - [`GrowVec::reserve`] and [`GrowVec::resize`] grow to exactly the
//!   requested size. Capacity never shrinks.
//! - `Clone::clone_from` reuses the existing block when the source fits and
//!   assigns the overlapping prefix in place; otherwise it builds a complete
//!   copy before swapping it in.
//!
//! ## Errors
//!
//! Infallible operations panic on capacity overflow and on out-of-range
//! positions, and route allocator failure to
//! [`handle_alloc_error`](alloc::alloc::handle_alloc_error). The `try_*`
//! variants ([`GrowVec::try_reserve`], [`GrowVec::try_push`],
//! [`GrowVec::try_insert`], [`GrowVec::try_remove`],
//! [`RawStorage::try_with_capacity`]) report the same conditions as
//! [`Error`] and leave the vector unchanged.
//!
//! ## Example
//!
//! ```rust
//! use grow_vec::GrowVec;
//!
//! let mut v: GrowVec<String> = GrowVec::new();
//! v.push("b".to_string());
//! v.emplace(0, || "a".to_string());
//! v.emplace_back(|| "c".repeat(2));
//! assert_eq!(v.as_slice(), &["a", "b", "cc"]);
//! assert_eq!(v.capacity(), 4);
//!
//! let copy = v.clone();
//! v.erase(1);
//! assert_eq!(v.as_slice(), &["a", "cc"]);
//! assert_eq!(copy.len(), 3);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod raw;
#[cfg(test)]
mod testing;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use raw::RawStorage;
pub use vec::GrowVec;
