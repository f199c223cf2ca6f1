// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `GrowVec`.
//!
//! Only the fallible `try_*` operations return these. Their infallible
//! counterparts panic on capacity overflow and abort on allocation failure.

// External imports
use thiserror::Error as ThisError;

/// Errors returned by the fallible operations on
/// [`GrowVec`](crate::GrowVec) and [`RawStorage`](crate::RawStorage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
#[non_exhaustive]
pub enum Error {
    /// The requested capacity does not fit in `isize::MAX` bytes, or
    /// doubling the current capacity overflowed.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The global allocator returned null for a block of this layout.
    #[error("allocation of {size} bytes (align {align}) failed")]
    AllocFailed {
        /// Requested block size in bytes.
        size: usize,
        /// Requested block alignment.
        align: usize,
    },

    /// An index was outside the live range.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The length at the time of the call.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfBounds { index: 4, len: 2 });
        assert_eq!(s, "index 4 out of bounds for length 2");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::CapacityOverflow.to_string(), "capacity overflow");
        assert_eq!(
            Error::AllocFailed { size: 64, align: 8 }.to_string(),
            "allocation of 64 bytes (align 8) failed"
        );
    }
}
