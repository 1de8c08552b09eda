// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for keel-vec.

use keel_alloc::AllocError;
use thiserror::Error;

/// Errors that can occur when operating on a [`KeelVec`].
///
/// Every operation validates its arguments before mutating anything, so a
/// returned error always means the vector is unchanged.
///
/// [`KeelVec`]: crate::KeelVec
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum VecError {
    /// A construction or operation argument is invalid (zero-sized element
    /// type, empty fixed buffer, out-of-domain capacity policy, or an
    /// arithmetically impossible range).
    #[error("invalid argument")]
    InvalidArgument,

    /// An index or range does not lie within the vector's current length.
    #[error("index {index} out of range (length {len})")]
    OutOfRange {
        /// The first offending index.
        index: usize,
        /// The vector's length at the time of the call.
        len: usize,
    },

    /// A fixed-buffer vector would have to grow beyond its immutable
    /// capacity to complete the operation.
    #[error("fixed buffer too small (required {required}, capacity {capacity})")]
    InsufficientCapacity {
        /// The capacity the operation would need.
        required: usize,
        /// The immutable capacity of the fixed buffer.
        capacity: usize,
    },

    /// The allocator failed; propagated unchanged.
    #[error(transparent)]
    Alloc(#[from] AllocError),
}
