// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for keel-alloc.

use thiserror::Error;

/// Errors that can occur when requesting memory from an [`Allocator`].
///
/// [`Allocator`]: crate::Allocator
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// The underlying allocator could not satisfy the request.
    #[error("allocation failed (out of memory)")]
    Exhausted,

    /// The requested layout is zero-sized or overflows the address space.
    #[error("invalid allocation request")]
    InvalidRequest,
}
