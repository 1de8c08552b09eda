// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::AllocError;

/// An element-wise memory allocation strategy.
///
/// Every operation receives the layout of a *single* element plus an
/// element count, never a pre-multiplied byte size. Implementations that
/// bucket allocations by size class depend on that distinction.
///
/// # Safety
///
/// Implementations must uphold the usual allocator contract:
///
/// - A successful `allocate`/`reallocate` returns a pointer that is valid
///   for reads and writes of `element.size() * count` bytes, aligned to
///   `element.align()`, and stays valid until passed to `deallocate` (or
///   `reallocate`) with the same element layout and count.
/// - `reallocate` preserves the contents of the old allocation up to the
///   minimum of the old and new sizes. On failure the old allocation is
///   left untouched and remains valid.
pub unsafe trait Allocator {
    /// Allocates storage for `count` elements of layout `element`.
    ///
    /// The returned memory is uninitialized.
    ///
    /// # Errors
    ///
    /// [`AllocError::Exhausted`] if the request cannot be satisfied;
    /// [`AllocError::InvalidRequest`] if the total size is zero or
    /// overflows `usize`.
    fn allocate(&self, element: Layout, count: usize) -> Result<NonNull<u8>, AllocError>;

    /// Resizes an existing allocation to hold `new_count` elements.
    ///
    /// The allocation may be relocated; contents are preserved up to the
    /// minimum of the old and new sizes. On failure the old allocation is
    /// untouched and remains valid.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Allocator::allocate`].
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by this allocator for the same
    /// `element` layout and exactly `old_count` elements.
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        element: Layout,
        old_count: usize,
        new_count: usize,
    ) -> Result<NonNull<u8>, AllocError>;

    /// Releases an allocation.
    ///
    /// The element layout and count are passed back so bookkeeping
    /// allocators can locate the owning size class; a plain heap allocator
    /// only needs them to reconstruct the layout.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by this allocator for the same
    /// `element` layout and exactly `count` elements, and must not be used
    /// afterwards.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, element: Layout, count: usize);
}

/// Computes the layout of an array of `count` elements of layout `element`.
///
/// # Errors
///
/// [`AllocError::InvalidRequest`] if the total size is zero or overflows
/// `usize`.
pub fn array_layout(element: Layout, count: usize) -> Result<Layout, AllocError> {
    let element = element.pad_to_align();
    let size = element
        .size()
        .checked_mul(count)
        .ok_or(AllocError::InvalidRequest)?;
    if size == 0 {
        return Err(AllocError::InvalidRequest);
    }

    Layout::from_size_align(size, element.align()).map_err(|_| AllocError::InvalidRequest)
}
