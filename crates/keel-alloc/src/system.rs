// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::{alloc, dealloc, realloc};
use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::AllocError;
use crate::traits::{Allocator, array_layout};

/// The process-wide default allocator, backed by the global heap.
///
/// `System` is a zero-sized handle; containers that embed it pay nothing
/// for it. It ignores the element/count split beyond reconstructing the
/// byte layout.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct System;

// SAFETY: delegates to the global allocator, which upholds the contract.
unsafe impl Allocator for System {
    fn allocate(&self, element: Layout, count: usize) -> Result<NonNull<u8>, AllocError> {
        let layout = array_layout(element, count)?;

        // SAFETY: `array_layout` rejects zero-sized layouts.
        let ptr = unsafe { alloc(layout) };

        NonNull::new(ptr).ok_or(AllocError::Exhausted)
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        element: Layout,
        old_count: usize,
        new_count: usize,
    ) -> Result<NonNull<u8>, AllocError> {
        let old_layout = array_layout(element, old_count)?;
        let new_layout = array_layout(element, new_count)?;

        // SAFETY: the caller guarantees `ptr` was allocated by `self` with
        // `old_layout`; `array_layout` rejects zero-sized layouts.
        let ptr = unsafe { realloc(ptr.as_ptr(), old_layout, new_layout.size()) };

        NonNull::new(ptr).ok_or(AllocError::Exhausted)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, element: Layout, count: usize) {
        // SAFETY: the caller guarantees `ptr` was allocated by `self` with
        // this element layout and count, so the layout computation succeeded
        // when the memory was allocated.
        let layout = unsafe { array_layout(element, count).unwrap_unchecked() };

        // SAFETY: `ptr` was allocated by the global allocator with `layout`.
        unsafe { dealloc(ptr.as_ptr(), layout) };
    }
}
