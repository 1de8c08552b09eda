// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;
use core::sync::atomic::{AtomicUsize, Ordering};

use keel_alloc::{AllocError, Allocator, System};

/// An allocator that reports out-of-memory after a budget of successful
/// requests.
///
/// `allocate` and `reallocate` each consume one unit of budget; once it is
/// spent every further request fails with [`AllocError::Exhausted`].
/// Deallocation always works, so containers can still be dropped cleanly.
#[derive(Debug)]
pub struct FailingAllocator {
    budget: AtomicUsize,
}

impl FailingAllocator {
    /// Creates an allocator that satisfies `budget` requests, then fails.
    #[must_use]
    pub const fn new(budget: usize) -> Self {
        Self {
            budget: AtomicUsize::new(budget),
        }
    }

    fn consume(&self) -> Result<(), AllocError> {
        self.budget
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |remaining| {
                remaining.checked_sub(1)
            })
            .map(|_| ())
            .map_err(|_| AllocError::Exhausted)
    }
}

// SAFETY: delegation to `System` for every request the budget admits.
unsafe impl Allocator for FailingAllocator {
    fn allocate(&self, element: Layout, count: usize) -> Result<NonNull<u8>, AllocError> {
        self.consume()?;
        System.allocate(element, count)
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        element: Layout,
        old_count: usize,
        new_count: usize,
    ) -> Result<NonNull<u8>, AllocError> {
        self.consume()?;
        // SAFETY: forwarded contract.
        unsafe { System.reallocate(ptr, element, old_count, new_count) }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, element: Layout, count: usize) {
        // SAFETY: forwarded contract.
        unsafe { System.deallocate(ptr, element, count) };
    }
}
