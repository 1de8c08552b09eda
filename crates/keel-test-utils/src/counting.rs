// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;
use core::sync::atomic::{AtomicUsize, Ordering};

use keel_alloc::{AllocError, Allocator, System};

/// Allocation counters observed by a [`CountingAllocator`].
///
/// The stats live outside the allocator so a test can keep reading them
/// after the allocator has been moved into a container.
#[derive(Debug, Default)]
pub struct AllocStats {
    allocations: AtomicUsize,
    reallocations: AtomicUsize,
    deallocations: AtomicUsize,
}

impl AllocStats {
    /// Creates zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allocations: AtomicUsize::new(0),
            reallocations: AtomicUsize::new(0),
            deallocations: AtomicUsize::new(0),
        }
    }

    /// Number of `allocate` calls.
    pub fn allocations(&self) -> usize {
        self.allocations.load(Ordering::SeqCst)
    }

    /// Number of `reallocate` calls.
    pub fn reallocations(&self) -> usize {
        self.reallocations.load(Ordering::SeqCst)
    }

    /// Number of `deallocate` calls.
    pub fn deallocations(&self) -> usize {
        self.deallocations.load(Ordering::SeqCst)
    }
}

/// An allocator that delegates to [`System`] and counts every call.
#[derive(Debug, Clone, Copy)]
pub struct CountingAllocator<'c> {
    stats: &'c AllocStats,
}

impl<'c> CountingAllocator<'c> {
    /// Creates a counting allocator reporting into `stats`.
    #[must_use]
    pub const fn new(stats: &'c AllocStats) -> Self {
        Self { stats }
    }
}

// SAFETY: pure delegation to `System`.
unsafe impl Allocator for CountingAllocator<'_> {
    fn allocate(&self, element: Layout, count: usize) -> Result<NonNull<u8>, AllocError> {
        self.stats.allocations.fetch_add(1, Ordering::SeqCst);
        System.allocate(element, count)
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        element: Layout,
        old_count: usize,
        new_count: usize,
    ) -> Result<NonNull<u8>, AllocError> {
        self.stats.reallocations.fetch_add(1, Ordering::SeqCst);
        // SAFETY: forwarded contract.
        unsafe { System.reallocate(ptr, element, old_count, new_count) }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, element: Layout, count: usize) {
        self.stats.deallocations.fetch_add(1, Ordering::SeqCst);
        // SAFETY: forwarded contract.
        unsafe { System.deallocate(ptr, element, count) };
    }
}
