// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw element storage: owned-growable or borrowed-fixed.
//!
//! The two storage modes differ in who owns the memory and whether the
//! capacity can ever change; everything above this module is agnostic to
//! the distinction except for growth failure.

use core::alloc::Layout;
use core::mem::MaybeUninit;
use core::ptr::NonNull;

use keel_alloc::Allocator;

use crate::error::VecError;

/// Backing storage for a vector.
///
/// `Owned` memory was obtained from (and is returned to) the allocator;
/// `Fixed` memory is borrowed from the caller, has an immutable capacity,
/// and is never released. "Destroy is a no-op for fixed mode" falls out of
/// the variant rather than a runtime flag.
pub(crate) enum RawStorage<'buf, T, A: Allocator> {
    Owned {
        ptr: NonNull<T>,
        capacity: usize,
        allocator: A,
    },
    Fixed {
        buffer: &'buf mut [MaybeUninit<T>],
    },
}

impl<'buf, T, A: Allocator> RawStorage<'buf, T, A> {
    /// Allocates owned storage for `capacity` elements.
    ///
    /// Zero-sized element types are rejected: the containers track storage
    /// in elements of a positive size.
    pub(crate) fn owned(capacity: usize, allocator: A) -> Result<Self, VecError> {
        if size_of::<T>() == 0 {
            return Err(VecError::InvalidArgument);
        }

        let ptr = allocator.allocate(Layout::new::<T>(), capacity)?.cast::<T>();

        Ok(Self::Owned {
            ptr,
            capacity,
            allocator,
        })
    }

    /// Wraps a caller-owned buffer without allocating.
    pub(crate) fn fixed(buffer: &'buf mut [MaybeUninit<T>]) -> Result<Self, VecError> {
        if size_of::<T>() == 0 || buffer.is_empty() {
            return Err(VecError::InvalidArgument);
        }

        Ok(Self::Fixed { buffer })
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        match self {
            Self::Owned { capacity, .. } => *capacity,
            Self::Fixed { buffer } => buffer.len(),
        }
    }

    #[inline]
    pub(crate) fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed { .. })
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const T {
        match self {
            Self::Owned { ptr, .. } => ptr.as_ptr(),
            Self::Fixed { buffer } => buffer.as_ptr().cast::<T>(),
        }
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        match self {
            Self::Owned { ptr, .. } => ptr.as_ptr(),
            Self::Fixed { buffer } => buffer.as_mut_ptr().cast::<T>(),
        }
    }

    /// Reallocates owned storage to exactly `new_capacity` elements.
    ///
    /// Contents are preserved up to the minimum of the old and new
    /// capacities; on failure the old buffer is untouched. Fixed storage
    /// reports its immutable capacity instead.
    pub(crate) fn set_capacity(&mut self, new_capacity: usize) -> Result<(), VecError> {
        match self {
            Self::Owned {
                ptr,
                capacity,
                allocator,
            } => {
                // SAFETY: `ptr` was allocated by `allocator` with this
                // element layout and the current capacity.
                let new_ptr = unsafe {
                    allocator.reallocate(ptr.cast(), Layout::new::<T>(), *capacity, new_capacity)?
                };

                *ptr = new_ptr.cast::<T>();
                *capacity = new_capacity;
                Ok(())
            }
            Self::Fixed { buffer } => Err(VecError::InsufficientCapacity {
                required: new_capacity,
                capacity: buffer.len(),
            }),
        }
    }

    /// Returns owned memory to the allocator. No-op for fixed storage.
    ///
    /// The caller must have dropped all live elements already.
    pub(crate) fn release(&mut self) {
        if let Self::Owned {
            ptr,
            capacity,
            allocator,
        } = self
        {
            // SAFETY: `ptr` was allocated by `allocator` with this element
            // layout and the current capacity.
            unsafe { allocator.deallocate(ptr.cast(), Layout::new::<T>(), *capacity) };
        }
    }
}
