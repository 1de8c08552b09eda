// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Pluggable element-wise memory allocation.
//!
//! The [`Allocator`] trait is the single seam between the keel containers
//! and the machine they run on: three operations (allocate, reallocate,
//! deallocate), each parameterized by the layout of *one* element plus an
//! element count. Keeping the element/count split visible lets custom
//! allocators (pools, slabs, arenas) do size-class bookkeeping instead of
//! seeing opaque byte blobs.
//!
//! [`System`] is the process-wide default, a zero-sized handle over the
//! global heap. Containers hold their allocator by value; `System` makes
//! that free.
//!
//! # Example
//!
//! ```rust
//! use core::alloc::Layout;
//! use keel_alloc::{Allocator, System};
//!
//! let element = Layout::new::<u64>();
//! let ptr = System.allocate(element, 16).unwrap();
//! // SAFETY: `ptr` was allocated by `System` with the same element/count.
//! unsafe { System.deallocate(ptr, element, 16) };
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod system;
mod traits;

#[cfg(test)]
mod tests;

pub use error::AllocError;
pub use system::System;
pub use traits::{Allocator, array_layout};
