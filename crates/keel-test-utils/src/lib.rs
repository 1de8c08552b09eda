// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for keel crates.
//!
//! Instrumented [`Allocator`](keel_alloc::Allocator) implementations for
//! exercising the containers' allocation paths: [`CountingAllocator`]
//! observes every call, [`FailingAllocator`] runs out of memory on demand.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

mod counting;
mod failing;

pub use counting::{AllocStats, CountingAllocator};
pub use failing::FailingAllocator;
