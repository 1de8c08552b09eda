// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! A growable vector with pluggable allocation and fixed-buffer storage.
//!
//! [`KeelVec<T>`] stores a contiguous sequence of elements in one of two
//! modes, chosen at construction:
//!
//! - **Owned**: memory comes from an [`Allocator`](keel_alloc::Allocator)
//!   (the process-wide [`System`](keel_alloc::System) by default) and is
//!   grown/shrunk according to a [`CapacityPolicy`].
//! - **Fixed**: memory is a caller-provided buffer of immutable size; the
//!   vector never allocates and any operation that would need more room
//!   fails with [`VecError::InsufficientCapacity`].
//!
//! Capacity never drops below [`MIN_CAPACITY`], growth and shrinkage are
//! plain arithmetic over the policy (see the concrete numbers on
//! [`CapacityPolicy`]), and every fallible operation validates its
//! arguments before touching the elements.
//!
//! # Example
//!
//! ```rust
//! use keel_vec::{KeelVec, cmp};
//!
//! # fn example() -> Result<(), keel_vec::VecError> {
//! let mut vec = KeelVec::with_capacity(8)?;
//! for value in [3u32, 1, 4, 1, 5] {
//!     vec.push(value)?;
//! }
//!
//! assert_eq!(vec.find(&4, cmp::equal), Some(2));
//! vec.remove(1)?;
//! assert_eq!(vec.as_slice(), &[3, 4, 1, 5]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! Fixed-buffer mode needs no allocator and no destruction:
//!
//! ```rust
//! use core::mem::MaybeUninit;
//! use keel_vec::{KeelVec, VecError};
//!
//! let mut buffer: [MaybeUninit<u16>; 4] = [MaybeUninit::uninit(); 4];
//! let mut vec = KeelVec::from_buffer(&mut buffer).unwrap();
//!
//! for value in 0..4 {
//!     vec.push(value).unwrap();
//! }
//! assert!(matches!(
//!     vec.push(4),
//!     Err(VecError::InsufficientCapacity { .. })
//! ));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

pub mod cmp;
mod error;
mod policy;
mod raw;
mod vec;

#[cfg(test)]
mod tests;

pub use error::VecError;
pub use policy::{CapacityPolicy, MIN_CAPACITY};
pub use vec::KeelVec;
