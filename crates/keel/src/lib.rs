// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>An allocator-agnostic container toolkit for environments that
//! pick their own memory.</em></p>
//!
//! ---
//!
//! Keel provides a growable vector and a null-terminated byte string for
//! code that cannot (or does not want to) lean on the standard library's
//! collections: embedded targets, freestanding binaries, ABI-stable
//! libraries.
//!
//! # Features
//!
//! - 📦 **`no_std`** — every crate works without `std`
//! - 🧩 **Pluggable allocation** — one three-operation
//!   [`Allocator`] trait; the zero-sized [`System`] default costs nothing
//! - 🧱 **Fixed-buffer mode** — containers can live entirely in
//!   caller-provided memory, with no allocator and no destruction
//! - 📏 **Tunable growth** — per-container growth factor and hysteretic
//!   shrink threshold via [`CapacityPolicy`]
//! - 🔎 **Search built in** — linear find, binary search with insertion
//!   points, forward/backward substring scans with ASCII folding
//! - 🛑 **Errors as values** — validate-before-mutate everywhere; a failed
//!   call never leaves a container half-changed
//!
//! # Quick Start
//!
//! ```rust
//! use keel::{KeelString, KeelVec};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut numbers = KeelVec::with_capacity(8)?;
//!     for value in [3u32, 1, 4, 1, 5, 9] {
//!         numbers.push(value)?;
//!     }
//!     numbers.remove(1)?;
//!
//!     let mut greeting = KeelString::try_from("Hello")?;
//!     greeting.append(", World")?;
//!     assert_eq!(greeting.lpos("World"), Some(7));
//!
//!     Ok(())
//! }
//! ```
//!
//! Fixed-buffer mode never allocates:
//!
//! ```rust
//! use keel::KeelString;
//!
//! let mut buffer = [0u8; 32];
//! let mut status = keel::KeelString::from_buffer(&mut buffer).unwrap();
//! status.append("ready").unwrap();
//! assert_eq!(status.as_bytes_with_nul(), b"ready\0");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub use keel_alloc as alloc;
pub use keel_string as string;
pub use keel_vec as vec;

pub use keel_alloc::{AllocError, Allocator, System};
pub use keel_string::{KeelStr, KeelString, StringError};
pub use keel_vec::{CapacityPolicy, KeelVec, MIN_CAPACITY, VecError, cmp};
