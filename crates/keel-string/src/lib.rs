// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! A null-terminated byte string built on the keel vector.
//!
//! Two types share the work:
//!
//! - [`KeelString`] is the mutable form. It wraps a `KeelVec<u8>` whose
//!   last slot always holds the trailing `b'\0'`, in either of the
//!   vector's storage modes (owned-growable or fixed caller buffer).
//! - [`KeelStr`] is the unsized read-only view, analogous to `str` for
//!   `String`. Wrapping foreign null-terminated memory yields a
//!   `&KeelStr`, so the "immutable string" of the C world is simply a
//!   type without mutating methods.
//!
//! Search is byte-wise and ASCII-oriented: `lpos`/`rpos` scan naively in
//! either direction, the `_fold` variants equate bytes under the ASCII
//! 0x20 toggle. [`KeelStr::compare`] orders by **length first** and only
//! falls back to byte order for equal lengths; see its documentation
//! before using it for anything user-visible.
//!
//! # Example
//!
//! ```rust
//! use keel_string::{KeelStr, KeelString};
//!
//! # fn example() -> Result<(), keel_string::StringError> {
//! let mut string = KeelString::try_from("The quick brown fox")?;
//! assert_eq!(string.lpos("brown"), Some(10));
//!
//! string.append(" jumps")?;
//! string.make_uppercase();
//! assert_eq!(string.as_bytes(), b"THE QUICK BROWN FOX JUMPS");
//!
//! // Immutable view over foreign memory: no allocation, no mutation.
//! let wrapped = KeelStr::from_bytes_with_nul(b"read only\0")?;
//! assert_eq!(wrapped.len(), 9);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

mod error;
mod kstr;
mod string;

#[cfg(test)]
mod tests;

pub use error::StringError;
pub use kstr::KeelStr;
pub use string::KeelString;
