// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for keel-string.

use keel_vec::VecError;
use thiserror::Error;

/// Errors that can occur when operating on a [`KeelString`] or
/// [`KeelStr`].
///
/// As with the underlying vector, every operation validates before
/// mutating, so an error always leaves the string unchanged.
///
/// [`KeelString`]: crate::KeelString
/// [`KeelStr`]: crate::KeelStr
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum StringError {
    /// A byte index or range does not lie within the string's content.
    ///
    /// The reserved terminator slot counts as out of range even though it
    /// is valid storage.
    #[error("byte index {index} out of range (length {len})")]
    OutOfRange {
        /// The first offending index.
        index: usize,
        /// The content length at the time of the call.
        len: usize,
    },

    /// The wrapped byte sequence contains no null terminator.
    #[error("missing null terminator")]
    MissingTerminator,

    /// An error from the underlying vector; propagated unchanged.
    #[error(transparent)]
    Vec(#[from] VecError),
}
