// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Comparison shapes used by the search operations.
//!
//! [`KeelVec::find`] and [`KeelVec::binary_search`] accept any closure of
//! the matching shape; the functions here are the canonical instances for
//! element types that already implement the std traits.
//!
//! [`KeelVec::find`]: crate::KeelVec::find
//! [`KeelVec::binary_search`]: crate::KeelVec::binary_search

use core::cmp::Ordering;

/// The shape of an equality comparison over two elements.
pub type Equality<T> = fn(&T, &T) -> bool;

/// The shape of a three-way ordering comparison over two elements.
pub type Comparison<T> = fn(&T, &T) -> Ordering;

/// Equality via [`PartialEq`].
#[inline]
pub fn equal<T: PartialEq>(lhs: &T, rhs: &T) -> bool {
    lhs == rhs
}

/// Three-way ordering via [`Ord`].
#[inline]
pub fn three_way<T: Ord>(lhs: &T, rhs: &T) -> Ordering {
    lhs.cmp(rhs)
}
