// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capacity arithmetic, kept separate from storage mechanics so it can be
//! tested in isolation.

use crate::error::VecError;

/// The smallest capacity any vector ever has, even when empty.
pub const MIN_CAPACITY: usize = 1;

/// How a vector's capacity reacts to growth and shrinkage.
///
/// The growth factor is the multiplier applied to the *required* capacity
/// when storage must grow; `1.0` disables over-allocation entirely. The
/// shrink threshold is the occupancy fraction below which capacity is
/// proactively reduced; `0.0` disables automatic shrinking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityPolicy {
    growth_factor: f32,
    shrink_threshold: f32,
}

impl CapacityPolicy {
    /// The default policy: double on growth, shrink below 25% occupancy.
    pub const DEFAULT: Self = Self {
        growth_factor: 2.0,
        shrink_threshold: 0.25,
    };

    /// The policy forced onto fixed-buffer vectors: no over-allocation, no
    /// shrinking. Growth and shrinkage are meaningless without an
    /// allocator.
    pub const FIXED: Self = Self {
        growth_factor: 1.0,
        shrink_threshold: 0.0,
    };

    /// Creates a policy from a growth factor (≥ 1.0) and a shrink
    /// threshold (0.0 ..= 1.0).
    ///
    /// # Errors
    ///
    /// [`VecError::InvalidArgument`] if either value is outside its domain
    /// or not finite.
    pub fn new(growth_factor: f32, shrink_threshold: f32) -> Result<Self, VecError> {
        if !growth_factor.is_finite() || growth_factor < 1.0 {
            return Err(VecError::InvalidArgument);
        }
        if !shrink_threshold.is_finite() || !(0.0..=1.0).contains(&shrink_threshold) {
            return Err(VecError::InvalidArgument);
        }

        Ok(Self {
            growth_factor,
            shrink_threshold,
        })
    }

    /// Returns the growth factor.
    #[inline]
    #[must_use]
    pub const fn growth_factor(&self) -> f32 {
        self.growth_factor
    }

    /// Returns the shrink threshold.
    #[inline]
    #[must_use]
    pub const fn shrink_threshold(&self) -> f32 {
        self.shrink_threshold
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Computes the capacity to grow to when `required` elements must fit.
///
/// With a growth factor of exactly 1.0 this degenerates to `required`:
/// no over-allocation for callers that want tight memory control.
pub(crate) fn grown_capacity(required: usize, growth_factor: f32) -> usize {
    scale_up(required, growth_factor)
        .max(required)
        .max(MIN_CAPACITY)
}

/// Whether occupancy has fallen below the shrink threshold.
pub(crate) fn should_shrink(len: usize, capacity: usize, shrink_threshold: f32) -> bool {
    shrink_threshold > 0.0 && (len as f64) < (capacity as f64 * shrink_threshold as f64)
}

/// Computes the capacity to shrink to.
///
/// The length is scaled back up by the growth factor so the next push does
/// not immediately re-grow; this hysteresis prevents oscillation under
/// alternating push/pop. Collapsing to exactly `len` is reserved for the
/// explicit shrink-to-fit.
pub(crate) fn shrunk_capacity(len: usize, growth_factor: f32) -> usize {
    scale_up(len, growth_factor).max(MIN_CAPACITY)
}

/// `ceil(value * factor)` without leaving integer land for the result.
fn scale_up(value: usize, factor: f32) -> usize {
    let scaled = value as f64 * f64::from(factor);
    let truncated = scaled as usize;
    if (truncated as f64) < scaled {
        truncated + 1
    } else {
        truncated
    }
}
