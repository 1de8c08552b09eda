// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem::MaybeUninit;
use core::ops::Deref;

use keel_alloc::{Allocator, System};
use keel_vec::{CapacityPolicy, KeelVec, MIN_CAPACITY, VecError};

use crate::error::StringError;
use crate::kstr::KeelStr;

/// A mutable, null-terminated byte string.
///
/// The content lives in a [`KeelVec<u8>`], so the string inherits the
/// vector's storage modes: owned-growable (dynamic, allocator-backed) or
/// fixed-buffer (caller-provided memory, immutable capacity). One slot of
/// the underlying vector is permanently reserved for the trailing
/// `b'\0'`; after every operation the byte just past the content is the
/// terminator, which makes the content directly usable as a C string via
/// [`KeelStr::as_bytes_with_nul`].
///
/// `KeelString` dereferences to [`KeelStr`], which carries all read-only
/// operations (search, compare, character access). The immutable wrapped
/// form of a string is `&KeelStr` itself; see
/// [`KeelStr::from_bytes_with_nul`].
///
/// Sources for insert/append are anything byte-like (`&str`, `&[u8]`,
/// `&KeelStr`, another `KeelString`); the source's own terminator is
/// never copied.
///
/// # Example
///
/// ```rust
/// use keel_string::KeelString;
///
/// # fn example() -> Result<(), keel_string::StringError> {
/// let mut string = KeelString::try_from("Hello")?;
/// string.append(" World")?;
/// string.insert(5, ",")?;
///
/// assert_eq!(string.as_bytes(), b"Hello, World");
/// assert_eq!(string.as_bytes_with_nul(), b"Hello, World\0");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct KeelString<'buf, A: Allocator = System> {
    vec: KeelVec<'buf, u8, A>,
}

impl KeelString<'static> {
    /// Creates an empty string with room for at least `capacity` content
    /// bytes, backed by the [`System`] allocator and the default capacity
    /// policy.
    ///
    /// # Errors
    ///
    /// [`StringError::Vec`] on allocation failure.
    pub fn new(capacity: usize) -> Result<Self, StringError> {
        Self::with_allocator_and_policy(capacity, System, CapacityPolicy::default())
    }

    /// Creates a dynamic string holding a copy of `source`, with room for
    /// at least `capacity` content bytes.
    ///
    /// # Errors
    ///
    /// [`StringError::Vec`] on allocation failure.
    pub fn duplicate<S>(source: &S, capacity: usize) -> Result<Self, StringError>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        let bytes = source.as_ref();
        let mut string = Self::new(capacity.max(bytes.len()))?;
        string.append(bytes)?;

        Ok(string)
    }

    /// Creates a dynamic string holding `first` followed by `second`, with
    /// room for at least `capacity` content bytes.
    ///
    /// # Errors
    ///
    /// [`StringError::Vec`] on allocation failure.
    pub fn concat<S1, S2>(first: &S1, second: &S2, capacity: usize) -> Result<Self, StringError>
    where
        S1: AsRef<[u8]> + ?Sized,
        S2: AsRef<[u8]> + ?Sized,
    {
        let first = first.as_ref();
        let second = second.as_ref();
        let mut string = Self::new(capacity.max(first.len() + second.len()))?;
        string.append(first)?;
        string.append(second)?;

        Ok(string)
    }
}

impl<A: Allocator> KeelString<'static, A> {
    /// Creates an empty string with a custom allocator and capacity
    /// policy.
    ///
    /// The underlying vector gets one extra slot for the terminator, which
    /// is written immediately.
    ///
    /// # Errors
    ///
    /// [`StringError::Vec`] on allocation failure.
    pub fn with_allocator_and_policy(
        capacity: usize,
        allocator: A,
        policy: CapacityPolicy,
    ) -> Result<Self, StringError> {
        let capacity = capacity
            .max(MIN_CAPACITY)
            .checked_add(1)
            .ok_or(VecError::InvalidArgument)?;
        let mut vec = KeelVec::with_allocator_and_policy(capacity, allocator, policy)?;
        vec.push(0)?;

        Ok(Self { vec })
    }
}

impl<'buf> KeelString<'buf> {
    /// Wraps a caller-owned byte buffer as fixed-capacity string storage.
    ///
    /// The buffer provides `buffer.len() - 1` content bytes plus the
    /// terminator slot; the string never allocates, never grows and needs
    /// no explicit destruction.
    ///
    /// # Errors
    ///
    /// [`StringError::Vec`] with [`VecError::InvalidArgument`] if the
    /// buffer is empty.
    pub fn from_buffer(buffer: &'buf mut [u8]) -> Result<Self, StringError> {
        // SAFETY: `u8` and `MaybeUninit<u8>` have identical layout, and the
        // vector only ever writes initialized bytes through this view.
        let buffer = unsafe { &mut *(buffer as *mut [u8] as *mut [MaybeUninit<u8>]) };
        let mut vec = KeelVec::from_buffer(buffer)?;
        vec.push(0)?;

        Ok(Self { vec })
    }

    /// Copies `source` into a caller-owned buffer as a fixed string.
    ///
    /// # Errors
    ///
    /// [`StringError::Vec`] with [`VecError::InsufficientCapacity`] if the
    /// buffer cannot hold the content plus the terminator.
    pub fn duplicate_in_buffer<S>(source: &S, buffer: &'buf mut [u8]) -> Result<Self, StringError>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        let mut string = Self::from_buffer(buffer)?;
        string.append(source)?;

        Ok(string)
    }

    /// Copies `first` followed by `second` into a caller-owned buffer as a
    /// fixed string.
    ///
    /// # Errors
    ///
    /// As for [`KeelString::duplicate_in_buffer`].
    pub fn concat_in_buffer<S1, S2>(
        first: &S1,
        second: &S2,
        buffer: &'buf mut [u8],
    ) -> Result<Self, StringError>
    where
        S1: AsRef<[u8]> + ?Sized,
        S2: AsRef<[u8]> + ?Sized,
    {
        let mut string = Self::from_buffer(buffer)?;
        string.append(first)?;
        string.append(second)?;

        Ok(string)
    }
}

impl<'buf, A: Allocator> KeelString<'buf, A> {
    /// Returns the content capacity in bytes, excluding the terminator
    /// slot.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.vec.capacity() - 1
    }

    /// Returns `true` if this string wraps a fixed caller-owned buffer.
    #[inline]
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.vec.is_fixed()
    }

    /// Returns the read-only view of this string.
    #[inline]
    #[must_use]
    pub fn as_kstr(&self) -> &KeelStr {
        KeelStr::from_inner(self.vec.as_slice())
    }

    /// Returns a mutable reference to the content byte at `index`.
    ///
    /// The terminator slot is out of range even though it is valid
    /// storage.
    ///
    /// # Errors
    ///
    /// [`StringError::OutOfRange`] if `index >= len()`.
    pub fn char_at_mut(&mut self, index: usize) -> Result<&mut u8, StringError> {
        self.as_kstr().check_range(index, 1)?;

        Ok(self.vec.get_mut(index)?)
    }

    /// Replaces the content byte at `index`.
    ///
    /// # Errors
    ///
    /// [`StringError::OutOfRange`] if `index >= len()`.
    pub fn set_char(&mut self, index: usize, value: u8) -> Result<(), StringError> {
        *self.char_at_mut(index)? = value;
        Ok(())
    }

    /// Inserts `source` at byte offset `index`, shifting the tail right.
    ///
    /// Inserting at `index == len()` degenerates to [`KeelString::append`]
    /// and shifts nothing but the terminator.
    ///
    /// # Errors
    ///
    /// [`StringError::OutOfRange`] if `index > len()`; growth errors from
    /// the vector.
    pub fn insert<S>(&mut self, index: usize, source: &S) -> Result<(), StringError>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        if index > self.len() {
            return Err(StringError::OutOfRange {
                index,
                len: self.len(),
            });
        }

        self.vec.insert_slice(index, source.as_ref())?;
        Ok(())
    }

    /// Inserts `count` bytes of `source`, starting at `source_index`, at
    /// byte offset `index`.
    ///
    /// # Errors
    ///
    /// [`StringError::OutOfRange`] if either the destination offset or the
    /// source range is out of bounds.
    pub fn insert_range<S>(
        &mut self,
        index: usize,
        source: &S,
        source_index: usize,
        count: usize,
    ) -> Result<(), StringError>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        let bytes = source.as_ref();
        let end = check_source_range(bytes, source_index, count)?;

        self.insert(index, &bytes[source_index..end])
    }

    /// Appends `source` at the end of the string.
    ///
    /// Only the terminator byte moves; existing content stays in place.
    ///
    /// # Errors
    ///
    /// Growth errors from the vector.
    pub fn append<S>(&mut self, source: &S) -> Result<(), StringError>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        let at = self.len();
        self.vec.insert_slice(at, source.as_ref())?;
        Ok(())
    }

    /// Appends `count` bytes of `source`, starting at `source_index`.
    ///
    /// The source range must hold exactly `count` readable bytes; the
    /// terminator is re-stamped as a separate step.
    ///
    /// # Errors
    ///
    /// [`StringError::OutOfRange`] if the source range is out of bounds;
    /// growth errors from the vector.
    pub fn append_range<S>(
        &mut self,
        source: &S,
        source_index: usize,
        count: usize,
    ) -> Result<(), StringError>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        let bytes = source.as_ref();
        let end = check_source_range(bytes, source_index, count)?;

        self.append(&bytes[source_index..end])
    }

    /// Deletes the `count` content bytes starting at `index`.
    ///
    /// The terminator itself cannot be deleted.
    ///
    /// # Errors
    ///
    /// [`StringError::OutOfRange`] if `[index, index + count)` does not
    /// lie within the content.
    pub fn delete(&mut self, index: usize, count: usize) -> Result<(), StringError> {
        self.as_kstr().check_range(index, count)?;

        self.vec.remove_range(index, count)?;
        Ok(())
    }

    /// Deletes everything from byte offset `index` to the end of the
    /// content.
    ///
    /// # Errors
    ///
    /// [`StringError::OutOfRange`] if `index > len()`.
    pub fn truncate(&mut self, index: usize) -> Result<(), StringError> {
        if index > self.len() {
            return Err(StringError::OutOfRange {
                index,
                len: self.len(),
            });
        }

        self.delete(index, self.len() - index)
    }

    /// Deletes the whole content, keeping the string valid and terminated.
    ///
    /// # Errors
    ///
    /// None in practice: the vector guarantees a minimum capacity of one
    /// element, so the terminator always fits after the clear.
    pub fn clear(&mut self) -> Result<(), StringError> {
        self.vec.clear();
        self.vec.push(0)?;
        Ok(())
    }

    /// Grows or truncates the content to exactly `new_len` bytes, filling
    /// new slots (including the old terminator position) with `fill`.
    ///
    /// The terminator is re-stamped at the new end.
    ///
    /// # Errors
    ///
    /// Growth errors from the vector.
    pub fn resize(&mut self, new_len: usize, fill: u8) -> Result<(), StringError> {
        let old_len = self.len();
        let target = new_len.checked_add(1).ok_or(VecError::InvalidArgument)?;

        self.vec.resize(target, fill)?;
        if new_len > old_len {
            self.vec.set(old_len, fill)?;
        }
        self.vec.set(new_len, 0)?;

        Ok(())
    }

    /// Ensures room for at least `capacity` content bytes.
    ///
    /// # Errors
    ///
    /// [`VecError::InsufficientCapacity`] in fixed mode; allocation errors
    /// otherwise.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), StringError> {
        let capacity = capacity.checked_add(1).ok_or(VecError::InvalidArgument)?;

        self.vec.reserve(capacity)?;
        Ok(())
    }

    /// Reduces capacity to the current content length.
    ///
    /// A no-op for fixed buffers.
    ///
    /// # Errors
    ///
    /// Allocation errors from the shrinking reallocation.
    pub fn shrink_to_fit(&mut self) -> Result<(), StringError> {
        self.vec.shrink_to_fit()?;
        Ok(())
    }

    /// Lowercases ASCII letters in the whole content, in place.
    pub fn make_lowercase(&mut self) {
        let len = self.len();
        self.vec.as_mut_slice()[..len].make_ascii_lowercase();
    }

    /// Lowercases ASCII letters in `[index, index + count)`, in place.
    ///
    /// Non-letter bytes are untouched.
    ///
    /// # Errors
    ///
    /// [`StringError::OutOfRange`] if the range does not lie within the
    /// content.
    pub fn make_lowercase_in_range(&mut self, index: usize, count: usize) -> Result<(), StringError> {
        let end = self.as_kstr().check_range(index, count)?;

        self.vec.as_mut_slice()[index..end].make_ascii_lowercase();
        Ok(())
    }

    /// Uppercases ASCII letters in the whole content, in place.
    pub fn make_uppercase(&mut self) {
        let len = self.len();
        self.vec.as_mut_slice()[..len].make_ascii_uppercase();
    }

    /// Uppercases ASCII letters in `[index, index + count)`, in place.
    ///
    /// Non-letter bytes are untouched.
    ///
    /// # Errors
    ///
    /// [`StringError::OutOfRange`] if the range does not lie within the
    /// content.
    pub fn make_uppercase_in_range(&mut self, index: usize, count: usize) -> Result<(), StringError> {
        let end = self.as_kstr().check_range(index, count)?;

        self.vec.as_mut_slice()[index..end].make_ascii_uppercase();
        Ok(())
    }
}

/// Validates `[source_index, source_index + count)` against a source.
fn check_source_range(bytes: &[u8], source_index: usize, count: usize) -> Result<usize, StringError> {
    let end = source_index
        .checked_add(count)
        .ok_or(VecError::InvalidArgument)?;
    if end > bytes.len() {
        return Err(StringError::OutOfRange {
            index: source_index,
            len: bytes.len(),
        });
    }

    Ok(end)
}

impl<A: Allocator> Deref for KeelString<'_, A> {
    type Target = KeelStr;

    fn deref(&self) -> &Self::Target {
        self.as_kstr()
    }
}

impl<A: Allocator> AsRef<[u8]> for KeelString<'_, A> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TryFrom<&str> for KeelString<'static> {
    type Error = StringError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::duplicate(value, value.len())
    }
}

impl<A: Allocator> PartialEq for KeelString<'_, A> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<A: Allocator> Eq for KeelString<'_, A> {}

impl<A: Allocator> PartialEq<str> for KeelString<'_, A> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<A: Allocator> PartialEq<&str> for KeelString<'_, A> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<A: Allocator> core::fmt::Debug for KeelString<'_, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeelString")
            .field("data", &self.as_kstr())
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<A: Allocator> core::fmt::Display for KeelString<'_, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(self.as_kstr(), f)
    }
}
