// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp::Ordering;

use crate::{KeelStr, StringError};

const PANGRAM: &[u8] = b"The quick brown fox jumps over the lazy dog\0";

// =============================================================================
// from_bytes_with_nul()
// =============================================================================

#[test]
fn test_from_bytes_with_nul() {
    let string = KeelStr::from_bytes_with_nul(b"hello\0").expect("Failed to wrap");

    assert_eq!(string.len(), 5);
    assert!(!string.is_empty());
    assert_eq!(string.as_bytes(), b"hello");
    assert_eq!(string.as_bytes_with_nul(), b"hello\0");
}

#[test]
fn test_from_bytes_with_nul_scans_to_first_nul() {
    let string = KeelStr::from_bytes_with_nul(b"ab\0ignored\0").expect("Failed to wrap");

    assert_eq!(string.len(), 2);
    assert_eq!(string.as_bytes(), b"ab");
}

#[test]
fn test_from_bytes_with_nul_missing_terminator() {
    assert_eq!(
        KeelStr::from_bytes_with_nul(b"hello").unwrap_err(),
        StringError::MissingTerminator
    );
}

#[test]
fn test_from_bytes_with_nul_empty_content() {
    let string = KeelStr::from_bytes_with_nul(b"\0").expect("Failed to wrap");

    assert_eq!(string.len(), 0);
    assert!(string.is_empty());
}

// =============================================================================
// as_str()
// =============================================================================

#[test]
fn test_as_str() {
    let string = KeelStr::from_bytes_with_nul(b"hello\0").expect("Failed to wrap");

    assert_eq!(string.as_str().expect("Failed to convert"), "hello");
}

#[test]
fn test_as_str_invalid_utf8() {
    let string = KeelStr::from_bytes_with_nul(b"\xFF\xFE\0").expect("Failed to wrap");

    assert!(string.as_str().is_err());
}

// =============================================================================
// char_at()
// =============================================================================

#[test]
fn test_char_at() {
    let string = KeelStr::from_bytes_with_nul(b"abc\0").expect("Failed to wrap");

    assert_eq!(string.char_at(0).expect("Failed to char_at"), b'a');
    assert_eq!(string.char_at(2).expect("Failed to char_at"), b'c');
}

#[test]
fn test_char_at_terminator_slot_is_out_of_range() {
    let string = KeelStr::from_bytes_with_nul(b"abc\0").expect("Failed to wrap");

    // Index 3 is the terminator: valid storage, forbidden access.
    assert_eq!(
        string.char_at(3).unwrap_err(),
        StringError::OutOfRange { index: 3, len: 3 }
    );
}

// =============================================================================
// lpos() / lpos_in_range()
// =============================================================================

#[test]
fn test_lpos_found() {
    let haystack = KeelStr::from_bytes_with_nul(PANGRAM).expect("Failed to wrap");

    assert_eq!(haystack.lpos("brown"), Some(10));
    assert_eq!(haystack.lpos("The"), Some(0));
    assert_eq!(haystack.lpos("dog"), Some(40));
}

#[test]
fn test_lpos_not_found() {
    let haystack = KeelStr::from_bytes_with_nul(PANGRAM).expect("Failed to wrap");

    assert_eq!(haystack.lpos("cat"), None);
}

#[test]
fn test_lpos_degenerate_cases() {
    let haystack = KeelStr::from_bytes_with_nul(b"abc\0").expect("Failed to wrap");
    let empty = KeelStr::from_bytes_with_nul(b"\0").expect("Failed to wrap");

    // Empty needle, empty haystack and an oversized needle all report
    // not-found without scanning.
    assert_eq!(haystack.lpos(""), None);
    assert_eq!(empty.lpos("a"), None);
    assert_eq!(haystack.lpos("abcd"), None);
}

#[test]
fn test_lpos_in_range() {
    let haystack = KeelStr::from_bytes_with_nul(b"abcabc\0").expect("Failed to wrap");

    assert_eq!(
        haystack.lpos_in_range("abc", 1, 5).expect("Failed to lpos_in_range"),
        Some(3)
    );
    // The match must fit entirely inside the range.
    assert_eq!(
        haystack.lpos_in_range("abc", 1, 4).expect("Failed to lpos_in_range"),
        None
    );
}

#[test]
fn test_lpos_in_range_out_of_bounds() {
    let haystack = KeelStr::from_bytes_with_nul(b"abc\0").expect("Failed to wrap");

    assert_eq!(
        haystack.lpos_in_range("a", 1, 3).unwrap_err(),
        StringError::OutOfRange { index: 1, len: 3 }
    );
}

// =============================================================================
// lpos_fold() / lpos_fold_in_range()
// =============================================================================

#[test]
fn test_lpos_fold() {
    let haystack = KeelStr::from_bytes_with_nul(b"HELLO world\0").expect("Failed to wrap");

    assert_eq!(haystack.lpos_fold("hello"), Some(0));
    assert_eq!(haystack.lpos_fold("WORLD"), Some(6));
    assert_eq!(haystack.lpos_fold("mars"), None);
}

#[test]
fn test_lpos_fold_in_range() {
    let haystack = KeelStr::from_bytes_with_nul(b"ab AB ab\0").expect("Failed to wrap");

    assert_eq!(
        haystack
            .lpos_fold_in_range("AB", 1, 7)
            .expect("Failed to lpos_fold_in_range"),
        Some(3)
    );
}

// =============================================================================
// rpos() / rpos_in_range()
// =============================================================================

#[test]
fn test_rpos_finds_last_occurrence() {
    let haystack = KeelStr::from_bytes_with_nul(b"abcabcabc\0").expect("Failed to wrap");

    assert_eq!(haystack.rpos("abc"), Some(6));
    assert_eq!(haystack.rpos("xyz"), None);
}

#[test]
fn test_rpos_in_range_window() {
    let haystack = KeelStr::from_bytes_with_nul(b"abcabcabc\0").expect("Failed to wrap");

    // Window [0, 6): the match at 6 is excluded.
    assert_eq!(
        haystack.rpos_in_range("abc", 6, 6).expect("Failed to rpos_in_range"),
        Some(3)
    );
    // Window [3, 6): too narrow for a later match.
    assert_eq!(
        haystack.rpos_in_range("abcabc", 6, 3).expect("Failed to rpos_in_range"),
        None
    );
}

#[test]
fn test_rpos_in_range_out_of_bounds() {
    let haystack = KeelStr::from_bytes_with_nul(b"abc\0").expect("Failed to wrap");

    assert!(haystack.rpos_in_range("a", 4, 1).is_err());
    assert!(haystack.rpos_in_range("a", 2, 3).is_err());
}

#[test]
fn test_rpos_fold() {
    let haystack = KeelStr::from_bytes_with_nul(b"ab AB\0").expect("Failed to wrap");

    assert_eq!(haystack.rpos_fold("ab"), Some(3));
}

// =============================================================================
// compare() / compare_fold()
// =============================================================================

#[test]
fn test_compare_equal() {
    let lhs = KeelStr::from_bytes_with_nul(b"abc\0").expect("Failed to wrap");

    assert_eq!(lhs.compare("abc"), Ordering::Equal);
}

#[test]
fn test_compare_equal_lengths_use_byte_order() {
    let lhs = KeelStr::from_bytes_with_nul(b"abd\0").expect("Failed to wrap");

    assert_eq!(lhs.compare("abc"), Ordering::Greater);
    assert_eq!(lhs.compare("abe"), Ordering::Less);
}

#[test]
fn test_compare_shorter_sorts_first() {
    let lhs = KeelStr::from_bytes_with_nul(b"ab\0").expect("Failed to wrap");

    assert_eq!(lhs.compare("abc"), Ordering::Less);
}

#[test]
fn test_compare_length_beats_content() {
    // Length-first ordering: "zz" sorts before "aaa" despite 'z' > 'a'.
    // This is the documented departure from lexicographic order.
    let lhs = KeelStr::from_bytes_with_nul(b"zz\0").expect("Failed to wrap");

    assert_eq!(lhs.compare("aaa"), Ordering::Less);

    let lhs = KeelStr::from_bytes_with_nul(b"aaa\0").expect("Failed to wrap");
    assert_eq!(lhs.compare("zz"), Ordering::Greater);
}

#[test]
fn test_compare_fold_equates_case() {
    let lhs = KeelStr::from_bytes_with_nul(b"MiXeD\0").expect("Failed to wrap");

    assert_eq!(lhs.compare_fold("mixed"), Ordering::Equal);
    assert_eq!(lhs.compare_fold("mixee"), Ordering::Less);
}

#[test]
fn test_compare_fold_length_beats_content() {
    let lhs = KeelStr::from_bytes_with_nul(b"ZZ\0").expect("Failed to wrap");

    assert_eq!(lhs.compare_fold("aaa"), Ordering::Less);
}

// =============================================================================
// PartialEq / Debug / Display
// =============================================================================

#[test]
fn test_partial_eq() {
    let lhs = KeelStr::from_bytes_with_nul(b"abc\0").expect("Failed to wrap");
    let rhs = KeelStr::from_bytes_with_nul(b"abc\0").expect("Failed to wrap");
    let other = KeelStr::from_bytes_with_nul(b"abd\0").expect("Failed to wrap");

    assert_eq!(lhs, rhs);
    assert_ne!(lhs, other);
    assert_eq!(lhs, "abc");
}

#[test]
fn test_debug_and_display() {
    let string = KeelStr::from_bytes_with_nul(b"abc\0").expect("Failed to wrap");

    assert_eq!(format!("{string:?}"), "\"abc\"");
    assert_eq!(format!("{string}"), "abc");
}
