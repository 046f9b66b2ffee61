// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the edit distance and its bounded variant.
//!
//! The bounded DP exits early on length and on row minimums. Both shortcuts
//! must agree with the full table wherever the true distance is in budget.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use supmatch::{bounded_distance, edit_distance, levenshtein_within};

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
    max: u8,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts on the quadratic table
    let a: String = input.a.chars().take(64).collect();
    let b: String = input.b.chars().take(64).collect();
    let max = usize::from(input.max % 8);

    let full = edit_distance(&a, &b);

    // INVARIANT 1: symmetric, zero only on equal strings
    assert_eq!(full, edit_distance(&b, &a));
    assert_eq!(full == 0, a == b);

    // INVARIANT 2: bounded by the longer string, at least the length gap
    let (la, lb) = (a.chars().count(), b.chars().count());
    assert!(full <= la.max(lb));
    assert!(full >= la.abs_diff(lb));

    // INVARIANT 3: bounded variant is exact within budget, None outside
    let bounded = bounded_distance(&a, &b, max);
    if full <= max {
        assert_eq!(bounded, Some(full), "a={a:?} b={b:?} max={max}");
    } else {
        assert_eq!(bounded, None, "a={a:?} b={b:?} max={max}");
    }
    assert_eq!(levenshtein_within(&a, &b, max), bounded.is_some());
});
