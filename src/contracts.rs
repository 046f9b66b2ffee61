//! Runtime contracts for distances and rankings.
//!
//! These are debug-mode assertions:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure detection** while developing and under test
//!
//! | Contract Function       | Property                                     |
//! |-------------------------|----------------------------------------------|
//! | `check_distance_bounds` | `\|m - n\| <= d <= max(m, n)`                |
//! | `check_hits_sorted`     | hits ordered by kind, distance, field, index |

use crate::types::SearchHit;

/// Edit distance between strings of `m` and `n` characters lies in
/// `[|m - n|, max(m, n)]`.
#[inline]
pub fn check_distance_bounds(m: usize, n: usize, distance: usize) {
    debug_assert!(
        distance >= m.abs_diff(n),
        "distance {} below length difference of {} and {}",
        distance,
        m,
        n
    );
    debug_assert!(
        distance <= m.max(n),
        "distance {} above longer length of {} and {}",
        distance,
        m,
        n
    );
}

/// Ranked hits are in non-decreasing rank order.
#[inline]
pub fn check_hits_sorted(hits: &[SearchHit]) {
    debug_assert!(
        hits.windows(2).all(|pair| pair[0].rank_key() <= pair[1].rank_key()),
        "search hits are not sorted by rank"
    );
}
