// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance, two ways.
//!
//! `edit_distance` fills the full `(n+1) x (m+1)` table and reads the corner.
//! It is the reference: every edit costs 1, a match costs 0, and nothing is
//! skipped. `bounded_distance` answers the narrower question "is it at most
//! `max`, and if so what is it?" and bails out as soon as the answer is known.
//! The matcher only ever asks the narrower question, so that is the one on the
//! hot path.
//!
//! Both count `char`s, not bytes. "café" is four characters long.

use crate::contracts::check_distance_bounds;

/// Levenshtein distance between `a` and `b`.
///
/// The table has `b.len() + 1` rows and `a.len() + 1` columns. Row 0 and
/// column 0 are the cost of building a prefix from nothing. Every other cell
/// is the diagonal when the characters agree, otherwise one more than the
/// cheapest of diagonal (substitute), left (insert) and above (delete).
///
/// ```
/// use supmatch::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("abc", ""), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let m = a.len();
    let n = b.len();

    let mut table = vec![vec![0usize; m + 1]; n + 1];
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }

    for i in 1..=n {
        for j in 1..=m {
            table[i][j] = if b[i - 1] == a[j - 1] {
                table[i - 1][j - 1]
            } else {
                1 + table[i - 1][j - 1]
                    .min(table[i][j - 1])
                    .min(table[i - 1][j])
            };
        }
    }

    let distance = table[n][m];
    check_distance_bounds(m, n, distance);
    distance
}

/// Are these strings within `max` edits of each other?
///
/// Same answer as `edit_distance(a, b) <= max`, without always paying for
/// the full table.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    bounded_distance(a, b, max).is_some()
}

/// Edit distance if it is at most `max`, otherwise `None`.
///
/// Two early exits:
/// 1. If the length difference exceeds `max`, give up before allocating
/// 2. If the minimum of a DP row exceeds `max`, abandon the DP
///
/// Both are sound. Length difference is a lower bound on edit distance, and
/// row minima never decrease from one row to the next.
pub fn bounded_distance(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    let distance = dp[b_len];
    (distance <= max).then_some(distance)
}
