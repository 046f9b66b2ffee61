// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the storefront match predicate.
//!
//! Arbitrary Unicode must never panic the matcher, and the cheap accept
//! paths (blank query, substring) must hold for every budget.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use supmatch::{fuzzy_match, FuzzyMatcher, MatchOptions};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    target: String,
    max_distance: u8,
    fold_diacritics: bool,
}

fuzz_target!(|input: MatchInput| {
    let query: String = input.query.chars().take(48).collect();
    let target: String = input.target.chars().take(96).collect();
    let max_distance = usize::from(input.max_distance % 6);
    let options = MatchOptions {
        max_distance,
        fold_diacritics: input.fold_diacritics,
    };

    let matcher = FuzzyMatcher::new(&query, options);
    let matched = matcher.is_match(&target);

    // classify and is_match never disagree
    assert_eq!(matched, matcher.classify(&target).is_some());

    if query.trim().is_empty() {
        assert!(matched, "blank query must match {target:?}");
    }

    if !input.fold_diacritics {
        assert_eq!(matched, fuzzy_match(&query, &target, max_distance));

        let lowered = target.to_lowercase();
        if lowered.contains(&query.to_lowercase()) {
            assert!(matched, "substring {query:?} of {target:?} rejected");
        }
    }

    // A larger budget never loses a match
    if matched {
        assert!(FuzzyMatcher::new(
            &query,
            MatchOptions {
                max_distance: max_distance + 1,
                ..options
            }
        )
        .is_match(&target));
    }
});
