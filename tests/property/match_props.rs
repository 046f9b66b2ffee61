//! Property tests for the fuzzy match predicate.
//!
//! The policy has four observable guarantees: a blank query matches anything,
//! a substring always matches, case never matters, and a query longer than
//! the target plus the budget never matches.

use super::common::{
    any_word_strategy, budget_strategy, query_strategy, substitute, title_strategy, word_strategy,
};
use proptest::prelude::*;
use supmatch::{effective_threshold, fuzzy_match, FuzzyMatcher, MatchOptions};

proptest! {
    /// Property: match("", t, d) for every t and d
    #[test]
    fn prop_blank_query_always_matches(
        blanks in "[ \t]{0,4}",
        target in title_strategy(),
        d in 0usize..5,
    ) {
        prop_assert!(fuzzy_match(&blanks, &target, d));
    }

    /// Property: t contains q (ignoring case) implies match(q, t, d)
    #[test]
    fn prop_substring_always_matches(
        target in title_strategy(),
        start in 0usize..20,
        len in 1usize..10,
        d in 0usize..4,
    ) {
        let chars: Vec<char> = target.chars().collect();
        let start = start.min(chars.len().saturating_sub(1));
        let end = (start + len).min(chars.len());
        let query: String = chars[start..end].iter().collect();

        prop_assert!(fuzzy_match(&query.to_uppercase(), &target, d));
        prop_assert!(fuzzy_match(&query, &target.to_uppercase(), d));
    }

    /// Property: match(q, t, d) == match(upper q, lower t, d)
    #[test]
    fn prop_case_insensitive(
        query in query_strategy(),
        target in title_strategy(),
        d in 0usize..4,
    ) {
        prop_assert_eq!(
            fuzzy_match(&query, &target, d),
            fuzzy_match(&query.to_uppercase(), &target.to_lowercase(), d)
        );
    }

    /// Property: len q > len t + d implies no match (for non-blank q)
    #[test]
    fn prop_length_gap_rejects(
        target in title_strategy(),
        extra in 1usize..6,
        d in 0usize..3,
    ) {
        let needed = target.chars().count() + d + extra;
        let query = "z".repeat(needed);
        prop_assert!(!fuzzy_match(&query, &target, d));
    }

    /// Property: a query of only short words matches anything that passes
    /// the length check
    #[test]
    fn prop_short_word_query_matches(
        words in prop::collection::vec("[a-z]{1,2}", 1..3),
        target in title_strategy(),
    ) {
        let query = words.join(" ");
        prop_assume!(query.chars().count() <= target.chars().count() + 2);
        prop_assert!(fuzzy_match(&query, &target, 2));
    }

    /// Property: one substitution in a 6+ letter word is tolerated at budget 1+
    #[test]
    fn prop_one_typo_in_long_word(
        word in "[a-z]{6,10}",
        index in 0usize..6,
        filler in word_strategy(),
        d in 1usize..4,
    ) {
        let typo = substitute(&word, index);
        let target = format!("{} {}", filler, word);
        prop_assert!(fuzzy_match(&typo, &target, d));
    }

    /// Property: the per-word cap never exceeds either bound
    #[test]
    fn prop_threshold_within_both_caps(q in 0usize..40, t in 0usize..40, d in 0usize..6) {
        let cap = effective_threshold(q, t, d);
        prop_assert!(cap <= d);
        prop_assert!(cap <= q.max(t) / 3);
        prop_assert!(cap == d || cap == q.max(t) / 3);
    }

    /// Property: the prepared matcher agrees with the free function
    #[test]
    fn prop_prepared_matcher_agrees(
        query in query_strategy(),
        targets in prop::collection::vec(title_strategy(), 1..6),
        d in budget_strategy(),
    ) {
        let matcher = FuzzyMatcher::new(&query, MatchOptions::with_max_distance(d));
        for target in &targets {
            prop_assert_eq!(matcher.is_match(target), fuzzy_match(&query, target, d));
            prop_assert_eq!(matcher.word_distance(target).is_some(), matcher.is_match(target));
        }
    }

    /// Property: raising the budget never loses a match
    #[test]
    fn prop_budget_is_monotone(
        query in any_word_strategy(),
        target in title_strategy(),
        d in 0usize..4,
    ) {
        if fuzzy_match(&query, &target, d) {
            prop_assert!(fuzzy_match(&query, &target, d + 1));
        }
    }
}
