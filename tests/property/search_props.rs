//! Property tests for catalog filtering and ranking.

use super::common::{catalog_of, query_strategy, title_strategy};
use proptest::prelude::*;
use supmatch::{filter, fuzzy_match, rank, suggest, MatchOptions};

fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(title_strategy(), 1..8)
}

proptest! {
    /// Property: filter keeps exactly the products whose name matches
    #[test]
    fn prop_filter_is_the_predicate(names in names_strategy(), query in query_strategy()) {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let catalog = catalog_of(&refs);

        let kept: Vec<&str> = filter(&catalog, &query, MatchOptions::default())
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        let expected: Vec<&str> = refs
            .iter()
            .copied()
            .filter(|name| fuzzy_match(&query, name, 2))
            .collect();
        prop_assert_eq!(kept, expected);
    }

    /// Property: rank returns the filtered set (for non-blank queries), sorted
    #[test]
    fn prop_rank_is_sorted_filter(names in names_strategy(), query in query_strategy()) {
        prop_assume!(!query.trim().is_empty());
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let catalog = catalog_of(&refs);

        let hits = rank(&catalog, &query, MatchOptions::default(), 0);
        let filtered = filter(&catalog, &query, MatchOptions::default());
        prop_assert_eq!(hits.len(), filtered.len());

        for pair in hits.windows(2) {
            prop_assert!(pair[0].rank_key() <= pair[1].rank_key());
        }
    }

    /// Property: limit truncates without reordering
    #[test]
    fn prop_limit_is_a_prefix(
        names in names_strategy(),
        query in query_strategy(),
        limit in 1usize..4,
    ) {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let catalog = catalog_of(&refs);

        let all = rank(&catalog, &query, MatchOptions::default(), 0);
        let some = rank(&catalog, &query, MatchOptions::default(), limit);
        prop_assert_eq!(&all[..some.len()], &some[..]);
        prop_assert_eq!(some.len(), all.len().min(limit));
    }

    /// Property: suggestions are distinct, ignoring case
    #[test]
    fn prop_suggestions_distinct(names in names_strategy(), query in query_strategy()) {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let catalog = catalog_of(&refs);

        let suggestions = suggest(&catalog, &query, MatchOptions::default(), 0);
        let mut lowered: Vec<String> = suggestions.iter().map(|s| s.to_lowercase()).collect();
        lowered.sort();
        lowered.dedup();
        prop_assert_eq!(lowered.len(), suggestions.len());
    }
}
