//! Same input, same output: across repeated calls and across threads.

use super::common::sample_catalog;
use supmatch::{filter, fuzzy_match, rank, FuzzyMatcher, MatchOptions};

const QUERIES: &[&str] = &["aztro", "gladiatr", "padle", "sup", "inflatable", "", "xyz"];

#[test]
fn repeated_rank_is_identical() {
    let catalog = sample_catalog();
    for query in QUERIES {
        let first = rank(&catalog, query, MatchOptions::default(), 0);
        for _ in 0..5 {
            assert_eq!(rank(&catalog, query, MatchOptions::default(), 0), first);
        }
    }
}

#[test]
fn filter_order_follows_catalog() {
    let catalog = sample_catalog();
    for query in QUERIES {
        let positions: Vec<usize> = filter(&catalog, query, MatchOptions::default())
            .iter()
            .map(|product| {
                catalog
                    .products()
                    .iter()
                    .position(|p| p.id == product.id)
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{query}");
    }
}

#[test]
fn shared_matcher_across_threads() {
    let catalog = sample_catalog();
    let matcher = FuzzyMatcher::new("aztro", MatchOptions::default());
    let expected: Vec<bool> = catalog
        .products()
        .iter()
        .map(|p| fuzzy_match("aztro", &p.name, 2))
        .collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let got: Vec<bool> = catalog
                    .products()
                    .iter()
                    .map(|p| matcher.is_match(&p.name))
                    .collect();
                assert_eq!(got, expected);
            });
        }
    });
}
