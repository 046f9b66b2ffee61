//! Ranking over the sample board catalog.

use super::common::{catalog_of, make_branded_product, sample_catalog};
use supmatch::{rank, suggest, Catalog, MatchField, MatchKind, MatchOptions};

fn ids(catalog: &Catalog, query: &str) -> Vec<String> {
    rank(catalog, query, MatchOptions::default(), 0)
        .into_iter()
        .map(|hit| hit.product_id)
        .collect()
}

#[test]
fn substring_beats_fuzzy() {
    let catalog = catalog_of(&["Neon Paddle", "Neo Board", "Aztron Neon"]);
    let hits = rank(&catalog, "neon", MatchOptions::default(), 0);

    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].product_id, "p0");
    assert_eq!(hits[0].kind, MatchKind::Substring);
    assert_eq!(hits[1].product_id, "p2");
    assert_eq!(hits[2].product_id, "p1");
    assert_eq!(hits[2].kind, MatchKind::Fuzzy);
    assert_eq!(hits[2].distance, 1);
}

#[test]
fn closer_fuzzy_hits_rank_higher() {
    let catalog = catalog_of(&["Glodiatur Pro", "Gladiatr Pro"]);
    let hits = rank(&catalog, "gladiator", MatchOptions::default(), 0);

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].product_id, "p1");
    assert_eq!(hits[0].distance, 1);
    assert_eq!(hits[1].distance, 2);
}

#[test]
fn brand_hits_report_the_field() {
    let catalog = Catalog::new(vec![make_branded_product("b1", "Touring 12.6", "Starboard")])
        .unwrap();
    let hits = rank(&catalog, "starbord", MatchOptions::default(), 0);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].field, MatchField::Brand);
    assert_eq!(hits[0].kind, MatchKind::Fuzzy);
}

#[test]
fn category_is_searched_last() {
    let catalog = sample_catalog();
    let hits = rank(&catalog, "inflatable", MatchOptions::default(), 0);

    let ids: Vec<&str> = hits.iter().map(|hit| hit.product_id.as_str()).collect();
    assert_eq!(ids, vec!["aztron-neon", "gladiator-pro"]);
    assert!(hits.iter().all(|hit| hit.field == MatchField::Category));
}

#[test]
fn typo_in_multi_word_query() {
    let catalog = sample_catalog();
    assert_eq!(ids(&catalog, "carbn padle"), vec!["carbon-paddle"]);
}

#[test]
fn unknown_query_finds_nothing() {
    let catalog = sample_catalog();
    assert!(ids(&catalog, "wetsuit").is_empty());
}

#[test]
fn tighter_budget_drops_fuzzy_hits() {
    let catalog = sample_catalog();
    assert_eq!(ids(&catalog, "gladiatr"), vec!["gladiator-pro", "sup-leash"]);
    assert!(rank(&catalog, "gladiatr", MatchOptions::with_max_distance(0), 0).is_empty());
}

#[test]
fn suggestions_deduplicate_names() {
    let catalog = catalog_of(&["Leash Coil", "leash coil", "Leash Straight"]);
    let names = suggest(&catalog, "leash", MatchOptions::default(), 0);
    assert_eq!(names, vec!["Leash Coil", "Leash Straight"]);
}

#[test]
fn suggestion_limit() {
    let catalog = sample_catalog();
    assert_eq!(suggest(&catalog, "aztron", MatchOptions::default(), 1), vec!["Aztron Neon 11.0"]);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn folding_reaches_accented_brands() {
    let catalog = Catalog::new(vec![make_branded_product("c1", "Cruiser 10.6", "Café Surf")])
        .unwrap();
    let plain = MatchOptions::with_max_distance(0);
    let folded = MatchOptions {
        fold_diacritics: true,
        ..plain
    };

    assert!(rank(&catalog, "cafe surf", plain, 0).is_empty());
    let hits = rank(&catalog, "cafe surf", folded, 0);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].kind, MatchKind::Exact);
}
