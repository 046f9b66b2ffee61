// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog search: the callers of the matcher.
//!
//! The predicate says yes or no for one string. The storefront needs more:
//! the catalog filter wants every product that matches, the search box wants
//! them ranked, and the dropdown wants a handful of names. All three prepare
//! the query once and run it over name, brand, and category.
//!
//! Ranking order, best first:
//!
//! ```text
//! Exact < Substring < Fuzzy      (MatchKind)
//!   then lower summed word distance
//!   then Name < Brand < Category (MatchField)
//!   then catalog order
//! ```

use crate::catalog::{Catalog, Product};
use crate::contracts::check_hits_sorted;
use crate::fuzzy::{FuzzyMatcher, MatchOptions};
use crate::types::SearchHit;
use log::{debug, trace};
use std::collections::HashSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Products with any field matching `query`, in catalog order.
///
/// A blank query is "no filter" and returns every product.
pub fn filter<'a>(catalog: &'a Catalog, query: &str, options: MatchOptions) -> Vec<&'a Product> {
    let matcher = FuzzyMatcher::new(query, options);
    let keep = |product: &&Product| {
        product
            .search_fields()
            .any(|(_, text)| matcher.is_match(text))
    };

    let matched: Vec<&Product> = {
        #[cfg(feature = "parallel")]
        {
            catalog.products().par_iter().filter(keep).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            catalog.products().iter().filter(keep).collect()
        }
    };

    debug!(
        "filter {:?}: {} of {} products",
        query,
        matched.len(),
        catalog.len()
    );
    matched
}

/// Matching products ranked best first, at most `limit` (0 = no limit).
///
/// Each product appears once, under its best field. A blank query ranks
/// nothing: there is no signal to order by.
pub fn rank(catalog: &Catalog, query: &str, options: MatchOptions, limit: usize) -> Vec<SearchHit> {
    let matcher = FuzzyMatcher::new(query, options);
    if matcher.is_vacuous() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = {
        #[cfg(feature = "parallel")]
        {
            catalog
                .products()
                .par_iter()
                .enumerate()
                .filter_map(|(position, product)| best_hit(&matcher, position, product))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            catalog
                .products()
                .iter()
                .enumerate()
                .filter_map(|(position, product)| best_hit(&matcher, position, product))
                .collect()
        }
    };

    hits.sort_by_key(SearchHit::rank_key);
    check_hits_sorted(&hits);

    debug!("rank {:?}: {} hits", query, hits.len());
    if limit > 0 {
        hits.truncate(limit);
    }
    hits
}

/// Distinct product names for a live-search dropdown, best first.
pub fn suggest(catalog: &Catalog, partial: &str, options: MatchOptions, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    rank(catalog, partial, options, 0)
        .into_iter()
        .filter(|hit| seen.insert(hit.name.to_lowercase()))
        .map(|hit| hit.name)
        .take(if limit == 0 { usize::MAX } else { limit })
        .collect()
}

/// The best-scoring field of one product.
fn best_hit(matcher: &FuzzyMatcher, position: usize, product: &Product) -> Option<SearchHit> {
    let (kind, distance, field) = product
        .search_fields()
        .filter_map(|(field, text)| {
            matcher
                .classify(text)
                .map(|(kind, distance)| (kind, distance, field))
        })
        .min()?;

    trace!("{} matched on {} ({}, distance {})", product.id, field, kind, distance);
    Some(SearchHit {
        product_id: product.id.clone(),
        name: product.name.clone(),
        field,
        kind,
        distance,
        position,
    })
}
