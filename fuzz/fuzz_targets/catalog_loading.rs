// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for catalog JSON loading.
//!
//! Any byte string must either load into a catalog that satisfies the
//! validation rules or fail with an error, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use supmatch::{rank, Catalog, MatchOptions};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(catalog) = Catalog::from_json_str(json) else {
        return;
    };

    let mut ids = HashSet::new();
    for product in catalog.products() {
        assert!(!product.id.trim().is_empty());
        assert!(!product.name.trim().is_empty());
        assert!(ids.insert(product.id.as_str()), "duplicate id {}", product.id);
    }

    // Every loaded catalog is searchable
    if let Some(first) = catalog.products().first() {
        let hits = rank(&catalog, &first.name, MatchOptions::default(), 0);
        assert!(hits.iter().any(|hit| hit.product_id == first.id));
    }
});
