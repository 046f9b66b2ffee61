// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! Two layers here: the edit-distance primitives, and the word-level predicate
//! the storefront search box calls for every product it considers.

mod levenshtein;
mod matcher;

pub use levenshtein::*;
pub use matcher::*;
