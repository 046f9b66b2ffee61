// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result types shared by the matcher, the catalog search, and the bindings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a query met a field. Ordered best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Field equals the query, ignoring case and surrounding whitespace
    Exact,
    /// Query occurs verbatim inside the field
    Substring,
    /// Every checked query word found a close target word
    Fuzzy,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchKind::Exact => "exact",
            MatchKind::Substring => "substring",
            MatchKind::Fuzzy => "fuzzy",
        };
        f.write_str(label)
    }
}

/// Which product field produced a hit. Ordered by preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    Name,
    Brand,
    Category,
}

impl fmt::Display for MatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchField::Name => "name",
            MatchField::Brand => "brand",
            MatchField::Category => "category",
        };
        f.write_str(label)
    }
}

/// One ranked product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub product_id: String,
    pub name: String,
    pub field: MatchField,
    pub kind: MatchKind,
    /// Summed word distance (0 for exact and substring hits)
    pub distance: usize,
    /// Position in the catalog, used as the final tie-break
    #[serde(skip)]
    pub position: usize,
}

impl SearchHit {
    /// Sort key: kind, then distance, then field, then catalog order.
    pub fn rank_key(&self) -> (MatchKind, usize, MatchField, usize) {
        (self.kind, self.distance, self.field, self.position)
    }
}
