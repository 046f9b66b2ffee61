// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search-box predicate: does this query plausibly name this product?
//!
//! Cheap checks run first. An empty query matches everything, a substring
//! match needs no DP, and a query far longer than the target is rejected
//! outright. Only then are both sides split into words and every query word
//! longer than two characters has to find a close-enough target word.
//!
//! "Close enough" is the smaller of the caller's budget and a third of the
//! longer word, so "sup" tolerates one typo even when the caller asked for
//! two.
//!
//! Words of one or two characters are skipped on both sides. A query made only
//! of such words therefore matches anything that got past the length check.

use crate::fuzzy::levenshtein::bounded_distance;
use crate::types::MatchKind;
use crate::util::normalize::fold;
use serde::{Deserialize, Serialize};

/// Edit budget used when the caller does not pass one.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Words this short or shorter are noise ("of", "in", "9.").
const SKIP_WORD_LEN: usize = 2;

/// One tolerated edit per this many characters of the longer word.
const CHARS_PER_EDIT: usize = 3;

/// Knobs for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchOptions {
    /// Upper bound on edits per word pair (default: 2)
    pub max_distance: usize,
    /// Strip diacritics before comparing (default: false).
    ///
    /// Needs the `unicode-normalization` feature; without it the flag has no
    /// effect and `FuzzyMatcher::new` logs a warning.
    pub fold_diacritics: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            fold_diacritics: false,
        }
    }
}

impl MatchOptions {
    pub fn with_max_distance(max_distance: usize) -> Self {
        Self {
            max_distance,
            ..Self::default()
        }
    }
}

/// Per-word edit cap: `min(max_distance, max(query_len, target_len) / 3)`.
///
/// | longer word | cap (budget 2) |
/// |-------------|----------------|
/// | 3-5 chars   | 1              |
/// | 6+ chars    | 2              |
pub fn effective_threshold(query_word_len: usize, target_word_len: usize, max_distance: usize) -> usize {
    max_distance.min(query_word_len.max(target_word_len) / CHARS_PER_EDIT)
}

/// Does `query` plausibly refer to `target`?
///
/// ```
/// use supmatch::fuzzy_match;
///
/// assert!(fuzzy_match("sup", "SUP board green", 2));
/// assert!(fuzzy_match("aztro", "Aztron 9.0 Fiberglass", 2));
/// assert!(!fuzzy_match("xyz123", "Aztron 9.0 Fiberglass", 2));
/// ```
pub fn fuzzy_match(query: &str, target: &str, max_distance: usize) -> bool {
    FuzzyMatcher::new(query, MatchOptions::with_max_distance(max_distance)).is_match(target)
}

/// `fuzzy_match` with the default budget of 2.
pub fn fuzzy_match_default(query: &str, target: &str) -> bool {
    fuzzy_match(query, target, DEFAULT_MAX_DISTANCE)
}

/// A query word that takes part in word-level matching.
#[derive(Debug, Clone)]
struct QueryWord {
    text: String,
    len: usize,
}

/// Outcome of the checks that run before any DP.
enum Screen {
    Accept(MatchKind),
    Reject,
    Words(String),
}

/// A query prepared once and tested against many targets.
///
/// A live-search box feeds every product name through the same query. This
/// keeps the lowercased query and its checked words around so each target
/// only pays for its own side.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    options: MatchOptions,
    vacuous: bool,
    query: String,
    query_len: usize,
    words: Vec<QueryWord>,
}

impl FuzzyMatcher {
    pub fn new(query: &str, options: MatchOptions) -> Self {
        #[cfg(not(feature = "unicode-normalization"))]
        if options.fold_diacritics {
            log::warn!(
                "fold_diacritics requested but built without unicode-normalization; \
                 comparing unfolded text"
            );
        }

        let vacuous = query.trim().is_empty();
        let query = prepare(query, options.fold_diacritics);
        let query_len = query.chars().count();
        let words = query
            .split_whitespace()
            .map(|word| QueryWord {
                text: word.to_string(),
                len: word.chars().count(),
            })
            .filter(|word| word.len > SKIP_WORD_LEN)
            .collect();

        Self {
            options,
            vacuous,
            query,
            query_len,
            words,
        }
    }

    /// The query as it is compared: lowercased, folded if requested.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// True when the query is blank and matches everything.
    pub fn is_vacuous(&self) -> bool {
        self.vacuous
    }

    pub fn is_match(&self, target: &str) -> bool {
        match self.screen(target) {
            Screen::Accept(_) => true,
            Screen::Reject => false,
            Screen::Words(target) => {
                let target_words = checked_words(&target);
                self.words.iter().all(|word| {
                    target_words.iter().any(|&(candidate, len)| {
                        let threshold = effective_threshold(word.len, len, self.options.max_distance);
                        bounded_distance(&word.text, candidate, threshold).is_some()
                    })
                })
            }
        }
    }

    /// How and how closely `target` matches, or `None` if it does not.
    ///
    /// The distance is the sum over checked query words of the closest
    /// accepted target word. Substring and blank-query matches cost 0.
    pub fn classify(&self, target: &str) -> Option<(MatchKind, usize)> {
        match self.screen(target) {
            Screen::Accept(kind) => Some((kind, 0)),
            Screen::Reject => None,
            Screen::Words(target) => {
                let target_words = checked_words(&target);
                let mut total = 0;
                for word in &self.words {
                    total += target_words
                        .iter()
                        .filter_map(|&(candidate, len)| {
                            let threshold = effective_threshold(word.len, len, self.options.max_distance);
                            bounded_distance(&word.text, candidate, threshold)
                        })
                        .min()?;
                }
                Some((MatchKind::Fuzzy, total))
            }
        }
    }

    /// Summed per-word distance of a match, `None` when there is no match.
    pub fn word_distance(&self, target: &str) -> Option<usize> {
        self.classify(target).map(|(_, distance)| distance)
    }

    fn screen(&self, target: &str) -> Screen {
        if self.vacuous {
            return Screen::Accept(MatchKind::Substring);
        }

        let target = prepare(target, self.options.fold_diacritics);
        if target.contains(&self.query) {
            let kind = if target.trim() == self.query.trim() {
                MatchKind::Exact
            } else {
                MatchKind::Substring
            };
            return Screen::Accept(kind);
        }

        // Saturating: any budget, up to usize::MAX, is a valid input
        let allowed = target.chars().count().saturating_add(self.options.max_distance);
        if self.query_len > allowed {
            return Screen::Reject;
        }

        Screen::Words(target)
    }
}

fn prepare(text: &str, fold_diacritics: bool) -> String {
    if fold_diacritics {
        fold(text).to_lowercase()
    } else {
        text.to_lowercase()
    }
}

fn checked_words(text: &str) -> Vec<(&str, usize)> {
    text.split_whitespace()
        .map(|word| (word, word.chars().count()))
        .filter(|&(_, len)| len > SKIP_WORD_LEN)
        .collect()
}
