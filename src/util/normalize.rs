// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Accent folding for catalog text.
//!
//! Brand names arrive with whatever diacritics the supplier typed. Folding
//! lets "Café Racer" and "cafe racer" meet in the middle. Only used when a
//! caller opts in through `MatchOptions::fold_diacritics`; the default
//! predicate compares lowercased text and nothing else.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Strip diacritics: NFD decompose, then drop combining marks.
///
/// - "café" → "cafe"
/// - "Müller" → "Muller"
/// - "naïve" → "naive"
///
/// Case and whitespace are left alone; the matcher lowercases afterwards.
#[cfg(feature = "unicode-normalization")]
pub fn fold(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Without `unicode-normalization` (slim WASM builds) folding is a no-op.
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold(value: &str) -> String {
    value.to_string()
}

/// Check if a character is a combining mark (diacritic).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
