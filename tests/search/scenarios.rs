//! The seed scenarios for the distance and the predicate, plus the boundary
//! cases of the length check and the per-word cap.

use supmatch::{edit_distance, fuzzy_match, fuzzy_match_default, DEFAULT_MAX_DISTANCE};

#[test]
fn kitten_sitting() {
    assert_eq!(edit_distance("kitten", "sitting"), 3);
}

#[test]
fn empty_strings() {
    assert_eq!(edit_distance("", ""), 0);
    assert_eq!(edit_distance("abc", ""), 3);
}

#[test]
fn substring_ignores_case() {
    assert!(fuzzy_match("sup", "SUP board green", 2));
}

#[test]
fn missing_last_letter() {
    assert!(fuzzy_match("aztro", "Aztron 9.0 Fiberglass", 2));
}

#[test]
fn nothing_close() {
    assert!(!fuzzy_match("xyz123", "Aztron 9.0 Fiberglass", 2));
}

#[test]
fn short_query_words_default_to_match() {
    // "az" is skipped, no word is checked, so nothing rejects
    assert!(fuzzy_match(" az", "Aztron", 2));
}

#[test]
fn default_budget_is_two() {
    assert_eq!(DEFAULT_MAX_DISTANCE, 2);
    assert!(fuzzy_match_default("aztorn", "Aztron Neon"));
    assert!(!fuzzy_match("aztorn", "Aztron Neon", 1));
}

#[test]
fn length_check_boundary() {
    // 8 chars against 6 + 2: allowed through, two extra letters are in the cap
    assert!(fuzzy_match("aztronxx", "Aztron", 2));
    assert!(!fuzzy_match("qwertyui", "Aztron", 2));
    // 9 chars against 6 + 2: rejected by length alone
    assert!(!fuzzy_match("aztron 12", "Aztron", 2));
    // Same 9 chars, budget 3: passes the length check, "12" is skipped
    assert!(fuzzy_match("aztron 12", "Aztron", 3));
}

#[test]
fn query_words_are_anded() {
    assert!(fuzzy_match("gladiatr pro", "Gladiator Pro 12.6", 2));
    assert!(!fuzzy_match("gladiatr carbon", "Gladiator Pro 12.6", 2));
}

#[test]
fn short_target_words_are_invisible() {
    // "co" can never be matched, so "cox" finds nothing
    assert!(!fuzzy_match("cox", "Red Paddle Co", 2));
}

#[test]
fn word_cap_tightens_short_words() {
    // Three- to five-letter words tolerate one edit even with a budget of 5
    assert!(fuzzy_match("fon", "fin keel", 5));
    assert!(!fuzzy_match("fxx", "fin keel", 5));
}

#[test]
fn empty_target() {
    assert!(fuzzy_match("", "", 2));
    assert!(!fuzzy_match("sup", "", 2));
    // Short enough to pass the length check, and no words to check
    assert!(fuzzy_match("a", "", 2));
}

#[test]
fn unbounded_budget() {
    // The length check can never reject, the per-word cap still applies
    assert!(fuzzy_match("aztrox", "Aztron", usize::MAX));
    assert!(fuzzy_match("paddel", "Paddle", usize::MAX));
    assert!(fuzzy_match("aztron 12", "Aztron", usize::MAX));
    assert!(!fuzzy_match("aztronxxxxx", "Aztron", usize::MAX));
    assert!(fuzzy_match("aztronxx", "Aztron", usize::MAX - 1));
}
