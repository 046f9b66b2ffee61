//! Typo-tolerant product search for a SUP-board storefront.
//!
//! The heart of the crate is one predicate, [`fuzzy_match`], that decides
//! whether what a shopper typed plausibly names a product. Everything else is
//! there to call it: a prepared [`FuzzyMatcher`] for running one query over a
//! whole catalog, and [`filter`], [`rank`] and [`suggest`] for the catalog
//! page, the search results, and the live dropdown.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │ fuzzy/levenshtein│────▶│  fuzzy/matcher   │────▶│     search       │
//! │ (edit_distance,  │     │ (fuzzy_match,    │     │ (filter, rank,   │
//! │ bounded_distance)│     │  FuzzyMatcher)   │     │  suggest)        │
//! └──────────────────┘     └──────────────────┘     └──────────────────┘
//!                                   ▲                        ▲
//!                           util/normalize               catalog
//!                           (accent folding)         (Product, Catalog)
//! ```
//!
//! # Usage
//!
//! ```
//! use supmatch::{fuzzy_match, rank, Catalog, MatchOptions};
//!
//! assert!(fuzzy_match("aztro", "Aztron 9.0 Fiberglass", 2));
//!
//! let catalog = Catalog::from_json_str(
//!     r#"[{"id": "a1", "name": "Aztron Neon 11.0", "brand": "Aztron"}]"#,
//! ).unwrap();
//! let hits = rank(&catalog, "aztorn", MatchOptions::default(), 10);
//! assert_eq!(hits[0].product_id, "a1");
//! ```

pub mod catalog;
pub mod config;
pub mod contracts;
mod fuzzy;
mod search;
pub mod testing;
mod types;
pub mod util;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use catalog::{Catalog, CatalogError, Product};
pub use config::{ConfigError, SearchConfig};
pub use fuzzy::{
    bounded_distance, edit_distance, effective_threshold, fuzzy_match, fuzzy_match_default,
    levenshtein_within, FuzzyMatcher, MatchOptions, DEFAULT_MAX_DISTANCE,
};
pub use search::{filter, rank, suggest};
pub use types::{MatchField, MatchKind, SearchHit};
pub use util::normalize::fold;
