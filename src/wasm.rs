//! WebAssembly bindings for the storefront search box.
//!
//! Two free functions mirror the core API, and `CatalogSearcher` keeps a
//! parsed catalog alive between keystrokes so the page does not re-send the
//! product list on every input event.

use crate::catalog::Catalog;
use crate::config::DEFAULT_LIMIT;
use crate::fuzzy::{edit_distance, fuzzy_match, MatchOptions, DEFAULT_MAX_DISTANCE};
use crate::search::{rank, suggest};
use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Search options passed from JavaScript.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Maximum number of results to return (default: 10)
    pub limit: usize,
    /// Edit budget per word pair (default: 2)
    pub max_distance: usize,
    /// Strip diacritics before comparing (default: false)
    pub fold_diacritics: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            max_distance: DEFAULT_MAX_DISTANCE,
            fold_diacritics: false,
        }
    }
}

impl SearchOptions {
    fn match_options(&self) -> MatchOptions {
        MatchOptions {
            max_distance: self.max_distance,
            fold_diacritics: self.fold_diacritics,
        }
    }
}

#[wasm_bindgen(js_name = fuzzyMatch)]
pub fn fuzzy_match_js(query: &str, target: &str, max_distance: Option<usize>) -> bool {
    fuzzy_match(query, target, max_distance.unwrap_or(DEFAULT_MAX_DISTANCE))
}

#[wasm_bindgen(js_name = editDistance)]
pub fn edit_distance_js(a: &str, b: &str) -> usize {
    edit_distance(a, b)
}

/// A catalog held on the WASM side for repeated searches.
#[wasm_bindgen]
pub struct CatalogSearcher {
    catalog: Catalog,
}

#[wasm_bindgen]
impl CatalogSearcher {
    /// Parse and validate a catalog from its JSON export.
    #[wasm_bindgen(constructor)]
    pub fn new(products_json: &str) -> Result<CatalogSearcher, JsValue> {
        let catalog = Catalog::from_json_str(products_json).map_err(|e| e.to_string())?;
        Ok(CatalogSearcher { catalog })
    }

    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Ranked hits as `{ productId, name, field, kind, distance }[]`.
    #[wasm_bindgen]
    pub fn search(&self, query: &str, options: Option<JsValue>) -> Result<JsValue, JsValue> {
        let options: SearchOptions = match options {
            Some(value) if !value.is_undefined() && !value.is_null() => {
                from_value(value).map_err(|e| e.to_string())?
            }
            _ => SearchOptions::default(),
        };
        let hits = rank(&self.catalog, query, options.match_options(), options.limit);
        to_value(&hits).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Product names for the dropdown under the search box.
    #[wasm_bindgen]
    pub fn suggest(&self, partial: &str, limit: Option<usize>) -> Vec<String> {
        suggest(
            &self.catalog,
            partial,
            MatchOptions::default(),
            limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}
