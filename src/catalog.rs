// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Product records the search box runs over.
//!
//! The storefront exports its catalog as JSON, either a bare array of
//! products or an object with a `products` key. Loading validates what the
//! ranking relies on: ids are non-empty and unique, names are non-empty.

use crate::types::MatchField;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// A product as exported by the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Product {
    /// Searchable fields in preference order: name, brand, category.
    pub fn search_fields(&self) -> impl Iterator<Item = (MatchField, &str)> {
        std::iter::once((MatchField::Name, self.name.as_str()))
            .chain(self.brand.as_deref().map(|brand| (MatchField::Brand, brand)))
            .chain(
                self.category
                    .as_deref()
                    .map(|category| (MatchField::Category, category)),
            )
    }
}

/// Error type for catalog loading.
#[derive(Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The JSON did not describe a list of products.
    Parse(serde_json::Error),
    /// Product at `index` has an empty id.
    EmptyId { index: usize },
    /// Two products share an id.
    DuplicateId { id: String },
    /// Product has an empty name.
    EmptyName { id: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io { path, source } => {
                write!(f, "cannot read catalog {}: {}", path.display(), source)
            }
            CatalogError::Parse(e) => write!(f, "invalid catalog JSON: {}", e),
            CatalogError::EmptyId { index } => {
                write!(f, "product at position {} has an empty id", index)
            }
            CatalogError::DuplicateId { id } => write!(f, "duplicate product id '{}'", id),
            CatalogError::EmptyName { id } => write!(f, "product '{}' has an empty name", id),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            CatalogError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e)
    }
}

/// Both export shapes the storefront has used.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

/// A validated list of products, in export order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Validate and wrap products.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            if product.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: product.id.clone(),
                });
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName {
                    id: product.id.clone(),
                });
            }
        }
        log::debug!("catalog loaded with {} products", products.len());
        Ok(Self { products })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let products = match serde_json::from_str(json)? {
            CatalogFile::Bare(products) => products,
            CatalogFile::Wrapped { products } => products,
        };
        Self::new(products)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }
}
