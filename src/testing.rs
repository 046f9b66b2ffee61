//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::catalog::{Catalog, Product};

/// Create a product with just an id and a name.
pub fn make_product(id: &str, name: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        brand: None,
        category: None,
    }
}

/// Create a product with a brand.
pub fn make_branded_product(id: &str, name: &str, brand: &str) -> Product {
    Product {
        brand: Some(brand.to_string()),
        ..make_product(id, name)
    }
}

/// A small board shop: inflatables, hardboards, paddles, one accessory.
pub fn sample_catalog() -> Catalog {
    let products = vec![
        Product {
            category: Some("inflatable".to_string()),
            ..make_branded_product("aztron-neon", "Aztron Neon 11.0", "Aztron")
        },
        Product {
            category: Some("hardboard".to_string()),
            ..make_branded_product("aztron-fiber", "Aztron 9.0 Fiberglass", "Aztron")
        },
        Product {
            category: Some("inflatable".to_string()),
            ..make_branded_product("gladiator-pro", "Gladiator Pro 12.6", "Gladiator")
        },
        Product {
            category: Some("paddle".to_string()),
            ..make_branded_product("carbon-paddle", "Carbon Paddle Three Piece", "Red Paddle Co")
        },
        make_branded_product("sup-leash", "SUP board leash green", "Gladiator"),
    ];
    match Catalog::new(products) {
        Ok(catalog) => catalog,
        Err(e) => panic!("sample catalog is invalid: {}", e),
    }
}
