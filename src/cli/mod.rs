// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the supmatch command-line interface.
//!
//! Three subcommands: `distance` and `match` poke at the primitives, `search`
//! runs a query over an exported catalog the way the storefront does.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "supmatch",
    about = "Typo-tolerant product search for the SUP-board storefront",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the Levenshtein distance between two strings
    Distance {
        a: String,
        b: String,
    },

    /// Test whether QUERY fuzzy-matches TARGET (exit code 1 if not)
    Match {
        query: String,
        target: String,

        /// Edit budget per word pair
        #[arg(short, long, default_value = "2")]
        max_distance: usize,
    },

    /// Rank catalog products against a query
    Search {
        /// Catalog JSON (array of products, or {"products": [...]})
        catalog: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results (0 for all)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Edit budget per word pair
        #[arg(short, long)]
        max_distance: Option<usize>,

        /// Ignore accents when comparing ("cafe" finds "Café")
        #[arg(long)]
        fold_diacritics: bool,

        /// Print hits as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// JSON settings file; flags override its values
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
