// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search settings shared by the CLI and embedders.
//!
//! A JSON file with any subset of the keys; missing keys take defaults.
//!
//! ```json
//! { "maxDistance": 1, "limit": 20, "foldDiacritics": true }
//! ```

use crate::fuzzy::{MatchOptions, DEFAULT_MAX_DISTANCE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Results shown when nobody says otherwise.
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchConfig {
    /// Edit budget per word pair (default: 2)
    pub max_distance: usize,
    /// Maximum ranked results, 0 for all (default: 10)
    pub limit: usize,
    /// Compare accent-free text (default: false)
    pub fold_diacritics: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            limit: DEFAULT_LIMIT,
            fold_diacritics: false,
        }
    }
}

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file is not valid JSON for `SearchConfig`.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "invalid config {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

impl SearchConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                let config = Self::from_path(path)?;
                log::debug!("loaded config from {}: {:?}", path.display(), config);
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            max_distance: self.max_distance,
            fold_diacritics: self.fold_diacritics,
        }
    }
}
