//! Configuration for sift.
//!
//! Settings are read from a TOML file named `.sift.toml`:
//!
//! ```toml
//! [translator]
//! combiner = "sum"   # "sum", "max" or "mean"
//! cache = true       # memoize index lookups
//!
//! [search]
//! limit = 0          # maximum results, 0 for no limit
//! ```
//!
//! Missing sections and fields fall back to their defaults.

#![warn(missing_docs)]

mod error;
mod parse;

use std::path::Path;

pub use error::ConfigError;
pub use parse::{SETTINGS_FILENAME, parse_settings_file, parse_settings_str};
use serde::{Deserialize, Serialize};

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Query translator settings.
    pub translator: TranslatorSettings,
    /// Search facade settings.
    pub search: SearchSettings,
}

impl Settings {
    /// Loads `.sift.toml` from `dir`, or the defaults if there is none.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(SETTINGS_FILENAME);
        if path.is_file() {
            parse_settings_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Serializes the effective settings to TOML format.
    pub fn to_toml(&self) -> String {
        // Plain scalar fields only; serialization does not fail.
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

/// Settings for the query translator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslatorSettings {
    /// How weights of the same key are combined.
    pub combiner: CombinerName,
    /// Whether index lookups are memoized.
    pub cache: bool,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            combiner: CombinerName::Sum,
            cache: true,
        }
    }
}

/// Settings for the search facade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum number of results returned (0 = unlimited).
    pub limit: usize,
}

/// Name of a built-in match combiner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinerName {
    /// Add weights together.
    #[default]
    Sum,
    /// Keep the largest weight.
    Max,
    /// Average the weights.
    Mean,
}
