//! Configuration file parsing.

use std::{fs, path::Path};

use crate::{ConfigError, Settings};

/// Name of the settings file looked up by [`Settings::load`].
pub const SETTINGS_FILENAME: &str = ".sift.toml";

/// Parses settings from a file on disk.
pub fn parse_settings_file(path: &Path) -> Result<Settings, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_settings_str(&contents, path)
}

/// Parses settings from a TOML string.
///
/// `path` is only used for error messages.
pub fn parse_settings_str(contents: &str, path: &Path) -> Result<Settings, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}
