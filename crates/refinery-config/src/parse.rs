//! Configuration file parsing.
//!
//! Parses individual `.refinery.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Ingestion settings section.
    pub ingest: Option<RawIngestSettings>,
    /// CSV parser settings section.
    pub csv: Option<RawCsvSettings>,
}

/// Raw ingestion settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawIngestSettings {
    /// Whether the PDF parser should force OCR.
    pub use_ocr: Option<bool>,
    /// Strategy name, validated during merging.
    pub split_strategy: Option<String>,
    /// Advisory chunk length in characters.
    pub segment_len: Option<usize>,
}

/// Raw CSV parser settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCsvSettings {
    /// Number of data rows per emitted table element.
    pub rows_per_table: Option<usize>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks whether a config file sets `root = true`.
///
/// Unreadable or malformed files are treated as non-root; the error surfaces later when
/// the file is actually loaded.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
