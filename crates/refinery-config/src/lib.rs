//! Configuration system for refinery.
//!
//! refinery uses TOML configuration files named `.refinery.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.refinery.toml` files found, then loading `~/.refinery.toml` as the global config with
//! lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, is_global_config};
pub use error::ConfigError;
use merge::{ParsedConfig, merge_configs};
use parse::parse_config_file;
use serde::{Deserialize, Serialize};
pub use templates::config_template;

/// Top-level merged configuration for refinery.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.refinery.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Options handed to the segmenter and parsers for each ingestion job.
    pub ingest: IngestionConfig,
    /// Spreadsheet parsing settings.
    pub csv: CsvSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.refinery.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.refinery.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, toml::ser::Error> {
        let serializable = SerializableSettings {
            ingest: self.ingest.clone(),
            csv: self.csv.clone(),
        };
        toml::to_string_pretty(&serializable)
    }
}

/// Settings in serializable form, mirroring the file layout.
#[derive(Serialize)]
struct SerializableSettings {
    /// The `[ingest]` section.
    ingest: IngestionConfig,
    /// The `[csv]` section.
    csv: CsvSettings,
}

/// How an element stream is cut into chunks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChunkStrategy {
    /// Flush a chunk at every title or header boundary.
    #[default]
    #[serde(alias = "MARKDOWN_HEADER")]
    Header,
    /// Size-bounded splitting. Reserved; no segmenter implements it yet.
    Size,
}

impl FromStr for ChunkStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HEADER" | "MARKDOWN_HEADER" => Ok(Self::Header),
            "SIZE" => Ok(Self::Size),
            _ => Err(ConfigError::UnsupportedStrategy {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ChunkStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => write!(f, "HEADER"),
            Self::Size => write!(f, "SIZE"),
        }
    }
}

/// Options for one ingestion job.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IngestionConfig {
    /// Whether the PDF parser should force OCR.
    pub use_ocr: bool,
    /// Strategy used to split the element stream.
    pub split_strategy: ChunkStrategy,
    /// Target chunk length in characters. Advisory only.
    pub segment_len: usize,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            use_ocr: false,
            split_strategy: ChunkStrategy::Header,
            segment_len: 1000,
        }
    }
}

/// Settings for the CSV spreadsheet parser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CsvSettings {
    /// Number of data rows per emitted table element.
    pub rows_per_table: usize,
}

impl Default for CsvSettings {
    fn default() -> Self {
        Self { rows_per_table: 50 }
    }
}
