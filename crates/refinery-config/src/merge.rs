//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying
//! precedence rules and validating strategy names.

use std::path::PathBuf;

use crate::{
    ChunkStrategy, Config, ConfigError, CsvSettings, IngestionConfig,
    parse::{RawConfig, RawCsvSettings, RawIngestSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config). For each scalar, the first defined value wins.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let ingest = merge_ingest(configs)?;
    let csv = merge_csv(configs);
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(|p| p.to_path_buf());

    Ok(Config {
        ingest,
        csv,
        config_root,
    })
}

/// Merges ingestion settings.
fn merge_ingest(configs: &[ParsedConfig]) -> Result<IngestionConfig, ConfigError> {
    let mut result = IngestionConfig::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref ingest) = parsed.config.ingest {
            apply_raw_ingest(&mut result, ingest)?;
        }
    }

    Ok(result)
}

/// Applies raw ingestion settings to result, overwriting any present values.
fn apply_raw_ingest(
    result: &mut IngestionConfig,
    raw: &RawIngestSettings,
) -> Result<(), ConfigError> {
    if let Some(v) = raw.use_ocr {
        result.use_ocr = v;
    }
    if let Some(ref v) = raw.split_strategy {
        result.split_strategy = v.parse::<ChunkStrategy>()?;
    }
    if let Some(v) = raw.segment_len {
        result.segment_len = v;
    }
    Ok(())
}

/// Merges CSV parser settings.
fn merge_csv(configs: &[ParsedConfig]) -> CsvSettings {
    let mut result = CsvSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref csv) = parsed.config.csv {
            apply_raw_csv(&mut result, csv);
        }
    }

    result
}

/// Applies raw CSV settings to result. A zero row count is ignored.
fn apply_raw_csv(result: &mut CsvSettings, raw: &RawCsvSettings) {
    if let Some(v) = raw.rows_per_table
        && v > 0
    {
        result.rows_per_table = v;
    }
}
