//! Integration tests for loading configuration from disk.

// Integration tests sit outside a cfg(test) module.
#![allow(clippy::tests_outside_test_module)]

use std::fs;

use refinery_config::{CONFIG_FILENAME, ChunkStrategy, Config, ConfigError};

#[test]
fn loads_nested_configs_with_precedence() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("docs/protocols");
    fs::create_dir_all(&nested).unwrap();

    fs::write(
        dir.path().join(CONFIG_FILENAME),
        "root = true\n\n[ingest]\nuse_ocr = true\nsegment_len = 4000\n\n[csv]\nrows_per_table = 10\n",
    )
    .unwrap();
    fs::write(
        nested.join(CONFIG_FILENAME),
        "[ingest]\nsegment_len = 800\n",
    )
    .unwrap();

    let config = Config::load(&nested).unwrap();

    assert!(config.ingest.use_ocr);
    assert_eq!(config.ingest.segment_len, 800);
    assert_eq!(config.ingest.split_strategy, ChunkStrategy::Header);
    assert_eq!(config.csv.rows_per_table, 10);
    assert_eq!(config.config_root.as_deref(), Some(nested.as_path()));
}

#[test]
fn reports_parse_errors_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILENAME);
    fs::write(&path, "root = true\n[ingest\n").unwrap();

    let err = Config::load_from_files(&[path.clone()]).unwrap_err();
    assert!(matches!(err, ConfigError::ParseToml { .. }));
    assert!(err.to_string().contains(&path.display().to_string()));
}

#[test]
fn rejects_unknown_strategy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILENAME);
    fs::write(&path, "root = true\n[ingest]\nsplit_strategy = \"tokens\"\n").unwrap();

    let err = Config::load(dir.path()).unwrap_err();
    assert_eq!(err.to_string(), "unsupported split strategy: tokens");
}
