//! Pre-parsed element streams stored as JSON.

use std::{fs, path::Path};

use refinery_document::Element;

use super::DocumentParser;
use crate::ParseError;

/// Reads a JSON array of `{type, text, metadata}` objects.
///
/// This is the interchange format emitted by external layout parsers, and the easiest way
/// to feed hand-built documents through the pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementsParser;

impl DocumentParser for ElementsParser {
    fn name(&self) -> &'static str {
        "elements"
    }

    fn parse(&self, path: &Path) -> Result<Vec<Element>, ParseError> {
        let content = fs::read_to_string(path).map_err(|source| ParseError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ParseError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
