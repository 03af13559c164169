//! CSV files, treated as a single sheet.

use std::path::Path;

use csv::ReaderBuilder;
use refinery_document::Element;
use tracing::debug;

use super::{DocumentParser, SheetTables};
use crate::ParseError;

/// Sheet name used for CSV input.
pub const CSV_SHEET_NAME: &str = "CSV_Data";

/// Parses CSV files into a header plus markdown table slices.
///
/// The first record holds the column names. Records may have differing lengths.
#[derive(Debug, Clone)]
pub struct CsvParser {
    /// Data rows per emitted table element.
    rows_per_table: usize,
}

impl CsvParser {
    /// Creates a parser that splits tables every `rows_per_table` data rows.
    pub fn new(rows_per_table: usize) -> Self {
        Self { rows_per_table }
    }
}

impl DocumentParser for CsvParser {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn parse(&self, path: &Path) -> Result<Vec<Element>, ParseError> {
        let csv_err = |source| ParseError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(csv_err)?;

        let mut records = reader.records();
        let columns: Vec<String> = match records.next() {
            Some(record) => record.map_err(csv_err)?.iter().map(str::to_string).collect(),
            None => Vec::new(),
        };

        let mut rows = Vec::new();
        for record in records {
            let record = record.map_err(csv_err)?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(path = %path.display(), rows = rows.len(), "parsed csv");

        let sheet = SheetTables {
            name: CSV_SHEET_NAME.to_string(),
            columns,
            rows,
        };
        Ok(sheet.into_elements(self.rows_per_table))
    }
}
