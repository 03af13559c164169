//! Format parsers that turn source files into element streams.
//!
//! Each supported format has one [`DocumentParser`] implementation. Parsers are looked up
//! by [`FileType`] through a [`ParserRegistry`](crate::ParserRegistry) rather than chosen
//! by the caller.

mod delimited;
mod elements;
mod table;
mod workbook;

use std::{fmt, path::Path, str::FromStr};

pub use delimited::{CSV_SHEET_NAME, CsvParser};
pub use elements::ElementsParser;
use refinery_document::Element;
use serde::{Deserialize, Serialize};
pub use table::{EMPTY_SHEET_TEXT, SheetTables};
pub use workbook::ExcelParser;

use crate::{IngestError, ParseError};

/// Converts a source file into elements in document order.
pub trait DocumentParser: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Parses the file at `path`.
    fn parse(&self, path: &Path) -> Result<Vec<Element>, ParseError>;
}

/// The source formats refinery knows how to route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// Detect from the file extension.
    #[default]
    Auto,
    /// PDF documents.
    Pdf,
    /// Excel workbooks (`.xlsx`, `.xls`).
    Excel,
    /// Comma-separated values.
    Csv,
    /// A JSON array of pre-parsed elements.
    Elements,
}

impl FileType {
    /// Determines the file type from the extension, case-insensitively.
    pub fn detect(path: &Path) -> Result<Self, IngestError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("pdf") => Ok(Self::Pdf),
            Some("xlsx" | "xls") => Ok(Self::Excel),
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Elements),
            _ => Err(IngestError::UnsupportedFileType {
                file_type: Self::Auto.to_string(),
            }),
        }
    }

    /// Resolves `Auto` against `path`; concrete types are returned unchanged.
    pub fn resolve(self, path: &Path) -> Result<Self, IngestError> {
        match self {
            Self::Auto => Self::detect(path),
            concrete => Ok(concrete),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Pdf => "pdf",
            Self::Excel => "excel",
            Self::Csv => "csv",
            Self::Elements => "elements",
        };
        f.write_str(name)
    }
}

impl FromStr for FileType {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "pdf" => Ok(Self::Pdf),
            "xlsx" | "xls" | "excel" => Ok(Self::Excel),
            "csv" => Ok(Self::Csv),
            "json" | "elements" => Ok(Self::Elements),
            _ => Err(IngestError::UnsupportedFileType {
                file_type: s.to_string(),
            }),
        }
    }
}
