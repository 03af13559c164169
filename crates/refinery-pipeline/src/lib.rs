//! Parsing and ingestion for refinery.
//!
//! A [`RefineryPipeline`] takes an [`IngestionJob`], picks a [`DocumentParser`] from its
//! [`ParserRegistry`] by [`FileType`], and hands the resulting elements to the
//! [`SemanticChunker`](refinery_document::SemanticChunker).
//!
//! Built-in parsers cover CSV files, Excel workbooks and JSON element streams. Spreadsheets
//! become one header per sheet followed by markdown tables of at most `rows_per_table` rows.

#![warn(missing_docs)]

mod error;
mod job;
mod parser;
mod pipeline;
mod registry;

pub use error::{IngestError, ParseError, PipelineError};
pub use job::{IngestionJob, JobStatus};
pub use parser::{
    CSV_SHEET_NAME, CsvParser, DocumentParser, EMPTY_SHEET_TEXT, ElementsParser, ExcelParser,
    FileType, SheetTables,
};
pub use pipeline::RefineryPipeline;
pub use registry::ParserRegistry;
