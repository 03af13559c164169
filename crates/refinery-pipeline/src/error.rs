//! Error types for parsing and pipeline processing.

use std::{io, path::PathBuf};

use refinery_document::DocumentError;
use thiserror::Error;
use tokio::task::JoinError;
use uuid::Uuid;

/// Errors raised by a [`DocumentParser`](crate::DocumentParser).
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the source file.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The element file is not a valid JSON element array.
    #[error("invalid element file {path}: {source}")]
    Json {
        /// Path to the element file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A CSV file could not be parsed.
    #[error("failed to parse structured file ({path}): {source}")]
    Csv {
        /// Path to the CSV file.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// A workbook could not be opened or a sheet could not be read.
    #[error("failed to parse structured file ({path}): {source}")]
    Workbook {
        /// Path to the workbook.
        path: PathBuf,
        /// Underlying workbook error.
        source: calamine::Error,
    },
}

/// The underlying cause of a failed ingestion job.
#[derive(Debug, Error)]
pub enum IngestError {
    /// No parser handles the requested or detected file type.
    #[error("Unsupported file type: {file_type}")]
    UnsupportedFileType {
        /// The file type as requested or detected.
        file_type: String,
    },

    /// The parser failed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The segmenter could not be constructed from the job's options.
    #[error(transparent)]
    Chunker(#[from] DocumentError),

    /// A worker task panicked or was cancelled.
    #[error("worker task failed: {0}")]
    Task(#[from] JoinError),

    /// The blocking facade could not start a runtime.
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] io::Error),
}

/// A failed ingestion job, wrapping its cause.
#[derive(Debug, Error)]
#[error("Pipeline processing failed: {source}")]
pub struct PipelineError {
    /// The job that failed.
    pub job_id: Uuid,
    /// What went wrong.
    #[source]
    pub source: IngestError,
}
