//! Ingestion job records.

use std::{fmt, path::PathBuf};

use refinery_config::IngestionConfig;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::FileType;

/// Lifecycle state of a job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    /// Created and not yet finished.
    #[default]
    Processing,
    /// Chunks were produced.
    Completed,
    /// Parsing or chunking failed.
    Failed,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Processing => "PROCESSING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
        };
        f.write_str(name)
    }
}

/// A request to turn one source file into chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionJob {
    /// Unique job identifier.
    pub id: Uuid,
    /// File to ingest.
    pub source_file_path: PathBuf,
    /// Requested file type; `Auto` detects from the extension.
    pub file_type: FileType,
    /// Chunking options.
    pub config: IngestionConfig,
    /// Current state.
    pub status: JobStatus,
}

impl IngestionJob {
    /// Creates a job for `path` with automatic type detection.
    pub fn new(path: impl Into<PathBuf>, config: IngestionConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_file_path: path.into(),
            file_type: FileType::Auto,
            config,
            status: JobStatus::Processing,
        }
    }

    /// Overrides the file type.
    pub fn with_file_type(mut self, file_type: FileType) -> Self {
        self.file_type = file_type;
        self
    }

    /// True once the job has completed or failed.
    pub fn is_finished(&self) -> bool {
        self.status != JobStatus::Processing
    }
}
