//! The ingestion pipeline: parse, then segment.

use std::sync::Arc;

use refinery_document::{Chunk, SemanticChunker};
use tokio::{runtime, task};
use tracing::{debug, error, info};

use crate::{
    DocumentParser, FileType, IngestError, IngestionJob, JobStatus, ParserRegistry, PipelineError,
};

/// Runs ingestion jobs against a parser registry.
///
/// Parsing and segmentation are CPU- and IO-bound, so both run on the blocking thread pool.
/// The pipeline holds no per-job state and may be shared between tasks.
#[derive(Debug, Clone)]
pub struct RefineryPipeline {
    /// Parsers by file type.
    registry: Arc<ParserRegistry>,
}

impl RefineryPipeline {
    /// Creates a pipeline over `registry`.
    pub fn new(registry: ParserRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// The registry this pipeline dispatches to.
    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    /// Processes `job`, updating its status, and returns the chunks.
    pub async fn process(&self, job: &mut IngestionJob) -> Result<Vec<Chunk>, PipelineError> {
        info!(
            job_id = %job.id,
            path = %job.source_file_path.display(),
            file_type = %job.file_type,
            "processing job"
        );

        match self.run(job).await {
            Ok(chunks) => {
                job.status = JobStatus::Completed;
                info!(job_id = %job.id, chunks = chunks.len(), "job completed");
                Ok(chunks)
            }
            Err(source) => {
                job.status = JobStatus::Failed;
                error!(job_id = %job.id, error = %source, "job failed");
                Err(PipelineError {
                    job_id: job.id,
                    source,
                })
            }
        }
    }

    /// Processes `job` on a private single-threaded runtime.
    ///
    /// Must not be called from within an async context.
    pub fn process_blocking(&self, job: &mut IngestionJob) -> Result<Vec<Chunk>, PipelineError> {
        let rt = match runtime::Builder::new_current_thread().enable_all().build() {
            Ok(rt) => rt,
            Err(e) => {
                job.status = JobStatus::Failed;
                return Err(PipelineError {
                    job_id: job.id,
                    source: IngestError::Runtime(e),
                });
            }
        };
        rt.block_on(self.process(job))
    }

    /// Resolves the parser, then parses and segments off the async executor.
    async fn run(&self, job: &IngestionJob) -> Result<Vec<Chunk>, IngestError> {
        let path = job.source_file_path.clone();
        let file_type = job.file_type.resolve(&path)?;
        let parser = self.parser_for(file_type)?;
        let chunker = SemanticChunker::new(job.config.clone())?;

        debug!(parser = parser.name(), %file_type, "dispatching parser");
        let elements = task::spawn_blocking(move || parser.parse(&path)).await??;
        debug!(elements = elements.len(), "parsed elements");

        let chunks = task::spawn_blocking(move || chunker.chunk(&elements)).await?;
        Ok(chunks)
    }

    /// Looks up the parser for a concrete file type.
    fn parser_for(
        &self,
        file_type: FileType,
    ) -> Result<Arc<dyn DocumentParser>, IngestError> {
        self.registry
            .get(file_type)
            .ok_or_else(|| IngestError::UnsupportedFileType {
                file_type: file_type.to_string(),
            })
    }
}
