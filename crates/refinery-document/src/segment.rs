//! Hierarchical segmentation of an element stream into chunks.
//!
//! The segmenter walks elements in order, keeping a header stack for the current outline
//! position and a buffer of content not yet emitted. Every title or header closes the
//! buffer into a chunk before the stack changes, so each chunk is labeled with the
//! hierarchy its content appeared under. Footers are dropped.

use std::collections::BTreeSet;

use refinery_config::{ChunkStrategy, IngestionConfig};
use tracing::debug;

use crate::{
    Chunk, ChunkMetadata, DocumentError, Element, ElementKind, Metadata,
    depth::resolve_depth,
    element::page_number_of,
    stack::HeaderStack,
};

/// Prefix of the breadcrumb line.
const CONTEXT_PREFIX: &str = "Context: ";

/// Separator between breadcrumb labels.
const BREADCRUMB_SEPARATOR: &str = " > ";

/// Separator between buffered content blocks, and between breadcrumb and content.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits parsed elements into chunks at title and header boundaries.
#[derive(Debug, Clone)]
pub struct SemanticChunker {
    /// Options this chunker was built with.
    config: IngestionConfig,
}

impl SemanticChunker {
    /// Creates a chunker for the given options.
    ///
    /// Fails if the configured strategy has no implementation.
    pub fn new(config: IngestionConfig) -> Result<Self, DocumentError> {
        match config.split_strategy {
            ChunkStrategy::Header => Ok(Self { config }),
            strategy @ ChunkStrategy::Size => Err(DocumentError::UnsupportedStrategy { strategy }),
        }
    }

    /// The options this chunker was built with.
    pub fn config(&self) -> &IngestionConfig {
        &self.config
    }

    /// Converts parsed elements into chunks carrying their header context.
    ///
    /// Never fails. An empty input yields no chunks, and runs of headers with no content
    /// between them yield no chunks of their own.
    pub fn chunk(&self, elements: &[Element]) -> Vec<Chunk> {
        let mut segmentation = Segmentation::new(self.config.segment_len);

        for element in elements {
            match element.kind {
                ElementKind::Title => {
                    segmentation.flush();
                    segmentation.stack.reset_to_title(&element.text);
                }
                ElementKind::Header => {
                    segmentation.flush();
                    let depth = resolve_depth(element);
                    segmentation.stack.push_header(depth, &element.text);
                }
                ElementKind::NarrativeText
                | ElementKind::Table
                | ElementKind::ListItem
                | ElementKind::Uncategorized => segmentation.push_content(element),
                ElementKind::Footer => {}
            }
        }

        segmentation.finish()
    }
}

/// Working state for a single `chunk` call.
struct Segmentation<'a> {
    /// Current outline position.
    stack: HeaderStack,
    /// Content blocks waiting to be flushed.
    buffer: Vec<String>,
    /// Non-empty metadata maps of the buffered elements.
    metadata: Vec<&'a Metadata>,
    /// Chunks emitted so far, in flush order.
    chunks: Vec<Chunk>,
    /// Advisory length above which a flushed chunk is reported.
    segment_len: usize,
}

impl<'a> Segmentation<'a> {
    /// Creates empty state.
    fn new(segment_len: usize) -> Self {
        Self {
            stack: HeaderStack::new(),
            buffer: Vec::new(),
            metadata: Vec::new(),
            chunks: Vec::new(),
            segment_len,
        }
    }

    /// Buffers a content element, prefixing any speaker notes.
    fn push_content(&mut self, element: &'a Element) {
        let text = match element.speaker_notes() {
            Some(notes) => format!("Speaker Notes: {notes}\n{}", element.text),
            None => element.text.clone(),
        };
        self.buffer.push(text);

        if !element.metadata.is_empty() {
            self.metadata.push(&element.metadata);
        }
    }

    /// Emits the buffered content as a chunk. Does nothing but drop metadata if the
    /// buffer is empty.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            self.metadata.clear();
            return;
        }

        let content = self.buffer.join(BLOCK_SEPARATOR);
        self.buffer.clear();

        let header_hierarchy = self.stack.labels();
        let text = if header_hierarchy.is_empty() {
            content
        } else {
            format!(
                "{CONTEXT_PREFIX}{}{BLOCK_SEPARATOR}{content}",
                header_hierarchy.join(BREADCRUMB_SEPARATOR)
            )
        };

        let pages: BTreeSet<i64> = self
            .metadata
            .iter()
            .filter_map(|m| page_number_of(m))
            .collect();
        self.metadata.clear();
        let page_numbers = (!pages.is_empty()).then(|| pages.into_iter().collect());

        let chunk = Chunk::new(
            text,
            ChunkMetadata {
                header_hierarchy,
                page_numbers,
            },
        );

        let len = chunk.text.chars().count();
        if len > self.segment_len {
            debug!(
                chunk_id = %chunk.id,
                len,
                segment_len = self.segment_len,
                "chunk exceeds target segment length"
            );
        }

        self.chunks.push(chunk);
    }

    /// Flushes any remaining content and returns all chunks.
    fn finish(mut self) -> Vec<Chunk> {
        self.flush();
        self.chunks
    }
}
