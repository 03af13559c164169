//! Element model and semantic segmentation for refinery.
//!
//! Parsers turn source files into an ordered stream of typed [`Element`]s. This crate
//! turns that stream into [`Chunk`]s for vector indexing:
//! - Header depth inference from markdown hashes and outline numbering
//! - A header stack that tracks the active section path
//! - Chunks cut at every title or header, prefixed with a `Context: A > B` breadcrumb
//! - Page numbers aggregated per chunk
//!
//! Segmentation is a pure, synchronous transform with no shared state, so a single
//! [`SemanticChunker`] can be used from many threads at once.

#![warn(missing_docs)]

mod chunk;
mod depth;
mod element;
mod error;
mod segment;
mod stack;

pub use chunk::{Chunk, ChunkId, ChunkMetadata};
pub use depth::{infer_depth, resolve_depth};
pub use element::{
    Element, ElementKind, Metadata, PAGE_NUMBER_KEY, SECTION_DEPTH_KEY, SPEAKER_NOTES_KEY,
};
pub use error::DocumentError;
pub use segment::SemanticChunker;
pub use stack::HeaderStack;
