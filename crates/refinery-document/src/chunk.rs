//! Output chunks handed to the embedding and storage stages.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique chunk identifier, suitable as a vector-store primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChunkId(pub Uuid);

impl ChunkId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ChunkId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ChunkId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// Consumer-facing enrichment attached to every chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Header labels active at flush time, root first.
    pub header_hierarchy: Vec<String>,
    /// Distinct source pages, ascending. Absent when no element carried a page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_numbers: Option<Vec<i64>>,
}

/// A semantic chunk of a processed document.
///
/// Created once when the segmenter flushes its buffer and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Unique identifier.
    pub id: ChunkId,
    /// Breadcrumb line (when there is a hierarchy), a blank line, then the content.
    pub text: String,
    /// Embedding placeholder, filled by a later stage.
    pub vector: Vec<f32>,
    /// Hierarchy and page metadata.
    pub metadata: ChunkMetadata,
}

impl Chunk {
    /// Creates a chunk with a fresh id and an empty vector.
    pub fn new(text: String, metadata: ChunkMetadata) -> Self {
        Self {
            id: ChunkId::new(),
            text,
            vector: Vec::new(),
            metadata,
        }
    }

    /// The header labels the chunk was cut under.
    pub fn hierarchy(&self) -> &[String] {
        &self.metadata.header_hierarchy
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = Chunk::new("a".into(), ChunkMetadata::default());
        let b = Chunk::new("a".into(), ChunkMetadata::default());
        assert_ne!(a.id, b.id);
        assert!(a.vector.is_empty());
    }

    #[test]
    fn test_serialize_omits_missing_pages() {
        let chunk = Chunk::new(
            "Body".into(),
            ChunkMetadata {
                header_hierarchy: vec!["Intro".into()],
                page_numbers: None,
            },
        );
        let value = serde_json::to_value(&chunk).unwrap();
        assert_eq!(value["metadata"], json!({"header_hierarchy": ["Intro"]}));
        assert_eq!(value["vector"], json!([]));
        assert_eq!(value["id"], json!(chunk.id.to_string()));
    }

    #[test]
    fn test_serialize_pages() {
        let metadata = ChunkMetadata {
            header_hierarchy: vec![],
            page_numbers: Some(vec![1, 3]),
        };
        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value, json!({"header_hierarchy": [], "page_numbers": [1, 3]}));
    }
}
