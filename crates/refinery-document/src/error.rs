//! Error types for the document model and segmenter.

use refinery_config::ChunkStrategy;
use thiserror::Error;

/// Errors raised at the element boundary or when constructing a segmenter.
///
/// Segmentation itself never fails: any well-typed element stream produces chunks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// An element kind string did not name a known kind.
    #[error("unknown element kind: {kind}")]
    UnknownElementKind {
        /// The rejected kind string.
        kind: String,
    },

    /// The configured split strategy has no segmenter implementation.
    #[error("split strategy {strategy} is not implemented")]
    UnsupportedStrategy {
        /// The requested strategy.
        strategy: ChunkStrategy,
    },
}
