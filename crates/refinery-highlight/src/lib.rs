//! Terminal rendering for refinery.
//!
//! Chunk bodies are markdown (prose and pipe tables), so they are highlighted as markdown.
//! Breadcrumbs and page lists get their own compact styling.

#![warn(missing_docs)]

mod highlight;
mod style;

pub use highlight::Highlighter;
pub use style::{breadcrumb, dim, heading, pages, rule};
