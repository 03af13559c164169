//! Typed document elements.
//!
//! Elements are the interchange unit between format parsers and the segmenter. A parser
//! emits them in document order; order is the only structural signal the segmenter sees.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::DocumentError;

/// Open per-element metadata map.
pub type Metadata = Map<String, Value>;

/// Metadata key carrying an explicit header depth.
pub const SECTION_DEPTH_KEY: &str = "section_depth";

/// Metadata key carrying the source page number.
pub const PAGE_NUMBER_KEY: &str = "page_number";

/// Metadata key carrying slide speaker notes.
pub const SPEAKER_NOTES_KEY: &str = "speaker_notes";

/// The closed set of element kinds a parser may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementKind {
    /// Document title. Resets the header hierarchy.
    Title,
    /// Section header.
    Header,
    /// Running prose.
    NarrativeText,
    /// A table, usually rendered as markdown.
    Table,
    /// One item of a list.
    ListItem,
    /// Page furniture. Ignored by the segmenter.
    Footer,
    /// Content the parser could not classify.
    Uncategorized,
}

impl ElementKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Title,
        Self::Header,
        Self::NarrativeText,
        Self::Table,
        Self::ListItem,
        Self::Footer,
        Self::Uncategorized,
    ];

    /// Returns the canonical upper-snake name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::Header => "HEADER",
            Self::NarrativeText => "NARRATIVE_TEXT",
            Self::Table => "TABLE",
            Self::ListItem => "LIST_ITEM",
            Self::Footer => "FOOTER",
            Self::Uncategorized => "UNCATEGORIZED",
        }
    }

    /// True for kinds that close the current chunk and change the hierarchy.
    pub fn is_structural(self) -> bool {
        matches!(self, Self::Title | Self::Header)
    }

    /// True for kinds whose text is buffered into chunks.
    pub fn is_content(self) -> bool {
        matches!(
            self,
            Self::NarrativeText | Self::Table | Self::ListItem | Self::Uncategorized
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DocumentError::UnknownElementKind {
                kind: s.to_string(),
            })
    }
}

/// A single atomic element parsed from a source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// What the element is.
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Raw text content. May be empty.
    pub text: String,
    /// Parser-provided metadata such as page number or explicit depth.
    #[serde(default)]
    pub metadata: Metadata,
}

impl Element {
    /// Creates an element with empty metadata.
    pub fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            metadata: Metadata::new(),
        }
    }

    /// Creates a title element.
    pub fn title(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Title, text)
    }

    /// Creates a header element whose depth will be inferred from its text.
    pub fn header(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Header, text)
    }

    /// Creates a narrative text element.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(ElementKind::NarrativeText, text)
    }

    /// Creates a table element.
    pub fn table(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Table, text)
    }

    /// Creates a footer element.
    pub fn footer(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Footer, text)
    }

    /// Adds a metadata entry, builder style.
    pub fn with_meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }

    /// Sets an explicit header depth.
    pub fn with_depth(self, depth: u32) -> Self {
        self.with_meta(SECTION_DEPTH_KEY, depth)
    }

    /// Sets the source page number.
    pub fn with_page(self, page: i64) -> Self {
        self.with_meta(PAGE_NUMBER_KEY, page)
    }

    /// Explicit depth from metadata, if it is a non-negative integer that fits `u32`.
    pub fn section_depth(&self) -> Option<u32> {
        self.metadata
            .get(SECTION_DEPTH_KEY)
            .and_then(Value::as_u64)
            .and_then(|d| u32::try_from(d).ok())
    }

    /// Page number from metadata, if it is an integer.
    pub fn page_number(&self) -> Option<i64> {
        page_number_of(&self.metadata)
    }

    /// Speaker notes from metadata, if present and non-empty.
    pub fn speaker_notes(&self) -> Option<&str> {
        self.metadata
            .get(SPEAKER_NOTES_KEY)
            .and_then(Value::as_str)
            .filter(|notes| !notes.is_empty())
    }
}

/// Reads an integer page number out of a metadata map.
pub(crate) fn page_number_of(metadata: &Metadata) -> Option<i64> {
    metadata.get(PAGE_NUMBER_KEY).and_then(Value::as_i64)
}
