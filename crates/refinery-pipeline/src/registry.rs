//! Lookup table from file type to parser.

use std::{collections::HashMap, fmt, sync::Arc};

use refinery_config::CsvSettings;

use crate::{CsvParser, DocumentParser, ElementsParser, ExcelParser, FileType};

/// Maps concrete file types to the parser that handles them.
///
/// The table is built explicitly; nothing registers itself. A file type without an entry
/// is reported as unsupported by the pipeline.
#[derive(Clone, Default)]
pub struct ParserRegistry {
    /// Registered parsers.
    parsers: HashMap<FileType, Arc<dyn DocumentParser>>,
}

impl ParserRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every built-in parser.
    ///
    /// PDF has no built-in parser; callers that have one add it with [`Self::register`].
    pub fn with_defaults(csv: &CsvSettings) -> Self {
        let mut registry = Self::new();
        registry.register(FileType::Csv, CsvParser::new(csv.rows_per_table));
        registry.register(FileType::Excel, ExcelParser::new(csv.rows_per_table));
        registry.register(FileType::Elements, ElementsParser);
        registry
    }

    /// Registers `parser` for `file_type`, replacing any previous entry.
    pub fn register(&mut self, file_type: FileType, parser: impl DocumentParser + 'static) {
        self.parsers.insert(file_type, Arc::new(parser));
    }

    /// The parser for `file_type`, if any.
    pub fn get(&self, file_type: FileType) -> Option<Arc<dyn DocumentParser>> {
        self.parsers.get(&file_type).cloned()
    }

    /// Registered file types, sorted by name.
    pub fn file_types(&self) -> Vec<FileType> {
        let mut types: Vec<FileType> = self.parsers.keys().copied().collect();
        types.sort_by_key(|t| t.to_string());
        types
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for file_type in self.file_types() {
            if let Some(parser) = self.parsers.get(&file_type) {
                map.entry(&file_type, &parser.name());
            }
        }
        map.finish()
    }
}
