//! Human-readable output for chunks and depth reports.

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use refinery_document::Chunk;
use refinery_highlight::{Highlighter, breadcrumb, dim, heading, pages, rule};

/// Width of the rule printed above each chunk.
const RULE_WIDTH: usize = 60;

/// One chunk positioned within a result list.
pub struct ChunkView<'a> {
    /// The chunk.
    chunk: &'a Chunk,
    /// Zero-based position.
    index: usize,
    /// Number of chunks in the list.
    total: usize,
}

impl<'a> ChunkView<'a> {
    /// Creates a view of the chunk at `index` out of `total`.
    pub fn new(chunk: &'a Chunk, index: usize, total: usize) -> Self {
        Self {
            chunk,
            index,
            total,
        }
    }

    /// Renders the chunk, styled when a highlighter is given.
    pub fn render(&self, highlighter: Option<&Highlighter>) -> String {
        match highlighter {
            Some(hl) => self.render_styled(hl),
            None => self.render_plain(),
        }
    }

    /// Plain rendering: a label line, then the chunk text verbatim.
    fn render_plain(&self) -> String {
        let page_note = match &self.chunk.metadata.page_numbers {
            Some(list) if !list.is_empty() => {
                let joined: Vec<String> = list.iter().map(i64::to_string).collect();
                format!(" (pages {})", joined.join(", "))
            }
            _ => String::new(),
        };
        format!(
            "--- chunk {}/{}{page_note} ---\n{}\n\n",
            self.index + 1,
            self.total,
            self.chunk.text
        )
    }

    /// Styled rendering: breadcrumb line, then the body without its context prefix.
    fn render_styled(&self, hl: &Highlighter) -> String {
        let title = heading(&format!("Chunk {}/{}", self.index + 1, self.total));
        let id = dim(&self.chunk.id.to_string());
        let crumb = breadcrumb(self.chunk.hierarchy());
        let page_list = pages(self.chunk.metadata.page_numbers.as_deref());

        format!(
            "{}\n{title}  {id}\n{crumb}  {page_list}\n\n{}\n",
            rule(RULE_WIDTH),
            hl.markdown(self.body()),
        )
    }

    /// Chunk text with the `Context:` line removed.
    fn body(&self) -> &str {
        let labels = self.chunk.hierarchy();
        if labels.is_empty() {
            return &self.chunk.text;
        }
        let prefix = format!("Context: {}\n\n", labels.join(" > "));
        self.chunk
            .text
            .strip_prefix(prefix.as_str())
            .unwrap_or(&self.chunk.text)
    }
}

/// Builds a table of inferred depths.
pub fn depth_table(rows: &[(u32, &str)]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Depth", "Header"]);
    for (depth, text) in rows {
        table.add_row(vec![Cell::new(depth), Cell::new(text)]);
    }
    table
}
